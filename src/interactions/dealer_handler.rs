//! Handles all component interactions and modal submissions for the
//! `/dealer` panel family.

use super::ids;
use super::util::{defer_component, edit_component};
use crate::commands::dealer::{logic, ui};
use crate::database::RentalError;
use crate::model::{Flow, Role};
use crate::{AppState, database};
use chrono::{Datelike, Utc};
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
};
use serenity::model::application::{ActionRowComponent, ComponentInteraction, ModalInteraction};
use serenity::model::id::GuildId;
use serenity::prelude::Context;
use std::sync::Arc;

fn view(
    (embed, rows): (serenity::builder::CreateEmbed, Vec<serenity::builder::CreateActionRow>),
) -> EditInteractionResponse {
    EditInteractionResponse::new()
        .content("")
        .embeds(vec![embed])
        .components(rows)
}

/// Panel text notice with the dealer menu underneath.
fn notice(text: impl Into<String>) -> EditInteractionResponse {
    let (_, rows) = ui::dealer_menu();
    EditInteractionResponse::new()
        .content(text)
        .embeds(Vec::new())
        .components(rows)
}

/// Resolve the sender and require the dealer role; answers with a refusal
/// and returns None otherwise. Modal-opening buttons pass `deferred = false`
/// so the refusal goes out as a fresh response instead of an edit.
async fn require_dealer(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    admin_guild_id: GuildId,
    flow: Flow,
    deferred: bool,
) -> Option<database::models::Dealer> {
    let refuse = |text: &'static str| async move {
        if deferred {
            edit_component(
                ctx,
                component,
                "dealer.denied",
                EditInteractionResponse::new().content(text).embeds(Vec::new()).components(Vec::new()),
            )
            .await;
        } else {
            let resp = CreateInteractionResponseMessage::new().content(text).ephemeral(true);
            component
                .create_response(&ctx.http, CreateInteractionResponse::Message(resp))
                .await
                .ok();
        }
    };

    if component.guild_id != Some(admin_guild_id) {
        refuse("❌ This action is only available in the admin server.").await;
        return None;
    }
    let role = match Role::resolve(
        &app_state.db,
        admin_guild_id,
        component.guild_id,
        component.user.id,
    )
    .await
    {
        Ok(role) => role,
        Err(e) => {
            tracing::error!(target: "db", error = %e, "role resolution failed");
            refuse("❌ An error occurred. Please try again later.").await;
            return None;
        }
    };
    if !role.permits(flow) {
        refuse("❌ You are not registered as a dealer.").await;
        return None;
    }
    match database::dealers::get_dealer(&app_state.db, component.user.id).await {
        Ok(Some(dealer)) => Some(dealer),
        Ok(None) => {
            refuse("❌ You are not registered as a dealer.").await;
            None
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, "dealer lookup failed");
            refuse("❌ An error occurred. Please try again later.").await;
            None
        }
    }
}

pub async fn handle(
    ctx: &Context,
    component: &mut ComponentInteraction,
    app_state: Arc<AppState>,
    admin_guild_id: GuildId,
) {
    let custom_id = component.data.custom_id.clone();

    // Modal-opening buttons must answer with the modal itself, so they are
    // dispatched before any defer.
    if custom_id == ids::DEALER_ADD_CAR {
        if require_dealer(ctx, component, &app_state, admin_guild_id, Flow::AddCar, false)
            .await
            .is_none()
        {
            return;
        }
        component
            .create_response(&ctx.http, CreateInteractionResponse::Modal(ui::add_car_modal()))
            .await
            .ok();
        return;
    }
    if let Some(car_id) = ids::parse_id_suffix(&custom_id, ids::DEALER_CAR_PHOTO_PREFIX) {
        if require_dealer(
            ctx,
            component,
            &app_state,
            admin_guild_id,
            Flow::UpdateCarPhoto,
            false,
        )
        .await
        .is_none()
        {
            return;
        }
        component
            .create_response(&ctx.http, CreateInteractionResponse::Modal(ui::photo_modal(car_id)))
            .await
            .ok();
        return;
    }

    defer_component(ctx, component).await;

    match custom_id.as_str() {
        ids::DEALER_MENU => {
            if require_dealer(ctx, component, &app_state, admin_guild_id, Flow::ListOwnCars, true)
                .await
                .is_none()
            {
                return;
            }
            edit_component(ctx, component, "dealer.menu", view(ui::dealer_menu())).await;
        }
        ids::DEALER_MY_CARS => {
            let Some(dealer) =
                require_dealer(ctx, component, &app_state, admin_guild_id, Flow::ListOwnCars, true)
                    .await
            else {
                return;
            };
            show_my_cars(ctx, component, &app_state, dealer.dealer_id).await;
        }
        ids::DEALER_STATS => {
            let Some(dealer) = require_dealer(
                ctx,
                component,
                &app_state,
                admin_guild_id,
                Flow::ViewDealerStats,
                true,
            )
            .await
            else {
                return;
            };
            match database::dealers::get_dealer_stats(&app_state.db, dealer.dealer_id).await {
                Ok(stats) => {
                    edit_component(ctx, component, "dealer.stats", view(ui::stats_view(&stats)))
                        .await;
                }
                Err(e) => {
                    tracing::error!(target: "db", error = %e, "dealer stats failed");
                    edit_component(
                        ctx,
                        component,
                        "dealer.stats.err",
                        notice("❌ An error occurred while retrieving statistics."),
                    )
                    .await;
                }
            }
        }
        _ => {
            if let Some(car_id) =
                ids::parse_id_suffix(&custom_id, ids::DEALER_CAR_DELETE_CONFIRM_PREFIX)
            {
                let Some(dealer) = require_dealer(
                    ctx,
                    component,
                    &app_state,
                    admin_guild_id,
                    Flow::DeleteOwnCar,
                    true,
                )
                .await
                else {
                    return;
                };
                delete_car(ctx, component, &app_state, dealer.dealer_id, car_id).await;
            } else if let Some(car_id) =
                ids::parse_id_suffix(&custom_id, ids::DEALER_CAR_DELETE_PREFIX)
            {
                if require_dealer(
                    ctx,
                    component,
                    &app_state,
                    admin_guild_id,
                    Flow::DeleteOwnCar,
                    true,
                )
                .await
                .is_none()
                {
                    return;
                }
                edit_component(
                    ctx,
                    component,
                    "dealer.delete.confirm",
                    view(ui::car_delete_confirm(car_id)),
                )
                .await;
            }
        }
    }
}

async fn show_my_cars(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    dealer_id: i32,
) {
    match database::cars::list_dealer_cars(&app_state.db, dealer_id).await {
        Ok(cars) => {
            edit_component(ctx, component, "dealer.cars", view(ui::my_cars_view(&cars))).await;
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, "dealer car listing failed");
            edit_component(
                ctx,
                component,
                "dealer.cars.err",
                notice("❌ An error occurred while retrieving your cars."),
            )
            .await;
        }
    }
}

async fn delete_car(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    dealer_id: i32,
    car_id: i32,
) {
    let text = match database::cars::delete_car(&app_state.db, dealer_id, car_id).await {
        Ok(()) => {
            tracing::info!(target: "cars", car_id, dealer_id, "car deleted");
            "✅ Car deleted successfully.".to_string()
        }
        Err(RentalError::NotFound) => "❌ Car not found or doesn't belong to you.".to_string(),
        Err(RentalError::CarBooked) => {
            "❌ Cannot delete a car that is currently booked.".to_string()
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, car_id, "car deletion failed");
            "❌ A database error occurred. Please try again later.".to_string()
        }
    };
    // Show the refreshed inventory under the result.
    match database::cars::list_dealer_cars(&app_state.db, dealer_id).await {
        Ok(cars) => {
            let (embed, rows) = ui::my_cars_view(&cars);
            let builder = EditInteractionResponse::new()
                .content(text)
                .embeds(vec![embed])
                .components(rows);
            edit_component(ctx, component, "dealer.delete", builder).await;
        }
        Err(_) => {
            edit_component(ctx, component, "dealer.delete", notice(text)).await;
        }
    }
}

/// A single modal text field by custom_id.
fn modal_field<'a>(modal: &'a ModalInteraction, id: &str) -> Option<&'a str> {
    for row in &modal.data.components {
        for comp in &row.components {
            if let ActionRowComponent::InputText(input) = comp
                && input.custom_id == id
            {
                return input.value.as_deref();
            }
        }
    }
    None
}

async fn respond_modal(ctx: &Context, modal: &ModalInteraction, builder: CreateInteractionResponseMessage) {
    if let Err(e) = modal
        .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
        .await
    {
        tracing::error!(target: "ui.modal", cid = %modal.data.custom_id, error = ?e, "modal response failed");
    }
}

pub async fn handle_modal(
    ctx: &Context,
    modal: &ModalInteraction,
    app_state: Arc<AppState>,
    admin_guild_id: GuildId,
) {
    if modal.guild_id != Some(admin_guild_id) {
        respond_modal(
            ctx,
            modal,
            CreateInteractionResponseMessage::new()
                .content("❌ This action is only available in the admin server.")
                .ephemeral(true),
        )
        .await;
        return;
    }
    let dealer = match database::dealers::get_dealer(&app_state.db, modal.user.id).await {
        Ok(Some(dealer)) => dealer,
        Ok(None) => {
            respond_modal(
                ctx,
                modal,
                CreateInteractionResponseMessage::new()
                    .content("❌ You are not registered as a dealer.")
                    .ephemeral(true),
            )
            .await;
            return;
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, "dealer lookup failed");
            respond_modal(
                ctx,
                modal,
                CreateInteractionResponseMessage::new()
                    .content("❌ An error occurred. Please try again later.")
                    .ephemeral(true),
            )
            .await;
            return;
        }
    };

    let custom_id = modal.data.custom_id.clone();
    if custom_id == ids::DEALER_ADD_CAR_MODAL {
        add_car_submit(ctx, modal, &app_state, dealer.dealer_id).await;
    } else if let Some(car_id) = ids::parse_id_suffix(&custom_id, ids::DEALER_PHOTO_MODAL_PREFIX) {
        photo_submit(ctx, modal, &app_state, dealer.dealer_id, car_id).await;
    }
}

async fn add_car_submit(
    ctx: &Context,
    modal: &ModalInteraction,
    app_state: &AppState,
    dealer_id: i32,
) {
    let make = modal_field(modal, ids::FIELD_CAR_MAKE).unwrap_or_default();
    let model = modal_field(modal, ids::FIELD_CAR_MODEL).unwrap_or_default();
    let year = modal_field(modal, ids::FIELD_CAR_YEAR).unwrap_or_default();
    let photo = modal_field(modal, ids::FIELD_CAR_PHOTO).unwrap_or_default();

    let new_car = match logic::parse_new_car(make, model, year, photo, Utc::now().year()) {
        Ok(new_car) => new_car,
        Err(reason) => {
            respond_modal(
                ctx,
                modal,
                CreateInteractionResponseMessage::new()
                    .content(format!("❌ {reason}"))
                    .ephemeral(true),
            )
            .await;
            return;
        }
    };

    match database::cars::add_car(
        &app_state.db,
        dealer_id,
        &new_car.make,
        &new_car.model,
        new_car.year,
        &new_car.photo_url,
    )
    .await
    {
        Ok(car_id) => {
            tracing::info!(target: "cars", car_id, dealer_id, "car added");
            let (embed, rows) = ui::dealer_menu();
            respond_modal(
                ctx,
                modal,
                CreateInteractionResponseMessage::new()
                    .content(format!(
                        "✅ Car added successfully!\n\nMake: {}\nModel: {}\nYear: {}",
                        new_car.make, new_car.model, new_car.year
                    ))
                    .embed(embed)
                    .components(rows),
            )
            .await;
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, dealer_id, "add car failed");
            respond_modal(
                ctx,
                modal,
                CreateInteractionResponseMessage::new()
                    .content("❌ Failed to add car. Please try again later.")
                    .ephemeral(true),
            )
            .await;
        }
    }
}

async fn photo_submit(
    ctx: &Context,
    modal: &ModalInteraction,
    app_state: &AppState,
    dealer_id: i32,
    car_id: i32,
) {
    let url = modal_field(modal, ids::FIELD_CAR_PHOTO).unwrap_or_default();
    if let Err(reason) = logic::validate_photo_url(url) {
        respond_modal(
            ctx,
            modal,
            CreateInteractionResponseMessage::new()
                .content(format!("❌ {reason}"))
                .ephemeral(true),
        )
        .await;
        return;
    }

    let text = match database::cars::set_primary_image(&app_state.db, dealer_id, car_id, url.trim())
        .await
    {
        Ok(()) => format!("✅ Updated primary photo for car #{car_id}."),
        Err(RentalError::NotFound) => "❌ Car not found or doesn't belong to you.".to_string(),
        Err(e) => {
            tracing::error!(target: "db", error = %e, car_id, "photo update failed");
            "❌ A database error occurred. Please try again later.".to_string()
        }
    };
    respond_modal(
        ctx,
        modal,
        CreateInteractionResponseMessage::new().content(text).ephemeral(true),
    )
    .await;
}
