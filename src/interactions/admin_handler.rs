//! Handles all component interactions and modal submissions for the
//! `/admin` panel family.

use super::ids;
use super::util::{defer_component, edit_component};
use crate::commands::admin::ui;
use crate::constants::BOOKINGS_LIST_LIMIT;
use crate::database::RentalError;
use crate::model::{Flow, Role};
use crate::{AppState, database};
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
};
use serenity::model::application::{ActionRowComponent, ComponentInteraction, ModalInteraction};
use serenity::model::id::{GuildId, UserId};
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

fn notice(text: impl Into<String>) -> EditInteractionResponse {
    let (_, rows) = ui::admin_menu();
    EditInteractionResponse::new()
        .content(text)
        .embeds(Vec::new())
        .components(rows)
}

/// Require the admin role for `flow`; answers with a refusal and returns
/// false otherwise. Modal-opening buttons pass `deferred = false`.
async fn require_admin(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    admin_guild_id: GuildId,
    flow: Flow,
    deferred: bool,
) -> bool {
    let refuse = |text: &'static str| async move {
        if deferred {
            edit_component(
                ctx,
                component,
                "admin.denied",
                EditInteractionResponse::new()
                    .content(text)
                    .embeds(Vec::new())
                    .components(Vec::new()),
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
        return false;
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
            return false;
        }
    };
    if !role.permits(flow) {
        refuse("❌ Dealer accounts cannot use the admin panel.").await;
        return false;
    }
    true
}

pub async fn handle(
    ctx: &Context,
    component: &mut ComponentInteraction,
    app_state: Arc<AppState>,
    admin_guild_id: GuildId,
) {
    let custom_id = component.data.custom_id.clone();

    // The add-dealer button answers with a modal, so it cannot be deferred.
    if custom_id == ids::ADMIN_ADD_DEALER {
        if !require_admin(ctx, component, &app_state, admin_guild_id, Flow::AddDealer, false).await
        {
            return;
        }
        component
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Modal(ui::add_dealer_modal()),
            )
            .await
            .ok();
        return;
    }

    defer_component(ctx, component).await;

    match custom_id.as_str() {
        ids::ADMIN_MENU => {
            if require_admin(ctx, component, &app_state, admin_guild_id, Flow::ViewAllBookings, true)
                .await
            {
                edit_component(ctx, component, "admin.menu", view(ui::admin_menu())).await;
            }
        }
        ids::ADMIN_ALL_BOOKINGS => {
            if require_admin(ctx, component, &app_state, admin_guild_id, Flow::ViewAllBookings, true)
                .await
            {
                show_bookings(ctx, component, &app_state, false).await;
            }
        }
        ids::ADMIN_ACTIVE_BOOKINGS => {
            if require_admin(ctx, component, &app_state, admin_guild_id, Flow::ViewAllBookings, true)
                .await
            {
                show_bookings(ctx, component, &app_state, true).await;
            }
        }
        ids::ADMIN_DEALERS => {
            if require_admin(ctx, component, &app_state, admin_guild_id, Flow::ListDealers, true)
                .await
            {
                show_dealers(ctx, component, &app_state).await;
            }
        }
        _ => {
            if let Some(booking_id) =
                ids::parse_id_suffix(&custom_id, ids::ADMIN_BOOKING_DELETE_CONFIRM_PREFIX)
            {
                if require_admin(ctx, component, &app_state, admin_guild_id, Flow::CancelBooking, true)
                    .await
                {
                    delete_booking(ctx, component, &app_state, booking_id).await;
                }
            } else if let Some(booking_id) =
                ids::parse_id_suffix(&custom_id, ids::ADMIN_BOOKING_DELETE_PREFIX)
            {
                if require_admin(ctx, component, &app_state, admin_guild_id, Flow::CancelBooking, true)
                    .await
                {
                    edit_component(
                        ctx,
                        component,
                        "admin.booking.confirm",
                        view(ui::booking_delete_confirm(booking_id)),
                    )
                    .await;
                }
            } else if let Some(dealer_id) =
                ids::parse_id_suffix(&custom_id, ids::ADMIN_DEALER_DELETE_CONFIRM_PREFIX)
            {
                if require_admin(ctx, component, &app_state, admin_guild_id, Flow::RemoveDealer, true)
                    .await
                {
                    delete_dealer(ctx, component, &app_state, dealer_id).await;
                }
            } else if let Some(dealer_id) =
                ids::parse_id_suffix(&custom_id, ids::ADMIN_DEALER_DELETE_PREFIX)
            {
                if require_admin(ctx, component, &app_state, admin_guild_id, Flow::RemoveDealer, true)
                    .await
                {
                    edit_component(
                        ctx,
                        component,
                        "admin.dealer.confirm",
                        view(ui::dealer_delete_confirm(dealer_id)),
                    )
                    .await;
                }
            }
        }
    }
}

async fn show_bookings(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    active_only: bool,
) {
    match database::bookings::list_bookings(&app_state.db, active_only, BOOKINGS_LIST_LIMIT).await {
        Ok(bookings) => {
            edit_component(
                ctx,
                component,
                "admin.bookings",
                view(ui::bookings_view(&bookings, active_only)),
            )
            .await;
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, "booking listing failed");
            edit_component(
                ctx,
                component,
                "admin.bookings.err",
                notice("❌ An error occurred while retrieving bookings."),
            )
            .await;
        }
    }
}

async fn show_dealers(ctx: &Context, component: &ComponentInteraction, app_state: &AppState) {
    match database::dealers::list_dealers(&app_state.db).await {
        Ok(dealers) => {
            edit_component(ctx, component, "admin.dealers", view(ui::dealers_view(&dealers)))
                .await;
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, "dealer listing failed");
            edit_component(
                ctx,
                component,
                "admin.dealers.err",
                notice("❌ An error occurred while retrieving dealers."),
            )
            .await;
        }
    }
}

async fn delete_booking(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    booking_id: i32,
) {
    let text = match database::bookings::delete_booking(&app_state.db, booking_id).await {
        Ok(()) => {
            tracing::info!(target: "bookings", booking_id, "booking deleted by admin");
            format!("✅ Booking #{booking_id} deleted successfully.")
        }
        Err(RentalError::NotFound) => "❌ Booking not found.".to_string(),
        Err(e) => {
            tracing::error!(target: "db", error = %e, booking_id, "booking deletion failed");
            "❌ A database error occurred. Please try again later.".to_string()
        }
    };
    // Refresh the listing under the result.
    match database::bookings::list_bookings(&app_state.db, false, BOOKINGS_LIST_LIMIT).await {
        Ok(bookings) => {
            let (embed, rows) = ui::bookings_view(&bookings, false);
            let builder = EditInteractionResponse::new()
                .content(text)
                .embeds(vec![embed])
                .components(rows);
            edit_component(ctx, component, "admin.booking.delete", builder).await;
        }
        Err(_) => {
            edit_component(ctx, component, "admin.booking.delete", notice(text)).await;
        }
    }
}

async fn delete_dealer(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    dealer_id: i32,
) {
    let text = match database::dealers::delete_dealer(&app_state.db, dealer_id).await {
        Ok(()) => {
            tracing::info!(target: "dealers", dealer_id, "dealer removed");
            format!("✅ Dealer #{dealer_id} and all their cars deleted successfully.")
        }
        Err(RentalError::NotFound) => "❌ Dealer not found.".to_string(),
        Err(e) => {
            tracing::error!(target: "db", error = %e, dealer_id, "dealer deletion failed");
            "❌ A database error occurred. Please try again later.".to_string()
        }
    };
    match database::dealers::list_dealers(&app_state.db).await {
        Ok(dealers) => {
            let (embed, rows) = ui::dealers_view(&dealers);
            let builder = EditInteractionResponse::new()
                .content(text)
                .embeds(vec![embed])
                .components(rows);
            edit_component(ctx, component, "admin.dealer.delete", builder).await;
        }
        Err(_) => {
            edit_component(ctx, component, "admin.dealer.delete", notice(text)).await;
        }
    }
}

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

pub async fn handle_modal(
    ctx: &Context,
    modal: &ModalInteraction,
    app_state: Arc<AppState>,
    admin_guild_id: GuildId,
) {
    if modal.data.custom_id != ids::ADMIN_ADD_DEALER_MODAL {
        return;
    }
    let respond = |builder: CreateInteractionResponseMessage| async move {
        if let Err(e) = modal
            .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
            .await
        {
            tracing::error!(target: "ui.modal", cid = %modal.data.custom_id, error = ?e, "modal response failed");
        }
    };

    if modal.guild_id != Some(admin_guild_id) {
        respond(
            CreateInteractionResponseMessage::new()
                .content("❌ This action is only available in the admin server.")
                .ephemeral(true),
        )
        .await;
        return;
    }

    let user_id_text = modal_field(modal, ids::FIELD_DEALER_USER_ID).unwrap_or_default();
    let name = modal_field(modal, ids::FIELD_DEALER_NAME).unwrap_or_default().trim();
    let user_id = match user_id_text.trim().parse::<u64>() {
        Ok(id) if id > 0 => id,
        _ => {
            respond(
                CreateInteractionResponseMessage::new()
                    .content("❌ Invalid user id. Please enter a numeric Discord user id.")
                    .ephemeral(true),
            )
            .await;
            return;
        }
    };
    if name.is_empty() {
        respond(
            CreateInteractionResponseMessage::new()
                .content("❌ Please enter a display name for the dealer.")
                .ephemeral(true),
        )
        .await;
        return;
    }

    let text = match database::dealers::add_dealer(&app_state.db, UserId::new(user_id), name).await
    {
        Ok(dealer_id) => {
            tracing::info!(target: "dealers", dealer_id, "dealer added");
            format!("✅ Dealer #{dealer_id} added successfully.")
        }
        Err(RentalError::DealerExists) => {
            "❌ Dealer with this user id already exists.".to_string()
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, "dealer insertion failed");
            "❌ A database error occurred. Please try again later.".to_string()
        }
    };
    let (embed, rows) = ui::admin_menu();
    respond(
        CreateInteractionResponseMessage::new()
            .content(text)
            .embed(embed)
            .components(rows),
    )
    .await;
}
