//! Handles all component interactions for the customer menus: browsing,
//! booking, returning, and language selection.

use super::ids;
use super::util::{defer_component, edit_component};
use crate::commands::start::ui;
use crate::constants::CARS_FETCH_LIMIT;
use crate::database::RentalError;
use crate::messages::{self, Lang};
use crate::model::{Flow, Role};
use crate::{AppState, database};
use serenity::builder::EditInteractionResponse;
use serenity::model::application::ComponentInteraction;
use serenity::model::id::GuildId;
use serenity::prelude::Context;
use std::sync::Arc;

/// Map a customer custom_id onto its flow. Unknown ids (stale menus from
/// older releases) resolve to nothing and are ignored.
fn flow_for(custom_id: &str) -> Option<Flow> {
    if custom_id == ids::MENU_BOOKING {
        return Some(Flow::ViewOwnBooking);
    }
    if custom_id == ids::MENU_LANGUAGE || custom_id.starts_with(ids::LANG_PREFIX) {
        return Some(Flow::ChangeLanguage);
    }
    if custom_id.starts_with(ids::BOOK_PREFIX) {
        return Some(Flow::BookCar);
    }
    if custom_id.starts_with(ids::RETURN_PREFIX) {
        return Some(Flow::ReturnCar);
    }
    if custom_id == ids::MENU_HOME
        || custom_id == ids::MENU_CARS
        || custom_id == ids::MENU_CONTACT
        || custom_id.starts_with(ids::CAR_PREFIX)
    {
        return Some(Flow::BrowseCars);
    }
    None
}

/// Embed view edit: clears any previous text content.
fn view(
    (embed, rows): (serenity::builder::CreateEmbed, Vec<serenity::builder::CreateActionRow>),
) -> EditInteractionResponse {
    EditInteractionResponse::new()
        .content("")
        .embeds(vec![embed])
        .components(rows)
}

/// Text notice edit with the main menu underneath; clears any previous embed.
fn notice(lang: Lang, text: impl Into<String>) -> EditInteractionResponse {
    let (_, rows) = ui::main_menu(lang);
    EditInteractionResponse::new()
        .content(text)
        .embeds(Vec::new())
        .components(rows)
}

/// The sender's stored language, defaulting to English for unregistered
/// users browsing before `/start`.
async fn current_lang(state: &AppState, component: &ComponentInteraction) -> Lang {
    match database::customers::get_customer(&state.db, component.user.id).await {
        Ok(Some(customer)) => Lang::from_code(&customer.language),
        _ => Lang::En,
    }
}

pub async fn handle(
    ctx: &Context,
    component: &mut ComponentInteraction,
    app_state: Arc<AppState>,
    admin_guild_id: GuildId,
) {
    let custom_id = component.data.custom_id.clone();
    if custom_id == ids::CAR_PAGE_NOOP {
        // Inert page indicator; acknowledge and move on.
        defer_component(ctx, component).await;
        return;
    }
    let Some(flow) = flow_for(&custom_id) else {
        return;
    };

    defer_component(ctx, component).await;
    let db = &app_state.db;
    let lang = current_lang(&app_state, component).await;

    let role = match Role::resolve(db, admin_guild_id, component.guild_id, component.user.id).await
    {
        Ok(role) => role,
        Err(e) => {
            tracing::error!(target: "db", error = %e, "role resolution failed");
            edit_component(ctx, component, "customer.role", notice(lang, messages::db_error(lang)))
                .await;
            return;
        }
    };
    if !role.permits(flow) {
        edit_component(
            ctx,
            component,
            "customer.denied",
            notice(lang, messages::admin_restriction(lang)),
        )
        .await;
        return;
    }

    match custom_id.as_str() {
        ids::MENU_HOME => {
            edit_component(ctx, component, "customer.home", view(ui::main_menu(lang))).await;
        }
        ids::MENU_CARS => {
            show_car_list(ctx, component, &app_state, lang, 0).await;
        }
        ids::MENU_CONTACT => {
            edit_component(
                ctx,
                component,
                "customer.contact",
                notice(lang, messages::contact_admin_msg(lang)),
            )
            .await;
        }
        ids::MENU_LANGUAGE => {
            let builder = EditInteractionResponse::new()
                .content(messages::select_language(lang))
                .embeds(Vec::new())
                .components(ui::language_keyboard(lang, true));
            edit_component(ctx, component, "customer.language", builder).await;
        }
        ids::MENU_BOOKING => {
            show_own_booking(ctx, component, &app_state, lang).await;
        }
        _ => {
            if let Some(code) = ids::parse_lang(&custom_id) {
                change_language(ctx, component, &app_state, code).await;
            } else if let Some(page) = ids::parse_car_page(&custom_id) {
                show_car_list(ctx, component, &app_state, lang, page).await;
            } else if let Some((confirmed, car_id)) = ids::parse_book(&custom_id) {
                if confirmed {
                    book_car(ctx, component, &app_state, lang, car_id).await;
                } else {
                    show_booking_confirm(ctx, component, &app_state, lang, car_id).await;
                }
            } else if let Some(car_id) = ids::parse_car_select(&custom_id) {
                show_car_details(ctx, component, &app_state, lang, car_id).await;
            } else if let Some(booking_id) = ids::parse_id_suffix(&custom_id, ids::RETURN_PREFIX) {
                return_car(ctx, component, &app_state, lang, booking_id).await;
            }
        }
    }
}

async fn show_car_list(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    lang: Lang,
    page: usize,
) {
    match database::cars::list_available(&app_state.db, CARS_FETCH_LIMIT, 0).await {
        Ok(cars) if cars.is_empty() => {
            edit_component(ctx, component, "cars.empty", notice(lang, messages::no_cars(lang)))
                .await;
        }
        Ok(cars) => {
            edit_component(ctx, component, "cars.list", view(ui::car_list(lang, &cars, page)))
                .await;
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, "car listing failed");
            edit_component(ctx, component, "cars.err", notice(lang, messages::db_error(lang)))
                .await;
        }
    }
}

async fn show_car_details(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    lang: Lang,
    car_id: i32,
) {
    match database::cars::get_car_details(&app_state.db, car_id).await {
        Ok(Some(details)) if details.car.available => {
            edit_component(
                ctx,
                component,
                "cars.details",
                view(ui::car_details_view(lang, &details)),
            )
            .await;
        }
        Ok(_) => {
            edit_component(
                ctx,
                component,
                "cars.gone",
                notice(lang, messages::car_not_found(lang)),
            )
            .await;
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, car_id, "car detail fetch failed");
            edit_component(ctx, component, "cars.err", notice(lang, messages::db_error(lang)))
                .await;
        }
    }
}

async fn show_booking_confirm(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    lang: Lang,
    car_id: i32,
) {
    match database::cars::get_car_details(&app_state.db, car_id).await {
        Ok(Some(details)) if details.car.available => {
            edit_component(
                ctx,
                component,
                "book.confirm",
                view(ui::booking_confirm_view(lang, &details)),
            )
            .await;
        }
        Ok(_) => {
            edit_component(
                ctx,
                component,
                "book.gone",
                notice(lang, messages::car_not_found(lang)),
            )
            .await;
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, car_id, "car detail fetch failed");
            edit_component(ctx, component, "book.err", notice(lang, messages::db_error(lang)))
                .await;
        }
    }
}

async fn book_car(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    lang: Lang,
    car_id: i32,
) {
    let customer = match database::customers::get_customer(&app_state.db, component.user.id).await {
        Ok(Some(customer)) => customer,
        Ok(None) => {
            edit_component(
                ctx,
                component,
                "book.nocustomer",
                notice(lang, messages::customer_not_found(lang)),
            )
            .await;
            return;
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, "customer lookup failed");
            edit_component(ctx, component, "book.err", notice(lang, messages::db_error(lang)))
                .await;
            return;
        }
    };

    let text = match database::bookings::book_car(&app_state.db, customer.customer_id, car_id).await
    {
        Ok(booking_id) => {
            tracing::info!(target: "bookings", booking_id, car_id, customer_id = customer.customer_id, "car booked");
            messages::booking_success(lang).to_string()
        }
        Err(RentalError::NotFound) => messages::car_not_found(lang).to_string(),
        Err(RentalError::CarUnavailable) => {
            messages::booking_failed(lang, messages::car_unavailable(lang))
        }
        Err(RentalError::AlreadyBooked) => {
            messages::booking_failed(lang, messages::already_booked(lang))
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, car_id, "booking failed");
            messages::db_error(lang).to_string()
        }
    };
    edit_component(ctx, component, "book.result", notice(lang, text)).await;
}

async fn show_own_booking(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    lang: Lang,
) {
    let customer = match database::customers::get_customer(&app_state.db, component.user.id).await {
        Ok(Some(customer)) => customer,
        Ok(None) => {
            edit_component(
                ctx,
                component,
                "booking.nocustomer",
                notice(lang, messages::customer_not_found(lang)),
            )
            .await;
            return;
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, "customer lookup failed");
            edit_component(ctx, component, "booking.err", notice(lang, messages::db_error(lang)))
                .await;
            return;
        }
    };

    match database::bookings::get_active_booking(&app_state.db, customer.customer_id).await {
        Ok(Some(booking)) => {
            edit_component(
                ctx,
                component,
                "booking.view",
                view(ui::booking_view(lang, &booking)),
            )
            .await;
        }
        Ok(None) => {
            edit_component(
                ctx,
                component,
                "booking.none",
                notice(lang, messages::no_active_booking(lang)),
            )
            .await;
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, "active booking fetch failed");
            edit_component(ctx, component, "booking.err", notice(lang, messages::db_error(lang)))
                .await;
        }
    }
}

async fn return_car(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    lang: Lang,
    booking_id: i32,
) {
    let customer = match database::customers::get_customer(&app_state.db, component.user.id).await {
        Ok(Some(customer)) => customer,
        Ok(None) => {
            edit_component(
                ctx,
                component,
                "return.nocustomer",
                notice(lang, messages::customer_not_found(lang)),
            )
            .await;
            return;
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, "customer lookup failed");
            edit_component(ctx, component, "return.err", notice(lang, messages::db_error(lang)))
                .await;
            return;
        }
    };

    let text =
        match database::bookings::return_car(&app_state.db, customer.customer_id, booking_id).await
        {
            Ok(()) => {
                tracing::info!(target: "bookings", booking_id, customer_id = customer.customer_id, "car returned");
                messages::return_success(lang).to_string()
            }
            Err(RentalError::NotFound) => {
                messages::return_failed(lang, messages::booking_not_found(lang))
            }
            Err(e) => {
                tracing::error!(target: "db", error = %e, booking_id, "return failed");
                messages::db_error(lang).to_string()
            }
        };
    edit_component(ctx, component, "return.result", notice(lang, text)).await;
}

async fn change_language(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    code: &str,
) {
    let lang = Lang::from_code(code);
    match database::customers::set_language(&app_state.db, component.user.id, lang.code()).await {
        Ok(()) => {
            let (_, rows) = ui::main_menu(lang);
            let builder = EditInteractionResponse::new()
                .content(format!(
                    "{}\n\n{}",
                    messages::language_changed(lang),
                    messages::main_menu(lang)
                ))
                .embeds(Vec::new())
                .components(rows);
            edit_component(ctx, component, "lang.changed", builder).await;
        }
        Err(RentalError::NotFound) => {
            edit_component(
                ctx,
                component,
                "lang.nocustomer",
                notice(lang, messages::customer_not_found(lang)),
            )
            .await;
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, "language update failed");
            edit_component(ctx, component, "lang.err", notice(lang, messages::db_error(lang)))
                .await;
        }
    }
}
