//! Customer-facing keyboards and embeds: language selection, main menu, car
//! browsing, booking views.

use crate::constants::CARS_PAGE_SIZE;
use crate::database::models::{ActiveBooking, CarDetails, CarSummary};
use crate::interactions::ids;
use crate::messages::{self, Lang};
use crate::ui::buttons::{Btn, confirm_row};
use crate::ui::style::{COLOR_BOOKING, COLOR_CAR, COLOR_MENU};
use crate::util::{clamp_page, page_window};
use serenity::builder::{CreateActionRow, CreateButton, CreateEmbed};

pub fn language_keyboard(lang: Lang, show_back_button: bool) -> Vec<CreateActionRow> {
    let mut rows = vec![CreateActionRow::Buttons(vec![
        Btn::secondary(format!("{}en", ids::LANG_PREFIX), "🇬🇧 English"),
        Btn::secondary(format!("{}ru", ids::LANG_PREFIX), "🇷🇺 Русский"),
    ])];
    if show_back_button {
        rows.push(CreateActionRow::Buttons(vec![Btn::secondary(
            ids::MENU_HOME,
            messages::back_btn(lang),
        )]));
    }
    rows
}

pub fn main_menu(lang: Lang) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .description(messages::main_menu(lang))
        .color(COLOR_MENU);
    let rows = vec![
        CreateActionRow::Buttons(vec![Btn::primary(
            ids::MENU_CARS,
            messages::list_cars_btn(lang),
        )]),
        CreateActionRow::Buttons(vec![Btn::primary(
            ids::MENU_BOOKING,
            messages::my_booking_btn(lang),
        )]),
        CreateActionRow::Buttons(vec![
            Btn::secondary(ids::MENU_CONTACT, messages::contact_admin_btn(lang)),
            Btn::secondary(ids::MENU_LANGUAGE, messages::change_language_btn(lang)),
        ]),
    ];
    (embed, rows)
}

/// Paginated car listing: one button per car on the current page plus a
/// prev/indicator/next row when more than one page exists.
pub fn car_list(lang: Lang, cars: &[CarSummary], page: usize) -> (CreateEmbed, Vec<CreateActionRow>) {
    let (start, end, total_pages) = page_window(cars.len(), page, CARS_PAGE_SIZE);
    let page = clamp_page(cars.len(), page, CARS_PAGE_SIZE);

    let mut rows: Vec<CreateActionRow> = cars[start..end]
        .iter()
        .map(|car| {
            CreateActionRow::Buttons(vec![Btn::secondary(
                format!("{}{}", ids::CAR_PREFIX, car.car_id),
                format!("{} {} ({})", car.make, car.model, car.year),
            )])
        })
        .collect();

    if total_pages > 1 {
        let mut nav: Vec<CreateButton> = Vec::new();
        if page > 0 {
            nav.push(Btn::secondary(
                format!("{}{}", ids::CAR_PAGE_PREFIX, page - 1),
                "⬅️ Prev",
            ));
        }
        nav.push(Btn::secondary(
            ids::CAR_PAGE_NOOP,
            format!("📄 {}/{}", page + 1, total_pages),
        ));
        if page < total_pages - 1 {
            nav.push(Btn::secondary(
                format!("{}{}", ids::CAR_PAGE_PREFIX, page + 1),
                "Next ➡️",
            ));
        }
        rows.push(CreateActionRow::Buttons(nav));
    }

    rows.push(CreateActionRow::Buttons(vec![Btn::secondary(
        ids::MENU_HOME,
        messages::back_btn(lang),
    )]));

    let embed = CreateEmbed::new()
        .description(messages::select_car(lang))
        .color(COLOR_CAR);
    (embed, rows)
}

pub fn car_details_view(lang: Lang, details: &CarDetails) -> (CreateEmbed, Vec<CreateActionRow>) {
    let car = &details.car;
    let mut embed = CreateEmbed::new()
        .description(messages::car_details(
            lang,
            &car.make,
            &car.model,
            car.year,
            &car.dealer_name,
        ))
        .color(COLOR_CAR);
    if let Some(url) = details.primary_image() {
        embed = embed.image(url);
    }
    let rows = vec![
        CreateActionRow::Buttons(vec![Btn::primary(
            format!("{}{}", ids::BOOK_PREFIX, car.car_id),
            messages::book_car_btn(lang),
        )]),
        CreateActionRow::Buttons(vec![Btn::secondary(
            ids::MENU_CARS,
            messages::back_btn(lang),
        )]),
    ];
    (embed, rows)
}

pub fn booking_confirm_view(
    lang: Lang,
    details: &CarDetails,
) -> (CreateEmbed, Vec<CreateActionRow>) {
    let car = &details.car;
    let embed = CreateEmbed::new()
        .description(messages::confirm_booking(lang, &car.make, &car.model, car.year))
        .color(COLOR_BOOKING);
    let rows = vec![confirm_row(
        format!("{}{}", ids::BOOK_CONFIRM_PREFIX, car.car_id),
        messages::confirm_btn(lang),
        ids::MENU_HOME,
        messages::cancel_btn(lang),
    )];
    (embed, rows)
}

pub fn format_booking_info(booking: &ActiveBooking) -> String {
    format!(
        "🚗 {} {} ({})\n📅 From: {}",
        booking.make,
        booking.model,
        booking.year,
        booking.start_date.format("%Y-%m-%d %H:%M")
    )
}

pub fn booking_view(lang: Lang, booking: &ActiveBooking) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .description(messages::active_booking(lang, &format_booking_info(booking)))
        .color(COLOR_BOOKING);
    let rows = vec![
        CreateActionRow::Buttons(vec![Btn::success(
            format!("{}{}", ids::RETURN_PREFIX, booking.booking_id),
            messages::return_car_btn(lang),
        )]),
        CreateActionRow::Buttons(vec![Btn::secondary(
            ids::MENU_HOME,
            messages::back_btn(lang),
        )]),
    ];
    (embed, rows)
}
