//! Dealer panel embeds, keyboards, and modals. Panel text is English-only,
//! like the admin side.

use crate::database::models::{DealerCar, DealerStats};
use crate::interactions::ids;
use crate::ui::buttons::{Btn, confirm_row};
use crate::ui::style::{COLOR_DEALER, availability_icon};
use serenity::builder::{CreateActionRow, CreateEmbed, CreateInputText, CreateModal};
use serenity::model::application::InputTextStyle;

pub fn dealer_menu() -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new().title("🚗 Dealer Panel").color(COLOR_DEALER);
    let rows = vec![
        CreateActionRow::Buttons(vec![Btn::primary(ids::DEALER_ADD_CAR, "➕ Add Car")]),
        CreateActionRow::Buttons(vec![
            Btn::secondary(ids::DEALER_MY_CARS, "🚗 My Cars"),
            Btn::secondary(ids::DEALER_STATS, "📊 Statistics"),
        ]),
    ];
    (embed, rows)
}

/// Inventory listing with a delete and photo button per car.
pub fn my_cars_view(cars: &[DealerCar]) -> (CreateEmbed, Vec<CreateActionRow>) {
    let description = if cars.is_empty() {
        "You have no cars yet. Add one to get started.".to_string()
    } else {
        cars.iter()
            .map(|car| {
                format!(
                    "{} #{} {} {} ({})",
                    availability_icon(car.available),
                    car.car_id,
                    car.make,
                    car.model,
                    car.year
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut rows: Vec<CreateActionRow> = cars
        .iter()
        .take(4)
        .map(|car| {
            CreateActionRow::Buttons(vec![
                Btn::danger(
                    format!("{}{}", ids::DEALER_CAR_DELETE_PREFIX, car.car_id),
                    format!("🗑️ Delete #{}", car.car_id),
                ),
                Btn::secondary(
                    format!("{}{}", ids::DEALER_CAR_PHOTO_PREFIX, car.car_id),
                    format!("🖼️ Photo #{}", car.car_id),
                ),
            ])
        })
        .collect();
    rows.push(CreateActionRow::Buttons(vec![Btn::secondary(
        ids::DEALER_MENU,
        "🔙 Back",
    )]));

    let embed = CreateEmbed::new()
        .title("Your Cars")
        .description(description)
        .color(COLOR_DEALER);
    (embed, rows)
}

pub fn stats_view(stats: &DealerStats) -> (CreateEmbed, Vec<CreateActionRow>) {
    let mut per_car = stats
        .car_stats
        .iter()
        .map(|c| {
            format!(
                "#{} {} {} ({}) — {} bookings",
                c.car_id, c.make, c.model, c.year, c.bookings
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    if per_car.is_empty() {
        per_car = "No cars yet.".to_string();
    }

    let embed = CreateEmbed::new()
        .title("📊 Dealer Statistics")
        .field("Total cars", stats.total_cars.to_string(), true)
        .field("Total bookings", stats.total_bookings.to_string(), true)
        .field("Active", stats.active_bookings.to_string(), true)
        .field("Completed", stats.completed_bookings.to_string(), true)
        .field("Per car", per_car, false)
        .color(COLOR_DEALER);
    let rows = vec![CreateActionRow::Buttons(vec![Btn::secondary(
        ids::DEALER_MENU,
        "🔙 Back",
    )])];
    (embed, rows)
}

pub fn car_delete_confirm(car_id: i32) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .description(format!(
            "⚠️ Are you sure you want to delete car #{car_id}? This action cannot be undone."
        ))
        .color(COLOR_DEALER);
    let rows = vec![confirm_row(
        format!("{}{}", ids::DEALER_CAR_DELETE_CONFIRM_PREFIX, car_id),
        "✅ Yes, delete",
        ids::DEALER_MY_CARS,
        "❌ No, cancel",
    )];
    (embed, rows)
}

pub fn add_car_modal() -> CreateModal {
    CreateModal::new(ids::DEALER_ADD_CAR_MODAL, "Add a Car").components(vec![
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Make", ids::FIELD_CAR_MAKE)
                .placeholder("Toyota")
                .required(true)
                .max_length(50),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Model", ids::FIELD_CAR_MODEL)
                .placeholder("Corolla")
                .required(true)
                .max_length(50),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Year", ids::FIELD_CAR_YEAR)
                .placeholder("2022")
                .required(true)
                .max_length(4),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Photo URL", ids::FIELD_CAR_PHOTO)
                .placeholder("https://…")
                .required(true),
        ),
    ])
}

pub fn photo_modal(car_id: i32) -> CreateModal {
    CreateModal::new(
        format!("{}{}", ids::DEALER_PHOTO_MODAL_PREFIX, car_id),
        format!("Update photo for car #{car_id}"),
    )
    .components(vec![CreateActionRow::InputText(
        CreateInputText::new(InputTextStyle::Short, "Photo URL", ids::FIELD_CAR_PHOTO)
            .placeholder("https://…")
            .required(true),
    )])
}
