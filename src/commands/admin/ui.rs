//! Admin panel embeds, keyboards, and the add-dealer modal. English-only.

use crate::database::models::{BookingOverview, Dealer};
use crate::interactions::ids;
use crate::ui::buttons::{Btn, confirm_row};
use crate::ui::style::COLOR_ADMIN;
use serenity::builder::{CreateActionRow, CreateEmbed, CreateInputText, CreateModal};
use serenity::model::application::InputTextStyle;

pub fn admin_menu() -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new().title("🔐 Admin Panel").color(COLOR_ADMIN);
    let rows = vec![
        CreateActionRow::Buttons(vec![
            Btn::primary(ids::ADMIN_ALL_BOOKINGS, "📋 All Bookings"),
            Btn::primary(ids::ADMIN_ACTIVE_BOOKINGS, "✅ Active Bookings"),
        ]),
        CreateActionRow::Buttons(vec![
            Btn::secondary(ids::ADMIN_DEALERS, "👥 Dealers"),
            Btn::secondary(ids::ADMIN_ADD_DEALER, "➕ Add Dealer"),
        ]),
    ];
    (embed, rows)
}

fn booking_line(b: &BookingOverview) -> String {
    let start = b.start_date.format("%Y-%m-%d %H:%M").to_string();
    let end = b
        .end_date
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "Active".to_string());
    let status = if b.active { "✅ Active" } else { "❌ Completed" };
    format!(
        "🔹 Booking #{}\n👤 Customer: {}\n🚗 Car: {} {} ({})\n📅 From: {start}\n📅 To: {end}\nStatus: {status}\n",
        b.booking_id, b.customer_name, b.make, b.model, b.year
    )
}

/// Booking listing with one cancel button per row shown.
pub fn bookings_view(
    bookings: &[BookingOverview],
    active_only: bool,
) -> (CreateEmbed, Vec<CreateActionRow>) {
    let title = if active_only {
        "✅ Active Bookings"
    } else {
        "📋 All Bookings"
    };
    let description = if bookings.is_empty() {
        "No bookings found.".to_string()
    } else {
        bookings.iter().map(booking_line).collect::<Vec<_>>().join("\n")
    };

    let mut rows: Vec<CreateActionRow> = Vec::new();
    let mut delete_buttons = Vec::new();
    for b in bookings.iter().take(4) {
        delete_buttons.push(Btn::danger(
            format!("{}{}", ids::ADMIN_BOOKING_DELETE_PREFIX, b.booking_id),
            format!("🗑️ Cancel #{}", b.booking_id),
        ));
    }
    if !delete_buttons.is_empty() {
        rows.push(CreateActionRow::Buttons(delete_buttons));
    }
    rows.push(CreateActionRow::Buttons(vec![
        Btn::secondary(ids::ADMIN_ALL_BOOKINGS, "📋 All"),
        Btn::secondary(ids::ADMIN_ACTIVE_BOOKINGS, "✅ Active"),
        Btn::secondary(ids::ADMIN_MENU, "🔙 Back"),
    ]));

    let embed = CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ADMIN);
    (embed, rows)
}

pub fn dealers_view(dealers: &[Dealer]) -> (CreateEmbed, Vec<CreateActionRow>) {
    let description = if dealers.is_empty() {
        "No dealers registered.".to_string()
    } else {
        dealers
            .iter()
            .map(|d| format!("👤 #{} {} (<@{}>)", d.dealer_id, d.name, d.discord_id))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut rows: Vec<CreateActionRow> = Vec::new();
    let mut delete_buttons = Vec::new();
    for d in dealers.iter().take(4) {
        delete_buttons.push(Btn::danger(
            format!("{}{}", ids::ADMIN_DEALER_DELETE_PREFIX, d.dealer_id),
            format!("🗑️ Remove #{}", d.dealer_id),
        ));
    }
    if !delete_buttons.is_empty() {
        rows.push(CreateActionRow::Buttons(delete_buttons));
    }
    rows.push(CreateActionRow::Buttons(vec![
        Btn::secondary(ids::ADMIN_ADD_DEALER, "➕ Add Dealer"),
        Btn::secondary(ids::ADMIN_MENU, "🔙 Back"),
    ]));

    let embed = CreateEmbed::new()
        .title("👥 Dealers")
        .description(description)
        .color(COLOR_ADMIN);
    (embed, rows)
}

pub fn booking_delete_confirm(booking_id: i32) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .description(format!(
            "⚠️ Are you sure you want to delete booking #{booking_id}? This action cannot be undone."
        ))
        .color(COLOR_ADMIN);
    let rows = vec![confirm_row(
        format!("{}{}", ids::ADMIN_BOOKING_DELETE_CONFIRM_PREFIX, booking_id),
        "✅ Yes, delete",
        ids::ADMIN_ALL_BOOKINGS,
        "❌ No, cancel",
    )];
    (embed, rows)
}

pub fn dealer_delete_confirm(dealer_id: i32) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .description(format!(
            "⚠️ Are you sure you want to remove dealer #{dealer_id}? All their cars will be deleted too."
        ))
        .color(COLOR_ADMIN);
    let rows = vec![confirm_row(
        format!("{}{}", ids::ADMIN_DEALER_DELETE_CONFIRM_PREFIX, dealer_id),
        "✅ Yes, remove",
        ids::ADMIN_DEALERS,
        "❌ No, cancel",
    )];
    (embed, rows)
}

pub fn add_dealer_modal() -> CreateModal {
    CreateModal::new(ids::ADMIN_ADD_DEALER_MODAL, "Add a Dealer").components(vec![
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "User ID", ids::FIELD_DEALER_USER_ID)
                .placeholder("Discord user id, e.g. 1234567890")
                .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Display name", ids::FIELD_DEALER_NAME)
                .placeholder("Dealer name shown to customers")
                .required(true)
                .max_length(50),
        ),
    ])
}
