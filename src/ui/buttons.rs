//! Central button construction helpers ensuring consistent styles.

use serenity::builder::{CreateActionRow, CreateButton};
use serenity::model::application::ButtonStyle;

pub struct Btn;
impl Btn {
    pub fn primary(id: impl Into<String>, label: impl Into<String>) -> CreateButton {
        CreateButton::new(id).label(label).style(ButtonStyle::Primary)
    }
    pub fn success(id: impl Into<String>, label: impl Into<String>) -> CreateButton {
        CreateButton::new(id).label(label).style(ButtonStyle::Success)
    }
    pub fn secondary(id: impl Into<String>, label: impl Into<String>) -> CreateButton {
        CreateButton::new(id).label(label).style(ButtonStyle::Secondary)
    }
    pub fn danger(id: impl Into<String>, label: impl Into<String>) -> CreateButton {
        CreateButton::new(id).label(label).style(ButtonStyle::Danger)
    }
}

/// A yes/no confirmation row, used before every destructive action.
pub fn confirm_row(
    confirm_id: impl Into<String>,
    confirm_label: impl Into<String>,
    cancel_id: impl Into<String>,
    cancel_label: impl Into<String>,
) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        Btn::success(confirm_id, confirm_label),
        Btn::secondary(cancel_id, cancel_label),
    ])
}
