//! Central UI style constants and helpers.

pub const COLOR_MENU: u32 = 0x3498DB; // Blue
pub const COLOR_CAR: u32 = 0x2ECC71; // Green
pub const COLOR_BOOKING: u32 = 0x9B59B6; // Purple
pub const COLOR_DEALER: u32 = 0xCD7F32; // Bronze
pub const COLOR_ADMIN: u32 = 0xE67E22; // Orange

/// Availability marker used in car listings.
pub fn availability_icon(available: bool) -> &'static str {
    if available { "🟢" } else { "🔴" }
}
