//! Centralized custom_id string constants for interaction components.
//! Consolidating here reduces typos and enables future refactors
//! (renaming / prefix changes).

// Language selection
pub const LANG_PREFIX: &str = "lang_"; // followed by language code

// Customer main menu
pub const MENU_HOME: &str = "menu_home";
pub const MENU_CARS: &str = "menu_cars";
pub const MENU_BOOKING: &str = "menu_booking";
pub const MENU_CONTACT: &str = "menu_contact";
pub const MENU_LANGUAGE: &str = "menu_language";

// Customer browse / booking
pub const CAR_PAGE_PREFIX: &str = "car_page_"; // followed by page index
pub const CAR_PREFIX: &str = "car_"; // followed by car id
pub const CAR_PAGE_NOOP: &str = "car_page_noop"; // inert page indicator
pub const BOOK_CONFIRM_PREFIX: &str = "book_confirm_"; // followed by car id
pub const BOOK_PREFIX: &str = "book_"; // followed by car id
pub const RETURN_PREFIX: &str = "return_"; // followed by booking id

// Dealer panel
pub const DEALER_MENU: &str = "dealer_menu";
pub const DEALER_ADD_CAR: &str = "dealer_add_car";
pub const DEALER_MY_CARS: &str = "dealer_my_cars";
pub const DEALER_STATS: &str = "dealer_stats";
pub const DEALER_CAR_DELETE_CONFIRM_PREFIX: &str = "dealer_car_delete_confirm_";
pub const DEALER_CAR_DELETE_PREFIX: &str = "dealer_car_delete_";
pub const DEALER_CAR_PHOTO_PREFIX: &str = "dealer_car_photo_";
pub const DEALER_ADD_CAR_MODAL: &str = "dealer_add_car_modal";
pub const DEALER_PHOTO_MODAL_PREFIX: &str = "dealer_photo_modal_";

// Admin panel
pub const ADMIN_MENU: &str = "admin_menu";
pub const ADMIN_ALL_BOOKINGS: &str = "admin_all_bookings";
pub const ADMIN_ACTIVE_BOOKINGS: &str = "admin_active_bookings";
pub const ADMIN_DEALERS: &str = "admin_dealers";
pub const ADMIN_ADD_DEALER: &str = "admin_add_dealer";
pub const ADMIN_BOOKING_DELETE_CONFIRM_PREFIX: &str = "admin_booking_delete_confirm_";
pub const ADMIN_BOOKING_DELETE_PREFIX: &str = "admin_booking_delete_";
pub const ADMIN_DEALER_DELETE_CONFIRM_PREFIX: &str = "admin_dealer_delete_confirm_";
pub const ADMIN_DEALER_DELETE_PREFIX: &str = "admin_dealer_delete_";
pub const ADMIN_ADD_DEALER_MODAL: &str = "admin_add_dealer_modal";

// Modal field ids
pub const FIELD_CAR_MAKE: &str = "car_make";
pub const FIELD_CAR_MODEL: &str = "car_model";
pub const FIELD_CAR_YEAR: &str = "car_year";
pub const FIELD_CAR_PHOTO: &str = "car_photo";
pub const FIELD_DEALER_USER_ID: &str = "dealer_user_id";
pub const FIELD_DEALER_NAME: &str = "dealer_name";

/// Parse the integer suffix of a prefixed custom_id, e.g. `car_42` → 42.
pub fn parse_id_suffix(id: &str, prefix: &str) -> Option<i32> {
    id.strip_prefix(prefix)?.parse().ok()
}

/// Car selection ids share their prefix with pagination ids; a car id is
/// anything under `car_` that is not a `car_page_` id.
pub fn parse_car_select(id: &str) -> Option<i32> {
    if id.starts_with(CAR_PAGE_PREFIX) {
        return None;
    }
    parse_id_suffix(id, CAR_PREFIX)
}

/// Booking buttons: `book_confirm_<car_id>` must be tried before
/// `book_<car_id>` since they share a prefix.
pub fn parse_book(id: &str) -> Option<(bool, i32)> {
    if let Some(car_id) = parse_id_suffix(id, BOOK_CONFIRM_PREFIX) {
        return Some((true, car_id));
    }
    parse_id_suffix(id, BOOK_PREFIX).map(|car_id| (false, car_id))
}

pub fn parse_car_page(id: &str) -> Option<usize> {
    if id == CAR_PAGE_NOOP {
        return None;
    }
    id.strip_prefix(CAR_PAGE_PREFIX)?.parse().ok()
}

pub fn parse_lang(id: &str) -> Option<&str> {
    let code = id.strip_prefix(LANG_PREFIX)?;
    if code.is_empty() { None } else { Some(code) }
}
