// Central constants for listing sizes and input validation bounds.

/// Cars shown per page in the customer browse keyboard.
pub const CARS_PAGE_SIZE: usize = 5;
/// Upper bound on cars fetched for one browse session.
pub const CARS_FETCH_LIMIT: i64 = 100;
/// Bookings shown in one admin listing.
pub const BOOKINGS_LIST_LIMIT: i64 = 10;

// Dealer car input bounds. Make and model are measured in characters;
// the year range accepts next year's models.
pub const CAR_NAME_MAX: usize = 50;
pub const CAR_YEAR_MIN: i32 = 1900;
