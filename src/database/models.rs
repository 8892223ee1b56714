//! Contains all the data structures that map to database tables or query results.

use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Customer {
    pub customer_id: i32,
    pub discord_id: i64,
    pub name: String,
    pub language: String,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Dealer {
    pub dealer_id: i32,
    pub discord_id: i64,
    pub name: String,
}

/// One row of the customer browse listing: car joined with its dealer and
/// primary image.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct CarSummary {
    pub car_id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub dealer_name: String,
    pub image_url: Option<String>,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct CarRecord {
    pub car_id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub available: bool,
    pub dealer_name: String,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct CarImage {
    pub image_url: String,
    pub is_primary: bool,
}

/// Detail view payload: the car row plus every stored image.
#[derive(Debug, Clone)]
pub struct CarDetails {
    pub car: CarRecord,
    pub images: Vec<CarImage>,
}

impl CarDetails {
    /// URL of the image flagged primary, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .iter()
            .find(|img| img.is_primary)
            .map(|img| img.image_url.as_str())
    }
}

/// A dealer's own car as shown in the inventory panel.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct DealerCar {
    pub car_id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub available: bool,
}

/// A customer's open booking joined with the booked car.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ActiveBooking {
    pub booking_id: i32,
    pub car_id: i32,
    pub start_date: DateTime<Utc>,
    pub make: String,
    pub model: String,
    pub year: i32,
}

/// One row of the admin booking listings.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct BookingOverview {
    pub booking_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub active: bool,
    pub customer_name: String,
    pub make: String,
    pub model: String,
    pub year: i32,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct CarBookingCount {
    pub car_id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub bookings: i64,
}

/// Booking statistics for one dealer's fleet.
#[derive(Debug, Clone)]
pub struct DealerStats {
    pub total_cars: i64,
    pub total_bookings: i64,
    pub active_bookings: i64,
    pub completed_bookings: i64,
    pub car_stats: Vec<CarBookingCount>,
}
