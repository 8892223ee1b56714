//! Dealer roster queries and per-dealer booking statistics.

use super::error::is_unique_violation;
use super::models::{CarBookingCount, Dealer, DealerStats};
use super::{RentalError, RentalResult};
use serenity::model::id::UserId;
use sqlx::PgPool;

pub async fn is_dealer(pool: &PgPool, user_id: UserId) -> RentalResult<bool> {
    Ok(get_dealer(pool, user_id).await?.is_some())
}

pub async fn get_dealer(pool: &PgPool, user_id: UserId) -> RentalResult<Option<Dealer>> {
    let discord_id = user_id.get() as i64;
    let dealer = sqlx::query_as::<_, Dealer>(
        "SELECT dealer_id, discord_id, name FROM dealers WHERE discord_id = $1",
    )
    .bind(discord_id)
    .fetch_optional(pool)
    .await?;
    Ok(dealer)
}

pub async fn list_dealers(pool: &PgPool) -> RentalResult<Vec<Dealer>> {
    let dealers = sqlx::query_as::<_, Dealer>(
        "SELECT dealer_id, discord_id, name FROM dealers ORDER BY dealer_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(dealers)
}

/// Register a new dealer. Returns the new dealer id, or `DealerExists` when
/// the user already has a dealer row.
pub async fn add_dealer(pool: &PgPool, user_id: UserId, name: &str) -> RentalResult<i32> {
    let discord_id = user_id.get() as i64;
    let inserted = sqlx::query_scalar::<_, i32>(
        "INSERT INTO dealers (discord_id, name) VALUES ($1, $2) RETURNING dealer_id",
    )
    .bind(discord_id)
    .bind(name)
    .fetch_one(pool)
    .await;
    match inserted {
        Ok(dealer_id) => Ok(dealer_id),
        Err(e) if is_unique_violation(&e) => Err(RentalError::DealerExists),
        Err(e) => Err(e.into()),
    }
}

/// Remove a dealer. Their cars and car images go with them via the FK
/// cascade.
pub async fn delete_dealer(pool: &PgPool, dealer_id: i32) -> RentalResult<()> {
    let result = sqlx::query("DELETE FROM dealers WHERE dealer_id = $1")
        .bind(dealer_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 1 {
        Ok(())
    } else {
        Err(RentalError::NotFound)
    }
}

/// Booking statistics across one dealer's fleet, most-booked car first.
pub async fn get_dealer_stats(pool: &PgPool, dealer_id: i32) -> RentalResult<DealerStats> {
    let total_cars =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cars WHERE dealer_id = $1")
            .bind(dealer_id)
            .fetch_one(pool)
            .await?;
    let (total_bookings, active_bookings) = sqlx::query_as::<_, (i64, i64)>(
        r#"SELECT COUNT(b.booking_id), COUNT(b.booking_id) FILTER (WHERE b.active)
           FROM bookings b
           JOIN cars c ON b.car_id = c.car_id
           WHERE c.dealer_id = $1"#,
    )
    .bind(dealer_id)
    .fetch_one(pool)
    .await?;
    let car_stats = sqlx::query_as::<_, CarBookingCount>(
        r#"SELECT c.car_id, c.make, c.model, c.year, COUNT(b.booking_id) AS bookings
           FROM cars c
           LEFT JOIN bookings b ON c.car_id = b.car_id
           WHERE c.dealer_id = $1
           GROUP BY c.car_id, c.make, c.model, c.year
           ORDER BY bookings DESC"#,
    )
    .bind(dealer_id)
    .fetch_all(pool)
    .await?;
    Ok(DealerStats {
        total_cars,
        total_bookings,
        active_bookings,
        completed_bookings: total_bookings - active_bookings,
        car_stats,
    })
}
