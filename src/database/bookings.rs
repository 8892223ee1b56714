//! Booking lifecycle: create, return, admin listings and cancellation.
//!
//! "At most one active booking per car" is checked under row locks inside
//! the booking transaction; the partial unique indexes on `bookings` are the
//! hard stop if two transactions race anyway.

use super::error::is_unique_violation;
use super::models::{ActiveBooking, BookingOverview};
use super::{RentalError, RentalResult};
use sqlx::PgPool;

/// The customer's open booking, if any, joined with the booked car.
pub async fn get_active_booking(
    pool: &PgPool,
    customer_id: i32,
) -> RentalResult<Option<ActiveBooking>> {
    let booking = sqlx::query_as::<_, ActiveBooking>(
        r#"SELECT b.booking_id, b.car_id, b.start_date, c.make, c.model, c.year
           FROM bookings b
           JOIN cars c ON b.car_id = c.car_id
           WHERE b.customer_id = $1 AND b.active"#,
    )
    .bind(customer_id)
    .fetch_optional(pool)
    .await?;
    Ok(booking)
}

/// Book a car for a customer. The car row is locked for the duration of the
/// transaction so two customers cannot both see it available.
pub async fn book_car(pool: &PgPool, customer_id: i32, car_id: i32) -> RentalResult<i32> {
    let mut tx = pool.begin().await?;

    let available =
        sqlx::query_scalar::<_, bool>("SELECT available FROM cars WHERE car_id = $1 FOR UPDATE")
            .bind(car_id)
            .fetch_optional(&mut *tx)
            .await?;
    match available {
        None => {
            tx.rollback().await.ok();
            return Err(RentalError::NotFound);
        }
        Some(false) => {
            tx.rollback().await.ok();
            return Err(RentalError::CarUnavailable);
        }
        Some(true) => {}
    }

    let existing = sqlx::query_scalar::<_, i32>(
        "SELECT booking_id FROM bookings WHERE customer_id = $1 AND active",
    )
    .bind(customer_id)
    .fetch_optional(&mut *tx)
    .await?;
    if existing.is_some() {
        tx.rollback().await.ok();
        return Err(RentalError::AlreadyBooked);
    }

    let inserted = sqlx::query_scalar::<_, i32>(
        "INSERT INTO bookings (customer_id, car_id, start_date, active) VALUES ($1, $2, now(), TRUE) RETURNING booking_id",
    )
    .bind(customer_id)
    .bind(car_id)
    .fetch_one(&mut *tx)
    .await;
    let booking_id = match inserted {
        Ok(id) => id,
        Err(e) if is_unique_violation(&e) => {
            tx.rollback().await.ok();
            return Err(RentalError::CarUnavailable);
        }
        Err(e) => {
            tx.rollback().await.ok();
            return Err(e.into());
        }
    };

    sqlx::query("UPDATE cars SET available = FALSE WHERE car_id = $1")
        .bind(car_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(booking_id)
}

/// Close the customer's booking and make the car available again. The
/// customer id is part of the predicate so a forged button cannot return
/// someone else's car.
pub async fn return_car(pool: &PgPool, customer_id: i32, booking_id: i32) -> RentalResult<()> {
    let mut tx = pool.begin().await?;
    let car_id = sqlx::query_scalar::<_, i32>(
        "UPDATE bookings SET active = FALSE, end_date = now() WHERE booking_id = $1 AND customer_id = $2 AND active RETURNING car_id",
    )
    .bind(booking_id)
    .bind(customer_id)
    .fetch_optional(&mut *tx)
    .await?;
    let Some(car_id) = car_id else {
        tx.rollback().await.ok();
        return Err(RentalError::NotFound);
    };
    sqlx::query("UPDATE cars SET available = TRUE WHERE car_id = $1")
        .bind(car_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}

/// Admin listing of bookings, newest first, capped at `limit`.
pub async fn list_bookings(
    pool: &PgPool,
    active_only: bool,
    limit: i64,
) -> RentalResult<Vec<BookingOverview>> {
    let bookings = sqlx::query_as::<_, BookingOverview>(
        r#"SELECT b.booking_id, b.start_date, b.end_date, b.active,
                  cu.name AS customer_name, c.make, c.model, c.year
           FROM bookings b
           JOIN customers cu ON b.customer_id = cu.customer_id
           JOIN cars c ON b.car_id = c.car_id
           WHERE (NOT $1) OR b.active
           ORDER BY b.start_date DESC
           LIMIT $2"#,
    )
    .bind(active_only)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(bookings)
}

/// Admin cancellation. Deletes the booking outright and, when it was still
/// active, frees the car.
pub async fn delete_booking(pool: &PgPool, booking_id: i32) -> RentalResult<()> {
    let mut tx = pool.begin().await?;
    let row = sqlx::query_as::<_, (i32, bool)>(
        "SELECT car_id, active FROM bookings WHERE booking_id = $1 FOR UPDATE",
    )
    .bind(booking_id)
    .fetch_optional(&mut *tx)
    .await?;
    let Some((car_id, active)) = row else {
        tx.rollback().await.ok();
        return Err(RentalError::NotFound);
    };
    if active {
        sqlx::query("UPDATE cars SET available = TRUE WHERE car_id = $1")
            .bind(car_id)
            .execute(&mut *tx)
            .await?;
    }
    sqlx::query("DELETE FROM bookings WHERE booking_id = $1")
        .bind(booking_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}
