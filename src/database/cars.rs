//! Car inventory queries: availability listings, detail fetches, and the
//! dealer-side add/delete/photo operations.

use super::models::{CarDetails, CarImage, CarRecord, CarSummary, DealerCar};
use super::{RentalError, RentalResult};
use sqlx::PgPool;

/// Available cars joined with their dealer and primary image, oldest id
/// first so pagination is stable between requests.
pub async fn list_available(pool: &PgPool, limit: i64, offset: i64) -> RentalResult<Vec<CarSummary>> {
    let cars = sqlx::query_as::<_, CarSummary>(
        r#"SELECT c.car_id, c.make, c.model, c.year, d.name AS dealer_name, img.image_url
           FROM cars c
           JOIN dealers d ON c.dealer_id = d.dealer_id
           LEFT JOIN car_images img ON img.car_id = c.car_id AND img.is_primary
           WHERE c.available
           ORDER BY c.car_id
           LIMIT $1 OFFSET $2"#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(cars)
}

/// Full detail payload for one car: the row plus every stored image.
pub async fn get_car_details(pool: &PgPool, car_id: i32) -> RentalResult<Option<CarDetails>> {
    let car = sqlx::query_as::<_, CarRecord>(
        r#"SELECT c.car_id, c.make, c.model, c.year, c.available, d.name AS dealer_name
           FROM cars c
           JOIN dealers d ON c.dealer_id = d.dealer_id
           WHERE c.car_id = $1"#,
    )
    .bind(car_id)
    .fetch_optional(pool)
    .await?;
    let Some(car) = car else {
        return Ok(None);
    };
    let images = sqlx::query_as::<_, CarImage>(
        "SELECT image_url, is_primary FROM car_images WHERE car_id = $1",
    )
    .bind(car_id)
    .fetch_all(pool)
    .await?;
    Ok(Some(CarDetails { car, images }))
}

/// Insert a car with its primary photo in one transaction. Returns the new
/// car id.
pub async fn add_car(
    pool: &PgPool,
    dealer_id: i32,
    make: &str,
    model: &str,
    year: i32,
    image_url: &str,
) -> RentalResult<i32> {
    let mut tx = pool.begin().await?;
    let car_id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO cars (dealer_id, make, model, year, available) VALUES ($1, $2, $3, $4, TRUE) RETURNING car_id",
    )
    .bind(dealer_id)
    .bind(make)
    .bind(model)
    .bind(year)
    .fetch_one(&mut *tx)
    .await?;
    sqlx::query("INSERT INTO car_images (car_id, image_url, is_primary) VALUES ($1, $2, TRUE)")
        .bind(car_id)
        .bind(image_url)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(car_id)
}

pub async fn list_dealer_cars(pool: &PgPool, dealer_id: i32) -> RentalResult<Vec<DealerCar>> {
    let cars = sqlx::query_as::<_, DealerCar>(
        "SELECT car_id, make, model, year, available FROM cars WHERE dealer_id = $1 ORDER BY make, model",
    )
    .bind(dealer_id)
    .fetch_all(pool)
    .await?;
    Ok(cars)
}

/// Delete one of the dealer's own cars. Refused while the car has an open
/// booking; images go with the car via the FK cascade.
pub async fn delete_car(pool: &PgPool, dealer_id: i32, car_id: i32) -> RentalResult<()> {
    let mut tx = pool.begin().await?;
    let owned = sqlx::query_scalar::<_, i32>(
        "SELECT car_id FROM cars WHERE car_id = $1 AND dealer_id = $2 FOR UPDATE",
    )
    .bind(car_id)
    .bind(dealer_id)
    .fetch_optional(&mut *tx)
    .await?;
    if owned.is_none() {
        tx.rollback().await.ok();
        return Err(RentalError::NotFound);
    }
    let booked = sqlx::query_scalar::<_, i32>(
        "SELECT booking_id FROM bookings WHERE car_id = $1 AND active",
    )
    .bind(car_id)
    .fetch_optional(&mut *tx)
    .await?;
    if booked.is_some() {
        tx.rollback().await.ok();
        return Err(RentalError::CarBooked);
    }
    sqlx::query("DELETE FROM cars WHERE car_id = $1")
        .bind(car_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}

/// Replace (or create) the primary image for one of the dealer's own cars.
/// Any previous primary is removed first so the partial unique index stays
/// satisfied.
pub async fn set_primary_image(
    pool: &PgPool,
    dealer_id: i32,
    car_id: i32,
    image_url: &str,
) -> RentalResult<()> {
    let mut tx = pool.begin().await?;
    let exists = sqlx::query_scalar::<_, i32>(
        "SELECT car_id FROM cars WHERE car_id = $1 AND dealer_id = $2",
    )
    .bind(car_id)
    .bind(dealer_id)
    .fetch_optional(&mut *tx)
    .await?;
    if exists.is_none() {
        tx.rollback().await.ok();
        return Err(RentalError::NotFound);
    }
    sqlx::query("DELETE FROM car_images WHERE car_id = $1 AND is_primary")
        .bind(car_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("INSERT INTO car_images (car_id, image_url, is_primary) VALUES ($1, $2, TRUE)")
        .bind(car_id)
        .bind(image_url)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}
