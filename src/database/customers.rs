//! Customer lookup, registration, and language preference.

use super::models::Customer;
use super::{RentalError, RentalResult};
use serenity::model::id::UserId;
use sqlx::PgPool;

pub async fn get_customer(pool: &PgPool, user_id: UserId) -> RentalResult<Option<Customer>> {
    let discord_id = user_id.get() as i64;
    let customer = sqlx::query_as::<_, Customer>(
        "SELECT customer_id, discord_id, name, language FROM customers WHERE discord_id = $1",
    )
    .bind(discord_id)
    .fetch_optional(pool)
    .await?;
    Ok(customer)
}

/// Register a new customer. Returns false if the user was already registered.
pub async fn register_customer(pool: &PgPool, user_id: UserId, name: &str) -> RentalResult<bool> {
    let discord_id = user_id.get() as i64;
    let result = sqlx::query(
        "INSERT INTO customers (discord_id, name) VALUES ($1, $2) ON CONFLICT (discord_id) DO NOTHING",
    )
    .bind(discord_id)
    .bind(name)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() == 1)
}

/// Persist the customer's preferred language code.
pub async fn set_language(pool: &PgPool, user_id: UserId, language: &str) -> RentalResult<()> {
    let discord_id = user_id.get() as i64;
    let result = sqlx::query("UPDATE customers SET language = $2 WHERE discord_id = $1")
        .bind(discord_id)
        .bind(language)
        .execute(pool)
        .await?;
    if result.rows_affected() == 1 {
        Ok(())
    } else {
        Err(RentalError::NotFound)
    }
}
