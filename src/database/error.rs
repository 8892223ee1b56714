//! Domain errors surfaced by the data access layer.
//!
//! Validation-class failures get their own variants so the handlers can map
//! them to localized messages; everything else is a wrapped `sqlx::Error`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RentalError {
    #[error("record not found")]
    NotFound,
    #[error("car is not available for booking")]
    CarUnavailable,
    #[error("customer already has an active booking")]
    AlreadyBooked,
    #[error("car has an active booking")]
    CarBooked,
    #[error("dealer is already registered")]
    DealerExists,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

pub type RentalResult<T> = Result<T, RentalError>;

/// Postgres unique_violation, the backstop for the partial unique indexes
/// on active bookings.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}
