//! This module acts as a central hub for all database-related logic.
//! It declares the specialized submodules so they can be accessed from
//! elsewhere in the application via their full path, e.g.,
//! `database::bookings::book_car`.

pub mod bookings;
pub mod cars;
pub mod customers;
pub mod dealers;
pub mod error;
pub mod init;
pub mod models;

pub use error::{RentalError, RentalResult};
