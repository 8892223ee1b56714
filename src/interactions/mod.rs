//! This module acts as a central router for all component interactions.
//!
//! The main `handler.rs` file delegates here. A more specialized handler is
//! chosen based on the component's custom_id family (customer menus, dealer
//! panel, admin panel), which keeps the main handler clean and organizes all
//! interaction logic in one place.

pub mod admin_handler;
pub mod customer_handler;
pub mod dealer_handler;
pub mod ids;
pub mod util;
