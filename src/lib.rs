// Library entry so integration tests and external tools can reference internal modules.
// Re-export the same modules used by the binary (`main.rs`).
pub mod commands;
pub mod constants;
pub mod database;
pub mod handler;
pub mod interactions;
pub mod messages;
pub mod model;
pub mod ui;
pub mod util;

pub use model::AppState;
