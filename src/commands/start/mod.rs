//! The `/start` command: customer registration, language selection, and the
//! main customer menu.

pub mod run;
pub mod ui;

use serenity::builder::CreateCommand;
pub fn register() -> CreateCommand {
    CreateCommand::new("start").description("Register and open the car rental menu.")
}
