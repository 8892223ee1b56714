//! The `/dealer` command: inventory panel for registered dealers inside the
//! admin guild.

pub mod logic;
pub mod run;
pub mod ui;

use serenity::builder::CreateCommand;
pub fn register() -> CreateCommand {
    CreateCommand::new("dealer").description("Open the dealer panel (registered dealers only).")
}
