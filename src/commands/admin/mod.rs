//! The `/admin` command: booking oversight and dealer roster management
//! inside the admin guild.

pub mod run;
pub mod ui;

use serenity::builder::CreateCommand;
pub fn register() -> CreateCommand {
    CreateCommand::new("admin").description("Open the admin panel (admin server only).")
}
