//! Handles the command logic for `/admin`.

use super::ui;
use crate::AppState;
use crate::model::{Flow, Role};
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::CommandInteraction;
use serenity::model::id::GuildId;
use serenity::prelude::Context;

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, admin_guild_id: GuildId) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };

    if interaction.guild_id != Some(admin_guild_id) {
        respond_text(ctx, interaction, "❌ This command is only available in the admin server.")
            .await;
        return;
    }

    let role = match Role::resolve(
        &state.db,
        admin_guild_id,
        interaction.guild_id,
        interaction.user.id,
    )
    .await
    {
        Ok(role) => role,
        Err(e) => {
            tracing::error!(target: "db", error = %e, "role resolution failed");
            respond_text(ctx, interaction, "❌ An error occurred. Please try again later.").await;
            return;
        }
    };
    if !role.permits(Flow::ViewAllBookings) {
        respond_text(ctx, interaction, "❌ Dealer accounts cannot use the admin panel.").await;
        return;
    }

    let (embed, rows) = ui::admin_menu();
    let resp = CreateInteractionResponseMessage::new()
        .embed(embed)
        .components(rows);
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(resp))
        .await
        .ok();
}

async fn respond_text(ctx: &Context, interaction: &CommandInteraction, text: &str) {
    let resp = CreateInteractionResponseMessage::new()
        .content(text)
        .ephemeral(true);
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(resp))
        .await
        .ok();
}
