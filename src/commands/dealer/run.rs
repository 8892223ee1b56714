//! Handles the command logic for `/dealer`.

use super::ui;
use crate::model::{Flow, Role};
use crate::{AppState, database};
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
    if !role.permits(Flow::ListOwnCars) {
        respond_text(
            ctx,
            interaction,
            "❌ You are not registered as a dealer. Please contact the administrator.",
        )
        .await;
        return;
    }

    // Touch the dealer row so a roster change mid-session is caught here too.
    match database::dealers::get_dealer(&state.db, interaction.user.id).await {
        Ok(Some(_)) => {
            let (embed, rows) = ui::dealer_menu();
            let resp = CreateInteractionResponseMessage::new()
                .embed(embed)
                .components(rows);
            interaction
                .create_response(&ctx.http, CreateInteractionResponse::Message(resp))
                .await
                .ok();
        }
        Ok(None) => {
            respond_text(
                ctx,
                interaction,
                "❌ You are not registered as a dealer. Please contact the administrator.",
            )
            .await;
        }
        Err(e) => {
            tracing::error!(target: "db", error = %e, "dealer lookup failed");
            respond_text(ctx, interaction, "❌ An error occurred. Please try again later.").await;
        }
    }
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
