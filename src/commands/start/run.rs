//! Handles the command logic for `/start`.

use super::ui;
use crate::messages::{self, Lang};
use crate::{AppState, database};
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::id::GuildId;
use serenity::prelude::Context;

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, admin_guild_id: GuildId) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };

    // Customer registration has no business inside the admin guild.
    if interaction.guild_id == Some(admin_guild_id) {
        let resp = CreateInteractionResponseMessage::new()
            .content(messages::admin_restriction(Lang::En))
            .ephemeral(true);
        interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(resp))
            .await
            .ok();
        return;
    }

    let user = &interaction.user;
    let name = user.global_name.clone().unwrap_or_else(|| user.name.clone());

    let (lang, welcome) = match database::customers::get_customer(&state.db, user.id).await {
        Ok(Some(customer)) => {
            let lang = Lang::from_code(&customer.language);
            (lang, messages::welcome_back(lang, &customer.name))
        }
        Ok(None) => match database::customers::register_customer(&state.db, user.id, &name).await {
            Ok(_) => (Lang::En, messages::welcome_new(Lang::En, &name)),
            Err(e) => {
                tracing::error!(target: "db", error = %e, "customer registration failed");
                let resp = CreateInteractionResponseMessage::new()
                    .content(messages::db_error(Lang::En));
                interaction
                    .create_response(&ctx.http, CreateInteractionResponse::Message(resp))
                    .await
                    .ok();
                return;
            }
        },
        Err(e) => {
            tracing::error!(target: "db", error = %e, "customer lookup failed");
            let resp =
                CreateInteractionResponseMessage::new().content(messages::db_error(Lang::En));
            interaction
                .create_response(&ctx.http, CreateInteractionResponse::Message(resp))
                .await
                .ok();
            return;
        }
    };

    let resp = CreateInteractionResponseMessage::new().content(welcome);
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(resp))
        .await
        .ok();

    // Language selection comes as a follow-up so the welcome stays visible.
    let followup = CreateInteractionResponseFollowup::new()
        .content(messages::select_language(lang))
        .components(ui::language_keyboard(lang, false));
    interaction.create_followup(&ctx.http, followup).await.ok();
}
