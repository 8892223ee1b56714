//! The serenity event handler: dispatches slash commands by name, component
//! interactions by custom_id family, and modal submissions to their panels.

use crate::{AppState, commands, interactions};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::{Command, Interaction};
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::EventHandler;

pub struct Handler {
    /// Guild where the dealer and admin panels live.
    pub admin_guild_id: GuildId,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, mut interaction: Interaction) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            tracing::error!(target: "handler", "AppState missing from TypeMap");
            return;
        };

        match &mut interaction {
            Interaction::Command(command) => match command.data.name.as_str() {
                "start" => {
                    commands::start::run::run_slash(&ctx, command, self.admin_guild_id).await
                }
                "dealer" => {
                    commands::dealer::run::run_slash(&ctx, command, self.admin_guild_id).await
                }
                "admin" => {
                    commands::admin::run::run_slash(&ctx, command, self.admin_guild_id).await
                }
                _ => {}
            },
            Interaction::Component(component) => {
                let family = component.data.custom_id.split('_').next().unwrap_or("");
                match family {
                    "menu" | "lang" | "car" | "book" | "return" => {
                        interactions::customer_handler::handle(
                            &ctx,
                            component,
                            app_state,
                            self.admin_guild_id,
                        )
                        .await
                    }
                    "dealer" => {
                        interactions::dealer_handler::handle(
                            &ctx,
                            component,
                            app_state,
                            self.admin_guild_id,
                        )
                        .await
                    }
                    "admin" => {
                        interactions::admin_handler::handle(
                            &ctx,
                            component,
                            app_state,
                            self.admin_guild_id,
                        )
                        .await
                    }
                    _ => {}
                }
            }
            Interaction::Modal(modal) => {
                if modal.data.custom_id.starts_with("dealer_") {
                    interactions::dealer_handler::handle_modal(
                        &ctx,
                        modal,
                        app_state,
                        self.admin_guild_id,
                    )
                    .await;
                } else if modal.data.custom_id.starts_with("admin_") {
                    interactions::admin_handler::handle_modal(
                        &ctx,
                        modal,
                        app_state,
                        self.admin_guild_id,
                    )
                    .await;
                }
            }
            _ => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(target: "handler", user = %ready.user.name, "connected and ready");

        // `/start` is global so customers can reach it from DMs and their
        // own servers; the dealer and admin panels stay on the admin guild.
        if let Err(e) =
            Command::set_global_commands(&ctx.http, vec![commands::start::register()]).await
        {
            tracing::error!(target: "handler", error = ?e, "error creating global commands");
        }
        if let Err(e) = self
            .admin_guild_id
            .set_commands(
                &ctx.http,
                vec![commands::dealer::register(), commands::admin::register()],
            )
            .await
        {
            tracing::error!(target: "handler", error = ?e, "error creating guild commands");
        }
        tracing::info!(target: "handler", "slash commands registered");
    }
}
