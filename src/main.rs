use std::env;
use std::sync::Arc;

use motorpool_bot::handler::Handler;
use motorpool_bot::{AppState, database};
use serenity::model::gateway::GatewayIntents;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let admin_guild_id = env::var("ADMIN_GUILD_ID")
        .expect("Expected ADMIN_GUILD_ID in the environment.")
        .parse::<u64>()
        .expect("ADMIN_GUILD_ID must be a valid number.");
    let database_url =
        env::var("DATABASE_URL").expect("Expected DATABASE_URL in the environment.");

    let db = match database::init::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(target: "db", error = %e, "database connection failed");
            panic!("Could not connect to the database.");
        }
    };
    // Probe the connection so a bad DATABASE_URL fails at startup, not on
    // the first customer.
    if let Err(e) = sqlx::query("SELECT 1").execute(&db).await {
        tracing::error!(target: "db", error = %e, "database connection test failed");
        panic!("Database connection test failed.");
    }
    tracing::info!(target: "db", "database connection test successful");

    let app_state = Arc::new(AppState { db });

    // All flows run over slash commands, components, and modals.
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler {
            admin_guild_id: GuildId::new(admin_guild_id),
        })
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    tracing::info!("Starting the car rental bot...");
    if let Err(why) = client.start().await {
        tracing::error!(error = ?why, "client error");
    }
}
