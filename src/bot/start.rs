use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Builds the gateway client and extracts its HTTP client for the ticket
/// bridge.
///
/// The returned `Arc<Http>` is bound to the bot credential and shared with
/// the web side; the gateway client itself is handed to `start_bot` in a
/// separate task.
pub async fn init_bot(config: &Config) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(config.ticket_category_id, config.guild_id);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Runs the gateway connection; blocks until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
