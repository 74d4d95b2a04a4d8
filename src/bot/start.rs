use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::error::AppError;
use crate::state::AppState;

/// Builds the Discord client.
///
/// Returns the client together with its HTTP handle so services outside the
/// event loop (the scheduler broadcast) can send messages over the same
/// connection pool.
pub async fn init_bot(state: AppState) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;
    let token = state.config.discord_bot_token.clone();

    let client = Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the bot's gateway connection. Blocks until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
