mod bot;
mod config;
mod data;
mod error;
mod model;
mod router;
mod scheduler;
mod scrape;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::scrape::Fetcher;
use crate::service::sync::BatchRunner;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client(&config)?;

    let state = AppState::new(
        db,
        Arc::new(Fetcher::new(http_client)),
        Arc::new(BatchRunner::new()),
        config.clone(),
    );

    tracing::info!("Starting club tracker");

    // Initialize the Discord bot and extract its HTTP client for the
    // scheduler broadcast
    let (bot_client, discord_http) = bot::start::init_bot(state.clone()).await?;

    // Start the Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(err) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", err);
        }
    });

    // Start the periodic club sync scheduler
    let scheduler_state = state.clone();
    tokio::spawn(async move {
        if let Err(err) = scheduler::club_sync::start_scheduler(scheduler_state, discord_http).await
        {
            tracing::error!("Club sync scheduler error: {}", err);
        }
    });

    // The health server runs on the main task until shutdown
    startup::serve_health(&config).await
}
