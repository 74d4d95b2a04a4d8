//! Application state shared across the bot, the scheduler, and the health
//! server.
//!
//! The state is initialized once during startup and then cloned per task.
//! All fields use cheap-to-clone types: `DatabaseConnection` is a connection
//! pool, and the rest are reference-counted handles.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::scrape::Fetcher;
use crate::service::sync::BatchRunner;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Shared leaderboard fetcher wrapping the configured HTTP client.
    pub fetcher: Arc<Fetcher>,

    /// Process-wide batch runner; holding it here is what serializes manual
    /// and scheduled batch runs against each other.
    pub runner: Arc<BatchRunner>,

    /// Immutable application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during startup after all dependencies have been
    /// initialized.
    pub fn new(
        db: DatabaseConnection,
        fetcher: Arc<Fetcher>,
        runner: Arc<BatchRunner>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            db,
            fetcher,
            runner,
            config,
        }
    }
}
