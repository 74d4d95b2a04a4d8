//! Error types for the tracker.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors. Most
//! variants use `#[from]` for automatic conversion; command handlers map
//! errors to user-facing text through `user_message()` so internal detail
//! never leaks into Discord responses.

pub mod config;
pub mod fetch;

use thiserror::Error;

use crate::error::{config::ConfigError, fetch::FetchError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application.
/// Domain-specific errors like `FetchError` keep their own classification;
/// generic variants cover validation failures surfaced to the caller.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Roster page fetch failure, classified per club.
    #[error(transparent)]
    FetchErr(#[from] FetchError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client construction or request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// I/O error, e.g. binding the health endpoint listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource named in a command does not exist (unknown club, unknown
    /// player). The message is safe to show to the caller.
    #[error("{0}")]
    NotFound(String),

    /// Caller lacks the role required for a gated command. Raised before any
    /// work starts, so there are no partial side effects.
    #[error("{0}")]
    PermissionDenied(String),

    /// A batch run is already holding the process-wide sync lock.
    #[error("a batch run is already in progress")]
    SyncInProgress,
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Maps the error to text suitable for a Discord reply.
    ///
    /// Validation errors carry their own wording; everything else collapses
    /// to a generic message while the full error goes to the log at the site
    /// that observed it.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::PermissionDenied(msg) => msg.clone(),
            Self::FetchErr(err) => err.user_message(),
            Self::SyncInProgress => {
                "An update is already running, try again in a minute.".to_string()
            }
            _ => "Something went wrong on our side, please try again later.".to_string(),
        }
    }
}
