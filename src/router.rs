use axum::{routing::get, Router};

/// Liveness endpoints for uptime monitors.
///
/// Both routes answer without touching the database or the scraper, so a
/// monitor probe can never be slowed down by a sync in progress.
pub fn router() -> Router {
    Router::new().route("/", get(health)).route("/ping", get(ping))
}

async fn health() -> &'static str {
    "ok"
}

async fn ping() -> &'static str {
    "pong"
}
