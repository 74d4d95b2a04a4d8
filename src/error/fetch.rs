use thiserror::Error;

/// Outcome classification for a single roster page fetch.
///
/// The fetcher never retries; callers decide whether an error is worth a
/// retry on the next scheduled cycle. Each variant carries the club tag so
/// log lines stay diagnosable without extra context.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The upstream site has no club under this tag (HTTP 404). Not retryable.
    #[error("club {tag} does not exist upstream")]
    NotFound { tag: String },

    /// The upstream site refused the request (HTTP 403 or 429). The caller
    /// should back off rather than retry immediately.
    #[error("upstream refused roster request for {tag} (HTTP {status})")]
    Blocked { tag: String, status: u16 },

    /// Any other non-success HTTP status.
    #[error("unexpected HTTP {status} fetching roster for {tag}")]
    Status { tag: String, status: u16 },

    /// HTTP 200 with an empty body, which the extractor cannot work with.
    #[error("empty roster page body for {tag}")]
    EmptyBody { tag: String },

    /// Transport-level failure, including the client-side timeout.
    #[error("roster request for {tag} failed: {source}")]
    Network {
        tag: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// User-facing summary. Internal detail (statuses, transport errors) stays
    /// in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { tag } => {
                format!("Club {} does not exist on the leaderboard site.", tag)
            }
            Self::Blocked { .. } => {
                "The leaderboard site is refusing requests right now, try again later.".to_string()
            }
            Self::Status { .. } | Self::EmptyBody { .. } | Self::Network { .. } => {
                "Could not reach the leaderboard site, try again later.".to_string()
            }
        }
    }
}
