use crate::error::fetch::FetchError;
use crate::util::tag::bare_tag;

const LEADERBOARD_BASE_URL: &str = "https://brawlace.com";

/// Fetches club roster pages from the leaderboard site.
///
/// One GET per call, no internal retry: retry policy belongs to the caller
/// (in practice the next scheduled batch run). The shared `reqwest::Client`
/// carries the request timeout and descriptive headers, configured in
/// `startup::setup_reqwest_client`.
pub struct Fetcher {
    client: reqwest::Client,
    base_url: String,
}

impl Fetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: LEADERBOARD_BASE_URL.to_string(),
        }
    }

    /// Fetcher pointed at a local stand-in for the leaderboard site.
    #[cfg(test)]
    pub(crate) fn with_base_url(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Builds the roster page URL for a club tag.
    ///
    /// The upstream site wants the tag uppercased with its `#` marker
    /// percent-encoded in the path.
    pub fn club_url(&self, tag: &str) -> String {
        format!("{}/clubs/%23{}", self.base_url, bare_tag(tag).to_uppercase())
    }

    /// Fetches the roster page for a club.
    ///
    /// # Returns
    /// - `Ok(String)` - HTTP 200 with a non-empty body
    /// - `Err(FetchError)` - Classified failure, see `FetchError`
    pub async fn fetch_club_page(&self, tag: &str) -> Result<String, FetchError> {
        let url = self.club_url(tag);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                tag: tag.to_string(),
                source,
            })?;

        let status = response.status();
        match status.as_u16() {
            404 => Err(FetchError::NotFound {
                tag: tag.to_string(),
            }),
            403 | 429 => Err(FetchError::Blocked {
                tag: tag.to_string(),
                status: status.as_u16(),
            }),
            code if !status.is_success() => Err(FetchError::Status {
                tag: tag.to_string(),
                status: code,
            }),
            _ => {
                let body = response
                    .text()
                    .await
                    .map_err(|source| FetchError::Network {
                        tag: tag.to_string(),
                        source,
                    })?;

                if body.trim().is_empty() {
                    return Err(FetchError::EmptyBody {
                        tag: tag.to_string(),
                    });
                }

                Ok(body)
            }
        }
    }
}
