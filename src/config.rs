use crate::error::{config::ConfigError, AppError};
use crate::util::tag::normalize_tag;

/// Fixed roster capacity the game imposes on every club.
pub const CLUB_CAPACITY: i32 = 30;

const DEFAULT_SCRAPE_CRON: &str = "0 */30 * * * *";
const DEFAULT_HEALTH_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 25;
const DEFAULT_CLUB_DELAY_SECS: u64 = 5;

/// One tracked club: the display name operators use in commands and the
/// external tag used against the leaderboard site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubConfig {
    pub name: String,
    pub tag: String,
}

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Static display-name to tag table, from the `CLUBS` variable.
    pub clubs: Vec<ClubConfig>,
    /// Role required for gated commands (update, baseline reset).
    pub moderator_role_id: u64,
    /// Channel receiving the post-batch summary embed, if any. Per-deployment
    /// configuration, not mutable bot state.
    pub broadcast_channel_id: Option<u64>,

    /// Six-field cron expression driving the scheduled batch run.
    pub scrape_cron: String,
    pub health_addr: String,
    pub request_timeout_secs: u64,
    /// Pause between clubs within a batch, to throttle against the source site.
    pub club_delay_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: required("DISCORD_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            clubs: parse_clubs("CLUBS", &required("CLUBS")?)?,
            moderator_role_id: parse_u64("MODERATOR_ROLE_ID", &required("MODERATOR_ROLE_ID")?)?,
            broadcast_channel_id: match optional("BROADCAST_CHANNEL_ID") {
                Some(raw) => Some(parse_u64("BROADCAST_CHANNEL_ID", &raw)?),
                None => None,
            },
            scrape_cron: optional("SCRAPE_CRON").unwrap_or_else(|| DEFAULT_SCRAPE_CRON.to_string()),
            health_addr: optional("HEALTH_ADDR").unwrap_or_else(|| DEFAULT_HEALTH_ADDR.to_string()),
            request_timeout_secs: match optional("REQUEST_TIMEOUT_SECS") {
                Some(raw) => parse_u64("REQUEST_TIMEOUT_SECS", &raw)?,
                None => DEFAULT_REQUEST_TIMEOUT_SECS,
            },
            club_delay_secs: match optional("CLUB_DELAY_SECS") {
                Some(raw) => parse_u64("CLUB_DELAY_SECS", &raw)?,
                None => DEFAULT_CLUB_DELAY_SECS,
            },
        })
    }

    /// Looks up a configured club by its display name, case-insensitively.
    pub fn club_by_name(&self, name: &str) -> Option<&ClubConfig> {
        self.clubs
            .iter()
            .find(|club| club.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Comma-separated list of configured club names, for "unknown club"
    /// hints in command replies.
    pub fn club_names(&self) -> String {
        self.clubs
            .iter()
            .map(|club| club.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_u64(name: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: format!("'{}' is not an unsigned integer", raw),
    })
}

/// Parses the club table from its `Name=#TAG,Other Name=#TAG2` form.
///
/// Tags are normalized to the canonical `#`-prefixed uppercase form here so
/// the rest of the application never sees a raw operator-typed tag.
fn parse_clubs(name: &str, raw: &str) -> Result<Vec<ClubConfig>, ConfigError> {
    let mut clubs = Vec::new();

    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (club_name, raw_tag) = entry.split_once('=').ok_or_else(|| {
            ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: format!("entry '{}' is not in Name=#TAG form", entry),
            }
        })?;

        let tag = normalize_tag(raw_tag).ok_or_else(|| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("entry '{}' has an empty tag", entry),
        })?;

        let club_name = club_name.trim();
        if club_name.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: format!("entry '{}' has an empty name", entry),
            });
        }

        clubs.push(ClubConfig {
            name: club_name.to_string(),
            tag,
        });
    }

    if clubs.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "no clubs configured".to_string(),
        });
    }

    Ok(clubs)
}
