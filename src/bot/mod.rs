//! Discord bot integration.
//!
//! The bot is the inbound command surface: slash commands trigger syncs and
//! query the derived statistics. It is initialized during startup and runs in
//! a separate tokio task. The bot's HTTP client is shared with the scheduler
//! so the broadcast embed can be sent without a second Discord connection.
//!
//! # Gateway Intents
//!
//! Slash command interactions arrive without privileged intents; the bot only
//! needs `GUILDS`.

pub mod handler;
pub mod start;
