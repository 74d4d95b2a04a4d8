//! Domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer.
//! Entity models are converted to parameter models at the repository boundary
//! so database types never leak into services, the scheduler, or the bot.

pub mod club;
pub mod player;
pub mod sync;
