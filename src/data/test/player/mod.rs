use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::data::player::PlayerRepository;
use crate::model::player::ParsedPlayer;

mod find_by_tag;
mod players_in_club;
mod reset_baseline;
mod upsert;

/// Shorthand for a parsed roster row.
fn parsed(tag: &str, name: &str, trophies: i32) -> ParsedPlayer {
    ParsedPlayer {
        display_name: name.to_string(),
        tag: tag.to_string(),
        trophies,
    }
}
