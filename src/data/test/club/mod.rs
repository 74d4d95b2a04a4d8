use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::data::club::ClubRepository;
use crate::model::club::ClubAggregate;

mod find_by_tag;
mod upsert;

/// Aggregate with every field unknown, the degraded-parse shape.
fn unknown_aggregate() -> ClubAggregate {
    ClubAggregate::default()
}

/// Fully parsed aggregate.
fn full_aggregate(total: i32, members: i32, min: i32, max: i32) -> ClubAggregate {
    ClubAggregate {
        display_name: None,
        total_trophies: Some(total),
        member_count: Some(members),
        min_trophies: Some(min),
        max_trophies: Some(max),
    }
}
