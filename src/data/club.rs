use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::club::ClubAggregate;

pub struct ClubRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or refreshes a club record.
    ///
    /// Aggregate fields the page model reported as unknown (`None`) are left
    /// out of the conflict-update column set, so a degraded parse keeps the
    /// previously stored values instead of nulling them.
    ///
    /// # Arguments
    /// - `club_tag`: Canonical club tag
    /// - `display_name`: Name from the page, or the configured name
    /// - `member_count`: Number of parsed roster rows
    /// - `aggregate`: Best-effort page aggregate
    /// - `now`: Sync timestamp
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored club after the upsert
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        club_tag: &str,
        display_name: &str,
        member_count: i32,
        aggregate: &ClubAggregate,
        now: DateTime<Utc>,
    ) -> Result<entity::club::Model, DbErr> {
        let mut on_conflict = OnConflict::column(entity::club::Column::Tag);
        on_conflict.update_columns([
            entity::club::Column::DisplayName,
            entity::club::Column::MemberCount,
            entity::club::Column::LastUpdated,
        ]);
        if aggregate.total_trophies.is_some() {
            on_conflict.update_column(entity::club::Column::TotalTrophies);
        }
        if aggregate.min_trophies.is_some() {
            on_conflict.update_column(entity::club::Column::MinTrophies);
        }
        if aggregate.max_trophies.is_some() {
            on_conflict.update_column(entity::club::Column::MaxTrophies);
        }

        entity::prelude::Club::insert(entity::club::ActiveModel {
            tag: ActiveValue::Set(club_tag.to_string()),
            display_name: ActiveValue::Set(display_name.to_string()),
            total_trophies: ActiveValue::Set(aggregate.total_trophies),
            member_count: ActiveValue::Set(member_count),
            min_trophies: ActiveValue::Set(aggregate.min_trophies),
            max_trophies: ActiveValue::Set(aggregate.max_trophies),
            last_updated: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(on_conflict.to_owned())
        .exec_with_returning(self.db)
        .await
    }

    /// Finds a club by canonical tag.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Club found
    /// - `Ok(None)`: Club never synced
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_tag(&self, tag: &str) -> Result<Option<entity::club::Model>, DbErr> {
        entity::prelude::Club::find()
            .filter(entity::club::Column::Tag.eq(tag))
            .one(self.db)
            .await
    }
}
