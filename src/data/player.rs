use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::player::ParsedPlayer;

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or refreshes one roster row.
    ///
    /// A new player starts with `baseline_trophies` equal to the parsed
    /// count. `baseline_trophies` is deliberately absent from the
    /// conflict-update column set, so a routine sync can never overwrite an
    /// existing baseline; only `reset_baseline` moves it.
    ///
    /// # Arguments
    /// - `player`: Parsed roster row
    /// - `club_tag`: Club the row was scraped from
    /// - `now`: Sync timestamp
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored player after the upsert
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        player: &ParsedPlayer,
        club_tag: &str,
        now: DateTime<Utc>,
    ) -> Result<entity::player::Model, DbErr> {
        entity::prelude::Player::insert(entity::player::ActiveModel {
            tag: ActiveValue::Set(player.tag.clone()),
            display_name: ActiveValue::Set(player.display_name.clone()),
            current_trophies: ActiveValue::Set(player.trophies),
            baseline_trophies: ActiveValue::Set(player.trophies),
            club_tag: ActiveValue::Set(club_tag.to_string()),
            last_updated: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::player::Column::Tag)
                .update_columns([
                    entity::player::Column::DisplayName,
                    entity::player::Column::CurrentTrophies,
                    entity::player::Column::ClubTag,
                    entity::player::Column::LastUpdated,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Finds a player by canonical tag.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Player found
    /// - `Ok(None)`: No player tracked under this tag
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_tag(&self, tag: &str) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Tag.eq(tag))
            .one(self.db)
            .await
    }

    /// All players currently recorded in a club, in insertion (id) order.
    ///
    /// The stable order matters: best-gainer tie-breaking is defined as
    /// "first encountered".
    pub async fn players_in_club(
        &self,
        club_tag: &str,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::ClubTag.eq(club_tag))
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await
    }

    /// Starts a new scoring period for every player in a club.
    ///
    /// Sets `baseline_trophies = current_trophies` in one statement. This is
    /// the only write path that touches the baseline after creation.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of players whose baseline was reset
    /// - `Err(DbErr)`: Database error
    pub async fn reset_baseline(&self, club_tag: &str, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Player::update_many()
            .col_expr(
                entity::player::Column::BaselineTrophies,
                Expr::col(entity::player::Column::CurrentTrophies).into(),
            )
            .col_expr(entity::player::Column::LastUpdated, Expr::value(now))
            .filter(entity::player::Column::ClubTag.eq(club_tag))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
