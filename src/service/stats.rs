use sea_orm::DatabaseConnection;

use crate::config::ClubConfig;
use crate::data::{ClubRepository, PlayerRepository};
use crate::error::AppError;
use crate::model::club::FreeSlots;
use crate::model::player::{BestGainer, PlayerParam};
use crate::util::tag::normalize_tag;

/// Read-only views derived from the persisted records.
pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up a tracked player by tag, accepting any input shape the
    /// normalizer understands.
    ///
    /// # Returns
    /// - `Ok(PlayerParam)`: The tracked player
    /// - `Err(AppError::NotFound)`: Input was not a tag, or nobody is
    ///   tracked under it
    pub async fn lookup_player(&self, raw_tag: &str) -> Result<PlayerParam, AppError> {
        let tag = normalize_tag(raw_tag).ok_or_else(|| {
            AppError::NotFound("That does not look like a player tag.".to_string())
        })?;

        let player = PlayerRepository::new(self.db)
            .find_by_tag(&tag)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No tracked player with tag {}.", tag)))?;

        Ok(PlayerParam::from_entity(player))
    }

    /// The member with the largest trophy gain since the period baseline.
    ///
    /// Ties resolve to the first player encountered in id order. A club with
    /// no tracked members yields `None`.
    pub async fn best_gainer(&self, club_tag: &str) -> Result<Option<BestGainer>, AppError> {
        let members = PlayerRepository::new(self.db)
            .players_in_club(club_tag)
            .await?;

        let mut best: Option<BestGainer> = None;
        for member in members {
            let player = PlayerParam::from_entity(member);
            let gain = player.gain();

            match &best {
                Some(current) if gain <= current.gain => {}
                _ => best = Some(BestGainer { player, gain }),
            }
        }

        Ok(best)
    }

    /// Remaining capacity of a configured club.
    ///
    /// # Returns
    /// - `Ok(Some(FreeSlots))`: Based on the last synced member count
    /// - `Ok(None)`: Club has never been synced
    pub async fn free_slots(&self, club: &ClubConfig) -> Result<Option<FreeSlots>, AppError> {
        let record = ClubRepository::new(self.db).find_by_tag(&club.tag).await?;

        Ok(record.map(|stored| {
            FreeSlots::new(club.name.clone(), club.tag.clone(), stored.member_count)
        }))
    }

    /// Starts a new scoring period for a club: every member's baseline snaps
    /// to their current trophy count. Operator-triggered, distinct from sync.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of players reset
    pub async fn reset_baseline(&self, club: &ClubConfig) -> Result<u64, AppError> {
        let count = PlayerRepository::new(self.db)
            .reset_baseline(&club.tag, chrono::Utc::now())
            .await?;

        tracing::info!(
            "Baseline reset for {} ({}): {} players",
            club.name,
            club.tag,
            count
        );

        Ok(count)
    }
}
