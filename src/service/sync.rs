use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::config::{ClubConfig, Config};
use crate::data::{ClubRepository, PlayerRepository};
use crate::error::AppError;
use crate::model::club::ClubAggregate;
use crate::model::player::ParsedPlayer;
use crate::model::sync::{BatchReport, ClubOutcome, ClubSyncStatus, ClubSyncSummary};
use crate::scrape::{Fetcher, RosterPage};

/// Runs scrape cycles: fetch, extract, reconcile.
pub struct SyncService<'a> {
    db: &'a DatabaseConnection,
    fetcher: &'a Fetcher,
}

impl<'a> SyncService<'a> {
    pub fn new(db: &'a DatabaseConnection, fetcher: &'a Fetcher) -> Self {
        Self { db, fetcher }
    }

    /// One scrape cycle for a single club.
    ///
    /// # Returns
    /// - `Ok(ClubSyncSummary)`: Cycle completed, possibly degraded
    /// - `Err(AppError)`: Fetch failed; stored data is untouched
    pub async fn sync_club(&self, club: &ClubConfig) -> Result<ClubSyncSummary, AppError> {
        let html = self.fetcher.fetch_club_page(&club.tag).await?;
        self.apply_page(club, &html).await
    }

    /// Extracts and reconciles one fetched page.
    ///
    /// An empty roster extraction is treated as zero usable data this cycle:
    /// a transient parse failure must never look like every member left the
    /// club, so nothing is written.
    pub async fn apply_page(
        &self,
        club: &ClubConfig,
        html: &str,
    ) -> Result<ClubSyncSummary, AppError> {
        let (players, aggregate) = RosterPage::parse(html).into_parts();

        if players.is_empty() {
            tracing::warn!(
                "No roster rows matched for {} ({}), keeping previous data",
                club.name,
                club.tag
            );
            return Ok(ClubSyncSummary::degraded());
        }

        self.reconcile(club, &players, &aggregate).await
    }

    /// Merges parsed rows into persisted state.
    ///
    /// Each player upsert is independent: a failed write is logged with the
    /// club and stage, counted, and the loop continues with the remaining
    /// records.
    pub async fn reconcile(
        &self,
        club: &ClubConfig,
        players: &[ParsedPlayer],
        aggregate: &ClubAggregate,
    ) -> Result<ClubSyncSummary, AppError> {
        let now = Utc::now();
        let player_repo = PlayerRepository::new(self.db);

        let mut players_updated = 0u64;
        let mut records_failed = 0u64;

        for player in players {
            match player_repo.upsert(player, &club.tag, now).await {
                Ok(_) => players_updated += 1,
                Err(err) => {
                    records_failed += 1;
                    tracing::error!(
                        "Player upsert failed for {} in {}: {}",
                        player.tag,
                        club.tag,
                        err
                    );
                }
            }
        }

        let display_name = aggregate.display_name.as_deref().unwrap_or(&club.name);
        let club_repo = ClubRepository::new(self.db);
        if let Err(err) = club_repo
            .upsert(&club.tag, display_name, players.len() as i32, aggregate, now)
            .await
        {
            records_failed += 1;
            tracing::error!("Club upsert failed for {}: {}", club.tag, err);
        }

        tracing::info!(
            "Synced {} ({}): {} players, {} failed records",
            club.name,
            club.tag,
            players_updated,
            records_failed
        );

        Ok(ClubSyncSummary {
            players_updated,
            records_failed,
            degraded: false,
        })
    }
}

/// Serializes batch runs for the process lifetime.
///
/// The scheduler and the manual command share one runner, so at most one
/// batch is ever in flight; a second caller gets `SyncInProgress` instead of
/// queueing behind the first.
pub struct BatchRunner {
    running: Mutex<()>,
}

impl BatchRunner {
    pub fn new() -> Self {
        Self {
            running: Mutex::new(()),
        }
    }

    /// One pass over all configured clubs, sequential, with an inter-club
    /// pause to throttle against the source site.
    ///
    /// A failing club never aborts the batch; its outcome is recorded and
    /// the loop moves on.
    ///
    /// # Returns
    /// - `Ok(BatchReport)`: Per-club outcomes, in configuration order
    /// - `Err(AppError::SyncInProgress)`: Another batch holds the lock
    pub async fn run_batch(
        &self,
        db: &DatabaseConnection,
        fetcher: &Fetcher,
        config: &Config,
    ) -> Result<BatchReport, AppError> {
        let _guard = self
            .running
            .try_lock()
            .map_err(|_| AppError::SyncInProgress)?;

        let service = SyncService::new(db, fetcher);
        let mut outcomes = Vec::with_capacity(config.clubs.len());

        for (index, club) in config.clubs.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(Duration::from_secs(config.club_delay_secs)).await;
            }

            let status = match service.sync_club(club).await {
                Ok(summary) if summary.degraded => ClubSyncStatus::Degraded,
                Ok(summary) => ClubSyncStatus::Synced {
                    players: summary.players_updated,
                    failed_records: summary.records_failed,
                },
                Err(err) => {
                    tracing::error!("Sync failed for {} ({}): {}", club.name, club.tag, err);
                    ClubSyncStatus::Failed {
                        message: err.user_message(),
                    }
                }
            };

            outcomes.push(ClubOutcome {
                club_name: club.name.clone(),
                club_tag: club.tag.clone(),
                status,
            });
        }

        Ok(BatchReport { outcomes })
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new()
    }
}
