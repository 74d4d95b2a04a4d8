/// Result of one scrape cycle over a single club.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubSyncSummary {
    /// Players successfully upserted this cycle.
    pub players_updated: u64,
    /// Records (player or club) whose write failed; logged and skipped.
    pub records_failed: u64,
    /// The page was fetched but no roster rows matched. Nothing was written,
    /// stored data is still the previous cycle's.
    pub degraded: bool,
}

impl ClubSyncSummary {
    pub fn degraded() -> Self {
        Self {
            players_updated: 0,
            records_failed: 0,
            degraded: true,
        }
    }
}

/// Per-club outcome within a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClubSyncStatus {
    Synced {
        players: u64,
        failed_records: u64,
    },
    /// Page fetched, layout unreadable; previous data kept.
    Degraded,
    /// Fetch or storage failed outright. The message is already safe to show
    /// to users.
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubOutcome {
    pub club_name: String,
    pub club_tag: String,
    pub status: ClubSyncStatus,
}

/// Aggregated outcome of one batch run over all configured clubs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<ClubOutcome>,
}

impl BatchReport {
    pub fn clubs_synced(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.status, ClubSyncStatus::Synced { .. }))
            .count()
    }

    pub fn clubs_failed(&self) -> usize {
        self.outcomes.len() - self.clubs_synced()
    }
}
