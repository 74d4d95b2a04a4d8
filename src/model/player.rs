use chrono::{DateTime, Utc};

/// One player row as extracted from the roster page, before reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPlayer {
    pub display_name: String,
    /// Canonical `#`-prefixed uppercase tag.
    pub tag: String,
    pub trophies: i32,
}

/// Represents a tracked player with full data from the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerParam {
    pub id: i32,
    pub tag: String,
    pub display_name: String,
    /// Latest observed trophy count.
    pub current_trophies: i32,
    /// Trophy count at the start of the scoring period. Only the explicit
    /// baseline reset moves this.
    pub baseline_trophies: i32,
    pub club_tag: String,
    pub last_updated: DateTime<Utc>,
}

impl PlayerParam {
    /// Converts an entity model to a player param.
    ///
    /// This conversion happens at the data layer boundary to ensure entity models
    /// never leak into service layers.
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            tag: entity.tag,
            display_name: entity.display_name,
            current_trophies: entity.current_trophies,
            baseline_trophies: entity.baseline_trophies,
            club_tag: entity.club_tag,
            last_updated: entity.last_updated,
        }
    }

    /// Trophy gain since the period baseline. Negative when the player
    /// dropped below it.
    pub fn gain(&self) -> i32 {
        self.current_trophies - self.baseline_trophies
    }
}

/// The club member with the largest gain since baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestGainer {
    pub player: PlayerParam,
    pub gain: i32,
}
