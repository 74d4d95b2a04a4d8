//! Player factory for creating test player entities.
//!
//! This module provides factory methods for creating player entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// Provides a builder pattern for creating player entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db)
///     .tag("#ABC123")
///     .display_name("CustomPlayer")
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    tag: String,
    display_name: String,
    current_trophies: i32,
    baseline_trophies: i32,
    club_tag: String,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - tag: `"#PLAYER{id}"` where id is auto-incremented
    /// - display_name: `"Player {id}"`
    /// - current_trophies: `20_000`
    /// - baseline_trophies: `20_000`
    /// - club_tag: `"#CLUB1"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PlayerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            tag: format!("#PLAYER{}", id),
            display_name: format!("Player {}", id),
            current_trophies: 20_000,
            baseline_trophies: 20_000,
            club_tag: "#CLUB1".to_string(),
        }
    }

    /// Sets the player tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets the display name.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the current trophy count.
    pub fn current_trophies(mut self, current_trophies: i32) -> Self {
        self.current_trophies = current_trophies;
        self
    }

    /// Sets the baseline trophy count.
    pub fn baseline_trophies(mut self, baseline_trophies: i32) -> Self {
        self.baseline_trophies = baseline_trophies;
        self
    }

    /// Sets the club tag the player belongs to.
    pub fn club_tag(mut self, club_tag: impl Into<String>) -> Self {
        self.club_tag = club_tag.into();
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            tag: ActiveValue::Set(self.tag),
            display_name: ActiveValue::Set(self.display_name),
            current_trophies: ActiveValue::Set(self.current_trophies),
            baseline_trophies: ActiveValue::Set(self.baseline_trophies),
            club_tag: ActiveValue::Set(self.club_tag),
            last_updated: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
///
/// Shorthand for `PlayerFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::player::Model)` - Created player entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}
