//! Club factory for creating test club entities.
//!
//! This module provides factory methods for creating club entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clubs with customizable fields.
///
/// Aggregate fields default to `None`, the "never parsed" state, so tests
/// exercising unknown-value handling need no extra setup.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::club::ClubFactory;
///
/// let club = ClubFactory::new(&db)
///     .tag("#CLUB99")
///     .total_trophies(Some(1_500_000))
///     .member_count(28)
///     .build()
///     .await?;
/// ```
pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    tag: String,
    display_name: String,
    total_trophies: Option<i32>,
    member_count: i32,
    min_trophies: Option<i32>,
    max_trophies: Option<i32>,
}

impl<'a> ClubFactory<'a> {
    /// Creates a new ClubFactory with default values.
    ///
    /// Defaults:
    /// - tag: `"#CLUB{id}"` where id is auto-incremented
    /// - display_name: `"Club {id}"`
    /// - total_trophies: `None`
    /// - member_count: `0`
    /// - min_trophies / max_trophies: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ClubFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            tag: format!("#CLUB{}", id),
            display_name: format!("Club {}", id),
            total_trophies: None,
            member_count: 0,
            min_trophies: None,
            max_trophies: None,
        }
    }

    /// Sets the club tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets the display name.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the aggregate trophy total.
    pub fn total_trophies(mut self, total_trophies: Option<i32>) -> Self {
        self.total_trophies = total_trophies;
        self
    }

    /// Sets the member count.
    pub fn member_count(mut self, member_count: i32) -> Self {
        self.member_count = member_count;
        self
    }

    /// Sets the minimum member trophy count.
    pub fn min_trophies(mut self, min_trophies: Option<i32>) -> Self {
        self.min_trophies = min_trophies;
        self
    }

    /// Sets the maximum member trophy count.
    pub fn max_trophies(mut self, max_trophies: Option<i32>) -> Self {
        self.max_trophies = max_trophies;
        self
    }

    /// Builds and inserts the club entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::club::Model)` - Created club entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            tag: ActiveValue::Set(self.tag),
            display_name: ActiveValue::Set(self.display_name),
            total_trophies: ActiveValue::Set(self.total_trophies),
            member_count: ActiveValue::Set(self.member_count),
            min_trophies: ActiveValue::Set(self.min_trophies),
            max_trophies: ActiveValue::Set(self.max_trophies),
            last_updated: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a club with default values.
///
/// Shorthand for `ClubFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::club::Model)` - Created club entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_club(db: &DatabaseConnection) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db).build().await
}
