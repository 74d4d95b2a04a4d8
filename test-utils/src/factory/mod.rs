//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let player = factory::player::create_player(&db).await?;
//!     let club = factory::club::create_club(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let player = factory::player::PlayerFactory::new(&db)
//!     .tag("#ABC123")
//!     .current_trophies(21_500)
//!     .baseline_trophies(20_000)
//!     .club_tag("#CLUB99")
//!     .build()
//!     .await?;
//! ```

pub mod club;
pub mod helpers;
pub mod player;

// Re-export commonly used factory functions for concise usage
pub use club::create_club;
pub use player::create_player;
