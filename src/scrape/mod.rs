//! Fetching and parsing of upstream roster pages.
//!
//! The leaderboard site is an uncontrolled third party whose markup drifts
//! between revisions. All knowledge about it is confined to this module: the
//! fetcher knows the URL scheme and outcome classification, the page model
//! knows the extraction rules. The rest of the application works on
//! structured records only.

pub mod fetch;
pub mod page;

pub use fetch::Fetcher;
pub use page::RosterPage;
