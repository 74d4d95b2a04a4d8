//! Cron jobs for automated tasks.

pub mod club_sync;
