use serenity::all::{ChannelId, CreateEmbed, CreateMessage};
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;
use crate::model::sync::{BatchReport, ClubSyncStatus};
use crate::service::stats::StatsService;
use crate::state::AppState;

/// Starts the periodic club sync scheduler.
///
/// The job runs on the configured cron expression, syncs every configured
/// club through the shared batch runner, and posts a summary embed to the
/// broadcast channel when one is configured. If a manual batch is already in
/// flight when the job fires, the run is skipped rather than queued.
///
/// # Arguments
/// - `state`: Shared application state (database, fetcher, runner, config)
/// - `discord_http`: Discord HTTP client for the broadcast message
pub async fn start_scheduler(state: AppState, discord_http: Arc<Http>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let cron = state.config.scrape_cron.clone();
    let job_state = state.clone();
    let job_http = discord_http.clone();

    let job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let state = job_state.clone();
        let http = job_http.clone();

        Box::pin(async move {
            match state
                .runner
                .run_batch(&state.db, &state.fetcher, &state.config)
                .await
            {
                Ok(report) => {
                    tracing::info!(
                        "Scheduled batch run finished: {} synced, {} failed",
                        report.clubs_synced(),
                        report.clubs_failed()
                    );
                    if let Err(err) = broadcast_report(&state, &http, &report).await {
                        tracing::error!("Failed to broadcast sync report: {}", err);
                    }
                }
                Err(AppError::SyncInProgress) => {
                    tracing::info!("Skipping scheduled sync, a batch run is already in flight");
                }
                Err(err) => {
                    tracing::error!("Scheduled batch run failed: {}", err);
                }
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Club sync scheduler started ({})", state.config.scrape_cron);

    Ok(())
}

/// Posts the batch summary to the configured broadcast channel.
///
/// Synced clubs get their member count plus the current rusher and free-slot
/// view; failed or degraded clubs get their outcome line. No-op when no
/// broadcast channel is configured.
async fn broadcast_report(
    state: &AppState,
    http: &Arc<Http>,
    report: &BatchReport,
) -> Result<(), AppError> {
    let Some(channel_id) = state.config.broadcast_channel_id else {
        return Ok(());
    };

    let stats = StatsService::new(&state.db);
    let mut embed = CreateEmbed::new().title("Club sync report");

    for outcome in &report.outcomes {
        let value = match &outcome.status {
            ClubSyncStatus::Synced { players, .. } => {
                let mut parts = vec![format!("{} members synced", players)];

                if let Some(club) = state.config.club_by_name(&outcome.club_name) {
                    if let Some(best) = stats.best_gainer(&club.tag).await? {
                        parts.push(format!(
                            "rusher: {} (+{})",
                            best.player.display_name, best.gain
                        ));
                    }
                    if let Some(slots) = stats.free_slots(club).await? {
                        parts.push(format!("{} {} free slots", slots.emoji(), slots.free));
                    }
                }

                parts.join(", ")
            }
            ClubSyncStatus::Degraded => {
                "roster page could not be read, previous data kept".to_string()
            }
            ClubSyncStatus::Failed { message } => message.clone(),
        };

        embed = embed.field(outcome.club_name.clone(), value, false);
    }

    ChannelId::new(channel_id)
        .send_message(http, CreateMessage::new().embed(embed))
        .await?;

    Ok(())
}
