use serenity::all::{
    CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, ResolvedValue,
};

use crate::config::ClubConfig;
use crate::error::AppError;
use crate::service::auth::{authorize, Capability};
use crate::service::stats::StatsService;
use crate::service::sync::SyncService;
use crate::state::AppState;

/// Routes a slash command to its handler.
///
/// Errors that escape a handler are logged with the command name and turned
/// into a safe user-facing reply; internal detail never reaches Discord.
pub async fn dispatch(state: &AppState, ctx: &Context, command: &CommandInteraction) {
    let result = match command.data.name.as_str() {
        "update" => update(state, ctx, command).await,
        "updateall" => update_all(state, ctx, command).await,
        "player" => player(state, ctx, command).await,
        "rusher" => rusher(state, ctx, command).await,
        "slots" => slots(state, ctx, command).await,
        "resetbaseline" => reset_baseline(state, ctx, command).await,
        other => {
            tracing::warn!("Unhandled command /{}", other);
            Ok(())
        }
    };

    if let Err(err) = result {
        tracing::error!("Command /{} failed: {}", command.data.name, err);
        respond_fallback(ctx, command, &err.user_message()).await;
    }
}

/// `/update <club>`: manual single-club sync. Moderator-gated; validation
/// happens before the response is deferred so a rejected caller causes no
/// side effects.
async fn update(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    require_capability(state, command, Capability::TriggerSync)?;
    let club = required_club(state, command)?;

    // Scraping outlasts Discord's 3 second response window
    command.defer(&ctx.http).await?;

    let service = SyncService::new(&state.db, &state.fetcher);
    let content = match service.sync_club(&club).await {
        Ok(summary) if summary.degraded => format!(
            "{}: the roster page could not be read, previous data kept.",
            club.name
        ),
        Ok(summary) if summary.records_failed > 0 => format!(
            "{}: synced {} members, {} records failed.",
            club.name, summary.players_updated, summary.records_failed
        ),
        Ok(summary) => format!("{}: synced {} members.", club.name, summary.players_updated),
        Err(err) => {
            tracing::error!("Manual sync failed for {} ({}): {}", club.name, club.tag, err);
            err.user_message()
        }
    };

    command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    Ok(())
}

/// `/updateall`: manual batch run over every configured club.
async fn update_all(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    require_capability(state, command, Capability::TriggerSync)?;

    command.defer(&ctx.http).await?;

    let content = match state
        .runner
        .run_batch(&state.db, &state.fetcher, &state.config)
        .await
    {
        Ok(report) => format!(
            "Batch run finished: {} clubs synced, {} failed or degraded.",
            report.clubs_synced(),
            report.clubs_failed()
        ),
        Err(err) => err.user_message(),
    };

    command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    Ok(())
}

/// `/player <tag>`: snapshot of one tracked player.
async fn player(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let tag = string_option(command, "tag").unwrap_or_default();
    let found = StatsService::new(&state.db).lookup_player(&tag).await?;

    let embed = CreateEmbed::new()
        .title(found.display_name.clone())
        .field("Tag", found.tag.clone(), true)
        .field("Club", found.club_tag.clone(), true)
        .field("Trophies", found.current_trophies.to_string(), true)
        .field("Baseline", found.baseline_trophies.to_string(), true)
        .field("Gain", format!("{:+}", found.gain()), true);

    respond_embed(ctx, command, embed).await
}

/// `/rusher <club>`: best gainer since the monthly baseline.
async fn rusher(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let club = required_club(state, command)?;

    let best = StatsService::new(&state.db).best_gainer(&club.tag).await?;

    match best {
        Some(best) => {
            let embed = CreateEmbed::new()
                .title(format!("Rusher of {}", club.name))
                .description(format!(
                    "{} ({}) gained {:+} trophies since the period started.",
                    best.player.display_name, best.player.tag, best.gain
                ));
            respond_embed(ctx, command, embed).await
        }
        None => {
            respond_text(
                ctx,
                command,
                format!("No tracked players yet for {}.", club.name),
            )
            .await
        }
    }
}

/// `/slots`: free-slot overview of every configured club.
async fn slots(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let stats = StatsService::new(&state.db);

    let mut lines = Vec::with_capacity(state.config.clubs.len());
    for club in &state.config.clubs {
        match stats.free_slots(club).await? {
            Some(slots) => lines.push(format!(
                "{} {}: {} free ({}/30)",
                slots.emoji(),
                club.name,
                slots.free,
                slots.member_count
            )),
            None => lines.push(format!("⚪ {}: not synced yet", club.name)),
        }
    }

    respond_text(ctx, command, lines.join("\n")).await
}

/// `/resetbaseline <club>`: start a new scoring period. Moderator-gated.
async fn reset_baseline(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    require_capability(state, command, Capability::ResetBaseline)?;
    let club = required_club(state, command)?;

    let count = StatsService::new(&state.db).reset_baseline(&club).await?;

    respond_text(
        ctx,
        command,
        format!(
            "Started a new period for {}: baseline reset for {} players.",
            club.name, count
        ),
    )
    .await
}

/// Checks the caller's roles against the configured requirements.
fn require_capability(
    state: &AppState,
    command: &CommandInteraction,
    capability: Capability,
) -> Result<(), AppError> {
    let roles: Vec<u64> = command
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default();

    if authorize(&state.config, &roles, capability) {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(
            "You need the moderator role to do that.".to_string(),
        ))
    }
}

/// Resolves the `club` option against the configured club table.
fn required_club(state: &AppState, command: &CommandInteraction) -> Result<ClubConfig, AppError> {
    let name = string_option(command, "club").unwrap_or_default();

    state.config.club_by_name(&name).cloned().ok_or_else(|| {
        AppError::NotFound(format!(
            "Unknown club '{}'. Configured clubs: {}.",
            name,
            state.config.club_names()
        ))
    })
}

fn string_option(command: &CommandInteraction, name: &str) -> Option<String> {
    command
        .data
        .options()
        .into_iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::String(value) => Some(value.to_string()),
            _ => None,
        })
}

async fn respond_text(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content(content),
            ),
        )
        .await?;

    Ok(())
}

async fn respond_embed(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().embed(embed),
            ),
        )
        .await?;

    Ok(())
}

/// Best-effort error reply: the command may or may not have been acknowledged
/// already, so try a fresh response first and fall back to editing.
async fn respond_fallback(ctx: &Context, command: &CommandInteraction, content: &str) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().content(content),
    );

    if command.create_response(&ctx.http, response).await.is_err() {
        if let Err(err) = command
            .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
            .await
        {
            tracing::error!("Failed to deliver error reply: {}", err);
        }
    }
}
