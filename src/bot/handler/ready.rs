use serenity::all::{
    ActivityData, Command, CommandOptionType, Context, CreateCommand, CreateCommandOption, Ready,
};

/// Registers the global slash command set once the gateway session is up.
pub async fn on_ready(ctx: &Context, ready: &Ready) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("the trophy road")));

    let commands = vec![
        CreateCommand::new("update")
            .description("Sync one club's roster from the leaderboard site")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "club", "Configured club name")
                    .required(true),
            ),
        CreateCommand::new("updateall").description("Sync every configured club"),
        CreateCommand::new("player")
            .description("Show a tracked player's trophies and monthly gain")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "tag",
                    "Player tag, e.g. #ABC123",
                )
                .required(true),
            ),
        CreateCommand::new("rusher")
            .description("Best trophy gainer since the monthly baseline")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "club", "Configured club name")
                    .required(true),
            ),
        CreateCommand::new("slots").description("Free slots per configured club"),
        CreateCommand::new("resetbaseline")
            .description("Start a new scoring period for a club")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "club", "Configured club name")
                    .required(true),
            ),
    ];

    if let Err(err) = Command::set_global_commands(&ctx.http, commands).await {
        tracing::error!("Failed to register slash commands: {}", err);
    }
}
