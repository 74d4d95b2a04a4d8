use crate::config::{ClubConfig, Config};
use crate::model::player::ParsedPlayer;


fn test_config() -> Config {
    Config {
        discord_bot_token: String::new(),
        database_url: "sqlite::memory:".to_string(),
        clubs: vec![
            ClubConfig {
                name: "Alpha".to_string(),
                tag: "#AAA111".to_string(),
            },
            ClubConfig {
                name: "Beta".to_string(),
                tag: "#BBB222".to_string(),
            },
        ],
        moderator_role_id: 42,
        broadcast_channel_id: None,
        scrape_cron: "0 */30 * * * *".to_string(),
        health_addr: "127.0.0.1:0".to_string(),
        request_timeout_secs: 25,
        club_delay_secs: 0,
    }
}

fn alpha() -> ClubConfig {
    test_config().clubs[0].clone()
}

fn parsed(tag: &str, name: &str, trophies: i32) -> ParsedPlayer {
    ParsedPlayer {
        display_name: name.to_string(),
        tag: tag.to_string(),
        trophies,
    }
}
