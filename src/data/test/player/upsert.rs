use super::*;

/// Tests upserting a previously unseen player.
///
/// Verifies that the first sync of a player captures the parsed trophy count
/// as both the current value and the period baseline.
///
/// Expected: Ok with baseline == current == parsed
#[tokio::test]
async fn creates_new_player_with_baseline() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let stored = repo
        .upsert(&parsed("#AAA111", "Alice", 31_500), "#CLUB1", Utc::now())
        .await?;

    assert_eq!(stored.tag, "#AAA111");
    assert_eq!(stored.display_name, "Alice");
    assert_eq!(stored.current_trophies, 31_500);
    assert_eq!(stored.baseline_trophies, 31_500);
    assert_eq!(stored.club_tag, "#CLUB1");

    Ok(())
}

/// Tests that a routine resync never touches the baseline.
///
/// Verifies that when a player with an established baseline is upserted
/// again with a new trophy count, only the current count moves.
///
/// Expected: Ok with baseline unchanged, current updated
#[tokio::test]
async fn preserves_baseline_on_resync() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .tag("#AAA111")
        .current_trophies(30_000)
        .baseline_trophies(30_000)
        .club_tag("#CLUB1")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let stored = repo
        .upsert(&parsed("#AAA111", "Alice", 31_200), "#CLUB1", Utc::now())
        .await?;

    assert_eq!(stored.current_trophies, 31_200);
    assert_eq!(stored.baseline_trophies, 30_000);

    Ok(())
}

/// Tests several syncs in a row with varying trophy counts.
///
/// Verifies that across any number of routine syncs the baseline stays at
/// its first-creation value while the current count tracks the latest sync.
///
/// Expected: Ok with baseline from first sync, current from last
#[tokio::test]
async fn repeated_syncs_keep_first_baseline() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);

    repo.upsert(&parsed("#AAA111", "Alice", 30_000), "#CLUB1", Utc::now())
        .await?;
    repo.upsert(&parsed("#AAA111", "Alice", 29_400), "#CLUB1", Utc::now())
        .await?;
    let stored = repo
        .upsert(&parsed("#AAA111", "Alice", 32_100), "#CLUB1", Utc::now())
        .await?;

    assert_eq!(stored.baseline_trophies, 30_000);
    assert_eq!(stored.current_trophies, 32_100);

    Ok(())
}

/// Tests a player transferring between clubs.
///
/// Verifies that a resync under a different club tag moves the player to
/// the new club and refreshes the name, still without touching the baseline.
///
/// Expected: Ok with club and name updated, baseline unchanged
#[tokio::test]
async fn updates_name_and_club_on_transfer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .tag("#AAA111")
        .display_name("Old Name")
        .current_trophies(28_000)
        .baseline_trophies(27_000)
        .club_tag("#CLUB1")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let stored = repo
        .upsert(&parsed("#AAA111", "New Name", 28_500), "#CLUB2", Utc::now())
        .await?;

    assert_eq!(stored.display_name, "New Name");
    assert_eq!(stored.club_tag, "#CLUB2");
    assert_eq!(stored.baseline_trophies, 27_000);

    Ok(())
}

/// Tests upserting several distinct players.
///
/// Expected: Ok with one row per tag
#[tokio::test]
async fn upserts_multiple_players() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    repo.upsert(&parsed("#AAA111", "Alice", 30_000), "#CLUB1", Utc::now())
        .await?;
    repo.upsert(&parsed("#BBB222", "Bob", 25_000), "#CLUB1", Utc::now())
        .await?;
    repo.upsert(&parsed("#AAA111", "Alice", 30_100), "#CLUB1", Utc::now())
        .await?;

    let count = entity::prelude::Player::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
