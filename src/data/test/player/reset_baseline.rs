use super::*;

/// Tests the explicit baseline reset for one club.
///
/// Verifies that every member's baseline snaps to their current trophy
/// count, discarding the previous period's value.
///
/// Expected: Ok with baseline == current for all members
#[tokio::test]
async fn sets_baseline_to_current_for_club_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .tag("#AAA111")
        .current_trophies(31_000)
        .baseline_trophies(28_000)
        .club_tag("#CLUB1")
        .build()
        .await?;
    factory::player::PlayerFactory::new(db)
        .tag("#BBB222")
        .current_trophies(24_500)
        .baseline_trophies(26_000)
        .club_tag("#CLUB1")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    repo.reset_baseline("#CLUB1", Utc::now()).await?;

    let members = repo.players_in_club("#CLUB1").await?;
    assert_eq!(members.len(), 2);
    for member in members {
        assert_eq!(member.baseline_trophies, member.current_trophies);
    }

    Ok(())
}

/// Tests that the reset is scoped to one club.
///
/// Expected: Ok with other clubs' baselines untouched
#[tokio::test]
async fn leaves_other_clubs_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .tag("#AAA111")
        .current_trophies(31_000)
        .baseline_trophies(28_000)
        .club_tag("#CLUB1")
        .build()
        .await?;
    factory::player::PlayerFactory::new(db)
        .tag("#CCC333")
        .current_trophies(40_000)
        .baseline_trophies(35_000)
        .club_tag("#CLUB2")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    repo.reset_baseline("#CLUB1", Utc::now()).await?;

    let other = repo.find_by_tag("#CCC333").await?.unwrap();
    assert_eq!(other.baseline_trophies, 35_000);

    Ok(())
}

/// Tests the affected-row count returned by the reset.
///
/// Expected: Ok(2) for a two-member club
#[tokio::test]
async fn returns_number_of_players_reset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .club_tag("#CLUB1")
        .build()
        .await?;
    factory::player::PlayerFactory::new(db)
        .club_tag("#CLUB1")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let count = repo.reset_baseline("#CLUB1", Utc::now()).await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests resetting a club with no tracked players.
///
/// Expected: Ok(0), no error
#[tokio::test]
async fn resets_nothing_for_empty_club() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let count = repo.reset_baseline("#NOBODY", Utc::now()).await?;

    assert_eq!(count, 0);

    Ok(())
}
