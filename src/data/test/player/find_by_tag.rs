use super::*;

/// Tests finding a player by canonical tag.
///
/// Expected: Ok(Some) with the stored player
#[tokio::test]
async fn finds_existing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .tag("#AAA111")
        .display_name("Alice")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let found = repo.find_by_tag("#AAA111").await?;

    assert_eq!(found.unwrap().display_name, "Alice");

    Ok(())
}

/// Tests looking up a tag nobody is tracked under.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let found = repo.find_by_tag("#MISSING").await?;

    assert!(found.is_none());

    Ok(())
}
