use super::*;

/// Tests finding a club by canonical tag.
///
/// Expected: Ok(Some) with the stored club
#[tokio::test]
async fn finds_existing_club() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::club::ClubFactory::new(db)
        .tag("#CLUB1")
        .display_name("Crown Club")
        .build()
        .await?;

    let repo = ClubRepository::new(db);
    let found = repo.find_by_tag("#CLUB1").await?;

    assert_eq!(found.unwrap().display_name, "Crown Club");

    Ok(())
}

/// Tests looking up a club that was never synced.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_club() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClubRepository::new(db);
    let found = repo.find_by_tag("#MISSING").await?;

    assert!(found.is_none());

    Ok(())
}
