use super::*;

/// Tests that members come back in insertion order.
///
/// Best-gainer tie-breaking depends on this order being stable.
///
/// Expected: Ok with rows ordered by id
#[tokio::test]
async fn returns_members_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .tag("#AAA111")
        .club_tag("#CLUB1")
        .build()
        .await?;
    factory::player::PlayerFactory::new(db)
        .tag("#BBB222")
        .club_tag("#CLUB1")
        .build()
        .await?;
    factory::player::PlayerFactory::new(db)
        .tag("#CCC333")
        .club_tag("#CLUB1")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let members = repo.players_in_club("#CLUB1").await?;

    let tags: Vec<&str> = members.iter().map(|member| member.tag.as_str()).collect();
    assert_eq!(tags, vec!["#AAA111", "#BBB222", "#CCC333"]);

    Ok(())
}

/// Tests that the query is scoped to one club.
///
/// Expected: Ok with only the requested club's members
#[tokio::test]
async fn filters_by_club_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .tag("#AAA111")
        .club_tag("#CLUB1")
        .build()
        .await?;
    factory::player::PlayerFactory::new(db)
        .tag("#BBB222")
        .club_tag("#CLUB2")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let members = repo.players_in_club("#CLUB1").await?;

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].tag, "#AAA111");

    Ok(())
}

/// Tests querying a club with no tracked players.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_unknown_club() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let members = repo.players_in_club("#NOBODY").await?;

    assert!(members.is_empty());

    Ok(())
}
