use super::*;

/// Tests creating a club from a sync where the aggregate could not be read.
///
/// Verifies that unknown aggregate values are stored as NULL, not zero.
///
/// Expected: Ok with aggregate columns unset
#[tokio::test]
async fn creates_club_with_unknown_aggregate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClubRepository::new(db);
    let stored = repo
        .upsert("#CLUB1", "Crown Club", 27, &unknown_aggregate(), Utc::now())
        .await?;

    assert_eq!(stored.tag, "#CLUB1");
    assert_eq!(stored.display_name, "Crown Club");
    assert_eq!(stored.member_count, 27);
    assert!(stored.total_trophies.is_none());
    assert!(stored.min_trophies.is_none());
    assert!(stored.max_trophies.is_none());

    Ok(())
}

/// Tests that a degraded parse keeps previously stored aggregate values.
///
/// A transient layout failure must not null out data captured by an earlier
/// successful sync.
///
/// Expected: Ok with stored totals unchanged, member count refreshed
#[tokio::test]
async fn preserves_stored_values_for_unknown_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::club::ClubFactory::new(db)
        .tag("#CLUB1")
        .total_trophies(Some(1_500_000))
        .member_count(28)
        .min_trophies(Some(12_000))
        .max_trophies(Some(60_000))
        .build()
        .await?;

    let repo = ClubRepository::new(db);
    let stored = repo
        .upsert("#CLUB1", "Crown Club", 27, &unknown_aggregate(), Utc::now())
        .await?;

    assert_eq!(stored.total_trophies, Some(1_500_000));
    assert_eq!(stored.min_trophies, Some(12_000));
    assert_eq!(stored.max_trophies, Some(60_000));
    assert_eq!(stored.member_count, 27);

    Ok(())
}

/// Tests refreshing every aggregate field from a fully parsed page.
///
/// Expected: Ok with all aggregate columns updated
#[tokio::test]
async fn updates_known_aggregate_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::club::ClubFactory::new(db)
        .tag("#CLUB1")
        .total_trophies(Some(1_500_000))
        .member_count(28)
        .build()
        .await?;

    let repo = ClubRepository::new(db);
    let stored = repo
        .upsert(
            "#CLUB1",
            "Crown Club",
            29,
            &full_aggregate(1_550_000, 29, 13_000, 61_000),
            Utc::now(),
        )
        .await?;

    assert_eq!(stored.total_trophies, Some(1_550_000));
    assert_eq!(stored.member_count, 29);
    assert_eq!(stored.min_trophies, Some(13_000));
    assert_eq!(stored.max_trophies, Some(61_000));

    Ok(())
}

/// Tests that only one row exists per club tag across repeated upserts.
///
/// Expected: Ok with a single row
#[tokio::test]
async fn upserts_same_club_once() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClubRepository::new(db);
    repo.upsert("#CLUB1", "Crown Club", 27, &unknown_aggregate(), Utc::now())
        .await?;
    repo.upsert("#CLUB1", "Crown Club", 28, &unknown_aggregate(), Utc::now())
        .await?;

    let count = entity::prelude::Club::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
