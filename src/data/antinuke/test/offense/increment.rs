use super::*;

/// Tests the first offense of a user.
///
/// Expected: Ok(1) with a new ledger row
#[tokio::test]
async fn starts_at_one() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AntinukeOffenseRepository::new(db);

    assert_eq!(repo.get_count(1, 10).await?, 0);
    let count = repo.increment(1, 10, Utc::now()).await?;

    assert_eq!(count, 1);
    assert_eq!(repo.get_count(1, 10).await?, 1);

    Ok(())
}

/// Tests repeated offenses update the same row.
///
/// Expected: Ok(3) with a single ledger row
#[tokio::test]
async fn increments_existing_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_offense(db, 1, 10, 2).await?;

    let repo = AntinukeOffenseRepository::new(db);
    let count = repo.increment(1, 10, Utc::now()).await?;

    assert_eq!(count, 3);
    let rows = entity::prelude::AntinukeOffense::find().count(db).await?;
    assert_eq!(rows, 1);

    Ok(())
}

/// Tests offense counts are kept per guild.
///
/// Expected: Ok with independent counts
#[tokio::test]
async fn scopes_counts_by_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_offense(db, 1, 10, 4).await?;

    let repo = AntinukeOffenseRepository::new(db);
    let count = repo.increment(2, 10, Utc::now()).await?;

    assert_eq!(count, 1);
    assert_eq!(repo.get_count(1, 10).await?, 4);

    Ok(())
}

/// Tests overlapping increments for the same user.
///
/// Verifies that two increments racing on a user without a ledger row both
/// succeed and observe distinct counts.
///
/// Expected: Ok with counts 1 and 2 and a single ledger row
#[tokio::test]
async fn concurrent_increments_each_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AntinukeOffenseRepository::new(db);
    let (first, second) = tokio::join!(
        repo.increment(1, 10, Utc::now()),
        repo.increment(1, 10, Utc::now())
    );

    let mut counts = vec![first?, second?];
    counts.sort();
    assert_eq!(counts, vec![1, 2]);
    let rows = entity::prelude::AntinukeOffense::find().count(db).await?;
    assert_eq!(rows, 1);
    assert_eq!(repo.get_count(1, 10).await?, 2);

    Ok(())
}
