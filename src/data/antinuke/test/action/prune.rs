use super::*;

/// Tests retention pruning across guilds.
///
/// Verifies that records older than the cutoff are deleted in every guild and
/// newer ones are kept.
///
/// Expected: Ok(2) with one record remaining
#[tokio::test]
async fn prunes_records_older_than_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = fixed_now();
    let cutoff = now - Duration::hours(24);
    factory::create_action(db, 1, 10, now - Duration::hours(30)).await?;
    factory::create_action(db, 2, 11, now - Duration::hours(25)).await?;
    factory::create_action(db, 1, 10, now - Duration::hours(1)).await?;

    let repo = AntinukeActionRepository::new(db);
    let deleted = repo.prune_older_than(cutoff).await?;

    assert_eq!(deleted, 2);
    let remaining = entity::prelude::AntinukeAction::find().count(db).await?;
    assert_eq!(remaining, 1);

    Ok(())
}

/// Tests clearing all of a guild's records.
///
/// Expected: Ok(2) with other guild untouched
#[tokio::test]
async fn clears_whole_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = fixed_now();
    factory::create_action(db, 1, 10, now).await?;
    factory::create_action(db, 1, 11, now - Duration::hours(48)).await?;
    factory::create_action(db, 2, 10, now).await?;

    let repo = AntinukeActionRepository::new(db);
    let deleted = repo.clear_guild(1, None).await?;

    assert_eq!(deleted, 2);
    let remaining = entity::prelude::AntinukeAction::find().count(db).await?;
    assert_eq!(remaining, 1);

    Ok(())
}

/// Tests clearing only a guild's older records.
///
/// Expected: Ok(1) with the recent record kept
#[tokio::test]
async fn clears_guild_records_before_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = fixed_now();
    factory::create_action(db, 1, 10, now).await?;
    factory::create_action(db, 1, 11, now - Duration::hours(48)).await?;

    let repo = AntinukeActionRepository::new(db);
    let deleted = repo
        .clear_guild(1, Some(now - Duration::hours(24)))
        .await?;

    assert_eq!(deleted, 1);
    let remaining = repo.get_recent(1, None, now - Duration::days(7)).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].executor_id, 10);

    Ok(())
}
