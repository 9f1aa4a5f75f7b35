use super::*;

/// Tests recent actions are returned newest first.
///
/// Verifies ordering and that a record exactly at the lower bound is excluded.
///
/// Expected: Ok with two records, newest first
#[tokio::test]
async fn returns_newest_first_excluding_bound() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = fixed_now();
    let since = now - Duration::hours(24);
    factory::create_action(db, 1, 10, now - Duration::hours(2)).await?;
    factory::create_action(db, 1, 11, now - Duration::minutes(5)).await?;
    factory::create_action(db, 1, 10, since).await?;

    let repo = AntinukeActionRepository::new(db);
    let records = repo.get_recent(1, None, since).await?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].executor_id, 11);
    assert_eq!(records[1].executor_id, 10);
    assert!(records[0].created_at > records[1].created_at);

    Ok(())
}

/// Tests filtering recent actions by executor.
///
/// Expected: Ok with only that executor's records
#[tokio::test]
async fn filters_by_executor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = fixed_now();
    factory::create_action(db, 1, 10, now).await?;
    factory::create_action(db, 1, 11, now).await?;
    factory::create_action(db, 2, 10, now).await?;

    let repo = AntinukeActionRepository::new(db);
    let records = repo
        .get_recent(1, Some(10), now - Duration::hours(24))
        .await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].executor_id, 10);
    assert_eq!(records[0].guild_id, 1);

    Ok(())
}
