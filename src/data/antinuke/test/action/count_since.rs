use super::*;

/// Tests the window lower bound is inclusive.
///
/// Verifies that a record created exactly at `since` is counted and one created a
/// second earlier is not.
///
/// Expected: Ok(1)
#[tokio::test]
async fn includes_record_at_window_start() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let since = fixed_now() - Duration::seconds(5);
    factory::create_action(db, 1, 10, since).await?;
    factory::create_action(db, 1, 10, since - Duration::seconds(1)).await?;

    let repo = AntinukeActionRepository::new(db);
    let count = repo.count_since(1, 10, since).await?;

    assert_eq!(count, 1);

    Ok(())
}

/// Tests counting is scoped to guild and executor.
///
/// Verifies that actions by other executors or in other guilds are excluded while
/// every action type of the executor is included.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_only_executor_in_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = fixed_now();
    factory::create_action(db, 1, 10, now).await?;
    factory::action::AntinukeActionFactory::new(db, 1, 10)
        .action_type("role_delete")
        .created_at(now)
        .build()
        .await?;
    factory::create_action(db, 1, 11, now).await?;
    factory::create_action(db, 2, 10, now).await?;

    let repo = AntinukeActionRepository::new(db);
    let count = repo.count_since(1, 10, now - Duration::seconds(5)).await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests counting with no history.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AntinukeActionRepository::new(db);
    let count = repo.count_since(1, 10, fixed_now()).await?;

    assert_eq!(count, 0);

    Ok(())
}
