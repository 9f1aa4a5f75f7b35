use super::*;

/// Tests appending an action to the log.
///
/// Expected: Ok with record carrying the given fields and timestamp
#[tokio::test]
async fn records_action() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AntinukeActionRepository::new(db);
    let record = repo.record(ban(1, 10, 500), fixed_now()).await?;

    assert_eq!(record.guild_id, 1);
    assert_eq!(record.executor_id, 10);
    assert_eq!(record.action_type, ActionType::Ban);
    assert_eq!(record.target_id, Some(500));
    assert_eq!(record.created_at, fixed_now());

    let stored = entity::prelude::AntinukeAction::find_by_id(record.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.action_type, "ban");

    Ok(())
}

/// Tests recording an action with no target.
///
/// Expected: Ok with target_id None
#[tokio::test]
async fn records_action_without_target() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AntinukeActionRepository::new(db);
    let record = repo
        .record(
            RecordActionParam {
                guild_id: 1,
                executor_id: 10,
                action_type: ActionType::ChannelDelete,
                target_id: None,
            },
            fixed_now(),
        )
        .await?;

    assert!(record.target_id.is_none());
    assert_eq!(record.action_type, ActionType::ChannelDelete);

    Ok(())
}

/// Tests repeated actions are all stored.
///
/// Expected: Ok with one row per call
#[tokio::test]
async fn appends_every_call() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AntinukeActionRepository::new(db);
    for target in 0..4 {
        repo.record(ban(1, 10, target), fixed_now()).await?;
    }

    let count = entity::prelude::AntinukeAction::find().count(db).await?;
    assert_eq!(count, 4);

    Ok(())
}
