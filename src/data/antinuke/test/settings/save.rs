use super::*;

/// Tests saving modified settings.
///
/// Verifies that the scalar fields are written back and read on the next load.
///
/// Expected: Ok with updated values persisted
#[tokio::test]
async fn persists_updated_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AntinukeSettingsRepository::new(db);
    let mut settings = repo.get_or_create(123456789).await?;

    settings.enabled = true;
    settings.threshold = 5;
    settings.time_window = 60;
    settings.log_channel_id = Some(777);
    settings.trusted_user = Some(888);
    repo.save(&settings).await?;

    let stored = repo.get_or_create(123456789).await?;
    assert!(stored.enabled);
    assert_eq!(stored.threshold, 5);
    assert_eq!(stored.time_window, 60);
    assert_eq!(stored.log_channel_id, Some(777));
    assert_eq!(stored.trusted_user, Some(888));

    Ok(())
}

/// Tests clearing the trusted user.
///
/// Expected: Ok with trusted_user column set to NULL
#[tokio::test]
async fn clears_trusted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::settings::AntinukeSettingsFactory::new(db)
        .guild_id(1)
        .trusted_user("888")
        .build()
        .await?;

    let repo = AntinukeSettingsRepository::new(db);
    let mut settings = repo.get_or_create(1).await?;
    settings.trusted_user = None;
    repo.save(&settings).await?;

    let row = entity::prelude::AntinukeSettings::find_by_id("1".to_string())
        .one(db)
        .await?
        .unwrap();
    assert!(row.trusted_user.is_none());

    Ok(())
}
