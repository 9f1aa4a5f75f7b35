use super::*;

/// Tests first settings read for a guild.
///
/// Verifies that a guild with no stored settings receives a persisted row with
/// protection disabled and the default threshold and window.
///
/// Expected: Ok with defaults, one row stored
#[tokio::test]
async fn creates_defaults_on_first_read() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AntinukeSettingsRepository::new(db);
    let settings = repo.get_or_create(123456789).await?;

    assert_eq!(settings.guild_id, 123456789);
    assert!(!settings.enabled);
    assert_eq!(settings.threshold, DEFAULT_THRESHOLD);
    assert_eq!(settings.time_window, DEFAULT_TIME_WINDOW);
    assert!(settings.whitelisted_users.is_empty());
    assert!(settings.trusted_user.is_none());

    let count = entity::prelude::AntinukeSettings::find()
        .filter(entity::antinuke_settings::Column::GuildId.eq("123456789"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests reading settings that already exist.
///
/// Verifies that stored values are returned untouched and no duplicate row is
/// inserted on repeated reads.
///
/// Expected: Ok with stored values
#[tokio::test]
async fn returns_existing_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::settings::AntinukeSettingsFactory::new(db)
        .guild_id(123456789)
        .enabled(true)
        .threshold(3)
        .time_window(30)
        .log_channel_id(555)
        .build()
        .await?;

    let repo = AntinukeSettingsRepository::new(db);
    let first = repo.get_or_create(123456789).await?;
    let second = repo.get_or_create(123456789).await?;

    assert!(first.enabled);
    assert_eq!(first.threshold, 3);
    assert_eq!(first.time_window, 30);
    assert_eq!(first.log_channel_id, Some(555));
    assert_eq!(first, second);

    let count = entity::prelude::AntinukeSettings::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests whitelist sets are loaded with the settings.
///
/// Verifies that user and role entries of the guild populate the matching sets and
/// entries of other guilds are ignored.
///
/// Expected: Ok with only this guild's entries
#[tokio::test]
async fn loads_whitelist_sets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::settings::AntinukeSettingsFactory::new(db)
        .guild_id(1)
        .build()
        .await?;
    factory::create_whitelisted_user(db, 1, 100).await?;
    factory::create_whitelisted_role(db, 1, 200).await?;
    factory::create_whitelisted_user(db, 2, 300).await?;

    let repo = AntinukeSettingsRepository::new(db);
    let settings = repo.get_or_create(1).await?;

    assert!(settings.whitelisted_users.contains(&100));
    assert!(!settings.whitelisted_users.contains(&300));
    assert!(settings.whitelisted_roles.contains(&200));
    assert_eq!(settings.whitelisted_roles.len(), 1);

    Ok(())
}

/// Tests trusted user stored as a mention.
///
/// Verifies that `<@!id>` values written by older tooling are normalized to the
/// raw user id.
///
/// Expected: Ok with raw trusted user id
#[tokio::test]
async fn normalizes_mention_trusted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::settings::AntinukeSettingsFactory::new(db)
        .guild_id(1)
        .trusted_user("<@!987654321>")
        .build()
        .await?;

    let repo = AntinukeSettingsRepository::new(db);
    let settings = repo.get_or_create(1).await?;

    assert_eq!(settings.trusted_user, Some(987654321));

    Ok(())
}

/// Tests find without a stored row.
///
/// Expected: Ok(None) and nothing inserted
#[tokio::test]
async fn find_returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AntinukeSettingsRepository::new(db);
    let result = repo.find(42).await?;

    assert!(result.is_none());
    let count = entity::prelude::AntinukeSettings::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
