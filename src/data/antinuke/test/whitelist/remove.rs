use super::*;

/// Tests removing a whitelisted user.
///
/// Expected: Ok(true) with entry deleted
#[tokio::test]
async fn removes_existing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_whitelisted_user(db, 1, 100).await?;

    let repo = AntinukeWhitelistRepository::new(db);
    let removed = repo.remove(1, WhitelistSubject::User(100)).await?;

    assert!(removed);
    assert!(!repo.contains(1, WhitelistSubject::User(100)).await?);

    Ok(())
}

/// Tests removing a subject that is not whitelisted.
///
/// Verifies that an entry for the same id in another guild is left untouched.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_not_present() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_whitelisted_user(db, 2, 100).await?;

    let repo = AntinukeWhitelistRepository::new(db);
    let removed = repo.remove(1, WhitelistSubject::User(100)).await?;

    assert!(!removed);
    let count = entity::prelude::AntinukeWhitelist::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
