use super::*;

/// Tests whitelisting a new user.
///
/// Expected: Ok(true) with one entry stored
#[tokio::test]
async fn adds_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AntinukeWhitelistRepository::new(db);
    let added = repo.add(1, WhitelistSubject::User(100)).await?;

    assert!(added);
    assert!(repo.contains(1, WhitelistSubject::User(100)).await?);
    let count = entity::prelude::AntinukeWhitelist::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests whitelisting a subject twice.
///
/// Verifies that the second add reports the subject as already present and does
/// not store a duplicate.
///
/// Expected: Ok(false) with one entry stored
#[tokio::test]
async fn reports_already_present() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_whitelisted_role(db, 1, 200).await?;

    let repo = AntinukeWhitelistRepository::new(db);
    let added = repo.add(1, WhitelistSubject::Role(200)).await?;

    assert!(!added);
    let count = entity::prelude::AntinukeWhitelist::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests user and role with the same id are distinct entries.
///
/// Expected: Ok(true) for both
#[tokio::test]
async fn distinguishes_users_from_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AntinukeWhitelistRepository::new(db);

    assert!(repo.add(1, WhitelistSubject::User(500)).await?);
    assert!(repo.add(1, WhitelistSubject::Role(500)).await?);

    Ok(())
}

/// Tests two overlapping adds of the same subject.
///
/// Expected: exactly one Ok(true), the other Ok(false), one entry stored
#[tokio::test]
async fn concurrent_adds_store_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_antinuke_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AntinukeWhitelistRepository::new(db);
    let (first, second) = tokio::join!(
        repo.add(1, WhitelistSubject::User(100)),
        repo.add(1, WhitelistSubject::User(100))
    );

    let mut added = vec![first?, second?];
    added.sort();
    assert_eq!(added, vec![false, true]);
    let count = entity::prelude::AntinukeWhitelist::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
