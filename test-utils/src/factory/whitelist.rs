//! Whitelist entry factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

async fn create_entry(
    db: &DatabaseConnection,
    guild_id: u64,
    kind: &str,
    subject_id: u64,
) -> Result<entity::antinuke_whitelist::Model, DbErr> {
    entity::antinuke_whitelist::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        kind: ActiveValue::Set(kind.to_string()),
        subject_id: ActiveValue::Set(subject_id.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Whitelists a user in the guild.
pub async fn create_whitelisted_user(
    db: &DatabaseConnection,
    guild_id: u64,
    user_id: u64,
) -> Result<entity::antinuke_whitelist::Model, DbErr> {
    create_entry(db, guild_id, "user", user_id).await
}

/// Whitelists a role in the guild.
pub async fn create_whitelisted_role(
    db: &DatabaseConnection,
    guild_id: u64,
    role_id: u64,
) -> Result<entity::antinuke_whitelist::Model, DbErr> {
    create_entry(db, guild_id, "role", role_id).await
}
