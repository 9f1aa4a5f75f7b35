//! Offense ledger factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an offense row with the given count, as if the user had already been
/// acted upon that many times.
pub async fn create_offense(
    db: &DatabaseConnection,
    guild_id: u64,
    user_id: u64,
    offense_count: i32,
) -> Result<entity::antinuke_offense::Model, DbErr> {
    entity::antinuke_offense::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        offense_count: ActiveValue::Set(offense_count),
        last_offense_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
