//! Action log record factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for inserting action log records, mostly to seed history at a chosen time.
///
/// # Example
///
/// ```rust,ignore
/// let record = AntinukeActionFactory::new(&db, guild_id, executor_id)
///     .action_type("role_delete")
///     .created_at(Utc::now() - Duration::hours(30))
///     .build()
///     .await?;
/// ```
pub struct AntinukeActionFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    executor_id: String,
    action_type: String,
    target_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> AntinukeActionFactory<'a> {
    /// Defaults: a `ban` of a fresh target, recorded now.
    pub fn new(db: &'a DatabaseConnection, guild_id: u64, executor_id: u64) -> Self {
        Self {
            db,
            guild_id: guild_id.to_string(),
            executor_id: executor_id.to_string(),
            action_type: "ban".to_string(),
            target_id: Some(next_id().to_string()),
            created_at: Utc::now(),
        }
    }

    pub fn action_type(mut self, action_type: impl Into<String>) -> Self {
        self.action_type = action_type.into();
        self
    }

    pub fn target_id(mut self, target_id: Option<u64>) -> Self {
        self.target_id = target_id.map(|id| id.to_string());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::antinuke_action::Model, DbErr> {
        entity::antinuke_action::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            executor_id: ActiveValue::Set(self.executor_id),
            action_type: ActiveValue::Set(self.action_type),
            target_id: ActiveValue::Set(self.target_id),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Inserts a `ban` record for the executor at the given time.
pub async fn create_action(
    db: &DatabaseConnection,
    guild_id: u64,
    executor_id: u64,
    created_at: DateTime<Utc>,
) -> Result<entity::antinuke_action::Model, DbErr> {
    AntinukeActionFactory::new(db, guild_id, executor_id)
        .created_at(created_at)
        .build()
        .await
}
