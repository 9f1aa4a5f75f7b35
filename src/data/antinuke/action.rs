use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::antinuke::action::{ActionRecord, RecordActionParam};

/// Append-only log of monitored destructive actions.
pub struct AntinukeActionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AntinukeActionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an action to the log.
    ///
    /// # Arguments
    /// - `param` - Guild, executor, action type and target of the action
    /// - `created_at` - Timestamp stored on the record
    ///
    /// # Returns
    /// - `Ok(ActionRecord)` - The stored record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn record(
        &self,
        param: RecordActionParam,
        created_at: DateTime<Utc>,
    ) -> Result<ActionRecord, DbErr> {
        let entity = entity::antinuke_action::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            executor_id: ActiveValue::Set(param.executor_id.to_string()),
            action_type: ActiveValue::Set(param.action_type.as_str().to_string()),
            target_id: ActiveValue::Set(param.target_id.map(|id| id.to_string())),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ActionRecord::from_entity(entity)
    }

    /// Counts an executor's actions at or after `since`, across all action types.
    pub async fn count_since(
        &self,
        guild_id: u64,
        executor_id: u64,
        since: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::AntinukeAction::find()
            .filter(entity::antinuke_action::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::antinuke_action::Column::ExecutorId.eq(executor_id.to_string()))
            .filter(entity::antinuke_action::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }

    /// Gets a guild's actions newer than `since`, newest first.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `executor_id` - Restrict to a single executor when set
    /// - `since` - Exclusive lower bound on `created_at`
    pub async fn get_recent(
        &self,
        guild_id: u64,
        executor_id: Option<u64>,
        since: DateTime<Utc>,
    ) -> Result<Vec<ActionRecord>, DbErr> {
        let mut query = entity::prelude::AntinukeAction::find()
            .filter(entity::antinuke_action::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::antinuke_action::Column::CreatedAt.gt(since));

        if let Some(executor_id) = executor_id {
            query =
                query.filter(entity::antinuke_action::Column::ExecutorId.eq(executor_id.to_string()));
        }

        let entities = query
            .order_by_desc(entity::antinuke_action::Column::CreatedAt)
            .order_by_desc(entity::antinuke_action::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(ActionRecord::from_entity).collect()
    }

    /// Deletes records of every guild created before `cutoff`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records deleted
    /// - `Err(DbErr)` - Database error
    pub async fn prune_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::AntinukeAction::delete_many()
            .filter(entity::antinuke_action::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a guild's records, or only those created before `cutoff` when set.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records deleted
    /// - `Err(DbErr)` - Database error
    pub async fn clear_guild(
        &self,
        guild_id: u64,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::AntinukeAction::delete_many()
            .filter(entity::antinuke_action::Column::GuildId.eq(guild_id.to_string()));

        if let Some(cutoff) = cutoff {
            query = query.filter(entity::antinuke_action::Column::CreatedAt.lt(cutoff));
        }

        let result = query.exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
