use chrono::{DateTime, Utc};
use migration::{Expr, ExprTrait, OnConflict};
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Per-guild count of anti-nuke responses taken against each user.
pub struct AntinukeOffenseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AntinukeOffenseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the number of offenses recorded for a user, `0` when none.
    pub async fn get_count(&self, guild_id: u64, user_id: u64) -> Result<i32, DbErr> {
        Ok(self
            .find(guild_id, user_id)
            .await?
            .map(|offense| offense.offense_count)
            .unwrap_or(0))
    }

    /// Records one more offense for a user.
    ///
    /// A single upsert that returns the stored row, so overlapping responses for the
    /// same user each get their own count.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - The offending user
    /// - `now` - Stored as `last_offense_at`
    ///
    /// # Returns
    /// - `Ok(i32)` - The user's offense count after this one, starting at `1`
    /// - `Err(DbErr)` - Database error
    pub async fn increment(
        &self,
        guild_id: u64,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<i32, DbErr> {
        use entity::antinuke_offense::Column;

        let offense = entity::prelude::AntinukeOffense::insert(
            entity::antinuke_offense::ActiveModel {
                guild_id: ActiveValue::Set(guild_id.to_string()),
                user_id: ActiveValue::Set(user_id.to_string()),
                offense_count: ActiveValue::Set(1),
                last_offense_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .on_conflict(
            OnConflict::columns([Column::GuildId, Column::UserId])
                .value(Column::OffenseCount, Expr::col(Column::OffenseCount).add(1))
                .update_column(Column::LastOffenseAt)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(offense.offense_count)
    }

    async fn find(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<entity::antinuke_offense::Model>, DbErr> {
        entity::prelude::AntinukeOffense::find()
            .filter(entity::antinuke_offense::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::antinuke_offense::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await
    }
}
