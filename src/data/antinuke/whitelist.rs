use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::model::antinuke::whitelist::WhitelistSubject;

pub struct AntinukeWhitelistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AntinukeWhitelistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whitelists a user or role in a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry was added
    /// - `Ok(false)` - Subject was already whitelisted
    /// - `Err(DbErr)` - Database error
    pub async fn add(&self, guild_id: u64, subject: WhitelistSubject) -> Result<bool, DbErr> {
        use entity::antinuke_whitelist::Column;

        let inserted = entity::prelude::AntinukeWhitelist::insert(
            entity::antinuke_whitelist::ActiveModel {
                guild_id: ActiveValue::Set(guild_id.to_string()),
                kind: ActiveValue::Set(subject.kind().to_string()),
                subject_id: ActiveValue::Set(subject.id().to_string()),
                ..Default::default()
            },
        )
        .on_conflict(
            OnConflict::columns([Column::GuildId, Column::Kind, Column::SubjectId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Removes a user or role from a guild's whitelist.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry was removed
    /// - `Ok(false)` - Subject was not whitelisted
    /// - `Err(DbErr)` - Database error
    pub async fn remove(&self, guild_id: u64, subject: WhitelistSubject) -> Result<bool, DbErr> {
        let result = entity::prelude::AntinukeWhitelist::delete_many()
            .filter(entity::antinuke_whitelist::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::antinuke_whitelist::Column::Kind.eq(subject.kind()))
            .filter(entity::antinuke_whitelist::Column::SubjectId.eq(subject.id().to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn contains(&self, guild_id: u64, subject: WhitelistSubject) -> Result<bool, DbErr> {
        let count = entity::prelude::AntinukeWhitelist::find()
            .filter(entity::antinuke_whitelist::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::antinuke_whitelist::Column::Kind.eq(subject.kind()))
            .filter(entity::antinuke_whitelist::Column::SubjectId.eq(subject.id().to_string()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
