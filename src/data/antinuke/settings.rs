use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::antinuke::settings::AntinukeSettings;

pub struct AntinukeSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AntinukeSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a guild's settings, creating the default row on first access.
    ///
    /// The insert is a no-op when the row already exists, so concurrent first reads
    /// for the same guild converge on a single row.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(AntinukeSettings)` - Stored settings including both whitelist sets
    /// - `Err(DbErr)` - Database error or an unparsable stored id
    pub async fn get_or_create(&self, guild_id: u64) -> Result<AntinukeSettings, DbErr> {
        let defaults = AntinukeSettings::defaults(guild_id);

        entity::prelude::AntinukeSettings::insert(entity::antinuke_settings::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            enabled: ActiveValue::Set(defaults.enabled),
            threshold: ActiveValue::Set(defaults.threshold),
            time_window: ActiveValue::Set(defaults.time_window),
            log_channel_id: ActiveValue::Set(None),
            trusted_user: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::column(entity::antinuke_settings::Column::GuildId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find(guild_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("antinuke_settings for guild {}", guild_id))
        })
    }

    /// Finds a guild's settings without creating them.
    ///
    /// # Returns
    /// - `Ok(Some(AntinukeSettings))` - Guild has been configured before
    /// - `Ok(None)` - No settings row exists
    /// - `Err(DbErr)` - Database error
    pub async fn find(&self, guild_id: u64) -> Result<Option<AntinukeSettings>, DbErr> {
        let Some(entity) = entity::prelude::AntinukeSettings::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let whitelist = entity::prelude::AntinukeWhitelist::find()
            .filter(entity::antinuke_whitelist::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?;

        AntinukeSettings::from_entity(entity, whitelist).map(Some)
    }

    /// Persists the scalar settings of a guild.
    ///
    /// Whitelist sets are stored separately through `AntinukeWhitelistRepository` and
    /// are not written here.
    pub async fn save(&self, settings: &AntinukeSettings) -> Result<(), DbErr> {
        entity::prelude::AntinukeSettings::insert(entity::antinuke_settings::ActiveModel {
            guild_id: ActiveValue::Set(settings.guild_id.to_string()),
            enabled: ActiveValue::Set(settings.enabled),
            threshold: ActiveValue::Set(settings.threshold),
            time_window: ActiveValue::Set(settings.time_window),
            log_channel_id: ActiveValue::Set(settings.log_channel_id.map(|id| id.to_string())),
            trusted_user: ActiveValue::Set(settings.trusted_user.map(|id| id.to_string())),
        })
        .on_conflict(
            OnConflict::column(entity::antinuke_settings::Column::GuildId)
                .update_columns([
                    entity::antinuke_settings::Column::Enabled,
                    entity::antinuke_settings::Column::Threshold,
                    entity::antinuke_settings::Column::TimeWindow,
                    entity::antinuke_settings::Column::LogChannelId,
                    entity::antinuke_settings::Column::TrustedUser,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
