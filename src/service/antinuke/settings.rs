//! Operations behind the administrator configuration commands.

use sea_orm::DatabaseConnection;

use crate::{
    data::antinuke::{AntinukeSettingsRepository, AntinukeWhitelistRepository},
    error::{antinuke::AntinukeConfigError, AppError},
    model::antinuke::{
        settings::{AntinukeSettings, UpdateSettingsParam, THRESHOLD_RANGE, TIME_WINDOW_RANGE},
        whitelist::WhitelistSubject,
    },
};

pub struct AntinukeConfigService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AntinukeConfigService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Current settings of a guild, created with defaults if missing.
    pub async fn status(&self, guild_id: u64) -> Result<AntinukeSettings, AppError> {
        Ok(AntinukeSettingsRepository::new(self.db)
            .get_or_create(guild_id)
            .await?)
    }

    /// Turns protection on.
    ///
    /// # Returns
    /// - `Ok(AntinukeSettings)` - Updated settings
    /// - `Err(AppError::AntinukeConfigErr(AlreadyEnabled))` - Protection was already on
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn enable(&self, guild_id: u64) -> Result<AntinukeSettings, AppError> {
        self.set_enabled(guild_id, true).await
    }

    /// Turns protection off.
    ///
    /// # Returns
    /// - `Ok(AntinukeSettings)` - Updated settings
    /// - `Err(AppError::AntinukeConfigErr(AlreadyDisabled))` - Protection was already off
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn disable(&self, guild_id: u64) -> Result<AntinukeSettings, AppError> {
        self.set_enabled(guild_id, false).await
    }

    async fn set_enabled(&self, guild_id: u64, enabled: bool) -> Result<AntinukeSettings, AppError> {
        let repo = AntinukeSettingsRepository::new(self.db);
        let mut settings = repo.get_or_create(guild_id).await?;

        if settings.enabled == enabled {
            return Err(if enabled {
                AntinukeConfigError::AlreadyEnabled
            } else {
                AntinukeConfigError::AlreadyDisabled
            }
            .into());
        }

        settings.enabled = enabled;
        repo.save(&settings).await?;

        tracing::info!(
            "Anti-nuke {} in guild {}",
            if enabled { "enabled" } else { "disabled" },
            guild_id
        );

        Ok(settings)
    }

    /// Applies a partial update of threshold, time window and log channel.
    ///
    /// All provided values are validated before anything is written.
    ///
    /// # Returns
    /// - `Ok(AntinukeSettings)` - Updated settings
    /// - `Err(AppError::AntinukeConfigErr)` - Empty update or a value out of range
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_settings(
        &self,
        guild_id: u64,
        param: UpdateSettingsParam,
    ) -> Result<AntinukeSettings, AppError> {
        if param.is_empty() {
            return Err(AntinukeConfigError::NothingToUpdate.into());
        }

        if let Some(threshold) = param.threshold {
            if !THRESHOLD_RANGE.contains(&threshold) {
                return Err(AntinukeConfigError::ThresholdOutOfRange(threshold).into());
            }
        }

        if let Some(time_window) = param.time_window {
            if !TIME_WINDOW_RANGE.contains(&time_window) {
                return Err(AntinukeConfigError::TimeWindowOutOfRange(time_window).into());
            }
        }

        let repo = AntinukeSettingsRepository::new(self.db);
        let mut settings = repo.get_or_create(guild_id).await?;

        if let Some(threshold) = param.threshold {
            settings.threshold = threshold;
        }
        if let Some(time_window) = param.time_window {
            settings.time_window = time_window;
        }
        if let Some(channel_id) = param.log_channel_id {
            settings.log_channel_id = Some(channel_id);
        }

        repo.save(&settings).await?;

        Ok(settings)
    }

    /// Exempts a user or role from mitigation.
    pub async fn add_to_whitelist(
        &self,
        guild_id: u64,
        subject: WhitelistSubject,
    ) -> Result<(), AppError> {
        // Settings row must exist before whitelist rows reference it.
        AntinukeSettingsRepository::new(self.db)
            .get_or_create(guild_id)
            .await?;

        let added = AntinukeWhitelistRepository::new(self.db)
            .add(guild_id, subject)
            .await?;

        if !added {
            return Err(AntinukeConfigError::AlreadyWhitelisted {
                kind: subject.kind(),
                id: subject.id(),
            }
            .into());
        }

        Ok(())
    }

    pub async fn remove_from_whitelist(
        &self,
        guild_id: u64,
        subject: WhitelistSubject,
    ) -> Result<(), AppError> {
        let removed = AntinukeWhitelistRepository::new(self.db)
            .remove(guild_id, subject)
            .await?;

        if !removed {
            return Err(AntinukeConfigError::NotWhitelisted {
                kind: subject.kind(),
                id: subject.id(),
            }
            .into());
        }

        Ok(())
    }

    /// Chooses the fallback administrator for owner-compromise incidents.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `guild_owner_id` - Current owner of the guild
    /// - `actor_id` - User issuing the request; must be the owner
    /// - `user_id` - The new trusted user; must differ from the actor
    ///
    /// # Returns
    /// - `Ok(AntinukeSettings)` - Updated settings
    /// - `Err(AppError::AntinukeConfigErr(NotOwner | SelfTrusted))` - Rule violated
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_trusted_user(
        &self,
        guild_id: u64,
        guild_owner_id: u64,
        actor_id: u64,
        user_id: u64,
    ) -> Result<AntinukeSettings, AppError> {
        if actor_id != guild_owner_id {
            return Err(AntinukeConfigError::NotOwner.into());
        }

        if user_id == actor_id {
            return Err(AntinukeConfigError::SelfTrusted.into());
        }

        let repo = AntinukeSettingsRepository::new(self.db);
        let mut settings = repo.get_or_create(guild_id).await?;
        settings.trusted_user = Some(user_id);
        repo.save(&settings).await?;

        Ok(settings)
    }

    pub async fn clear_trusted_user(&self, guild_id: u64) -> Result<AntinukeSettings, AppError> {
        let repo = AntinukeSettingsRepository::new(self.db);
        let mut settings = repo.get_or_create(guild_id).await?;

        if settings.trusted_user.is_none() {
            return Err(AntinukeConfigError::NoTrustedUser.into());
        }

        settings.trusted_user = None;
        repo.save(&settings).await?;

        Ok(settings)
    }
}
