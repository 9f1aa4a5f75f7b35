//! Anti-nuke settings factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating anti-nuke settings rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let settings = AntinukeSettingsFactory::new(&db)
///     .guild_id(123456789)
///     .enabled(true)
///     .threshold(5)
///     .time_window(60)
///     .build()
///     .await?;
/// ```
pub struct AntinukeSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    enabled: bool,
    threshold: i32,
    time_window: i32,
    log_channel_id: Option<String>,
    trusted_user: Option<String>,
}

impl<'a> AntinukeSettingsFactory<'a> {
    /// Creates a new factory with the same defaults a fresh guild receives.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented
    /// - enabled: `false`
    /// - threshold: `15`
    /// - time_window: `5`
    /// - log_channel_id / trusted_user: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            enabled: false,
            threshold: 15,
            time_window: 5,
            log_channel_id: None,
            trusted_user: None,
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id.to_string();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn time_window(mut self, time_window: i32) -> Self {
        self.time_window = time_window;
        self
    }

    pub fn log_channel_id(mut self, channel_id: u64) -> Self {
        self.log_channel_id = Some(channel_id.to_string());
        self
    }

    /// Sets the trusted user as stored text, so mention forms like `<@123>` can be
    /// exercised as well as raw ids.
    pub fn trusted_user(mut self, trusted_user: impl Into<String>) -> Self {
        self.trusted_user = Some(trusted_user.into());
        self
    }

    /// Builds and inserts the settings row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::antinuke_settings::Model)` - Created settings row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::antinuke_settings::Model, DbErr> {
        entity::antinuke_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            enabled: ActiveValue::Set(self.enabled),
            threshold: ActiveValue::Set(self.threshold),
            time_window: ActiveValue::Set(self.time_window),
            log_channel_id: ActiveValue::Set(self.log_channel_id),
            trusted_user: ActiveValue::Set(self.trusted_user),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a settings row with default (disabled) values.
pub async fn create_settings(
    db: &DatabaseConnection,
) -> Result<entity::antinuke_settings::Model, DbErr> {
    AntinukeSettingsFactory::new(db).build().await
}

/// Creates a settings row with anti-nuke enabled and default thresholds.
pub async fn create_enabled_settings(
    db: &DatabaseConnection,
) -> Result<entity::antinuke_settings::Model, DbErr> {
    AntinukeSettingsFactory::new(db).enabled(true).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_settings_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(AntinukeSettings)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let settings = create_settings(db).await?;

        assert!(!settings.enabled);
        assert_eq!(settings.threshold, 15);
        assert_eq!(settings.time_window, 5);
        assert!(settings.trusted_user.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_settings_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(AntinukeSettings)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let settings = AntinukeSettingsFactory::new(db)
            .guild_id(42)
            .enabled(true)
            .threshold(3)
            .time_window(60)
            .log_channel_id(7)
            .trusted_user("<@99>")
            .build()
            .await?;

        assert_eq!(settings.guild_id, "42");
        assert!(settings.enabled);
        assert_eq!(settings.threshold, 3);
        assert_eq!(settings.log_channel_id, Some("7".to_string()));
        assert_eq!(settings.trusted_user, Some("<@99>".to_string()));

        Ok(())
    }
}
