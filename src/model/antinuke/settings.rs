//! Per-guild anti-nuke settings.
//!
//! Settings are read on every monitored event and mutated only by the configuration
//! service. A guild that has never been configured receives the defaults below, with
//! protection disabled.

use chrono::Duration;
use sea_orm::DbErr;
use std::collections::HashSet;

use super::parse_id;

/// Actions within the window that trigger a response on a fresh guild.
pub const DEFAULT_THRESHOLD: i32 = 15;

/// Trailing window, in seconds, on a fresh guild.
pub const DEFAULT_TIME_WINDOW: i32 = 5;

/// Accepted range for a configured threshold.
pub const THRESHOLD_RANGE: std::ops::RangeInclusive<i32> = 1..=100;

/// Accepted range, in seconds, for a configured time window.
pub const TIME_WINDOW_RANGE: std::ops::RangeInclusive<i32> = 1..=60;

/// Anti-nuke configuration of a single guild.
#[derive(Debug, Clone, PartialEq)]
pub struct AntinukeSettings {
    pub guild_id: u64,
    pub enabled: bool,
    /// Number of actions inside the window at which a response is triggered.
    pub threshold: i32,
    /// Trailing window in seconds.
    pub time_window: i32,
    pub whitelisted_users: HashSet<u64>,
    pub whitelisted_roles: HashSet<u64>,
    /// Fallback administrator for the owner-compromise path; always exempt.
    pub trusted_user: Option<u64>,
    pub log_channel_id: Option<u64>,
}

impl AntinukeSettings {
    /// Settings of a guild that has never been configured.
    pub fn defaults(guild_id: u64) -> Self {
        Self {
            guild_id,
            enabled: false,
            threshold: DEFAULT_THRESHOLD,
            time_window: DEFAULT_TIME_WINDOW,
            whitelisted_users: HashSet::new(),
            whitelisted_roles: HashSet::new(),
            trusted_user: None,
            log_channel_id: None,
        }
    }

    /// Converts the settings row and the guild's whitelist rows into a domain model.
    ///
    /// A trusted user stored in mention form (`<@123>`, `<@!123>`) is normalized to the
    /// raw id. Whitelist rows of an unknown kind are ignored.
    ///
    /// # Returns
    /// - `Ok(AntinukeSettings)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - An id column could not be parsed
    pub fn from_entity(
        entity: entity::antinuke_settings::Model,
        whitelist: Vec<entity::antinuke_whitelist::Model>,
    ) -> Result<Self, DbErr> {
        let mut whitelisted_users = HashSet::new();
        let mut whitelisted_roles = HashSet::new();

        for entry in whitelist {
            let subject_id = parse_id(&entry.subject_id, "subject_id")?;
            match entry.kind.as_str() {
                "user" => {
                    whitelisted_users.insert(subject_id);
                }
                "role" => {
                    whitelisted_roles.insert(subject_id);
                }
                _ => {}
            }
        }

        let log_channel_id = entity
            .log_channel_id
            .as_deref()
            .map(|id| parse_id(id, "log_channel_id"))
            .transpose()?;

        Ok(Self {
            guild_id: parse_id(&entity.guild_id, "guild_id")?,
            enabled: entity.enabled,
            threshold: entity.threshold,
            time_window: entity.time_window,
            whitelisted_users,
            whitelisted_roles,
            trusted_user: entity.trusted_user.as_deref().and_then(parse_user_reference),
            log_channel_id,
        })
    }

    /// The trailing window as a duration.
    pub fn window(&self) -> Duration {
        Duration::seconds(i64::from(self.time_window))
    }
}

/// Parses a user given either as a raw id or as a mention.
pub fn parse_user_reference(value: &str) -> Option<u64> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix("<@!")
        .or_else(|| trimmed.strip_prefix("<@"))
        .map(|rest| rest.strip_suffix('>').unwrap_or(rest))
        .unwrap_or(trimmed);

    inner.parse::<u64>().ok()
}

/// Partial update of the numeric settings and the log channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSettingsParam {
    pub threshold: Option<i32>,
    pub time_window: Option<i32>,
    pub log_channel_id: Option<u64>,
}

impl UpdateSettingsParam {
    pub fn is_empty(&self) -> bool {
        self.threshold.is_none() && self.time_window.is_none() && self.log_channel_id.is_none()
    }
}
