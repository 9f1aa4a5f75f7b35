use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

/// Bound on audit-log and moderation calls when `ANTINUKE_CALL_TIMEOUT_SECS` is unset.
const DEFAULT_CALL_TIMEOUT_SECS: u64 = 10;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Bound applied to every audit-log fetch and moderation call.
    pub call_timeout: Duration,
    /// Whether an owner-compromise incident hands the fallback admin role to the
    /// trusted user.
    pub owner_containment: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let call_timeout_secs = match std::env::var("ANTINUKE_CALL_TIMEOUT_SECS") {
            Ok(value) => parse_timeout_secs(&value)?,
            Err(_) => DEFAULT_CALL_TIMEOUT_SECS,
        };

        let owner_containment = match std::env::var("ANTINUKE_OWNER_CONTAINMENT") {
            Ok(value) => parse_flag("ANTINUKE_OWNER_CONTAINMENT", &value)?,
            Err(_) => true,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            call_timeout: Duration::from_secs(call_timeout_secs),
            owner_containment,
        })
    }
}

fn parse_timeout_secs(value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "ANTINUKE_CALL_TIMEOUT_SECS".to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
