//! Anti-nuke threat detection and response.
//!
//! A monitored event flows through the `ThreatDetector`, which attributes it via the
//! audit log, filters the bot itself and whitelisted executors, records it in the
//! action log, and hands breaches to the `ThreatResponder`. Configuration and log
//! review services operate on the same stored state.

pub mod action_log;
pub mod activity;
pub mod detector;
pub mod gateway;
pub mod responder;
pub mod settings;
pub mod whitelist;

use sea_orm::DatabaseConnection;
use std::{future::Future, time::Duration};

use crate::{config::Config, error::AppError};

use self::gateway::{GuildInspector, Moderator};

/// Default bound on Discord calls.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime options of the anti-nuke pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AntinukeOptions {
    /// Bound applied to every audit-log and moderation call.
    pub call_timeout: Duration,
    /// Grant the fallback admin role to the trusted user on owner compromise.
    pub owner_containment: bool,
}

impl Default for AntinukeOptions {
    fn default() -> Self {
        Self {
            call_timeout: DEFAULT_CALL_TIMEOUT,
            owner_containment: true,
        }
    }
}

impl From<&Config> for AntinukeOptions {
    fn from(config: &Config) -> Self {
        Self {
            call_timeout: config.call_timeout,
            owner_containment: config.owner_containment,
        }
    }
}

/// Everything one event needs: storage, Discord capabilities and options.
pub struct AntinukeContext<'a> {
    pub db: &'a DatabaseConnection,
    pub inspector: &'a dyn GuildInspector,
    pub moderator: &'a dyn Moderator,
    pub options: AntinukeOptions,
}

impl<'a> AntinukeContext<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        inspector: &'a dyn GuildInspector,
        moderator: &'a dyn Moderator,
        options: AntinukeOptions,
    ) -> Self {
        Self {
            db,
            inspector,
            moderator,
            options,
        }
    }

    /// Runs a Discord call under the configured timeout.
    ///
    /// An elapsed call becomes `AppError::Timeout` and is not retried.
    pub async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        match tokio::time::timeout(self.options.call_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(AppError::Timeout {
                operation,
                seconds: self.options.call_timeout.as_secs(),
            }),
        }
    }
}

#[cfg(test)]
mod test;
