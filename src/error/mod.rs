//! Error types.
//!
//! `AppError` is the top-level error returned by startup, repositories driven through
//! services, and the anti-nuke pipeline. Event handlers never propagate it to serenity;
//! they log it at the handler boundary instead.

pub mod antinuke;
pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{antinuke::AntinukeConfigError, config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// An anti-nuke configuration request broke a settings rule.
    ///
    /// These are expected and are reported back to the administrator rather than
    /// logged as failures.
    #[error(transparent)]
    AntinukeConfigErr(#[from] AntinukeConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Unexpected behavior inside the codebase.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// A Discord call did not finish within the configured bound.
    ///
    /// The call is treated as failed and never retried.
    ///
    /// # Fields
    /// - `operation` - Short name of the call that timed out
    /// - `seconds` - The bound that elapsed
    #[error("{operation} timed out after {seconds}s")]
    Timeout { operation: &'static str, seconds: u64 },
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
