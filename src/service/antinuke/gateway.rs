//! Discord capabilities the anti-nuke pipeline depends on.
//!
//! The serenity-backed implementation lives in `bot::discord`; tests substitute
//! recording fakes.

use chrono::{DateTime, Utc};
use serenity::async_trait;
use std::time::Duration;

use crate::{
    error::AppError,
    model::antinuke::{action::ActionType, alert::Alert},
};

/// The executor and target of an audit log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditEntry {
    pub executor_id: u64,
    pub target_id: Option<u64>,
    /// When the entry was written, decoded from its snowflake.
    pub created_at: Option<DateTime<Utc>>,
}

/// Read-only guild lookups.
#[async_trait]
pub trait GuildInspector: Send + Sync {
    /// The bot's own user id.
    fn bot_user_id(&self) -> u64;

    /// Up to `limit` most recent audit log entries of the given type, newest first.
    async fn recent_audit_entries(
        &self,
        guild_id: u64,
        action_type: ActionType,
        limit: u8,
    ) -> Result<Vec<AuditEntry>, AppError>;

    async fn guild_owner_id(&self, guild_id: u64) -> Result<u64, AppError>;

    /// Role ids of a guild member, excluding `@everyone`.
    ///
    /// # Returns
    /// - `Ok(Some(roles))` - The user is a member
    /// - `Ok(None)` - The user is no longer in the guild
    /// - `Err(AppError)` - The lookup itself failed
    async fn member_role_ids(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<Vec<u64>>, AppError>;
}

/// Moderation and messaging side effects.
#[async_trait]
pub trait Moderator: Send + Sync {
    async fn timeout_member(
        &self,
        guild_id: u64,
        user_id: u64,
        duration: Duration,
        reason: &str,
    ) -> Result<(), AppError>;

    /// Removes every role but `@everyone` from a member.
    ///
    /// Individual role removals that fail are skipped.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of roles removed
    /// - `Err(AppError)` - The member could not be resolved
    async fn remove_member_roles(
        &self,
        guild_id: u64,
        user_id: u64,
        reason: &str,
    ) -> Result<usize, AppError>;

    async fn kick_member(&self, guild_id: u64, user_id: u64, reason: &str)
        -> Result<(), AppError>;

    /// Finds the fallback administrator role, creating it when missing.
    ///
    /// # Returns
    /// - `Ok(u64)` - The role id
    async fn ensure_fallback_role(&self, guild_id: u64) -> Result<u64, AppError>;

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError>;

    async fn send_direct_alert(&self, user_id: u64, alert: &Alert) -> Result<(), AppError>;

    async fn send_channel_alert(&self, channel_id: u64, alert: &Alert) -> Result<(), AppError>;
}
