//! Serenity-backed guild inspection and moderation.

use chrono::{DateTime, Utc};
use serenity::all::{
    Cache, ChannelId, CreateEmbed, CreateMessage, EditMember, EditRole, GuildId, Http,
    Permissions, Role, RoleId, Timestamp, UserId,
};
use serenity::async_trait;
use serenity::http::HttpError;
use serenity::model::guild::audit_log::{
    Action, AuditLogEntry, ChannelAction, MemberAction, RoleAction,
};
use std::{sync::Arc, time::Duration};

use crate::{
    error::{internal::InternalError, AppError},
    model::antinuke::{
        action::ActionType,
        alert::{Alert, EMERGENCY_COLOUR},
        response::FALLBACK_ROLE_NAME,
    },
    service::antinuke::gateway::{AuditEntry, GuildInspector, Moderator},
};

/// Discord JSON error code for a user that is not in the guild.
const UNKNOWN_MEMBER_CODE: isize = 10007;

/// Milliseconds between the Unix epoch and the Discord epoch (2015-01-01).
const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

const FALLBACK_ROLE_REASON: &str = "Anti-nuke: Created fallback admin role for emergency";

/// Discord access for one event, built from the serenity context.
pub struct SerenityGateway {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }
}

#[async_trait]
impl GuildInspector for SerenityGateway {
    fn bot_user_id(&self) -> u64 {
        self.cache.current_user().id.get()
    }

    async fn recent_audit_entries(
        &self,
        guild_id: u64,
        action_type: ActionType,
        limit: u8,
    ) -> Result<Vec<AuditEntry>, AppError> {
        let logs = GuildId::new(guild_id)
            .audit_logs(
                &self.http,
                Some(audit_action(action_type)),
                None,
                None,
                Some(limit),
            )
            .await?;

        Ok(logs.entries.iter().map(audit_entry_from).collect())
    }

    async fn guild_owner_id(&self, guild_id: u64) -> Result<u64, AppError> {
        let guild_id = GuildId::new(guild_id);
        let cached = self.cache.guild(guild_id).map(|guild| guild.owner_id);

        let owner_id = match cached {
            Some(owner_id) => owner_id,
            None => guild_id.to_partial_guild(&self.http).await?.owner_id,
        };

        Ok(owner_id.get())
    }

    async fn member_role_ids(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<Vec<u64>>, AppError> {
        let member = match self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await
        {
            Ok(member) => member,
            Err(e) if is_unknown_member(&e) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(
            roles_without_everyone(guild_id, &member.roles)
                .into_iter()
                .map(|role_id| role_id.get())
                .collect(),
        ))
    }
}

#[async_trait]
impl Moderator for SerenityGateway {
    async fn timeout_member(
        &self,
        guild_id: u64,
        user_id: u64,
        duration: Duration,
        reason: &str,
    ) -> Result<(), AppError> {
        let until = Utc::now().timestamp() + duration.as_secs() as i64;
        let timestamp = Timestamp::from_unix_timestamp(until).map_err(|e| {
            InternalError::InvalidDiscordTimestamp {
                timestamp: until,
                reason: e.to_string(),
            }
        })?;

        GuildId::new(guild_id)
            .edit_member(
                &self.http,
                UserId::new(user_id),
                EditMember::new()
                    .disable_communication_until_datetime(timestamp)
                    .audit_log_reason(reason),
            )
            .await?;

        Ok(())
    }

    async fn remove_member_roles(
        &self,
        guild_id: u64,
        user_id: u64,
        reason: &str,
    ) -> Result<usize, AppError> {
        let guild = GuildId::new(guild_id);
        let user = UserId::new(user_id);
        let member = self.http.get_member(guild, user).await?;

        let mut removed = 0;
        for role_id in roles_without_everyone(guild_id, &member.roles) {
            match self
                .http
                .remove_member_role(guild, user, role_id, Some(reason))
                .await
            {
                Ok(()) => removed += 1,
                Err(e) => tracing::warn!(
                    "Could not remove role {} from {} in guild {}: {}",
                    role_id,
                    user_id,
                    guild_id,
                    e
                ),
            }
        }

        Ok(removed)
    }

    async fn kick_member(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .kick_with_reason(&self.http, UserId::new(user_id), reason)
            .await?;

        Ok(())
    }

    async fn ensure_fallback_role(&self, guild_id: u64) -> Result<u64, AppError> {
        let guild = GuildId::new(guild_id);
        let roles = guild.roles(&self.http).await?;

        if let Some(role_id) = find_fallback_role(roles.values()) {
            return Ok(role_id);
        }

        let role = guild
            .create_role(
                &self.http,
                EditRole::new()
                    .name(FALLBACK_ROLE_NAME)
                    .permissions(Permissions::ADMINISTRATOR)
                    .colour(EMERGENCY_COLOUR)
                    .audit_log_reason(FALLBACK_ROLE_REASON),
            )
            .await?;

        tracing::info!("Created {} role in guild {}", FALLBACK_ROLE_NAME, guild_id);

        Ok(role.id.get())
    }

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(reason),
            )
            .await?;

        Ok(())
    }

    async fn send_direct_alert(&self, user_id: u64, alert: &Alert) -> Result<(), AppError> {
        let message = CreateMessage::new().embed(alert_embed(alert, Utc::now())?);

        UserId::new(user_id)
            .direct_message(&self.http, message)
            .await?;

        Ok(())
    }

    async fn send_channel_alert(&self, channel_id: u64, alert: &Alert) -> Result<(), AppError> {
        let message = CreateMessage::new().embed(alert_embed(alert, Utc::now())?);

        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }
}

/// Audit log filter for a monitored action type.
pub fn audit_action(action_type: ActionType) -> Action {
    match action_type {
        ActionType::Ban => Action::Member(MemberAction::BanAdd),
        ActionType::Kick => Action::Member(MemberAction::Kick),
        ActionType::ChannelDelete => Action::Channel(ChannelAction::Delete),
        ActionType::RoleDelete => Action::Role(RoleAction::Delete),
    }
}

pub fn audit_entry_from(entry: &AuditLogEntry) -> AuditEntry {
    AuditEntry {
        executor_id: entry.user_id.get(),
        target_id: entry.target_id.map(|id| id.get()),
        created_at: snowflake_created_at(entry.id.get()),
    }
}

/// Creation time encoded in a Discord snowflake.
pub fn snowflake_created_at(id: u64) -> Option<DateTime<Utc>> {
    let millis = (id >> 22) + DISCORD_EPOCH_MS;
    DateTime::from_timestamp_millis(i64::try_from(millis).ok()?)
}

pub fn find_fallback_role<'a>(roles: impl IntoIterator<Item = &'a Role>) -> Option<u64> {
    roles
        .into_iter()
        .find(|role| role.name == FALLBACK_ROLE_NAME)
        .map(|role| role.id.get())
}

pub fn is_unknown_member(error: &serenity::Error) -> bool {
    matches!(
        error,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
            if response.error.code == UNKNOWN_MEMBER_CODE
    )
}

/// Drops `@everyone`, which shares the guild's id.
pub fn roles_without_everyone(guild_id: u64, roles: &[RoleId]) -> Vec<RoleId> {
    roles
        .iter()
        .copied()
        .filter(|role_id| role_id.get() != guild_id)
        .collect()
}

pub fn alert_embed(alert: &Alert, now: DateTime<Utc>) -> Result<CreateEmbed, AppError> {
    let timestamp = Timestamp::from_unix_timestamp(now.timestamp()).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: now.timestamp(),
            reason: e.to_string(),
        }
    })?;

    let embed = CreateEmbed::new()
        .title(&alert.title)
        .description(&alert.description)
        .colour(alert.colour)
        .timestamp(timestamp)
        .fields(
            alert
                .fields
                .iter()
                .map(|field| (field.name.clone(), field.value.clone(), field.inline)),
        );

    Ok(embed)
}
