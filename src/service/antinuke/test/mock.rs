use chrono::{DateTime, Utc};
use serenity::async_trait;
use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
    time::Duration,
};

use crate::{
    error::AppError,
    model::antinuke::{action::ActionType, alert::Alert},
    service::antinuke::gateway::{AuditEntry, GuildInspector, Moderator},
};

/// A call made against the fake gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Timeout { user_id: u64, duration: Duration },
    RemoveRoles { user_id: u64 },
    Kick { user_id: u64 },
    EnsureFallbackRole,
    AddRole { user_id: u64, role_id: u64 },
    DirectAlert { user_id: u64, title: String },
    ChannelAlert { channel_id: u64, title: String },
}

impl GatewayCall {
    pub fn is_moderation(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::RemoveRoles { .. } | Self::Kick { .. }
        )
    }
}

/// Recording `GuildInspector` + `Moderator` for one guild.
pub struct MockGateway {
    pub bot_user_id: u64,
    pub owner_id: u64,
    pub fallback_role_id: u64,
    /// Audit entries per action type, newest first.
    pub audit_entries: Mutex<HashMap<ActionType, Vec<AuditEntry>>>,
    pub member_roles: Mutex<HashMap<u64, Vec<u64>>>,
    /// Users whose member lookup reports them gone from the guild.
    pub departed_members: Mutex<HashSet<u64>>,
    /// Moderation calls return a Discord-side failure.
    pub fail_moderation: bool,
    /// Moderation calls never complete.
    pub stall_moderation: bool,
    /// DMs and channel posts fail.
    pub fail_alerts: bool,
    calls: Mutex<Vec<GatewayCall>>,
}

impl MockGateway {
    pub fn new(owner_id: u64, bot_user_id: u64) -> Self {
        Self {
            bot_user_id,
            owner_id,
            fallback_role_id: 9000,
            audit_entries: Mutex::new(HashMap::new()),
            member_roles: Mutex::new(HashMap::new()),
            departed_members: Mutex::new(HashSet::new()),
            fail_moderation: false,
            stall_moderation: false,
            fail_alerts: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Writes a new audit entry of `action_type` by `executor_id`, dated now.
    pub fn set_audit_entry(&self, action_type: ActionType, executor_id: u64, target_id: u64) {
        self.set_audit_entry_at(action_type, executor_id, target_id, Utc::now());
    }

    pub fn set_audit_entry_at(
        &self,
        action_type: ActionType,
        executor_id: u64,
        target_id: u64,
        created_at: DateTime<Utc>,
    ) {
        self.audit_entries
            .lock()
            .unwrap()
            .entry(action_type)
            .or_default()
            .insert(
                0,
                AuditEntry {
                    executor_id,
                    target_id: Some(target_id),
                    created_at: Some(created_at),
                },
            );
    }

    pub fn set_member_roles(&self, user_id: u64, roles: Vec<u64>) {
        self.member_roles.lock().unwrap().insert(user_id, roles);
    }

    pub fn set_departed(&self, user_id: u64) {
        self.departed_members.lock().unwrap().insert(user_id);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn moderation_calls(&self) -> Vec<GatewayCall> {
        self.calls()
            .into_iter()
            .filter(GatewayCall::is_moderation)
            .collect()
    }

    fn push(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }

    async fn moderation_result(&self) -> Result<(), AppError> {
        if self.stall_moderation {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
        if self.fail_moderation {
            return Err(serenity::Error::Other("Missing Permissions").into());
        }
        Ok(())
    }

    fn alert_result(&self) -> Result<(), AppError> {
        if self.fail_alerts {
            return Err(serenity::Error::Other("Cannot send messages to this user").into());
        }
        Ok(())
    }
}

#[async_trait]
impl GuildInspector for MockGateway {
    fn bot_user_id(&self) -> u64 {
        self.bot_user_id
    }

    async fn recent_audit_entries(
        &self,
        _guild_id: u64,
        action_type: ActionType,
        limit: u8,
    ) -> Result<Vec<AuditEntry>, AppError> {
        Ok(self
            .audit_entries
            .lock()
            .unwrap()
            .get(&action_type)
            .map(|entries| entries.iter().take(limit as usize).copied().collect())
            .unwrap_or_default())
    }

    async fn guild_owner_id(&self, _guild_id: u64) -> Result<u64, AppError> {
        Ok(self.owner_id)
    }

    async fn member_role_ids(
        &self,
        _guild_id: u64,
        user_id: u64,
    ) -> Result<Option<Vec<u64>>, AppError> {
        if self.departed_members.lock().unwrap().contains(&user_id) {
            return Ok(None);
        }

        Ok(Some(
            self.member_roles
                .lock()
                .unwrap()
                .get(&user_id)
                .cloned()
                .unwrap_or_default(),
        ))
    }
}

#[async_trait]
impl Moderator for MockGateway {
    async fn timeout_member(
        &self,
        _guild_id: u64,
        user_id: u64,
        duration: Duration,
        _reason: &str,
    ) -> Result<(), AppError> {
        self.push(GatewayCall::Timeout { user_id, duration });
        self.moderation_result().await
    }

    async fn remove_member_roles(
        &self,
        _guild_id: u64,
        user_id: u64,
        _reason: &str,
    ) -> Result<usize, AppError> {
        self.push(GatewayCall::RemoveRoles { user_id });
        self.moderation_result().await?;
        Ok(self
            .member_roles
            .lock()
            .unwrap()
            .remove(&user_id)
            .map(|roles| roles.len())
            .unwrap_or(0))
    }

    async fn kick_member(
        &self,
        _guild_id: u64,
        user_id: u64,
        _reason: &str,
    ) -> Result<(), AppError> {
        self.push(GatewayCall::Kick { user_id });
        self.moderation_result().await
    }

    async fn ensure_fallback_role(&self, _guild_id: u64) -> Result<u64, AppError> {
        self.push(GatewayCall::EnsureFallbackRole);
        self.moderation_result().await?;
        Ok(self.fallback_role_id)
    }

    async fn add_member_role(
        &self,
        _guild_id: u64,
        user_id: u64,
        role_id: u64,
        _reason: &str,
    ) -> Result<(), AppError> {
        self.push(GatewayCall::AddRole { user_id, role_id });
        self.moderation_result().await
    }

    async fn send_direct_alert(&self, user_id: u64, alert: &Alert) -> Result<(), AppError> {
        self.push(GatewayCall::DirectAlert {
            user_id,
            title: alert.title.clone(),
        });
        self.alert_result()
    }

    async fn send_channel_alert(&self, channel_id: u64, alert: &Alert) -> Result<(), AppError> {
        self.push(GatewayCall::ChannelAlert {
            channel_id,
            title: alert.title.clone(),
        });
        self.alert_result()
    }
}
