use chrono::{DateTime, Duration, Utc};

use crate::{
    data::antinuke::AntinukeSettingsRepository,
    error::AppError,
    model::antinuke::{
        action::{ActionType, RecordActionParam},
        response::EventOutcome,
    },
    service::antinuke::{
        action_log::AntinukeActionLogService,
        gateway::AuditEntry,
        responder::{Incident, ThreatResponder},
        whitelist::is_whitelisted,
        AntinukeContext,
    },
};

/// Kick entries older than this cannot explain a member removal.
const KICK_ENTRY_MAX_AGE_SECS: i64 = 5;

/// Kick entries searched for the removed member; kicks in a burst land out of order.
const KICK_AUDIT_LOOKBACK: u8 = 5;

/// A destructive action observed on the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitoredEvent {
    pub guild_id: u64,
    pub action_type: ActionType,
    /// The banned/kicked user, deleted channel or deleted role.
    pub target_id: u64,
}

/// Attributes monitored events and dispatches threshold breaches.
pub struct ThreatDetector<'a> {
    ctx: &'a AntinukeContext<'a>,
}

impl<'a> ThreatDetector<'a> {
    pub fn new(ctx: &'a AntinukeContext<'a>) -> Self {
        Self { ctx }
    }

    pub async fn handle(&self, event: MonitoredEvent) -> Result<EventOutcome, AppError> {
        self.handle_at(event, Utc::now()).await
    }

    /// Processes one monitored event.
    ///
    /// The audit log is the only attribution source: when its latest entry of the
    /// matching type is missing or names another target, the event is dropped
    /// without a record. Member removals look through the last few kick entries for
    /// one naming the member and written in the last few seconds, otherwise the
    /// member left on their own. Owners skip the whitelist and are routed to the
    /// owner path.
    ///
    /// # Returns
    /// - `Ok(EventOutcome)` - Where processing stopped
    /// - `Err(AppError)` - A storage or Discord lookup failed; no mitigation ran
    pub async fn handle_at(
        &self,
        event: MonitoredEvent,
        now: DateTime<Utc>,
    ) -> Result<EventOutcome, AppError> {
        let settings = AntinukeSettingsRepository::new(self.ctx.db)
            .get_or_create(event.guild_id)
            .await?;

        if !settings.enabled {
            return Ok(EventOutcome::Disabled);
        }

        let inspector = self.ctx.inspector;

        let entries = self
            .ctx
            .bounded(
                "fetch audit log",
                inspector.recent_audit_entries(
                    event.guild_id,
                    event.action_type,
                    audit_lookback(event.action_type),
                ),
            )
            .await?;

        let Some(entry) = entries.into_iter().find(|entry| {
            entry.target_id == Some(event.target_id) && is_fresh_enough(event.action_type, entry, now)
        }) else {
            tracing::debug!(
                "No matching {} audit entry for target {} in guild {}",
                event.action_type,
                event.target_id,
                event.guild_id
            );
            return Ok(EventOutcome::Unattributed);
        };

        if entry.executor_id == inspector.bot_user_id() {
            return Ok(EventOutcome::SelfAction);
        }

        let owner_id = self
            .ctx
            .bounded("fetch guild owner", inspector.guild_owner_id(event.guild_id))
            .await?;
        let is_owner = entry.executor_id == owner_id;

        if !is_owner {
            let roles = self
                .ctx
                .bounded(
                    "fetch member roles",
                    inspector.member_role_ids(event.guild_id, entry.executor_id),
                )
                .await?
                .unwrap_or_else(|| {
                    tracing::debug!(
                        "Executor {} already left guild {}, checking without roles",
                        entry.executor_id,
                        event.guild_id
                    );
                    Vec::new()
                });

            if is_whitelisted(&settings, entry.executor_id, &roles) {
                tracing::debug!(
                    "Whitelisted {} performed {} in guild {}",
                    entry.executor_id,
                    event.action_type,
                    event.guild_id
                );
                return Ok(EventOutcome::Whitelisted);
            }
        }

        let check = AntinukeActionLogService::new(self.ctx.db)
            .record_and_check_at(
                RecordActionParam {
                    guild_id: event.guild_id,
                    executor_id: entry.executor_id,
                    action_type: event.action_type,
                    target_id: Some(event.target_id),
                },
                now,
            )
            .await?;

        if !check.exceeded {
            return Ok(EventOutcome::Recorded(check));
        }

        let incident = Incident {
            guild_id: event.guild_id,
            executor_id: entry.executor_id,
            owner_id,
            action_type: event.action_type,
            check,
        };
        let responder = ThreatResponder::new(self.ctx);

        let response = if is_owner {
            responder.respond_to_owner(&settings, &incident).await
        } else {
            responder.respond_to_actor(&settings, &incident).await?
        };

        Ok(EventOutcome::Responded(check, response))
    }
}

fn audit_lookback(action_type: ActionType) -> u8 {
    match action_type {
        ActionType::Kick => KICK_AUDIT_LOOKBACK,
        ActionType::Ban | ActionType::ChannelDelete | ActionType::RoleDelete => 1,
    }
}

fn is_fresh_enough(action_type: ActionType, entry: &AuditEntry, now: DateTime<Utc>) -> bool {
    match action_type {
        ActionType::Kick => entry.created_at.is_some_and(|created_at| {
            now - created_at <= Duration::seconds(KICK_ENTRY_MAX_AGE_SECS)
        }),
        ActionType::Ban | ActionType::ChannelDelete | ActionType::RoleDelete => true,
    }
}
