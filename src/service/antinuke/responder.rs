//! Threat responses.
//!
//! Breaches by the guild owner cannot be mitigated against the owner, so the owner
//! path notifies and optionally hands a fallback administrator role to the trusted
//! user. Breaches by anyone else walk the escalation ladder of the offense ledger.
//!
//! Mitigation always runs before notification. A failed moderation call is logged as
//! a warning and notification still goes out; a failed notification is logged and
//! never undoes mitigation.

use chrono::Utc;

use crate::{
    data::antinuke::AntinukeOffenseRepository,
    error::AppError,
    model::antinuke::{
        action::{ActionType, ThreatCheck},
        alert::{Alert, EMERGENCY_COLOUR, WARNING_COLOUR},
        response::{
            Containment, Mitigation, ThreatResponse, FALLBACK_ROLE_NAME, OWNER_THREAT_REASON,
            TIMEOUT_DURATION,
        },
        settings::AntinukeSettings,
    },
    service::antinuke::AntinukeContext,
};

/// A threshold breach handed to the responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incident {
    pub guild_id: u64,
    pub executor_id: u64,
    pub owner_id: u64,
    pub action_type: ActionType,
    pub check: ThreatCheck,
}

pub struct ThreatResponder<'a> {
    ctx: &'a AntinukeContext<'a>,
}

impl<'a> ThreatResponder<'a> {
    pub fn new(ctx: &'a AntinukeContext<'a>) -> Self {
        Self { ctx }
    }

    /// Handles a breach by the guild owner.
    ///
    /// Never acts against the owner and never fails: containment and notification
    /// problems are logged and reflected in the returned response.
    pub async fn respond_to_owner(
        &self,
        settings: &AntinukeSettings,
        incident: &Incident,
    ) -> ThreatResponse {
        tracing::warn!(
            "Anti-nuke: owner {} of guild {} triggered {} ({} actions)",
            incident.owner_id,
            incident.guild_id,
            incident.action_type.incident_tag(),
            incident.check.count
        );

        let containment = self.contain_owner_threat(settings, incident).await;
        let alert = owner_alert(settings, incident, containment);

        let trusted_user_alerted = match settings.trusted_user {
            Some(trusted_user) => self.deliver_direct(trusted_user, &alert).await,
            None => false,
        };
        let log_channel_alerted = self.deliver_to_log_channel(settings, &alert).await;

        ThreatResponse::Owner {
            containment,
            trusted_user_alerted,
            log_channel_alerted,
        }
    }

    /// Handles a breach by a non-owner, non-whitelisted executor.
    ///
    /// # Returns
    /// - `Ok(ThreatResponse::Actor)` - What was attempted and what succeeded
    /// - `Err(AppError::DbErr)` - The offense ledger could not be updated; nothing
    ///   was attempted
    pub async fn respond_to_actor(
        &self,
        settings: &AntinukeSettings,
        incident: &Incident,
    ) -> Result<ThreatResponse, AppError> {
        let offense_count = AntinukeOffenseRepository::new(self.ctx.db)
            .increment(incident.guild_id, incident.executor_id, Utc::now())
            .await?;
        let mitigation = Mitigation::for_offense(offense_count);

        tracing::warn!(
            "Anti-nuke: {} by {} in guild {} ({} actions), offense #{}: {}",
            incident.action_type.incident_tag(),
            incident.executor_id,
            incident.guild_id,
            incident.check.count,
            offense_count,
            mitigation.describe()
        );

        let mitigated = match self.mitigate(incident, mitigation).await {
            Ok(()) => {
                tracing::info!(
                    "Anti-nuke: applied {:?} to {} in guild {}",
                    mitigation,
                    incident.executor_id,
                    incident.guild_id
                );
                true
            }
            Err(e) => {
                tracing::warn!(
                    "Anti-nuke: failed to apply {:?} to {} in guild {}: {}",
                    mitigation,
                    incident.executor_id,
                    incident.guild_id,
                    e
                );
                false
            }
        };

        let alert = actor_alert(settings, incident, offense_count, mitigation, mitigated);
        let owner_alerted = self.deliver_direct(incident.owner_id, &alert).await;
        let log_channel_alerted = self.deliver_to_log_channel(settings, &alert).await;

        Ok(ThreatResponse::Actor {
            offense_count,
            mitigation,
            mitigated,
            owner_alerted,
            log_channel_alerted,
        })
    }

    async fn mitigate(&self, incident: &Incident, mitigation: Mitigation) -> Result<(), AppError> {
        let moderator = self.ctx.moderator;
        let (guild_id, user_id) = (incident.guild_id, incident.executor_id);
        let reason = mitigation.audit_reason();

        match mitigation {
            Mitigation::Timeout => {
                self.ctx
                    .bounded(
                        "timeout member",
                        moderator.timeout_member(guild_id, user_id, TIMEOUT_DURATION, reason),
                    )
                    .await
            }
            Mitigation::RemoveRoles => {
                let removed = self
                    .ctx
                    .bounded(
                        "remove member roles",
                        moderator.remove_member_roles(guild_id, user_id, reason),
                    )
                    .await?;
                tracing::debug!("Removed {} roles from {} in guild {}", removed, user_id, guild_id);
                Ok(())
            }
            Mitigation::Kick => {
                self.ctx
                    .bounded("kick member", moderator.kick_member(guild_id, user_id, reason))
                    .await
            }
        }
    }

    async fn contain_owner_threat(
        &self,
        settings: &AntinukeSettings,
        incident: &Incident,
    ) -> Containment {
        if !self.ctx.options.owner_containment {
            return Containment::Disabled;
        }

        let Some(trusted_user) = settings.trusted_user else {
            tracing::warn!(
                "Anti-nuke: no trusted user configured in guild {}, skipping containment",
                incident.guild_id
            );
            return Containment::NoTrustedUser;
        };

        let moderator = self.ctx.moderator;

        let role_id = match self
            .ctx
            .bounded(
                "ensure fallback role",
                moderator.ensure_fallback_role(incident.guild_id),
            )
            .await
        {
            Ok(role_id) => role_id,
            Err(e) => {
                tracing::warn!(
                    "Anti-nuke: failed to prepare {} role in guild {}: {}",
                    FALLBACK_ROLE_NAME,
                    incident.guild_id,
                    e
                );
                return Containment::Failed;
            }
        };

        match self
            .ctx
            .bounded(
                "add member role",
                moderator.add_member_role(
                    incident.guild_id,
                    trusted_user,
                    role_id,
                    OWNER_THREAT_REASON,
                ),
            )
            .await
        {
            Ok(()) => {
                tracing::info!(
                    "Anti-nuke: assigned {} to {} in guild {}",
                    FALLBACK_ROLE_NAME,
                    trusted_user,
                    incident.guild_id
                );
                Containment::Granted { role_id }
            }
            Err(e) => {
                tracing::warn!(
                    "Anti-nuke: failed to assign {} to {} in guild {}: {}",
                    FALLBACK_ROLE_NAME,
                    trusted_user,
                    incident.guild_id,
                    e
                );
                Containment::Failed
            }
        }
    }

    async fn deliver_direct(&self, user_id: u64, alert: &Alert) -> bool {
        match self
            .ctx
            .bounded(
                "send direct alert",
                self.ctx.moderator.send_direct_alert(user_id, alert),
            )
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Anti-nuke: failed to DM alert to {}: {}", user_id, e);
                false
            }
        }
    }

    async fn deliver_to_log_channel(&self, settings: &AntinukeSettings, alert: &Alert) -> bool {
        let Some(channel_id) = settings.log_channel_id else {
            return false;
        };

        match self
            .ctx
            .bounded(
                "send channel alert",
                self.ctx.moderator.send_channel_alert(channel_id, alert),
            )
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    "Anti-nuke: failed to post alert to log channel {}: {}",
                    channel_id,
                    e
                );
                false
            }
        }
    }
}

fn activity_line(settings: &AntinukeSettings, incident: &Incident) -> String {
    format!(
        "{} {} within {}s",
        incident.check.count,
        incident.action_type.plural_noun(),
        settings.time_window
    )
}

fn owner_alert(settings: &AntinukeSettings, incident: &Incident, containment: Containment) -> Alert {
    let mut description = format!(
        "The server owner appears to be performing malicious actions: {}.",
        activity_line(settings, incident)
    );

    match containment {
        Containment::Granted { .. } => description.push_str(&format!(
            "\n\nThe trusted user has been granted Administrator permissions via the **{}** role.\n\nPlease take immediate action to secure the server.",
            FALLBACK_ROLE_NAME
        )),
        Containment::Failed => description.push_str(&format!(
            "\n\nThe **{}** role could not be assigned. Please secure the server manually.",
            FALLBACK_ROLE_NAME
        )),
        Containment::NoTrustedUser | Containment::Disabled => {
            description.push_str("\n\nPlease take immediate action to secure the server.")
        }
    }

    Alert::new(
        "🚨 EMERGENCY: Owner Account Compromise Detected",
        description,
        EMERGENCY_COLOUR,
    )
    .field("Owner", format!("<@{}> ({})", incident.owner_id, incident.owner_id), true)
    .field("Incident", incident.action_type.incident_tag(), true)
    .field("Server ID", incident.guild_id.to_string(), true)
}

fn actor_alert(
    settings: &AntinukeSettings,
    incident: &Incident,
    offense_count: i32,
    mitigation: Mitigation,
    mitigated: bool,
) -> Alert {
    let response = if mitigated {
        mitigation.describe().to_string()
    } else {
        format!("{} (failed)", mitigation.describe())
    };

    Alert::new(
        "⚠️ Anti-Nuke Alert",
        format!("Suspicious activity detected: {}.", activity_line(settings, incident)),
        WARNING_COLOUR,
    )
    .field(
        "User",
        format!("<@{}> ({})", incident.executor_id, incident.executor_id),
        true,
    )
    .field("Incident", incident.action_type.incident_tag(), true)
    .field("Offense #", offense_count.to_string(), true)
    .field("Response", response, false)
}
