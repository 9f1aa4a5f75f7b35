//! Outcomes of the threat responder.

use std::time::Duration;

use super::action::ThreatCheck;

/// Name of the role handed to the trusted user when the owner account is compromised.
pub const FALLBACK_ROLE_NAME: &str = "Gabe Fallback Admin";

/// Audit log reason attached to owner-compromise containment.
pub const OWNER_THREAT_REASON: &str = "Anti-nuke: Owner compromise detected";

/// How long a first offender stays timed out.
pub const TIMEOUT_DURATION: Duration = Duration::from_secs(30 * 60);

/// Escalation ladder applied to a non-owner offender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mitigation {
    /// First offense: communication timeout.
    Timeout,
    /// Second offense: every role except `@everyone` is removed.
    RemoveRoles,
    /// Third and later offenses.
    Kick,
}

impl Mitigation {
    /// Picks the step for the offender's offense count (1-based).
    pub fn for_offense(offense_count: i32) -> Self {
        match offense_count {
            i32::MIN..=1 => Self::Timeout,
            2 => Self::RemoveRoles,
            _ => Self::Kick,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Timeout => "Muted for 30 minutes",
            Self::RemoveRoles => "Permissions removed",
            Self::Kick => "Kicked from server",
        }
    }

    /// Audit log reason attached to the moderation call.
    pub fn audit_reason(&self) -> &'static str {
        match self {
            Self::Timeout => "Anti-nuke: 1st offense - 30 minute timeout",
            Self::RemoveRoles => "Anti-nuke: 2nd offense - removing permissions",
            Self::Kick => "Anti-nuke: 3rd+ offense - kicked from server",
        }
    }
}

/// Result of the owner-compromise containment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// Containment is turned off in configuration.
    Disabled,
    /// No trusted user to hand the fallback role to.
    NoTrustedUser,
    /// The trusted user was given the fallback admin role.
    Granted { role_id: u64 },
    /// The moderation call failed; notification still went out.
    Failed,
}

/// What the responder attempted for one incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatResponse {
    Owner {
        containment: Containment,
        trusted_user_alerted: bool,
        log_channel_alerted: bool,
    },
    Actor {
        offense_count: i32,
        mitigation: Mitigation,
        mitigated: bool,
        owner_alerted: bool,
        log_channel_alerted: bool,
    },
}

/// What the detector did with one monitored event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Protection is turned off for the guild.
    Disabled,
    /// No audit entry, or the latest entry concerns a different target.
    Unattributed,
    /// The bot performed the action itself.
    SelfAction,
    /// The executor is exempt.
    Whitelisted,
    /// Recorded; threshold not reached.
    Recorded(ThreatCheck),
    /// Recorded, threshold reached and a response was attempted.
    Responded(ThreatCheck, ThreatResponse),
}
