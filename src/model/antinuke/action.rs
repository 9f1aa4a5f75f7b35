//! Destructive action types and action log records.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::fmt;

use super::parse_id;

/// A monitored destructive guild action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Ban,
    Kick,
    ChannelDelete,
    RoleDelete,
}

impl ActionType {
    /// Value persisted in the `action_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ban => "ban",
            Self::Kick => "kick",
            Self::ChannelDelete => "channel_delete",
            Self::RoleDelete => "role_delete",
        }
    }

    /// Parses a persisted `action_type` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ban" => Some(Self::Ban),
            "kick" => Some(Self::Kick),
            "channel_delete" => Some(Self::ChannelDelete),
            "role_delete" => Some(Self::RoleDelete),
            _ => None,
        }
    }

    /// Tag identifying the mass-action class of an incident.
    pub fn incident_tag(&self) -> &'static str {
        match self {
            Self::Ban => "mass_ban",
            Self::Kick => "mass_kick",
            Self::ChannelDelete => "mass_channel_delete",
            Self::RoleDelete => "mass_role_delete",
        }
    }

    /// Human readable plural noun used in alerts and logs ("5 bans").
    pub fn plural_noun(&self) -> &'static str {
        match self {
            Self::Ban => "bans",
            Self::Kick => "kicks",
            Self::ChannelDelete => "channel deletions",
            Self::RoleDelete => "role deletions",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable entry of the action log.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRecord {
    pub id: i32,
    pub guild_id: u64,
    pub executor_id: u64,
    pub action_type: ActionType,
    /// The banned/kicked user, deleted channel or deleted role.
    pub target_id: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl ActionRecord {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ActionRecord)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - An id column or the action type could not be parsed
    pub fn from_entity(entity: entity::antinuke_action::Model) -> Result<Self, DbErr> {
        let action_type = ActionType::parse(&entity.action_type).ok_or_else(|| {
            DbErr::Custom(format!("Unknown action_type: {}", entity.action_type))
        })?;

        let target_id = entity
            .target_id
            .as_deref()
            .map(|id| parse_id(id, "target_id"))
            .transpose()?;

        Ok(Self {
            id: entity.id,
            guild_id: parse_id(&entity.guild_id, "guild_id")?,
            executor_id: parse_id(&entity.executor_id, "executor_id")?,
            action_type,
            target_id,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for appending an action to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordActionParam {
    pub guild_id: u64,
    pub executor_id: u64,
    pub action_type: ActionType,
    pub target_id: Option<u64>,
}

/// Result of recording an action and counting the executor's trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreatCheck {
    /// `count >= threshold`.
    pub exceeded: bool,
    /// Actions by the executor inside the window, including the one just recorded.
    pub count: u64,
}
