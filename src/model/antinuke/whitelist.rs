//! Whitelist subjects.

/// A user or role exempt from anti-nuke mitigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhitelistSubject {
    User(u64),
    Role(u64),
}

impl WhitelistSubject {
    /// Value persisted in the `kind` column.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::User(_) => "user",
            Self::Role(_) => "role",
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            Self::User(id) | Self::Role(id) => *id,
        }
    }
}
