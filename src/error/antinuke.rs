//! Rule violations reported by the anti-nuke configuration service.

use thiserror::Error;

/// A configuration request that cannot be applied.
///
/// Each variant maps to a message shown to the administrator who issued the request.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AntinukeConfigError {
    #[error("Anti-nuke protection is already enabled")]
    AlreadyEnabled,

    #[error("Anti-nuke protection is already disabled")]
    AlreadyDisabled,

    #[error("Threshold must be between 1 and 100, got {0}")]
    ThresholdOutOfRange(i32),

    #[error("Time window must be between 1 and 60 seconds, got {0}")]
    TimeWindowOutOfRange(i32),

    /// Settings update carried no fields.
    #[error("Provide at least one setting to update")]
    NothingToUpdate,

    #[error("{kind} {id} is already whitelisted")]
    AlreadyWhitelisted { kind: &'static str, id: u64 },

    #[error("{kind} {id} is not whitelisted")]
    NotWhitelisted { kind: &'static str, id: u64 },

    /// Only the guild owner may choose the trusted user.
    #[error("Only the server owner can set the trusted user")]
    NotOwner,

    #[error("You cannot set yourself as the trusted user")]
    SelfTrusted,

    #[error("No trusted user is configured")]
    NoTrustedUser,
}
