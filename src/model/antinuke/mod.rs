//! Anti-nuke domain models.

pub mod action;
pub mod alert;
pub mod response;
pub mod settings;
pub mod summary;
pub mod whitelist;

use sea_orm::DbErr;

/// Parses a snowflake persisted as text.
///
/// # Returns
/// - `Ok(u64)` - Parsed id
/// - `Err(DbErr::Custom)` - Stored value is not a valid id
pub(crate) fn parse_id(value: &str, field: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", field, e)))
}
