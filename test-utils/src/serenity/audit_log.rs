//! Test factory for creating Serenity AuditLogEntry objects.

use serenity::model::guild::audit_log::AuditLogEntry;

/// Creates a test audit log entry.
///
/// # Arguments
/// - `action_type` - Raw Discord audit log action code (e.g. `22` for a ban, `12` for
///   a channel deletion)
/// - `user_id` - The executor
/// - `target_id` - The affected user, channel or role, if any
///
/// # Panics
/// - If the JSON cannot be deserialized into an AuditLogEntry (indicates invalid test data)
pub fn create_test_audit_log_entry(
    action_type: u8,
    user_id: u64,
    target_id: Option<u64>,
) -> AuditLogEntry {
    serde_json::from_value(serde_json::json!({
        "id": "1100000000000000000",
        "action_type": action_type,
        "user_id": user_id.to_string(),
        "target_id": target_id.map(|id| id.to_string()),
        "changes": [],
        "options": null,
        "reason": null,
    }))
    .expect("Failed to create test audit log entry - invalid JSON structure")
}
