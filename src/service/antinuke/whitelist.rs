use crate::model::antinuke::settings::AntinukeSettings;

/// Whether an executor is exempt from anti-nuke mitigation.
///
/// True when the executor is whitelisted directly, holds a whitelisted role, or is
/// the trusted user. Guild owners are never passed through this check.
pub fn is_whitelisted(settings: &AntinukeSettings, executor_id: u64, executor_roles: &[u64]) -> bool {
    if settings.whitelisted_users.contains(&executor_id) {
        return true;
    }

    if settings.trusted_user == Some(executor_id) {
        return true;
    }

    executor_roles
        .iter()
        .any(|role_id| settings.whitelisted_roles.contains(role_id))
}
