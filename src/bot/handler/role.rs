use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, Role, RoleId};

use crate::{
    bot::handler::process_monitored_event,
    model::antinuke::action::ActionType,
    service::antinuke::{detector::MonitoredEvent, AntinukeOptions},
};

/// Handles the guild_role_delete event when a role is deleted from a guild.
///
/// # Arguments
/// - `db` - Database connection for anti-nuke state
/// - `options` - Anti-nuke runtime options
/// - `ctx` - Discord context used for audit log lookups and mitigation
/// - `guild_id` - Guild the role was deleted from
/// - `removed_role_id` - The deleted role
/// - `_removed_role_data_if_in_cache` - Cached role data (unused)
pub async fn handle_guild_role_delete(
    db: &DatabaseConnection,
    options: AntinukeOptions,
    ctx: Context,
    guild_id: GuildId,
    removed_role_id: RoleId,
    _removed_role_data_if_in_cache: Option<Role>,
) {
    let event = MonitoredEvent {
        guild_id: guild_id.get(),
        action_type: ActionType::RoleDelete,
        target_id: removed_role_id.get(),
    };

    process_monitored_event(db, options, &ctx, event).await;
}
