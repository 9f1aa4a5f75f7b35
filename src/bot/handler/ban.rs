use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, User};

use crate::{
    bot::handler::process_monitored_event,
    model::antinuke::action::ActionType,
    service::antinuke::{detector::MonitoredEvent, AntinukeOptions},
};

/// Handles the guild_ban_addition event when a user is banned from a guild.
///
/// # Arguments
/// - `db` - Database connection for anti-nuke state
/// - `options` - Anti-nuke runtime options
/// - `ctx` - Discord context used for audit log lookups and mitigation
/// - `guild_id` - Guild the ban happened in
/// - `banned_user` - The banned user, matched against the audit log target
pub async fn handle_guild_ban_addition(
    db: &DatabaseConnection,
    options: AntinukeOptions,
    ctx: Context,
    guild_id: GuildId,
    banned_user: User,
) {
    let event = MonitoredEvent {
        guild_id: guild_id.get(),
        action_type: ActionType::Ban,
        target_id: banned_user.id.get(),
    };

    process_monitored_event(db, options, &ctx, event).await;
}
