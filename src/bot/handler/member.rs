//! Member removal handling.
//!
//! Discord sends the same removal event for kicks and voluntary leaves. The
//! detector tells them apart through the audit log, so every removal is forwarded
//! as a potential kick.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, Member, User};

use crate::{
    bot::handler::process_monitored_event,
    model::antinuke::action::ActionType,
    service::antinuke::{detector::MonitoredEvent, AntinukeOptions},
};

/// Handles the guild_member_removal event when a member leaves or is kicked.
///
/// # Arguments
/// - `db` - Database connection for anti-nuke state
/// - `options` - Anti-nuke runtime options
/// - `ctx` - Discord context used for audit log lookups and mitigation
/// - `guild_id` - Guild the member was removed from
/// - `user` - The removed user
/// - `_member_data_if_available` - Cached member data (unused)
pub async fn handle_guild_member_removal(
    db: &DatabaseConnection,
    options: AntinukeOptions,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    let event = MonitoredEvent {
        guild_id: guild_id.get(),
        action_type: ActionType::Kick,
        target_id: user.id.get(),
    };

    process_monitored_event(db, options, &ctx, event).await;
}
