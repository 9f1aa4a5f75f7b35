use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildChannel, Message};

use crate::{
    bot::handler::process_monitored_event,
    model::antinuke::action::ActionType,
    service::antinuke::{detector::MonitoredEvent, AntinukeOptions},
};

/// Handles the channel_delete event when a channel is deleted from a guild.
///
/// # Arguments
/// - `db` - Database connection for anti-nuke state
/// - `options` - Anti-nuke runtime options
/// - `ctx` - Discord context used for audit log lookups and mitigation
/// - `channel` - The deleted channel
/// - `_messages` - Cached messages of the channel (unused)
pub async fn handle_channel_delete(
    db: &DatabaseConnection,
    options: AntinukeOptions,
    ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    let event = MonitoredEvent {
        guild_id: channel.guild_id.get(),
        action_type: ActionType::ChannelDelete,
        target_id: channel.id.get(),
    };

    process_monitored_event(db, options, &ctx, event).await;
}
