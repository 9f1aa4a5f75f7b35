use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, GuildChannel, GuildId, Member, Message, Ready, Role, RoleId, User,
};
use serenity::async_trait;

use crate::{
    bot::discord::SerenityGateway,
    model::antinuke::response::EventOutcome,
    service::antinuke::{
        detector::{MonitoredEvent, ThreatDetector},
        AntinukeContext, AntinukeOptions,
    },
};

pub mod ban;
pub mod channel;
pub mod member;
pub mod ready;
pub mod role;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub options: AntinukeOptions,
}

impl Handler {
    pub fn new(db: DatabaseConnection, options: AntinukeOptions) -> Self {
        Self { db, options }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a user is banned from a guild
    async fn guild_ban_addition(&self, ctx: Context, guild_id: GuildId, banned_user: User) {
        ban::handle_guild_ban_addition(&self.db, self.options, ctx, guild_id, banned_user).await;
    }

    /// Called when a member leaves a guild, voluntarily or by kick
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(
            &self.db,
            self.options,
            ctx,
            guild_id,
            user,
            member_data_if_available,
        )
        .await;
    }

    /// Called when a channel is deleted from a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(&self.db, self.options, ctx, channel, messages).await;
    }

    /// Called when a role is deleted from a guild
    async fn guild_role_delete(
        &self,
        ctx: Context,
        guild_id: GuildId,
        removed_role_id: RoleId,
        removed_role_data_if_in_cache: Option<Role>,
    ) {
        role::handle_guild_role_delete(
            &self.db,
            self.options,
            ctx,
            guild_id,
            removed_role_id,
            removed_role_data_if_in_cache,
        )
        .await;
    }
}

/// Runs a monitored event through the threat detector and logs where it ended.
///
/// Failures are logged and swallowed so one bad event never takes down the
/// gateway task.
pub async fn process_monitored_event(
    db: &DatabaseConnection,
    options: AntinukeOptions,
    ctx: &Context,
    event: MonitoredEvent,
) {
    let gateway = SerenityGateway::new(ctx.http.clone(), ctx.cache.clone());
    let antinuke = AntinukeContext::new(db, &gateway, &gateway, options);

    match ThreatDetector::new(&antinuke).handle(event).await {
        Ok(EventOutcome::Responded(check, response)) => tracing::warn!(
            "Anti-nuke triggered in guild {} for {} ({} in window): {:?}",
            event.guild_id,
            event.action_type,
            check.count,
            response
        ),
        Ok(outcome) => tracing::debug!(
            "Processed {} in guild {}: {:?}",
            event.action_type,
            event.guild_id,
            outcome
        ),
        Err(e) => tracing::error!(
            "Failed to process {} in guild {}: {:?}",
            event.action_type,
            event.guild_id,
            e
        ),
    }
}
