//! Discord bot integration for anti-nuke monitoring.
//!
//! The bot listens for destructive guild events (bans, kicks, channel and role
//! deletions) and feeds each one through the anti-nuke threat detector. Discord
//! access for the detector is provided by `discord::SerenityGateway`, built from the
//! event's serenity context.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive channel and role deletion events
//! - `GUILD_MODERATION` - Receive ban events
//! - `GUILD_MEMBERS` - Receive member removal events (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod discord;
pub mod handler;
pub mod start;
