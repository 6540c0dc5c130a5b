//! Discord bot integration: gateway events and slash commands.
//!
//! The bot records member activity from message and reaction events, keeps member
//! identities in sync from guild and member events, and serves the administration
//! slash commands. Its HTTP client is shared with the scheduler so periodic jobs can
//! reach Discord without a second connection.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability and scheduled events
//! - `GUILD_MEMBERS` - Member join, leave and update events (privileged intent)
//! - `GUILD_MESSAGES` - Messages in guild channels
//! - `GUILD_MESSAGE_REACTIONS` - Reactions added and removed in guild channels
//! - `MESSAGE_CONTENT` - Message text for emoji tracking (privileged intent)
//! - `GUILD_SCHEDULED_EVENTS` - Scheduled event updates
//!
//! Note: `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
