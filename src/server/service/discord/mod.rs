//! Discord seams used by the services.
//!
//! Services never call serenity directly. They talk to Discord through `GuildDirectory`
//! (members, roles, kicks, scheduled events) and `Notifier` (direct messages and channel
//! messages), so the inactivity and reminder logic can run against a recording fake in
//! tests. `SerenityDiscord` implements both traits on the bot's shared HTTP client.

pub mod client;

pub use client::SerenityDiscord;

use serenity::async_trait;

use crate::server::{
    error::AppError,
    model::directory::{DirectoryMember, ScheduledEventInfo},
};

/// Read and moderation access to guilds the bot is in.
#[async_trait]
pub trait GuildDirectory: Send + Sync {
    /// Ids of every guild the bot is a member of.
    async fn guild_ids(&self) -> Result<Vec<u64>, AppError>;

    async fn guild_name(&self, guild_id: u64) -> Result<String, AppError>;

    /// Every current member of the guild.
    async fn list_members(&self, guild_id: u64) -> Result<Vec<DirectoryMember>, AppError>;

    /// Fetches one member.
    ///
    /// # Returns
    /// - `Ok(Some(DirectoryMember))` - Member is in the guild
    /// - `Ok(None)` - User is not a member of the guild
    /// - `Err(AppError)` - Discord request failed
    async fn get_member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<DirectoryMember>, AppError>;

    async fn add_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError>;

    async fn remove_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError>;

    async fn kick(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), AppError>;

    /// Scheduled events of the guild that have not ended.
    async fn scheduled_events(&self, guild_id: u64) -> Result<Vec<ScheduledEventInfo>, AppError>;

    /// Display names of users marked as interested in an event.
    async fn interested_users(&self, guild_id: u64, event_id: u64)
        -> Result<Vec<String>, AppError>;
}

/// Outbound messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends a direct message. Fails when the user does not accept DMs from the bot.
    async fn send_dm(&self, user_id: u64, content: &str) -> Result<(), AppError>;

    async fn send_channel_message(&self, channel_id: u64, content: &str) -> Result<(), AppError>;
}
