//! Discord-side views of guild members and scheduled events.
//!
//! These are the shapes returned by the `GuildDirectory` seam so services never handle
//! serenity models directly.

use chrono::{DateTime, Utc};
use serenity::all::{Member, ScheduledEvent};

/// A live guild member as reported by Discord.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryMember {
    pub user_id: u64,
    pub username: String,
    pub display_name: Option<String>,
    pub is_bot: bool,
    pub role_ids: Vec<u64>,
    pub joined_at: Option<DateTime<Utc>>,
}

impl DirectoryMember {
    /// Converts a serenity guild member.
    pub fn from_member(member: &Member) -> Self {
        Self {
            user_id: member.user.id.get(),
            username: member.user.name.clone(),
            display_name: member
                .nick
                .clone()
                .or_else(|| member.user.global_name.clone()),
            is_bot: member.user.bot,
            role_ids: member.roles.iter().map(|role| role.get()).collect(),
            joined_at: member.joined_at.map(|at| at.to_utc()),
        }
    }

    /// Name to address the member by.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

/// A guild scheduled event.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledEventInfo {
    pub event_id: u64,
    pub guild_id: u64,
    pub name: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl ScheduledEventInfo {
    /// Converts a serenity scheduled event.
    pub fn from_event(event: &ScheduledEvent) -> Self {
        Self {
            event_id: event.id.get(),
            guild_id: event.guild_id.get(),
            name: event.name.clone(),
            description: event.description.clone(),
            start_time: event.start_time.to_utc(),
        }
    }

    /// Link Discord renders as the event card.
    pub fn url(&self) -> String {
        format!(
            "https://discord.com/events/{}/{}",
            self.guild_id, self.event_id
        )
    }
}
