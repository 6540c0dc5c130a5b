//! Domain model for per-guild emoji usage counters.

use chrono::{DateTime, Utc};

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

/// How often an emoji was used in a guild's messages and reactions.
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiUsage {
    pub guild_id: u64,
    /// Unicode sequence, or `name:id` for custom emoji.
    pub emoji: String,
    pub usage_count: i32,
    pub last_used_at: DateTime<Utc>,
}

impl EmojiUsage {
    pub fn from_entity(entity: entity::emoji_usage::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(&entity.guild_id)?,
            emoji: entity.emoji,
            usage_count: entity.usage_count,
            last_used_at: entity.last_used_at,
        })
    }
}
