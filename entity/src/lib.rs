//! SeaORM entity models for the guildkeeper database schema.

pub mod prelude;

pub mod emoji_usage;
pub mod guild_inactivity_config;
pub mod member_activity;
pub mod scheduled_event_reminder;
