pub use super::emoji_usage::Entity as EmojiUsage;
pub use super::guild_inactivity_config::Entity as GuildInactivityConfig;
pub use super::member_activity::Entity as MemberActivity;
pub use super::scheduled_event_reminder::Entity as ScheduledEventReminder;
