mod emoji_usage;
mod event_reminder;
mod inactivity_config;
mod member_activity;
