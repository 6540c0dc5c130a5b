//! Scheduled event reminder factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating scheduled event reminder side-table rows.
///
/// Every configuration field defaults to `None` so the event description stays
/// authoritative unless a test overrides it.
pub struct EventReminderFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: String,
    guild_id: String,
    channel_id: Option<String>,
    role_id: Option<String>,
    should_remind: Option<bool>,
    latest_reminder_at: Option<DateTime<Utc>>,
}

impl<'a> EventReminderFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            event_id: next_id().to_string(),
            guild_id: guild_id.into(),
            channel_id: None,
            role_id: None,
            should_remind: None,
            latest_reminder_at: None,
        }
    }

    pub fn event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = event_id.into();
        self
    }

    pub fn channel_id(mut self, channel_id: Option<String>) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn role_id(mut self, role_id: Option<String>) -> Self {
        self.role_id = role_id;
        self
    }

    pub fn should_remind(mut self, should_remind: Option<bool>) -> Self {
        self.should_remind = should_remind;
        self
    }

    pub fn latest_reminder_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.latest_reminder_at = at;
        self
    }

    pub async fn build(self) -> Result<entity::scheduled_event_reminder::Model, DbErr> {
        entity::scheduled_event_reminder::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            role_id: ActiveValue::Set(self.role_id),
            should_remind: ActiveValue::Set(self.should_remind),
            latest_reminder_at: ActiveValue::Set(self.latest_reminder_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty reminder row for a fresh event id in the guild.
pub async fn create_event_reminder(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::scheduled_event_reminder::Model, DbErr> {
    EventReminderFactory::new(db, guild_id).build().await
}
