//! Scheduled event reminder repository.
//!
//! Stores the reminder state the bot owns for each scheduled event, keyed by event id.

use chrono::{DateTime, Utc};
use sea_orm::{sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    error::AppError,
    model::event_reminder::{ConfigureEventReminderParam, EventReminder},
};

use entity::scheduled_event_reminder::Column;

pub struct EventReminderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventReminderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the stored reminder state for an event, if any.
    pub async fn get_by_event_id(&self, event_id: u64) -> Result<Option<EventReminder>, AppError> {
        entity::prelude::ScheduledEventReminder::find_by_id(event_id.to_string())
            .one(self.db)
            .await?
            .map(EventReminder::from_entity)
            .transpose()
    }

    /// Stores reminder configuration set by command, keeping any recorded reminder time.
    pub async fn configure(&self, param: &ConfigureEventReminderParam) -> Result<(), DbErr> {
        entity::prelude::ScheduledEventReminder::insert(
            entity::scheduled_event_reminder::ActiveModel {
                event_id: ActiveValue::Set(param.event_id.to_string()),
                guild_id: ActiveValue::Set(param.guild_id.to_string()),
                channel_id: ActiveValue::Set(Some(param.channel_id.to_string())),
                role_id: ActiveValue::Set(param.role_id.map(|id| id.to_string())),
                should_remind: ActiveValue::Set(Some(param.should_remind)),
                latest_reminder_at: ActiveValue::Set(None),
                updated_at: ActiveValue::Set(Utc::now()),
            },
        )
        .on_conflict(
            OnConflict::column(Column::EventId)
                .update_columns([
                    Column::ChannelId,
                    Column::RoleId,
                    Column::ShouldRemind,
                    Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Records that a reminder was sent for an event.
    ///
    /// Creates a row with only `latest_reminder_at` set when the event was configured
    /// purely through its description, so description settings stay authoritative.
    pub async fn record_reminder(
        &self,
        event_id: u64,
        guild_id: u64,
        at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::ScheduledEventReminder::insert(
            entity::scheduled_event_reminder::ActiveModel {
                event_id: ActiveValue::Set(event_id.to_string()),
                guild_id: ActiveValue::Set(guild_id.to_string()),
                channel_id: ActiveValue::Set(None),
                role_id: ActiveValue::Set(None),
                should_remind: ActiveValue::Set(None),
                latest_reminder_at: ActiveValue::Set(Some(at)),
                updated_at: ActiveValue::Set(Utc::now()),
            },
        )
        .on_conflict(
            OnConflict::column(Column::EventId)
                .update_columns([Column::LatestReminderAt, Column::UpdatedAt])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
