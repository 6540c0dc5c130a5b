//! Scheduled-event reminders.
//!
//! Once an hour every guild's scheduled events are checked. Reminder settings are the
//! merge of the event description tokens and the bot-owned reminder row (see
//! `ReminderMetadata`). An event is due when it starts within the next 24 hours and no
//! reminder was sent since 24 hours before its start. Firing records the reminder time
//! first, then posts the reminder to the configured channel.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::event_reminder::EventReminderRepository,
    error::AppError,
    model::{
        directory::ScheduledEventInfo,
        event_reminder::{ConfigureEventReminderParam, ReminderMetadata},
    },
    service::discord::{GuildDirectory, Notifier},
    util::emoji::strip_emoji,
};

/// How far ahead of an event's start the reminder goes out.
const REMINDER_WINDOW_HOURS: i64 = 24;

/// Outcome of checking one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderDecision {
    Due,
    Skip(ReminderSkip),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderSkip {
    NoChannel,
    Disabled,
    /// Starts more than 24 hours from now.
    NotYetInWindow,
    /// A reminder was already sent for this occurrence.
    AlreadyReminded,
    /// The event has already started.
    AlreadyStarted,
}

/// Counts from one guild's reminder pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderPass {
    pub fired: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Decides whether a reminder should be sent for an event.
///
/// Requires a channel and `should_remind`. Due when `now < event_start <= now + 24h` and
/// the latest reminder, if any, predates `event_start - 24h`.
pub fn is_reminder_due(
    metadata: &ReminderMetadata,
    event_start: DateTime<Utc>,
    now: DateTime<Utc>,
) -> ReminderDecision {
    if metadata.channel_id.is_none() {
        return ReminderDecision::Skip(ReminderSkip::NoChannel);
    }
    if !metadata.should_remind {
        return ReminderDecision::Skip(ReminderSkip::Disabled);
    }

    let window = Duration::hours(REMINDER_WINDOW_HOURS);
    let window_end = now + window;
    let prior_window_start = event_start - window;

    if event_start > window_end {
        return ReminderDecision::Skip(ReminderSkip::NotYetInWindow);
    }
    if event_start <= now {
        return ReminderDecision::Skip(ReminderSkip::AlreadyStarted);
    }

    match metadata.latest_reminder_at {
        Some(latest) if latest >= prior_window_start => {
            ReminderDecision::Skip(ReminderSkip::AlreadyReminded)
        }
        _ => ReminderDecision::Due,
    }
}

/// Builds the reminder posted to the event's channel.
///
/// Emoji are stripped from the event name since they break the markdown link.
pub fn build_reminder_message(
    event: &ScheduledEventInfo,
    role_id: Option<u64>,
    interested: &[String],
) -> String {
    let mut message = String::new();

    if let Some(role_id) = role_id {
        message.push_str(&format!("<@&{}> ", role_id));
    }

    let name = strip_emoji(&event.name);
    let name = if name.is_empty() { "Event".to_string() } else { name };

    message.push_str(&format!(
        "Reminder: [{}]({}) starts <t:{}:R>",
        name,
        event.url(),
        event.start_time.timestamp()
    ));

    if interested.is_empty() {
        message.push_str("\nNo one has marked themselves as interested yet.");
    } else {
        message.push_str(&format!("\nInterested: {}", interested.join(", ")));
    }

    message
}

pub struct EventReminderService<'a> {
    db: &'a DatabaseConnection,
    directory: &'a dyn GuildDirectory,
    notifier: &'a dyn Notifier,
}

impl<'a> EventReminderService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        directory: &'a dyn GuildDirectory,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            db,
            directory,
            notifier,
        }
    }

    /// Runs the reminder pass over every guild the bot is in.
    pub async fn process_all_guilds(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        for guild_id in self.directory.guild_ids().await? {
            if let Err(e) = self.process_guild_reminders(guild_id, now).await {
                tracing::error!("Failed to process reminders for guild {}: {}", guild_id, e);
            }
        }

        Ok(())
    }

    /// Checks every scheduled event of a guild and fires the due reminders.
    ///
    /// A failure on one event is logged and the pass continues with the next.
    ///
    /// # Returns
    /// - `Ok(ReminderPass)` - Counts of fired, skipped and failed events
    /// - `Err(AppError)` - The guild's events could not be listed
    pub async fn process_guild_reminders(
        &self,
        guild_id: u64,
        now: DateTime<Utc>,
    ) -> Result<ReminderPass, AppError> {
        let repo = EventReminderRepository::new(self.db);
        let mut pass = ReminderPass::default();

        for event in self.directory.scheduled_events(guild_id).await? {
            let stored = match repo.get_by_event_id(event.event_id).await {
                Ok(stored) => stored,
                Err(e) => {
                    pass.failed += 1;
                    tracing::error!(
                        "Failed to load reminder state for event {}: {}",
                        event.event_id,
                        e
                    );
                    continue;
                }
            };

            let metadata =
                ReminderMetadata::from_description(event.description.as_deref().unwrap_or(""))
                    .merged_with(stored.as_ref());

            match is_reminder_due(&metadata, event.start_time, now) {
                ReminderDecision::Skip(reason) => {
                    pass.skipped += 1;
                    tracing::debug!("Skipping reminder for event {}: {:?}", event.event_id, reason);
                }
                ReminderDecision::Due => match self.fire_reminder(&event, &metadata, now).await {
                    Ok(()) => pass.fired += 1,
                    Err(e) => {
                        pass.failed += 1;
                        tracing::error!(
                            "Failed to send reminder for event {} in guild {}: {}",
                            event.event_id,
                            guild_id,
                            e
                        );
                    }
                },
            }
        }

        Ok(pass)
    }

    /// Records the reminder and posts it to the configured channel.
    ///
    /// # Returns
    /// - `Ok(())` - Reminder recorded and sent
    /// - `Err(AppError::BadRequest)` - Metadata has no channel
    /// - `Err(AppError)` - Discord or database failure
    pub async fn fire_reminder(
        &self,
        event: &ScheduledEventInfo,
        metadata: &ReminderMetadata,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let channel_id = metadata.channel_id.ok_or_else(|| {
            AppError::BadRequest(format!("Event {} has no reminder channel", event.event_id))
        })?;

        let interested = self
            .directory
            .interested_users(event.guild_id, event.event_id)
            .await?;

        EventReminderRepository::new(self.db)
            .record_reminder(event.event_id, event.guild_id, now)
            .await?;

        let message = build_reminder_message(event, metadata.role_id, &interested);
        self.notifier
            .send_channel_message(channel_id, &message)
            .await?;

        tracing::info!(
            "Sent reminder for event {} ({}) to channel {}",
            event.name,
            event.event_id,
            channel_id
        );

        Ok(())
    }

    /// Stores reminder settings for a scheduled event of the guild.
    ///
    /// # Returns
    /// - `Ok(())` - Settings stored
    /// - `Err(AppError::NotFound)` - The guild has no upcoming event with that id
    pub async fn configure(&self, param: &ConfigureEventReminderParam) -> Result<(), AppError> {
        let exists = self
            .directory
            .scheduled_events(param.guild_id)
            .await?
            .iter()
            .any(|event| event.event_id == param.event_id);

        if !exists {
            return Err(AppError::NotFound(format!(
                "No upcoming scheduled event with id {} in this server.",
                param.event_id
            )));
        }

        EventReminderRepository::new(self.db)
            .configure(param)
            .await?;

        Ok(())
    }
}
