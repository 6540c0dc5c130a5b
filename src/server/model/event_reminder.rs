//! Domain models for scheduled-event reminders.
//!
//! Reminder settings come from two places: `key="value"` tokens a human typed into the
//! event description, and the `scheduled_event_reminder` table the bot owns. The table
//! wins field by field; the description fills the gaps. The bot never writes back to the
//! description.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::server::{
    error::AppError,
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

static ROLE_ID_TOKEN: LazyLock<Regex> = LazyLock::new(|| token_pattern("roleId"));
static CHANNEL_ID_TOKEN: LazyLock<Regex> = LazyLock::new(|| token_pattern("channelId"));
static SHOULD_REMIND_TOKEN: LazyLock<Regex> = LazyLock::new(|| token_pattern("shouldRemind"));
static LATEST_REMINDER_AT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| token_pattern("latestReminderAt"));

fn token_pattern(key: &str) -> Regex {
    Regex::new(&format!(r#"(?:^|[^\w]){key}\s*=\s*"([^"]*)""#))
        .expect("reminder token pattern is valid")
}

/// Reminder settings for one scheduled event, after merging all sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderMetadata {
    /// Role mentioned in the reminder message.
    pub role_id: Option<u64>,
    /// Channel the reminder is posted to. Required for reminding.
    pub channel_id: Option<u64>,
    /// Only the literal `true` enables reminders.
    pub should_remind: bool,
    pub latest_reminder_at: Option<DateTime<Utc>>,
}

impl ReminderMetadata {
    /// Decodes `key="value"` tokens from a free-text event description.
    ///
    /// Each key is looked up independently, so missing keys, reordered keys and
    /// unrelated text around them are all tolerated. Values that do not parse are
    /// treated as absent.
    pub fn from_description(description: &str) -> Self {
        Self {
            role_id: capture(&ROLE_ID_TOKEN, description).and_then(|v| v.parse().ok()),
            channel_id: capture(&CHANNEL_ID_TOKEN, description).and_then(|v| v.parse().ok()),
            should_remind: capture(&SHOULD_REMIND_TOKEN, description) == Some("true"),
            latest_reminder_at: capture(&LATEST_REMINDER_AT_TOKEN, description)
                .and_then(parse_reminder_timestamp),
        }
    }

    /// Overlays the bot-owned reminder row on top of description metadata.
    ///
    /// Configured row fields replace the description's; the latest reminder is the
    /// newer of the two so a legacy description timestamp is still honoured.
    pub fn merged_with(self, stored: Option<&EventReminder>) -> Self {
        let Some(stored) = stored else {
            return self;
        };

        Self {
            role_id: stored.role_id.or(self.role_id),
            channel_id: stored.channel_id.or(self.channel_id),
            should_remind: stored.should_remind.unwrap_or(self.should_remind),
            latest_reminder_at: self.latest_reminder_at.max(stored.latest_reminder_at),
        }
    }
}

fn capture<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
}

/// Accepts RFC 3339 timestamps and Unix epoch milliseconds.
fn parse_reminder_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    value
        .parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
}

/// Bot-owned reminder state for one scheduled event.
///
/// Configuration fields are `None` when not set by command, letting the event
/// description supply them.
#[derive(Debug, Clone, PartialEq)]
pub struct EventReminder {
    pub event_id: u64,
    pub guild_id: u64,
    pub channel_id: Option<u64>,
    pub role_id: Option<u64>,
    pub should_remind: Option<bool>,
    pub latest_reminder_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl EventReminder {
    pub fn from_entity(entity: entity::scheduled_event_reminder::Model) -> Result<Self, AppError> {
        Ok(Self {
            event_id: parse_u64_from_string(&entity.event_id)?,
            guild_id: parse_u64_from_string(&entity.guild_id)?,
            channel_id: parse_optional_u64(entity.channel_id.as_deref())?,
            role_id: parse_optional_u64(entity.role_id.as_deref())?,
            should_remind: entity.should_remind,
            latest_reminder_at: entity.latest_reminder_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for configuring reminders on an event by command.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigureEventReminderParam {
    pub event_id: u64,
    pub guild_id: u64,
    pub channel_id: u64,
    pub role_id: Option<u64>,
    pub should_remind: bool,
}
