//! Domain models for member activity tracking and the inactivity lifecycle.

use chrono::{DateTime, Utc};

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

/// Per-guild activity record for a single member.
///
/// `latest_activity_at` is the newer of `latest_message_at` and `latest_reaction_at` at the
/// time of the last write. `inactive_since` is only set while the member is inactive.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberActivity {
    pub guild_id: u64,
    pub user_id: u64,
    pub username: String,
    /// Guild nickname or global display name, if the member has one.
    pub display_name: Option<String>,
    pub is_bot: bool,
    /// Messages recorded for the member.
    pub message_count: i32,
    /// Reactions recorded minus reactions removed. Not floored at zero.
    pub reaction_count: i32,
    pub latest_message_at: Option<DateTime<Utc>>,
    pub latest_reaction_at: Option<DateTime<Utc>>,
    pub latest_activity_at: Option<DateTime<Utc>>,
    pub inactive_since: Option<DateTime<Utc>>,
    /// When the member left, was kicked, or was marked departed.
    pub left_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MemberActivity {
    /// Converts an entity model to a member activity domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(MemberActivity)` - The converted domain model
    /// - `Err(AppError::InternalErr)` - A stored id is not a valid snowflake
    pub fn from_entity(entity: entity::member_activity::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(&entity.guild_id)?,
            user_id: parse_u64_from_string(&entity.user_id)?,
            username: entity.username,
            display_name: entity.display_name,
            is_bot: entity.is_bot,
            message_count: entity.message_count,
            reaction_count: entity.reaction_count,
            latest_message_at: entity.latest_message_at,
            latest_reaction_at: entity.latest_reaction_at,
            latest_activity_at: entity.latest_activity_at,
            inactive_since: entity.inactive_since,
            left_at: entity.left_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Name to address the member by: display name when set, otherwise username.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }

    /// Current position of the member in the inactivity lifecycle.
    pub fn lifecycle(&self) -> LifecycleState {
        match (self.left_at, self.inactive_since) {
            (Some(at), _) => LifecycleState::Departed { at },
            (None, Some(since)) => LifecycleState::Inactive { since },
            (None, None) => LifecycleState::Active,
        }
    }
}

/// Lifecycle state derived from a member activity record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Active,
    Inactive { since: DateTime<Utc> },
    /// Kicked, left the guild, or marked departed by an administrator.
    Departed { at: DateTime<Utc> },
}

/// Identity of a member as observed on a gateway event.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberIdentity {
    pub guild_id: u64,
    pub user_id: u64,
    pub username: String,
    pub display_name: Option<String>,
    pub is_bot: bool,
}

/// Kind of tracked activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Message,
    Reaction,
}

/// Parameters for recording a message or reaction.
#[derive(Debug, Clone)]
pub struct RecordActivityParam {
    pub identity: MemberIdentity,
    pub kind: ActivityKind,
    /// When the activity happened.
    pub at: DateTime<Utc>,
    /// Emoji keys used by the activity (message content emoji or the reaction emoji).
    pub emoji: Vec<String>,
    /// Roles the member holds according to the event, when the event carried them.
    pub held_role_ids: Option<Vec<u64>>,
}

/// Status an administrator can force on a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStatus {
    Active,
    Inactive,
    Departed,
}

impl MemberStatus {
    /// Every status, in the order offered as command choices.
    pub const ALL: [MemberStatus; 3] = [Self::Active, Self::Inactive, Self::Departed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Departed => "departed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }
}
