use chrono::{DateTime, Utc};

use crate::server::model::{
    directory::DirectoryMember, inactivity_config::InactivityConfig,
    member_activity::MemberActivity,
};

/// What the sweep should do with one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Active member whose latest activity is older than the threshold.
    MarkInactive,
    /// Inactive member whose grace period has run out.
    Kick,
    /// Inactive member still inside the grace period.
    WithinGrace,
    Skip(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No longer in the guild.
    NotInGuild,
    Bot,
    /// Never active, but joined after the threshold.
    Newcomer,
    RecentlyActive,
}

/// Classifies a candidate record against the live member and the guild configuration.
///
/// # Arguments
/// - `record` - Stored activity record
/// - `live` - The member as currently seen on Discord, `None` if they left
/// - `config` - Guild inactivity configuration
/// - `threshold` - Last-activity cutoff from `InactivityConfig::inactive_threshold`
/// - `now` - Evaluation time
pub fn classify(
    record: &MemberActivity,
    live: Option<&DirectoryMember>,
    config: &InactivityConfig,
    threshold: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Classification {
    let Some(live) = live else {
        return Classification::Skip(SkipReason::NotInGuild);
    };
    if live.is_bot || record.is_bot {
        return Classification::Skip(SkipReason::Bot);
    }

    if let Some(inactive_since) = record.inactive_since {
        return if config.kick_grace_expired(inactive_since, now) {
            Classification::Kick
        } else {
            Classification::WithinGrace
        };
    }

    match record.latest_activity_at {
        Some(latest) if latest >= threshold => Classification::Skip(SkipReason::RecentlyActive),
        Some(_) => Classification::MarkInactive,
        None => match live.joined_at {
            Some(joined_at) if joined_at > threshold => {
                Classification::Skip(SkipReason::Newcomer)
            }
            _ => Classification::MarkInactive,
        },
    }
}
