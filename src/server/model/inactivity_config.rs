//! Domain models for per-guild inactivity monitoring configuration.

use chrono::{DateTime, Duration, Utc};

use crate::server::{
    error::{internal::InternalError, AppError},
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// Inactivity monitoring settings for one guild.
///
/// Guilds without a configuration are skipped by the inactivity sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct InactivityConfig {
    pub guild_id: u64,
    /// Days since last activity after which a member is marked inactive.
    pub days_until_inactive: i32,
    /// Days a member may stay inactive before being kicked.
    pub days_as_inactive_before_kick: i32,
    /// Role granted while a member is inactive.
    pub inactive_role_id: Option<u64>,
    /// Invite link included in the kick notice.
    pub invite_link: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl InactivityConfig {
    /// Converts an entity model to an inactivity config domain model at the repository boundary.
    pub fn from_entity(entity: entity::guild_inactivity_config::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(&entity.guild_id)?,
            days_until_inactive: entity.days_until_inactive,
            days_as_inactive_before_kick: entity.days_as_inactive_before_kick,
            inactive_role_id: parse_optional_u64(entity.inactive_role_id.as_deref())?,
            invite_link: entity.invite_link,
            updated_at: entity.updated_at,
        })
    }

    /// Last-activity cutoff: members last active before this are stale.
    ///
    /// # Returns
    /// - `Ok(DateTime<Utc>)` - `now` minus `days_until_inactive` days
    /// - `Err(AppError::InternalErr(DayCountOutOfRange))` - The subtraction leaves chrono's range
    pub fn inactive_threshold(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, AppError> {
        Duration::try_days(i64::from(self.days_until_inactive))
            .and_then(|period| now.checked_sub_signed(period))
            .ok_or_else(|| {
                InternalError::DayCountOutOfRange {
                    guild_id: self.guild_id,
                    days: self.days_until_inactive,
                }
                .into()
            })
    }

    /// Whether a member inactive since `inactive_since` has outlasted the grace period.
    pub fn kick_grace_expired(&self, inactive_since: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now - inactive_since > Duration::days(i64::from(self.days_as_inactive_before_kick))
    }
}

/// Parameters for creating or replacing a guild's inactivity configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertInactivityConfigParam {
    pub guild_id: u64,
    pub days_until_inactive: i32,
    pub days_as_inactive_before_kick: i32,
    pub inactive_role_id: Option<u64>,
    pub invite_link: Option<String>,
}
