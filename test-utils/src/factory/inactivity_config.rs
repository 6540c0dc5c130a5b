//! Guild inactivity configuration factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild inactivity configuration rows.
///
/// Defaults to 30 days until inactive, 10 days before kick, no role and no invite link.
pub struct InactivityConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    days_until_inactive: i32,
    days_as_inactive_before_kick: i32,
    inactive_role_id: Option<String>,
    invite_link: Option<String>,
}

impl<'a> InactivityConfigFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            days_until_inactive: 30,
            days_as_inactive_before_kick: 10,
            inactive_role_id: None,
            invite_link: None,
        }
    }

    pub fn days_until_inactive(mut self, days: i32) -> Self {
        self.days_until_inactive = days;
        self
    }

    pub fn days_as_inactive_before_kick(mut self, days: i32) -> Self {
        self.days_as_inactive_before_kick = days;
        self
    }

    pub fn inactive_role_id(mut self, role_id: Option<String>) -> Self {
        self.inactive_role_id = role_id;
        self
    }

    pub fn invite_link(mut self, invite_link: Option<String>) -> Self {
        self.invite_link = invite_link;
        self
    }

    /// Builds and inserts the configuration row.
    ///
    /// # Returns
    /// - `Ok(entity::guild_inactivity_config::Model)` - Created configuration
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_inactivity_config::Model, DbErr> {
        entity::guild_inactivity_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            days_until_inactive: ActiveValue::Set(self.days_until_inactive),
            days_as_inactive_before_kick: ActiveValue::Set(self.days_as_inactive_before_kick),
            inactive_role_id: ActiveValue::Set(self.inactive_role_id),
            invite_link: ActiveValue::Set(self.invite_link),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild inactivity configuration with default thresholds.
pub async fn create_inactivity_config(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::guild_inactivity_config::Model, DbErr> {
    InactivityConfigFactory::new(db, guild_id).build().await
}
