//! Guild inactivity configuration repository.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::inactivity_config::{InactivityConfig, UpsertInactivityConfigParam},
};

use entity::guild_inactivity_config::Column;

/// Repository providing database operations for guild inactivity configuration.
pub struct InactivityConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InactivityConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the configuration for a guild.
    ///
    /// # Returns
    /// - `Ok(Some(InactivityConfig))` - Guild has inactivity monitoring configured
    /// - `Ok(None)` - Guild is not monitored
    /// - `Err(AppError)` - Database error or corrupted stored id
    pub async fn get_by_guild_id(
        &self,
        guild_id: u64,
    ) -> Result<Option<InactivityConfig>, AppError> {
        entity::prelude::GuildInactivityConfig::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
            .map(InactivityConfig::from_entity)
            .transpose()
    }

    /// Gets every configured guild, ordered by guild id.
    pub async fn get_all(&self) -> Result<Vec<InactivityConfig>, AppError> {
        let entities = entity::prelude::GuildInactivityConfig::find()
            .order_by_asc(Column::GuildId)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(InactivityConfig::from_entity)
            .collect()
    }

    /// Creates or replaces a guild's configuration.
    ///
    /// # Returns
    /// - `Ok(())` - Configuration stored
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: &UpsertInactivityConfigParam) -> Result<(), DbErr> {
        entity::prelude::GuildInactivityConfig::insert(entity::guild_inactivity_config::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            days_until_inactive: ActiveValue::Set(param.days_until_inactive),
            days_as_inactive_before_kick: ActiveValue::Set(param.days_as_inactive_before_kick),
            inactive_role_id: ActiveValue::Set(param.inactive_role_id.map(|id| id.to_string())),
            invite_link: ActiveValue::Set(param.invite_link.clone()),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(Column::GuildId)
                .update_columns([
                    Column::DaysUntilInactive,
                    Column::DaysAsInactiveBeforeKick,
                    Column::InactiveRoleId,
                    Column::InviteLink,
                    Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
