//! Member activity repository for database operations.
//!
//! This module provides the `MemberActivityRepository` for the `member_activity` table:
//! atomic counter upserts on new activity, identity sync from gateway events, lifecycle
//! updates made by the inactivity sweep, and the candidate query the sweep runs. Entity
//! models are converted to `MemberActivity` domain models at this boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, IdenStatic,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::member_activity::{ActivityKind, MemberActivity, MemberIdentity},
};

use entity::member_activity::Column;

/// Repository providing database operations for member activity records.
pub struct MemberActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberActivityRepository<'a> {
    /// Creates a new MemberActivityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a message or reaction for a member in a single upsert.
    ///
    /// Inserts a new record with the matching counter at 1, or increments that counter in
    /// place (`count = count + 1` inside `ON CONFLICT DO UPDATE`). Either way the matching
    /// `latest_*_at` and `latest_activity_at` are set to `at`, `inactive_since` and
    /// `left_at` are cleared, and the identity columns are refreshed.
    ///
    /// # Arguments
    /// - `identity` - Member the activity belongs to
    /// - `kind` - Whether a message or a reaction was observed
    /// - `at` - When the activity happened
    ///
    /// # Returns
    /// - `Ok(())` - Record created or updated
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn record_activity(
        &self,
        identity: &MemberIdentity,
        kind: ActivityKind,
        at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let now = Utc::now();

        let (counter, latest_column) = match kind {
            ActivityKind::Message => (Column::MessageCount, Column::LatestMessageAt),
            ActivityKind::Reaction => (Column::ReactionCount, Column::LatestReactionAt),
        };
        let is_message = kind == ActivityKind::Message;

        let record = entity::member_activity::ActiveModel {
            guild_id: ActiveValue::Set(identity.guild_id.to_string()),
            user_id: ActiveValue::Set(identity.user_id.to_string()),
            username: ActiveValue::Set(identity.username.clone()),
            display_name: ActiveValue::Set(identity.display_name.clone()),
            is_bot: ActiveValue::Set(identity.is_bot),
            message_count: ActiveValue::Set(i32::from(is_message)),
            reaction_count: ActiveValue::Set(i32::from(!is_message)),
            latest_message_at: ActiveValue::Set(is_message.then_some(at)),
            latest_reaction_at: ActiveValue::Set((!is_message).then_some(at)),
            latest_activity_at: ActiveValue::Set(Some(at)),
            inactive_since: ActiveValue::Set(None),
            left_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        entity::prelude::MemberActivity::insert(record)
            .on_conflict(
                OnConflict::columns([Column::GuildId, Column::UserId])
                    .value(counter, Expr::cust(format!("\"{}\" + 1", counter.as_str())))
                    .update_columns([
                        latest_column,
                        Column::LatestActivityAt,
                        Column::InactiveSince,
                        Column::LeftAt,
                        Column::Username,
                        Column::DisplayName,
                        Column::IsBot,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Decrements a member's reaction counter.
    ///
    /// Touches nothing else: timestamps and `inactive_since` keep the values the reaction
    /// set. The counter is not floored and may go negative.
    ///
    /// # Returns
    /// - `Ok(true)` - A record existed and was decremented
    /// - `Ok(false)` - No record exists for the member
    /// - `Err(DbErr)` - Database error during update
    pub async fn remove_reaction(&self, guild_id: u64, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::MemberActivity::update_many()
            .col_expr(
                Column::ReactionCount,
                Expr::cust(format!("\"{}\" - 1", Column::ReactionCount.as_str())),
            )
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Creates the record for a member or refreshes its identity columns.
    ///
    /// Never touches counters or lifecycle columns of an existing record.
    pub async fn upsert_identity(&self, identity: &MemberIdentity) -> Result<(), DbErr> {
        let now = Utc::now();

        let record = entity::member_activity::ActiveModel {
            guild_id: ActiveValue::Set(identity.guild_id.to_string()),
            user_id: ActiveValue::Set(identity.user_id.to_string()),
            username: ActiveValue::Set(identity.username.clone()),
            display_name: ActiveValue::Set(identity.display_name.clone()),
            is_bot: ActiveValue::Set(identity.is_bot),
            message_count: ActiveValue::Set(0),
            reaction_count: ActiveValue::Set(0),
            latest_message_at: ActiveValue::Set(None),
            latest_reaction_at: ActiveValue::Set(None),
            latest_activity_at: ActiveValue::Set(None),
            inactive_since: ActiveValue::Set(None),
            left_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        entity::prelude::MemberActivity::insert(record)
            .on_conflict(
                OnConflict::columns([Column::GuildId, Column::UserId])
                    .update_columns([
                        Column::Username,
                        Column::DisplayName,
                        Column::IsBot,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Gets the activity record for a member.
    ///
    /// # Returns
    /// - `Ok(Some(MemberActivity))` - Record found
    /// - `Ok(None)` - No activity has been recorded for the member
    /// - `Err(AppError)` - Database error or corrupted stored id
    pub async fn find(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<MemberActivity>, AppError> {
        entity::prelude::MemberActivity::find()
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?
            .map(MemberActivity::from_entity)
            .transpose()
    }

    /// Gets records the inactivity sweep may need to act on.
    ///
    /// Returns non-bot, non-departed members of the guild whose latest activity is older
    /// than `threshold` or missing, plus every member already marked inactive.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to scope the query to
    /// - `threshold` - Last-activity cutoff
    ///
    /// # Returns
    /// - `Ok(Vec<MemberActivity>)` - Candidates ordered by user id
    /// - `Err(AppError)` - Database error or corrupted stored id
    pub async fn get_inactivity_candidates(
        &self,
        guild_id: u64,
        threshold: DateTime<Utc>,
    ) -> Result<Vec<MemberActivity>, AppError> {
        let entities = entity::prelude::MemberActivity::find()
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::IsBot.eq(false))
            .filter(Column::LeftAt.is_null())
            .filter(
                Condition::any()
                    .add(Column::LatestActivityAt.lt(threshold))
                    .add(Column::LatestActivityAt.is_null())
                    .add(Column::InactiveSince.is_not_null()),
            )
            .order_by_asc(Column::UserId)
            .all(self.db)
            .await?;

        entities.into_iter().map(MemberActivity::from_entity).collect()
    }

    /// Gets every member of a guild currently marked inactive.
    pub async fn get_inactive(&self, guild_id: u64) -> Result<Vec<MemberActivity>, AppError> {
        let entities = entity::prelude::MemberActivity::find()
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::InactiveSince.is_not_null())
            .order_by_asc(Column::InactiveSince)
            .all(self.db)
            .await?;

        entities.into_iter().map(MemberActivity::from_entity).collect()
    }

    /// Sets the lifecycle columns of a member.
    ///
    /// # Arguments
    /// - `inactive_since` - New value for `inactive_since` (`None` marks the member active)
    /// - `left_at` - New value for `left_at` (`None` marks the member present)
    ///
    /// # Returns
    /// - `Ok(true)` - Record updated
    /// - `Ok(false)` - No record exists for the member
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_lifecycle(
        &self,
        guild_id: u64,
        user_id: u64,
        inactive_since: Option<DateTime<Utc>>,
        left_at: Option<DateTime<Utc>>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::MemberActivity::update_many()
            .col_expr(Column::InactiveSince, Expr::value(inactive_since))
            .col_expr(Column::LeftAt, Expr::value(left_at))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Clears `left_at` for members seen in the guild's live member list.
    ///
    /// Covers members who rejoined while the bot was offline and so never produced a
    /// `guild_member_addition` event.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the members belong to
    /// - `user_ids` - Members currently in the guild
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records that were marked departed and are now present
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_present(&self, guild_id: u64, user_ids: &[u64]) -> Result<u64, DbErr> {
        if user_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::MemberActivity::update_many()
            .col_expr(Column::LeftAt, Expr::value(Option::<DateTime<Utc>>::None))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::UserId.is_in(user_ids.iter().map(|id| id.to_string())))
            .filter(Column::LeftAt.is_not_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets `inactive_since` without touching `left_at`.
    pub async fn set_inactive_since(
        &self,
        guild_id: u64,
        user_id: u64,
        inactive_since: Option<DateTime<Utc>>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::MemberActivity::update_many()
            .col_expr(Column::InactiveSince, Expr::value(inactive_since))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
