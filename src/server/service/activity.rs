//! Activity recording for messages and reactions.
//!
//! `ActivityService` performs the counter upsert for each observed message or reaction
//! and then runs the best-effort side effects: emoji usage tracking and removal of the
//! guild's inactive role from a member who became active again. Side effects are logged
//! when they fail and never undo the recorded activity.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{emoji_usage::EmojiUsageRepository, member_activity::MemberActivityRepository},
    error::AppError,
    model::member_activity::{MemberIdentity, RecordActivityParam},
    service::{config_cache::GuildConfigCache, discord::GuildDirectory},
};

/// Audit log reason for removing the inactive role.
const ROLE_REMOVAL_REASON: &str = "Member is active again";

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a GuildConfigCache,
    directory: &'a dyn GuildDirectory,
}

impl<'a> ActivityService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        cache: &'a GuildConfigCache,
        directory: &'a dyn GuildDirectory,
    ) -> Self {
        Self {
            db,
            cache,
            directory,
        }
    }

    /// Records a message or reaction for a member.
    ///
    /// When the event did not carry the member's roles, the record's inactive status
    /// before this activity decides whether the inactive role is removed.
    ///
    /// # Returns
    /// - `Ok(())` - Activity recorded; side effects attempted
    /// - `Err(AppError)` - Database error reading or writing the activity record
    pub async fn record(&self, param: RecordActivityParam) -> Result<(), AppError> {
        let repo = MemberActivityRepository::new(self.db);
        let identity = &param.identity;

        let was_inactive = match param.held_role_ids {
            Some(_) => false,
            None => repo
                .find(identity.guild_id, identity.user_id)
                .await?
                .is_some_and(|record| record.inactive_since.is_some()),
        };

        repo.record_activity(identity, param.kind, param.at).await?;

        tracing::debug!(
            "Recorded {:?} from {} in guild {}",
            param.kind,
            identity.user_id,
            identity.guild_id
        );

        self.track_emoji(identity.guild_id, &param.emoji, param.at).await;
        self.clear_inactive_role(identity, param.held_role_ids.as_deref(), was_inactive)
            .await;

        Ok(())
    }

    /// Decrements the reaction counter of a member.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter decremented
    /// - `Ok(false)` - Member has no activity record
    pub async fn remove_reaction(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        let removed = MemberActivityRepository::new(self.db)
            .remove_reaction(guild_id, user_id)
            .await?;

        Ok(removed)
    }

    async fn track_emoji(&self, guild_id: u64, emoji: &[String], at: DateTime<Utc>) {
        let repo = EmojiUsageRepository::new(self.db);

        for key in emoji {
            if let Err(e) = repo.increment(guild_id, key, at).await {
                tracing::warn!(
                    "Failed to track emoji {} in guild {}: {}",
                    key,
                    guild_id,
                    e
                );
            }
        }
    }

    async fn clear_inactive_role(
        &self,
        identity: &MemberIdentity,
        held_role_ids: Option<&[u64]>,
        was_inactive: bool,
    ) {
        let config = match self.cache.get(self.db, identity.guild_id).await {
            Ok(Some(config)) => config,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(
                    "Failed to load inactivity config for guild {}: {}",
                    identity.guild_id,
                    e
                );
                return;
            }
        };

        let Some(role_id) = config.inactive_role_id else {
            return;
        };

        let holds_role = match held_role_ids {
            Some(roles) => roles.contains(&role_id),
            None => was_inactive,
        };
        if !holds_role {
            return;
        }

        match self
            .directory
            .remove_role(
                identity.guild_id,
                identity.user_id,
                role_id,
                ROLE_REMOVAL_REASON,
            )
            .await
        {
            Ok(()) => tracing::info!(
                "Removed inactive role from {} ({}) in guild {}",
                identity.username,
                identity.user_id,
                identity.guild_id
            ),
            Err(e) => tracing::warn!(
                "Failed to remove inactive role from {} in guild {}: {}",
                identity.user_id,
                identity.guild_id,
                e
            ),
        }
    }
}
