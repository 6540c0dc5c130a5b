//! Administrator override of a member's lifecycle status.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::member_activity::MemberActivityRepository,
    error::AppError,
    model::member_activity::{MemberActivity, MemberIdentity, MemberStatus},
    service::{config_cache::GuildConfigCache, discord::GuildDirectory},
};

/// Audit log reason for role changes made through the override.
const OVERRIDE_REASON: &str = "Member status set by an administrator";

pub struct MemberStatusService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a GuildConfigCache,
    directory: &'a dyn GuildDirectory,
}

impl<'a> MemberStatusService<'a> {
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

    /// Forces a member into `status`, bypassing the inactivity sweep.
    ///
    /// Creates the record from `identity` when the member has none. `Active` and
    /// `Inactive` require the member to currently be in the guild; `Departed` does not.
    /// Role changes for the guild's inactive role are best effort.
    ///
    /// - `Active` clears `inactive_since` and `left_at` and removes the inactive role.
    /// - `Inactive` keeps an existing `inactive_since` or sets it to `now`, clears
    ///   `left_at`, and grants the inactive role.
    /// - `Departed` clears `inactive_since` and sets `left_at = now`.
    ///
    /// # Returns
    /// - `Ok(MemberActivity)` - The updated record
    /// - `Err(AppError::NotFound)` - `Active` or `Inactive` requested for someone not in the guild
    /// - `Err(AppError)` - Database or Discord error
    pub async fn set_member_status(
        &self,
        identity: &MemberIdentity,
        status: MemberStatus,
        now: DateTime<Utc>,
    ) -> Result<MemberActivity, AppError> {
        let repo = MemberActivityRepository::new(self.db);
        let (guild_id, user_id) = (identity.guild_id, identity.user_id);

        if status != MemberStatus::Departed
            && self.directory.get_member(guild_id, user_id).await?.is_none()
        {
            return Err(AppError::NotFound(format!(
                "<@{}> is not a member of this server.",
                user_id
            )));
        }

        repo.upsert_identity(identity).await?;
        let current = repo
            .find(guild_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No activity record for <@{}>", user_id)))?;

        match status {
            MemberStatus::Active => {
                repo.set_lifecycle(guild_id, user_id, None, None).await?;
                self.change_inactive_role(identity, false).await;
            }
            MemberStatus::Inactive => {
                let since = current.inactive_since.unwrap_or(now);
                repo.set_lifecycle(guild_id, user_id, Some(since), None)
                    .await?;
                self.change_inactive_role(identity, true).await;
            }
            MemberStatus::Departed => {
                repo.set_lifecycle(guild_id, user_id, None, Some(now))
                    .await?;
            }
        }

        tracing::info!(
            "Status of {} ({}) in guild {} set to {}",
            identity.username,
            user_id,
            guild_id,
            status.as_str()
        );

        repo.find(guild_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No activity record for <@{}>", user_id)))
    }

    async fn change_inactive_role(&self, identity: &MemberIdentity, grant: bool) {
        let role_id = match self.cache.get(self.db, identity.guild_id).await {
            Ok(Some(config)) => config.inactive_role_id,
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(
                    "Failed to load inactivity config for guild {}: {}",
                    identity.guild_id,
                    e
                );
                None
            }
        };
        let Some(role_id) = role_id else {
            return;
        };

        let result = if grant {
            self.directory
                .add_role(identity.guild_id, identity.user_id, role_id, OVERRIDE_REASON)
                .await
        } else {
            self.directory
                .remove_role(identity.guild_id, identity.user_id, role_id, OVERRIDE_REASON)
                .await
        };

        if let Err(e) = result {
            tracing::warn!(
                "Failed to update inactive role of {} in guild {}: {}",
                identity.user_id,
                identity.guild_id,
                e
            );
        }
    }
}
