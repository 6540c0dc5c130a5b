use chrono::{DateTime, Utc};

use crate::server::{
    data::member_activity::MemberActivityRepository,
    error::AppError,
    model::{inactivity_config::InactivityConfig, member_activity::MemberActivity},
    service::inactivity::{notice, InactivityService},
};

/// Audit log reason for granting the inactive role.
const INACTIVE_ROLE_REASON: &str = "No activity within the configured period";

/// Audit log reason for kicking an inactive member.
const KICK_REASON: &str = "Inactive past the configured grace period";

impl InactivityService<'_> {
    /// Moves a member from active to inactive.
    ///
    /// Grants the inactive role (failure is logged), persists `inactive_since = now`,
    /// then sends the inactivity notice (failure is logged).
    ///
    /// # Returns
    /// - `Ok(())` - Member marked inactive
    /// - `Err(AppError)` - Database error persisting the status
    pub(super) async fn mark_inactive(
        &self,
        config: &InactivityConfig,
        record: &MemberActivity,
        guild_name: &str,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let (guild_id, user_id) = (record.guild_id, record.user_id);

        if let Some(role_id) = config.inactive_role_id {
            if let Err(e) = self
                .directory
                .add_role(guild_id, user_id, role_id, INACTIVE_ROLE_REASON)
                .await
            {
                tracing::warn!(
                    "Failed to add inactive role to {} in guild {}: {}",
                    user_id,
                    guild_id,
                    e
                );
            }
        }

        MemberActivityRepository::new(self.db)
            .set_inactive_since(guild_id, user_id, Some(now))
            .await?;

        tracing::info!(
            "Marked {} ({}) inactive in guild {}",
            record.name(),
            user_id,
            guild_id
        );

        if let Err(e) = self
            .notifier
            .send_dm(user_id, &notice::inactivity_notice(guild_name, config))
            .await
        {
            tracing::warn!("Failed to send inactivity notice to {}: {}", user_id, e);
        }

        Ok(())
    }

    /// Kicks a member whose grace period has run out.
    ///
    /// The kick notice goes out first so the member can still receive it. A failed
    /// notice does not stop the kick; a failed kick leaves the record unchanged.
    ///
    /// # Returns
    /// - `Ok(())` - Member kicked and record updated
    /// - `Err(AppError)` - Kick or database update failed
    pub(super) async fn kick(
        &self,
        config: &InactivityConfig,
        record: &MemberActivity,
        guild_name: &str,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let (guild_id, user_id) = (record.guild_id, record.user_id);

        if let Err(e) = self
            .notifier
            .send_dm(
                user_id,
                &notice::kick_notice(guild_name, config.invite_link.as_deref()),
            )
            .await
        {
            tracing::warn!("Failed to send kick notice to {}: {}", user_id, e);
        }

        self.directory.kick(guild_id, user_id, KICK_REASON).await?;

        MemberActivityRepository::new(self.db)
            .set_lifecycle(guild_id, user_id, None, Some(now))
            .await?;

        tracing::info!(
            "Kicked {} ({}) from guild {} after inactivity",
            record.name(),
            user_id,
            guild_id
        );

        Ok(())
    }
}
