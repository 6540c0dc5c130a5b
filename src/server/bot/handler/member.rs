use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, GuildMemberUpdateEvent, Member, User};

use crate::server::{
    bot::handler::identity_from_user, data::member_activity::MemberActivityRepository,
};

/// Handles the guild_member_addition event when a member joins a guild
///
/// Starts tracking the member, or re-tracks a member who left and rejoined.
pub async fn handle_guild_member_addition(
    db: &DatabaseConnection,
    _ctx: Context,
    new_member: Member,
) {
    let guild_id = new_member.guild_id.get();
    let identity = identity_from_user(guild_id, &new_member.user, new_member.nick.as_deref());
    let repo = MemberActivityRepository::new(db);

    if let Err(e) = repo.upsert_identity(&identity).await {
        tracing::error!("Failed to record joining member {}: {}", identity.user_id, e);
        return;
    }

    if let Err(e) = repo
        .set_lifecycle(guild_id, identity.user_id, None, None)
        .await
    {
        tracing::error!(
            "Failed to reset status of rejoining member {}: {}",
            identity.user_id,
            e
        );
        return;
    }

    tracing::info!("{} joined guild {}", identity.username, guild_id);
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(
    db: &DatabaseConnection,
    _ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    match MemberActivityRepository::new(db)
        .set_lifecycle(guild_id.get(), user.id.get(), None, Some(Utc::now()))
        .await
    {
        Ok(true) => tracing::info!("{} left guild {}", user.name, guild_id),
        Ok(false) => tracing::debug!("Untracked user {} left guild {}", user.id, guild_id),
        Err(e) => tracing::error!("Failed to record departure of {}: {}", user.id, e),
    }
}

/// Handles the guild_member_update event when a member's nickname or profile changes
pub async fn handle_guild_member_update(
    db: &DatabaseConnection,
    _ctx: Context,
    _old: Option<Member>,
    _new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    let identity = identity_from_user(event.guild_id.get(), &event.user, event.nick.as_deref());

    if let Err(e) = MemberActivityRepository::new(db)
        .upsert_identity(&identity)
        .await
    {
        tracing::error!("Failed to update member {}: {}", identity.user_id, e);
    }
}
