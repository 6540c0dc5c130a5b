use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild};

use crate::server::{
    data::member_activity::MemberActivityRepository,
    model::member_activity::MemberIdentity,
    service::discord::{GuildDirectory, SerenityDiscord},
};

/// Handles the guild_create event when a guild becomes available or the bot joins it.
///
/// Upserts the identity of every current member so members who never spoke still get a
/// record the inactivity sweep can see, then clears `left_at` for everyone present so
/// members who rejoined while the bot was offline are monitored again. Counters and
/// `inactive_since` are untouched.
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}",
        guild.name,
        guild_id,
        guild.member_count
    );

    // guild.members may be partial, so list through the API (requires GUILD_MEMBERS)
    let members = match SerenityDiscord::new(ctx.http.clone())
        .list_members(guild_id)
        .await
    {
        Ok(members) => members,
        Err(e) => {
            tracing::error!("Failed to fetch members of guild {}: {}", guild_id, e);
            return;
        }
    };

    let repo = MemberActivityRepository::new(db);
    let mut failed = 0;

    for member in &members {
        let identity = MemberIdentity {
            guild_id,
            user_id: member.user_id,
            username: member.username.clone(),
            display_name: member.display_name.clone(),
            is_bot: member.is_bot,
        };

        if let Err(e) = repo.upsert_identity(&identity).await {
            failed += 1;
            tracing::error!(
                "Failed to sync member {} of guild {}: {}",
                member.user_id,
                guild_id,
                e
            );
        }
    }

    let present: Vec<u64> = members.iter().map(|member| member.user_id).collect();
    match repo.mark_present(guild_id, &present).await {
        Ok(0) => {}
        Ok(returned) => tracing::info!(
            "{} previously departed members are back in guild {}",
            returned,
            guild_id
        ),
        Err(e) => tracing::error!(
            "Failed to mark members of guild {} as present: {}",
            guild_id,
            e
        ),
    }

    tracing::info!(
        "Synced {} members of guild {} ({} failed)",
        members.len() - failed,
        guild.name,
        failed
    );
}
