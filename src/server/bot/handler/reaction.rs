use chrono::Utc;
use serenity::all::{Context, Reaction, ReactionType};

use crate::server::{
    bot::handler::{identity_from_user, Handler},
    model::member_activity::{ActivityKind, MemberIdentity, RecordActivityParam},
    service::{activity::ActivityService, discord::SerenityDiscord},
};

/// Usage key of a reaction emoji, matching the keys of emoji found in messages.
fn emoji_key(emoji: &ReactionType) -> Option<String> {
    match emoji {
        ReactionType::Custom { id, name, .. } => Some(format!(
            "{}:{}",
            name.as_deref().unwrap_or("emoji"),
            id.get()
        )),
        ReactionType::Unicode(value) => Some(value.clone()),
        _ => None,
    }
}

/// Resolves who reacted, fetching the user when the event carried no member.
async fn reactor_identity(ctx: &Context, guild_id: u64, reaction: &Reaction) -> Option<MemberIdentity> {
    if let Some(member) = &reaction.member {
        return Some(identity_from_user(guild_id, &member.user, member.nick.as_deref()));
    }

    match reaction.user(&ctx.http).await {
        Ok(user) => Some(identity_from_user(guild_id, &user, None)),
        Err(e) => {
            tracing::warn!("Failed to fetch user who reacted in guild {}: {}", guild_id, e);
            None
        }
    }
}

/// Handle a reaction being added to a message
pub async fn handle_reaction_add(handler: &Handler, ctx: Context, reaction: Reaction) {
    let Some(guild_id) = reaction.guild_id.map(|id| id.get()) else {
        return;
    };
    let Some(identity) = reactor_identity(&ctx, guild_id, &reaction).await else {
        return;
    };
    if identity.is_bot {
        return;
    }

    let param = RecordActivityParam {
        identity,
        kind: ActivityKind::Reaction,
        at: Utc::now(),
        emoji: emoji_key(&reaction.emoji).into_iter().collect(),
        held_role_ids: reaction
            .member
            .as_ref()
            .map(|member| member.roles.iter().map(|role| role.get()).collect()),
    };
    let user_id = param.identity.user_id;

    let discord = SerenityDiscord::new(ctx.http.clone());
    if let Err(e) = ActivityService::new(&handler.db, &handler.cache, &discord)
        .record(param)
        .await
    {
        tracing::error!(
            "Failed to record reaction from {} in guild {}: {}",
            user_id,
            guild_id,
            e
        );
    }
}

/// Handle a reaction being removed from a message
pub async fn handle_reaction_remove(handler: &Handler, ctx: Context, reaction: Reaction) {
    let (Some(guild_id), Some(user_id)) = (reaction.guild_id, reaction.user_id) else {
        return;
    };

    let discord = SerenityDiscord::new(ctx.http.clone());
    match ActivityService::new(&handler.db, &handler.cache, &discord)
        .remove_reaction(guild_id.get(), user_id.get())
        .await
    {
        Ok(true) => {}
        Ok(false) => tracing::debug!("Reaction removed by untracked user {}", user_id),
        Err(e) => tracing::error!(
            "Failed to record reaction removal by {} in guild {}: {}",
            user_id,
            guild_id,
            e
        ),
    }
}
