use serenity::all::{Context, Message};

use crate::server::{
    bot::handler::{identity_from_user, Handler},
    model::member_activity::{ActivityKind, RecordActivityParam},
    service::{activity::ActivityService, discord::SerenityDiscord},
    util::emoji::extract_emoji,
};

/// Handle message creation in a channel
pub async fn handle_message(handler: &Handler, ctx: Context, message: Message) {
    // Only track messages in guild channels (not DMs)
    let Some(guild_id) = message.guild_id else {
        return;
    };
    if message.author.bot || message.webhook_id.is_some() {
        return;
    }

    let nick = message
        .member
        .as_ref()
        .and_then(|member| member.nick.as_deref());
    let held_role_ids = message
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect());

    let param = RecordActivityParam {
        identity: identity_from_user(guild_id.get(), &message.author, nick),
        kind: ActivityKind::Message,
        at: message.timestamp.to_utc(),
        emoji: extract_emoji(&message.content),
        held_role_ids,
    };

    let discord = SerenityDiscord::new(ctx.http.clone());
    if let Err(e) = ActivityService::new(&handler.db, &handler.cache, &discord)
        .record(param)
        .await
    {
        tracing::error!(
            "Failed to record message from {} in guild {}: {}",
            message.author.id,
            guild_id,
            e
        );
    }
}
