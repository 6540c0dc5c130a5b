//! `/member-status`: administrator override of a member's lifecycle status.

use chrono::Utc;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions, ResolvedValue,
};

use crate::server::{
    bot::{
        command::{option, require_guild, Reply},
        handler::{identity_from_user, Handler},
    },
    error::AppError,
    model::member_activity::MemberStatus,
    service::{discord::SerenityDiscord, member_status::MemberStatusService},
};

pub const NAME: &str = "member-status";

pub fn register() -> CreateCommand {
    let mut status = CreateCommandOption::new(CommandOptionType::String, "status", "New status")
        .required(true);
    for choice in MemberStatus::ALL {
        status = status.add_string_choice(choice.as_str(), choice.as_str());
    }

    CreateCommand::new(NAME)
        .description("Set a member's activity status manually")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "member", "Member to update")
                .required(true),
        )
        .add_option(status)
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<Reply, AppError> {
    let guild_id = require_guild(command.guild_id)?;
    let options = command.data.options();

    let Some(ResolvedValue::User(user, member)) = option(&options, "member") else {
        return Err(AppError::BadRequest("Pick a member to update.".to_string()));
    };
    let status = match option(&options, "status") {
        Some(ResolvedValue::String(value)) => MemberStatus::parse(value),
        _ => None,
    }
    .ok_or_else(|| {
        AppError::BadRequest("Status must be one of active, inactive or departed.".to_string())
    })?;

    let nick = member.and_then(|member| member.nick.as_deref());
    let identity = identity_from_user(guild_id, user, nick);

    let discord = SerenityDiscord::new(ctx.http.clone());
    let record = MemberStatusService::new(&handler.db, &handler.cache, &discord)
        .set_member_status(&identity, status, Utc::now())
        .await?;

    Ok(Reply::Message(format!(
        "<@{}> is now marked {}.",
        record.user_id,
        status.as_str()
    )))
}
