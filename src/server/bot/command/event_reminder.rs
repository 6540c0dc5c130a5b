//! `/event-reminder`: configures reminders for a scheduled event.

use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, Permissions, ResolvedValue,
};

use crate::server::{
    bot::{
        command::{option, require_guild, Reply},
        handler::Handler,
    },
    error::AppError,
    model::event_reminder::ConfigureEventReminderParam,
    service::{discord::SerenityDiscord, event_reminder::EventReminderService},
    util::parse::parse_user_snowflake,
};

pub const NAME: &str = "event-reminder";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Post a reminder for a scheduled event a day before it starts")
        .default_member_permissions(Permissions::MANAGE_EVENTS)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "event_id",
                "Id of the scheduled event",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "Channel to post the reminder in",
            )
            .channel_types(vec![ChannelType::Text, ChannelType::News])
            .required(true),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::Role,
            "role",
            "Role to mention in the reminder",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::Boolean,
            "enabled",
            "Whether reminders are sent (default: true)",
        ))
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<Reply, AppError> {
    let guild_id = require_guild(command.guild_id)?;
    let options = command.data.options();

    let event_id = match option(&options, "event_id") {
        Some(ResolvedValue::String(raw)) => parse_user_snowflake(raw),
        _ => None,
    }
    .ok_or_else(|| AppError::BadRequest("Event id must be a numeric id.".to_string()))?;

    let Some(ResolvedValue::Channel(channel)) = option(&options, "channel") else {
        return Err(AppError::BadRequest("Pick a channel for the reminder.".to_string()));
    };
    let role_id = match option(&options, "role") {
        Some(ResolvedValue::Role(role)) => Some(role.id.get()),
        _ => None,
    };
    let should_remind = match option(&options, "enabled") {
        Some(ResolvedValue::Boolean(enabled)) => *enabled,
        _ => true,
    };

    let param = ConfigureEventReminderParam {
        event_id,
        guild_id,
        channel_id: channel.id.get(),
        role_id,
        should_remind,
    };

    let discord = SerenityDiscord::new(ctx.http.clone());
    EventReminderService::new(&handler.db, &discord, &discord)
        .configure(&param)
        .await?;

    tracing::info!(
        "Reminder for event {} in guild {} set to channel {} (enabled: {})",
        event_id,
        guild_id,
        param.channel_id,
        should_remind
    );

    Ok(Reply::Message(if should_remind {
        format!(
            "Reminders for this event will be posted in <#{}>.",
            param.channel_id
        )
    } else {
        "Reminders for this event are turned off.".to_string()
    }))
}
