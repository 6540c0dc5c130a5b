//! `/activity`: shows a member's recorded activity and lifecycle status.

use chrono::{DateTime, Utc};
use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, ResolvedValue,
};

use crate::server::{
    bot::{
        command::{option, require_guild, Reply},
        handler::Handler,
    },
    data::member_activity::MemberActivityRepository,
    error::AppError,
    model::member_activity::{LifecycleState, MemberActivity},
};

pub const NAME: &str = "activity";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show a member's recorded activity")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "member", "Member to look up")
                .required(true),
        )
}

pub async fn run(handler: &Handler, command: &CommandInteraction) -> Result<Reply, AppError> {
    let guild_id = require_guild(command.guild_id)?;
    let options = command.data.options();

    let Some(ResolvedValue::User(user, _)) = option(&options, "member") else {
        return Err(AppError::BadRequest("Pick a member to look up.".to_string()));
    };

    let record = MemberActivityRepository::new(&handler.db)
        .find(guild_id, user.id.get())
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No activity has been recorded for <@{}> yet.", user.id))
        })?;

    Ok(Reply::Message(format_activity(&record)))
}

fn relative(at: Option<DateTime<Utc>>) -> String {
    at.map(|at| format!("<t:{}:R>", at.timestamp()))
        .unwrap_or_else(|| "never".to_string())
}

pub fn format_activity(record: &MemberActivity) -> String {
    let status = match record.lifecycle() {
        LifecycleState::Active => "Active".to_string(),
        LifecycleState::Inactive { since } => {
            format!("Inactive since <t:{}:D>", since.timestamp())
        }
        LifecycleState::Departed { at } => format!("Departed <t:{}:D>", at.timestamp()),
    };

    format!(
        "**{}** (<@{}>)\n\
         Messages: {} | Reactions: {}\n\
         Latest message: {}\n\
         Latest reaction: {}\n\
         Status: {}",
        record.name(),
        record.user_id,
        record.message_count,
        record.reaction_count,
        relative(record.latest_message_at),
        relative(record.latest_reaction_at),
        status
    )
}
