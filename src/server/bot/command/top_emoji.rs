//! `/top-emoji`: the server's most used emoji.

use serenity::all::{CommandInteraction, CreateCommand};

use crate::server::{
    bot::{
        command::{require_guild, Reply},
        handler::Handler,
    },
    data::emoji_usage::EmojiUsageRepository,
    error::AppError,
    model::emoji_usage::EmojiUsage,
};

pub const NAME: &str = "top-emoji";

const TOP_EMOJI_LIMIT: u64 = 10;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Show the most used emoji in this server")
}

pub async fn run(handler: &Handler, command: &CommandInteraction) -> Result<Reply, AppError> {
    let guild_id = require_guild(command.guild_id)?;

    let top = EmojiUsageRepository::new(&handler.db)
        .get_top(guild_id, TOP_EMOJI_LIMIT)
        .await?;

    if top.is_empty() {
        return Ok(Reply::Message("No emoji used yet.".to_string()));
    }

    let lines: Vec<String> = top
        .iter()
        .enumerate()
        .map(|(rank, usage)| format!("{}. {} × {}", rank + 1, render(usage), usage.usage_count))
        .collect();

    Ok(Reply::Message(lines.join("\n")))
}

/// Renders a usage key back into something Discord displays as the emoji.
fn render(usage: &EmojiUsage) -> String {
    match usage.emoji.rsplit_once(':') {
        Some((name, id)) if id.chars().all(|c| c.is_ascii_digit()) => {
            format!("<:{}:{}>", name, id)
        }
        _ => usage.emoji.clone(),
    }
}
