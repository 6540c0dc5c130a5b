//! Slash command registry.
//!
//! Every command the bot offers is listed once in `definitions()` (registered on
//! `ready`) and dispatched by name in `handle_command`. Modal submissions are dispatched
//! by custom id in `handle_modal`. Handlers return a `Reply`; errors are turned into an
//! ephemeral reply, with unexpected errors logged and answered with a generic message.

pub mod activity;
pub mod event_reminder;
pub mod inactivity_config;
pub mod member_status;
pub mod top_emoji;

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateModal, GuildId, ModalInteraction, ResolvedOption,
    ResolvedValue,
};

use crate::server::{bot::handler::Handler, error::AppError};

/// What a command handler answers with.
pub enum Reply {
    /// Ephemeral text reply.
    Message(String),
    Modal(CreateModal),
}

/// Every slash command the bot registers.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        inactivity_config::register(),
        activity::register(),
        member_status::register(),
        event_reminder::register(),
        top_emoji::register(),
    ]
}

/// Dispatches a slash command by name and sends its reply.
pub async fn handle_command(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    let result = match command.data.name.as_str() {
        inactivity_config::NAME => inactivity_config::run(handler, command).await,
        activity::NAME => activity::run(handler, command).await,
        member_status::NAME => member_status::run(handler, ctx, command).await,
        event_reminder::NAME => event_reminder::run(handler, ctx, command).await,
        top_emoji::NAME => top_emoji::run(handler, command).await,
        other => Err(AppError::NotFound(format!("Unknown command /{}", other))),
    };

    let response = into_response(result, &command.data.name);

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to /{}: {}", command.data.name, e);
    }
}

/// Dispatches a modal submission by custom id and sends its reply.
pub async fn handle_modal(handler: &Handler, ctx: &Context, modal: &ModalInteraction) {
    let result = match modal.data.custom_id.as_str() {
        inactivity_config::MODAL_ID => inactivity_config::submit(handler, modal).await,
        other => Err(AppError::NotFound(format!("Unknown form {}", other))),
    };

    let response = into_response(result, &modal.data.custom_id);

    if let Err(e) = modal.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to modal {}: {}", modal.data.custom_id, e);
    }
}

fn into_response(result: Result<Reply, AppError>, source: &str) -> CreateInteractionResponse {
    match result {
        Ok(Reply::Message(content)) => ephemeral(content),
        Ok(Reply::Modal(modal)) => CreateInteractionResponse::Modal(modal),
        Err(e) => {
            if e.is_user_facing() {
                tracing::debug!("Rejected {}: {}", source, e);
            } else {
                tracing::error!("Failed to handle {}: {}", source, e);
            }
            ephemeral(e.user_message())
        }
    }
}

fn ephemeral(content: String) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

/// Guild the interaction came from; commands are guild-only.
pub(crate) fn require_guild(guild_id: Option<GuildId>) -> Result<u64, AppError> {
    guild_id
        .map(|id| id.get())
        .ok_or_else(|| AppError::BadRequest("This command can only be used in a server.".to_string()))
}

/// Finds a resolved option by name.
pub(crate) fn option<'a>(
    options: &'a [ResolvedOption<'a>],
    name: &str,
) -> Option<&'a ResolvedValue<'a>> {
    options
        .iter()
        .find(|option| option.name == name)
        .map(|option| &option.value)
}
