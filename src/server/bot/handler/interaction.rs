use serenity::all::{Context, Interaction};

use crate::server::bot::{command, handler::Handler};

/// Routes slash commands and modal submissions to the command registry.
pub async fn handle_interaction(handler: &Handler, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => command::handle_command(handler, &ctx, &command).await,
        Interaction::Modal(modal) => command::handle_modal(handler, &ctx, &modal).await,
        _ => {}
    }
}
