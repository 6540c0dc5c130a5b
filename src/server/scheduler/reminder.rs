use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::http::Http;

use crate::server::{
    error::AppError,
    service::{discord::SerenityDiscord, event_reminder::EventReminderService},
};

/// Sends reminders that have come due across all guilds the bot is in.
pub async fn run_reminders(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
) -> Result<(), AppError> {
    let discord = SerenityDiscord::new(discord_http);

    EventReminderService::new(db, &discord, &discord)
        .process_all_guilds(Utc::now())
        .await
}
