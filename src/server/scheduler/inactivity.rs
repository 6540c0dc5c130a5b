use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::http::Http;

use crate::server::{
    error::AppError,
    service::{discord::SerenityDiscord, inactivity::InactivityService},
};

/// Evaluates every configured guild once.
///
/// Per-guild results are logged by the service.
pub async fn run_sweep(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
    maintainer_user_id: Option<u64>,
) -> Result<(), AppError> {
    let discord = SerenityDiscord::new(discord_http);

    let evaluations = InactivityService::new(db, &discord, &discord, maintainer_user_id)
        .sweep(Utc::now())
        .await?;

    tracing::debug!("Inactivity sweep finished for {} guild(s)", evaluations.len());

    Ok(())
}
