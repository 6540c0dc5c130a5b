//! Cron jobs driving the inactivity sweep and scheduled-event reminders.

pub mod inactivity;
pub mod reminder;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{config::Config, error::AppError};

/// Starts the job scheduler with the inactivity sweep and the reminder pass.
///
/// The returned scheduler must be kept alive for the jobs to keep running.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client used for member lookups and messages
/// - `config`: Cron expressions and the maintainer to report sweeps to
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    config: &Config,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_http = discord_http.clone();
    let maintainer_user_id = config.maintainer_user_id;
    let sweep_job = Job::new_async(config.inactivity_cron.as_str(), move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();

        Box::pin(async move {
            if let Err(e) = inactivity::run_sweep(&db, http, maintainer_user_id).await {
                tracing::error!("Error running inactivity sweep: {}", e);
            }
        })
    })?;

    let job_db = db;
    let job_http = discord_http;
    let reminder_job = Job::new_async(config.reminder_cron.as_str(), move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();

        Box::pin(async move {
            if let Err(e) = reminder::run_reminders(&db, http).await {
                tracing::error!("Error processing event reminders: {}", e);
            }
        })
    })?;

    scheduler.add(sweep_job).await?;
    scheduler.add(reminder_job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Scheduler started (inactivity: \"{}\", reminders: \"{}\")",
        config.inactivity_cron,
        config.reminder_cron
    );

    Ok(scheduler)
}
