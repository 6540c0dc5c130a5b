mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    bot, config::Config, error::AppError, scheduler, service::config_cache::GuildConfigCache,
    startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,serenity=warn")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let config_cache = GuildConfigCache::new(config.config_cache_ttl);

    tracing::info!("Starting guildkeeper");

    // Initialize Discord bot and extract HTTP client
    let (mut bot_client, discord_http) =
        bot::start::init_bot(&config, db.clone(), config_cache).await?;

    // Start periodic jobs before blocking on the gateway connection
    let _scheduler = scheduler::start_scheduler(db, discord_http, &config).await?;

    bot::start::start_bot(&mut bot_client).await
}
