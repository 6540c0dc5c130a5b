use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_INACTIVITY_CRON: &str = "0 0 12 * * *";
const DEFAULT_REMINDER_CRON: &str = "0 0 * * * *";
const DEFAULT_CONFIG_CACHE_TTL_SECONDS: u64 = 300;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Discord user receiving inactivity sweep summaries by DM.
    pub maintainer_user_id: Option<u64>,

    pub inactivity_cron: String,
    pub reminder_cron: String,
    pub config_cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let maintainer_user_id = match optional_var("MAINTAINER_USER_ID") {
            Some(value) => Some(parse_var("MAINTAINER_USER_ID", &value)?),
            None => None,
        };

        let cache_ttl_seconds = match optional_var("CONFIG_CACHE_TTL_SECONDS") {
            Some(value) => parse_var("CONFIG_CACHE_TTL_SECONDS", &value)?,
            None => DEFAULT_CONFIG_CACHE_TTL_SECONDS,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
            maintainer_user_id,
            inactivity_cron: optional_var("INACTIVITY_CRON")
                .unwrap_or_else(|| DEFAULT_INACTIVITY_CRON.to_string()),
            reminder_cron: optional_var("REMINDER_CRON")
                .unwrap_or_else(|| DEFAULT_REMINDER_CRON.to_string()),
            config_cache_ttl: Duration::from_secs(cache_ttl_seconds),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        })
}
