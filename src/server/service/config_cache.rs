//! In-memory cache of guild inactivity configuration.
//!
//! Message and reaction handlers look up the guild configuration on every event to
//! decide whether the inactive role must be removed. `GuildConfigCache` keeps each
//! guild's configuration (or the fact that it has none) for a fixed TTL and drops the
//! entry on every write so command changes take effect immediately.

use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::server::{
    data::inactivity_config::InactivityConfigRepository,
    error::AppError,
    model::inactivity_config::{InactivityConfig, UpsertInactivityConfigParam},
};

/// Cached lookup result with the time it was loaded.
#[derive(Clone)]
struct CachedConfig {
    config: Option<InactivityConfig>,
    fetched_at: Instant,
}

impl CachedConfig {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() >= ttl
    }
}

/// Shared TTL cache mapping guild id to its inactivity configuration.
///
/// Cloning is cheap and every clone shares the same entries.
#[derive(Clone)]
pub struct GuildConfigCache {
    entries: Arc<RwLock<HashMap<u64, CachedConfig>>>,
    ttl: Duration,
}

impl GuildConfigCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Gets a guild's configuration, loading it from the database on miss or expiry.
    ///
    /// Guilds without configuration are cached as `None` as well.
    ///
    /// # Returns
    /// - `Ok(Some(InactivityConfig))` - Guild is monitored
    /// - `Ok(None)` - Guild has no inactivity configuration
    /// - `Err(AppError)` - Database error while loading
    pub async fn get(
        &self,
        db: &DatabaseConnection,
        guild_id: u64,
    ) -> Result<Option<InactivityConfig>, AppError> {
        {
            let entries = self.entries.read().await;
            if let Some(cached) = entries.get(&guild_id) {
                if !cached.is_expired(self.ttl) {
                    return Ok(cached.config.clone());
                }
            }
        }

        let config = InactivityConfigRepository::new(db)
            .get_by_guild_id(guild_id)
            .await?;

        self.entries.write().await.insert(
            guild_id,
            CachedConfig {
                config: config.clone(),
                fetched_at: Instant::now(),
            },
        );

        Ok(config)
    }

    /// Drops the cached entry for a guild.
    pub async fn invalidate(&self, guild_id: u64) {
        self.entries.write().await.remove(&guild_id);
    }

    /// Stores a guild's configuration and invalidates its cached entry.
    pub async fn save(
        &self,
        db: &DatabaseConnection,
        param: &UpsertInactivityConfigParam,
    ) -> Result<(), AppError> {
        InactivityConfigRepository::new(db).upsert(param).await?;
        self.invalidate(param.guild_id).await;

        Ok(())
    }
}
