use crate::server::{
    data::member_activity::MemberActivityRepository,
    error::AppError,
    model::{
        inactivity_config::InactivityConfig,
        member_activity::{ActivityKind, MemberIdentity, RecordActivityParam},
    },
    service::config_cache::GuildConfigCache,
};
use chrono::{Duration, Utc};
use fake_discord::{member, Call, FakeDiscord};
use test_utils::{builder::TestBuilder, factory};

mod inactivity;

const GUILD: u64 = 100;
const INACTIVE_ROLE: u64 = 555;

fn identity(user_id: u64) -> MemberIdentity {
    MemberIdentity {
        guild_id: GUILD,
        user_id,
        username: format!("user{}", user_id),
        display_name: None,
        is_bot: false,
    }
}

fn cache() -> GuildConfigCache {
    GuildConfigCache::new(std::time::Duration::from_secs(300))
}

/// Stores the standard 30/10 day configuration with the inactive role.
async fn configure_guild(
    db: &sea_orm::DatabaseConnection,
    invite_link: Option<&str>,
) -> Result<InactivityConfig, AppError> {
    let model = factory::inactivity_config::InactivityConfigFactory::new(db, GUILD.to_string())
        .days_until_inactive(30)
        .days_as_inactive_before_kick(10)
        .inactive_role_id(Some(INACTIVE_ROLE.to_string()))
        .invite_link(invite_link.map(str::to_string))
        .build()
        .await?;

    InactivityConfig::from_entity(model)
}
