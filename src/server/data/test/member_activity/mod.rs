use crate::server::{
    data::member_activity::MemberActivityRepository,
    error::AppError,
    model::member_activity::{ActivityKind, MemberIdentity},
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_inactivity_candidates;
mod mark_present;
mod record_activity;
mod remove_reaction;
mod set_lifecycle;
mod upsert_identity;

fn identity(guild_id: u64, user_id: u64) -> MemberIdentity {
    MemberIdentity {
        guild_id,
        user_id,
        username: format!("user{}", user_id),
        display_name: None,
        is_bot: false,
    }
}
