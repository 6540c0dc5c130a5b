use super::*;
use crate::server::service::inactivity::{notice, GuildEvaluation, InactivityService};

mod evaluate_guild;
mod sweep;

const MAINTAINER: u64 = 999;

fn days_ago(days: i64) -> Option<chrono::DateTime<Utc>> {
    Some(Utc::now() - Duration::days(days))
}
