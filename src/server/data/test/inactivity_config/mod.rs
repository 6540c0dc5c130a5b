use crate::server::{
    data::inactivity_config::InactivityConfigRepository, error::AppError,
    model::inactivity_config::UpsertInactivityConfigParam,
};
use test_utils::{builder::TestBuilder, factory};

mod get;
mod upsert;
