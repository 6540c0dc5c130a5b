use crate::server::{
    data::event_reminder::EventReminderRepository, error::AppError,
    model::event_reminder::ConfigureEventReminderParam,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod configure;
mod record_reminder;
