//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary, where stored string snowflakes become `u64`.

pub mod directory;
pub mod emoji_usage;
pub mod event_reminder;
pub mod inactivity_config;
pub mod member_activity;
