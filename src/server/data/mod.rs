//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the bot. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.

pub mod emoji_usage;
pub mod event_reminder;
pub mod inactivity_config;
pub mod member_activity;

#[cfg(test)]
mod test;
