//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot (gateway handlers, slash commands, scheduled jobs) and
//! the data (repository) layer. They are responsible for:
//!
//! - **Business Logic**: Activity recording, the inactivity lifecycle, reminder timing
//! - **Orchestration**: Coordinating repository calls with Discord side effects
//! - **Domain Models**: Working with domain models rather than entity or serenity models
//!
//! Discord is reached only through the traits in `discord`, never through serenity
//! directly.

pub mod activity;
pub mod config_cache;
pub mod discord;
pub mod event_reminder;
pub mod inactivity;
pub mod member_status;

#[cfg(test)]
mod test;
