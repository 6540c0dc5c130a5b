//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let member = factory::create_member(&db, "1").await?;
//!     let config = factory::create_inactivity_config(&db, "1").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let stale = factory::member_activity::MemberActivityFactory::new(&db, "1")
//!     .user_id("42")
//!     .latest_activity_at(Some(Utc::now() - Duration::days(31)))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `member_activity` - Create member activity records
//! - `inactivity_config` - Create guild inactivity configuration
//! - `event_reminder` - Create scheduled event reminder rows
//! - `helpers` - Shared ID generation

pub mod event_reminder;
pub mod helpers;
pub mod inactivity_config;
pub mod member_activity;

pub use event_reminder::create_event_reminder;
pub use inactivity_config::create_inactivity_config;
pub use member_activity::create_member;
