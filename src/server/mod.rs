//! Bot backend: gateway handlers, business logic, data access and periodic jobs.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Bot Layer** (`bot/`) - Gateway event handlers and slash command/modal dispatch
//! - **Service Layer** (`service/`) - Activity recording, inactivity lifecycle and reminders
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and user-facing messages
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Scheduler** (`scheduler/`) - Cron jobs for the inactivity sweep and event reminders
//!
//! # Event Flow
//!
//! 1. **Bot** receives a gateway event or interaction
//! 2. **Bot** converts serenity models into domain parameters
//! 3. **Service** executes business logic through the `GuildDirectory` and `Notifier` seams
//! 4. **Data** persists and queries records, converting entities to domain models
//! 5. **Bot** logs the outcome or replies to the interaction

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
