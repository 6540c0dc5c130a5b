//! Member activity factory for creating test activity records.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test member activity records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::member_activity::MemberActivityFactory;
///
/// let member = MemberActivityFactory::new(&db, "100")
///     .user_id("42")
///     .inactive_since(Some(Utc::now()))
///     .build()
///     .await?;
/// ```
pub struct MemberActivityFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    username: String,
    display_name: Option<String>,
    is_bot: bool,
    message_count: i32,
    reaction_count: i32,
    latest_message_at: Option<DateTime<Utc>>,
    latest_reaction_at: Option<DateTime<Utc>>,
    latest_activity_at: Option<DateTime<Utc>>,
    inactive_since: Option<DateTime<Utc>>,
    left_at: Option<DateTime<Utc>>,
}

impl<'a> MemberActivityFactory<'a> {
    /// Creates a new MemberActivityFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented id
    /// - username: `"member_{id}"`
    /// - counters zero, every timestamp `None`, not a bot
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Guild the record belongs to
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.into(),
            user_id: id.to_string(),
            username: format!("member_{}", id),
            display_name: None,
            is_bot: false,
            message_count: 0,
            reaction_count: 0,
            latest_message_at: None,
            latest_reaction_at: None,
            latest_activity_at: None,
            inactive_since: None,
            left_at: None,
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn display_name(mut self, display_name: Option<String>) -> Self {
        self.display_name = display_name;
        self
    }

    pub fn is_bot(mut self, is_bot: bool) -> Self {
        self.is_bot = is_bot;
        self
    }

    pub fn message_count(mut self, message_count: i32) -> Self {
        self.message_count = message_count;
        self
    }

    pub fn reaction_count(mut self, reaction_count: i32) -> Self {
        self.reaction_count = reaction_count;
        self
    }

    /// Sets the latest message timestamp and the derived latest activity timestamp.
    pub fn latest_message_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.latest_message_at = at;
        self.latest_activity_at = self.latest_activity_at.max(at);
        self
    }

    /// Sets the latest reaction timestamp and the derived latest activity timestamp.
    pub fn latest_reaction_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.latest_reaction_at = at;
        self.latest_activity_at = self.latest_activity_at.max(at);
        self
    }

    /// Overrides the latest activity timestamp directly.
    pub fn latest_activity_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.latest_activity_at = at;
        self
    }

    pub fn inactive_since(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.inactive_since = at;
        self
    }

    pub fn left_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.left_at = at;
        self
    }

    /// Builds and inserts the member activity record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member_activity::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member_activity::Model, DbErr> {
        let now = Utc::now();
        entity::member_activity::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            username: ActiveValue::Set(self.username),
            display_name: ActiveValue::Set(self.display_name),
            is_bot: ActiveValue::Set(self.is_bot),
            message_count: ActiveValue::Set(self.message_count),
            reaction_count: ActiveValue::Set(self.reaction_count),
            latest_message_at: ActiveValue::Set(self.latest_message_at),
            latest_reaction_at: ActiveValue::Set(self.latest_reaction_at),
            latest_activity_at: ActiveValue::Set(self.latest_activity_at),
            inactive_since: ActiveValue::Set(self.inactive_since),
            left_at: ActiveValue::Set(self.left_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member activity record with default values in the given guild.
///
/// Shorthand for `MemberActivityFactory::new(db, guild_id).build().await`.
pub async fn create_member(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::member_activity::Model, DbErr> {
    MemberActivityFactory::new(db, guild_id).build().await
}
