use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "member_activity")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub is_bot: bool,
    pub message_count: i32,
    pub reaction_count: i32,
    pub latest_message_at: Option<DateTimeUtc>,
    pub latest_reaction_at: Option<DateTimeUtc>,
    pub latest_activity_at: Option<DateTimeUtc>,
    pub inactive_since: Option<DateTimeUtc>,
    pub left_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
