//! Emoji usage repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IdenStatic, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{error::AppError, model::emoji_usage::EmojiUsage};

use entity::emoji_usage::Column;

pub struct EmojiUsageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmojiUsageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Increments the usage counter of one emoji in a guild.
    pub async fn increment(
        &self,
        guild_id: u64,
        emoji: &str,
        at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::EmojiUsage::insert(entity::emoji_usage::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            emoji: ActiveValue::Set(emoji.to_string()),
            usage_count: ActiveValue::Set(1),
            last_used_at: ActiveValue::Set(at),
        })
        .on_conflict(
            OnConflict::columns([Column::GuildId, Column::Emoji])
                .value(
                    Column::UsageCount,
                    Expr::cust(format!("\"{}\" + 1", Column::UsageCount.as_str())),
                )
                .update_column(Column::LastUsedAt)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Gets the most used emoji of a guild, most used first.
    pub async fn get_top(&self, guild_id: u64, limit: u64) -> Result<Vec<EmojiUsage>, AppError> {
        let entities = entity::prelude::EmojiUsage::find()
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(Column::UsageCount)
            .order_by_asc(Column::Emoji)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(EmojiUsage::from_entity).collect()
    }
}
