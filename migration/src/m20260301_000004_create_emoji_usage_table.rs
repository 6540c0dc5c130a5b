use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmojiUsage::Table)
                    .if_not_exists()
                    .col(string(EmojiUsage::GuildId))
                    .col(string(EmojiUsage::Emoji))
                    .col(integer(EmojiUsage::UsageCount).default(0))
                    .col(timestamp_with_time_zone(EmojiUsage::LastUsedAt))
                    .primary_key(Index::create().col(EmojiUsage::GuildId).col(EmojiUsage::Emoji))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmojiUsage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EmojiUsage {
    Table,
    GuildId,
    Emoji,
    UsageCount,
    LastUsedAt,
}
