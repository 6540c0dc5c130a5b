use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberActivity::Table)
                    .if_not_exists()
                    .col(string(MemberActivity::GuildId))
                    .col(string(MemberActivity::UserId))
                    .col(string(MemberActivity::Username))
                    .col(string_null(MemberActivity::DisplayName))
                    .col(boolean(MemberActivity::IsBot).default(false))
                    .col(integer(MemberActivity::MessageCount).default(0))
                    .col(integer(MemberActivity::ReactionCount).default(0))
                    .col(timestamp_with_time_zone_null(MemberActivity::LatestMessageAt))
                    .col(timestamp_with_time_zone_null(MemberActivity::LatestReactionAt))
                    .col(timestamp_with_time_zone_null(MemberActivity::LatestActivityAt))
                    .col(timestamp_with_time_zone_null(MemberActivity::InactiveSince))
                    .col(timestamp_with_time_zone_null(MemberActivity::LeftAt))
                    .col(timestamp_with_time_zone(MemberActivity::CreatedAt))
                    .col(timestamp_with_time_zone(MemberActivity::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(MemberActivity::GuildId)
                            .col(MemberActivity::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Inactivity sweeps filter by guild and latest activity
        manager
            .create_index(
                Index::create()
                    .name("idx_member_activity_guild_latest_activity")
                    .table(MemberActivity::Table)
                    .col(MemberActivity::GuildId)
                    .col(MemberActivity::LatestActivityAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_member_activity_guild_latest_activity")
                    .table(MemberActivity::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MemberActivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MemberActivity {
    Table,
    GuildId,
    UserId,
    Username,
    DisplayName,
    IsBot,
    MessageCount,
    ReactionCount,
    LatestMessageAt,
    LatestReactionAt,
    LatestActivityAt,
    InactiveSince,
    LeftAt,
    CreatedAt,
    UpdatedAt,
}
