use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScheduledEventReminder::Table)
                    .if_not_exists()
                    .col(string(ScheduledEventReminder::EventId).primary_key())
                    .col(string(ScheduledEventReminder::GuildId))
                    .col(string_null(ScheduledEventReminder::ChannelId))
                    .col(string_null(ScheduledEventReminder::RoleId))
                    .col(boolean_null(ScheduledEventReminder::ShouldRemind))
                    .col(timestamp_with_time_zone_null(
                        ScheduledEventReminder::LatestReminderAt,
                    ))
                    .col(timestamp_with_time_zone(ScheduledEventReminder::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScheduledEventReminder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ScheduledEventReminder {
    Table,
    EventId,
    GuildId,
    ChannelId,
    RoleId,
    ShouldRemind,
    LatestReminderAt,
    UpdatedAt,
}
