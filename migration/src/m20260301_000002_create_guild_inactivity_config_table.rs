use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildInactivityConfig::Table)
                    .if_not_exists()
                    .col(string(GuildInactivityConfig::GuildId).primary_key())
                    .col(integer(GuildInactivityConfig::DaysUntilInactive))
                    .col(integer(GuildInactivityConfig::DaysAsInactiveBeforeKick))
                    .col(string_null(GuildInactivityConfig::InactiveRoleId))
                    .col(string_null(GuildInactivityConfig::InviteLink))
                    .col(timestamp_with_time_zone(GuildInactivityConfig::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildInactivityConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GuildInactivityConfig {
    Table,
    GuildId,
    DaysUntilInactive,
    DaysAsInactiveBeforeKick,
    InactiveRoleId,
    InviteLink,
    UpdatedAt,
}
