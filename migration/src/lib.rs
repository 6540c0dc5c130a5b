pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_member_activity_table;
mod m20260301_000002_create_guild_inactivity_config_table;
mod m20260301_000003_create_scheduled_event_reminder_table;
mod m20260301_000004_create_emoji_usage_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_member_activity_table::Migration),
            Box::new(m20260301_000002_create_guild_inactivity_config_table::Migration),
            Box::new(m20260301_000003_create_scheduled_event_reminder_table::Migration),
            Box::new(m20260301_000004_create_emoji_usage_table::Migration),
        ]
    }
}
