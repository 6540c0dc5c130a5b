use super::*;

/// Tests fetching an unconfigured guild.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unconfigured_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InactivityConfigRepository::new(db);

    assert!(repo.get_by_guild_id(100).await?.is_none());

    Ok(())
}

/// Tests listing every configured guild.
///
/// Expected: Ok with configs in guild id order and ids parsed
#[tokio::test]
async fn lists_all_configured_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inactivity_config::InactivityConfigFactory::new(db, "200")
        .inactive_role_id(Some("555".to_string()))
        .build()
        .await?;
    factory::create_inactivity_config(db, "100").await?;

    let configs = InactivityConfigRepository::new(db).get_all().await?;

    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0].guild_id, 100);
    assert_eq!(configs[0].inactive_role_id, None);
    assert_eq!(configs[1].guild_id, 200);
    assert_eq!(configs[1].inactive_role_id, Some(555));

    Ok(())
}
