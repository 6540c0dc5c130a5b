use super::*;

fn param(guild_id: u64) -> UpsertInactivityConfigParam {
    UpsertInactivityConfigParam {
        guild_id,
        days_until_inactive: 30,
        days_as_inactive_before_kick: 10,
        inactive_role_id: Some(42),
        invite_link: Some("https://discord.gg/abc".to_string()),
    }
}

/// Tests creating a configuration.
///
/// Expected: Ok with every field stored
#[tokio::test]
async fn creates_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InactivityConfigRepository::new(db);
    repo.upsert(&param(100)).await?;

    let config = repo.get_by_guild_id(100).await?.unwrap();
    assert_eq!(config.days_until_inactive, 30);
    assert_eq!(config.days_as_inactive_before_kick, 10);
    assert_eq!(config.inactive_role_id, Some(42));
    assert_eq!(config.invite_link.as_deref(), Some("https://discord.gg/abc"));

    Ok(())
}

/// Tests replacing an existing configuration.
///
/// Verifies optional fields can be cleared.
///
/// Expected: Ok with the new values replacing the old ones
#[tokio::test]
async fn replaces_existing_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InactivityConfigRepository::new(db);
    repo.upsert(&param(100)).await?;
    repo.upsert(&UpsertInactivityConfigParam {
        days_until_inactive: 14,
        inactive_role_id: None,
        invite_link: None,
        ..param(100)
    })
    .await?;

    let config = repo.get_by_guild_id(100).await?.unwrap();
    assert_eq!(config.days_until_inactive, 14);
    assert_eq!(config.days_as_inactive_before_kick, 10);
    assert!(config.inactive_role_id.is_none());
    assert!(config.invite_link.is_none());
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
