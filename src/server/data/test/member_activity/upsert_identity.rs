use super::*;

/// Tests that identity sync never touches counters or lifecycle.
///
/// Expected: Ok with names refreshed and everything else preserved
#[tokio::test]
async fn refreshes_names_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let inactive_since = Utc::now() - Duration::days(3);
    factory::member_activity::MemberActivityFactory::new(db, "100")
        .user_id("1")
        .username("old")
        .message_count(7)
        .inactive_since(Some(inactive_since))
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);
    let mut renamed = identity(100, 1);
    renamed.username = "new".to_string();
    renamed.display_name = Some("New Name".to_string());
    repo.upsert_identity(&renamed).await?;

    let member = repo.find(100, 1).await?.unwrap();
    assert_eq!(member.username, "new");
    assert_eq!(member.display_name.as_deref(), Some("New Name"));
    assert_eq!(member.message_count, 7);
    assert_eq!(member.inactive_since, Some(inactive_since));

    Ok(())
}

/// Tests that identity sync creates an empty record for unknown members.
///
/// Expected: Ok with zeroed counters and no activity
#[tokio::test]
async fn creates_empty_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberActivityRepository::new(db);
    repo.upsert_identity(&identity(100, 1)).await?;

    let member = repo.find(100, 1).await?.unwrap();
    assert_eq!(member.message_count, 0);
    assert!(member.latest_activity_at.is_none());

    Ok(())
}
