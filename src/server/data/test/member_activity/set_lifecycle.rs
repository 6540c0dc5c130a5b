use super::*;

/// Tests setting and clearing lifecycle columns.
///
/// Expected: Ok with values written, and Ok(false) for unknown members
#[tokio::test]
async fn writes_lifecycle_columns() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member_activity::MemberActivityFactory::new(db, "100")
        .user_id("1")
        .inactive_since(Some(Utc::now() - Duration::days(12)))
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);
    let kicked_at = Utc::now();

    assert!(repo.set_lifecycle(100, 1, None, Some(kicked_at)).await?);

    let member = repo.find(100, 1).await?.unwrap();
    assert!(member.inactive_since.is_none());
    assert_eq!(member.left_at, Some(kicked_at));

    assert!(!repo.set_lifecycle(100, 999, None, None).await?);

    Ok(())
}

/// Tests that `set_inactive_since` leaves `left_at` alone.
///
/// Expected: Ok with only `inactive_since` changed
#[tokio::test]
async fn set_inactive_since_keeps_departure() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let left_at = Utc::now() - Duration::days(1);
    factory::member_activity::MemberActivityFactory::new(db, "100")
        .user_id("1")
        .left_at(Some(left_at))
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);
    let now = Utc::now();
    repo.set_inactive_since(100, 1, Some(now)).await?;

    let member = repo.find(100, 1).await?.unwrap();
    assert_eq!(member.inactive_since, Some(now));
    assert_eq!(member.left_at, Some(left_at));

    Ok(())
}
