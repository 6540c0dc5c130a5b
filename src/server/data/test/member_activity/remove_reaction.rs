use super::*;

/// Tests that removing a reaction only decrements the counter.
///
/// Verifies timestamps and inactive status keep the values the reaction set.
///
/// Expected: Ok with counter decremented and nothing else changed
#[tokio::test]
async fn decrements_counter_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reacted_at = Utc::now() - Duration::days(2);
    let inactive_since = Utc::now() - Duration::days(1);
    factory::member_activity::MemberActivityFactory::new(db, "100")
        .user_id("1")
        .reaction_count(3)
        .latest_reaction_at(Some(reacted_at))
        .inactive_since(Some(inactive_since))
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);
    assert!(repo.remove_reaction(100, 1).await?);

    let member = repo.find(100, 1).await?.unwrap();
    assert_eq!(member.reaction_count, 2);
    assert_eq!(member.latest_reaction_at, Some(reacted_at));
    assert_eq!(member.latest_activity_at, Some(reacted_at));
    assert_eq!(member.inactive_since, Some(inactive_since));

    Ok(())
}

/// Tests that the counter is not floored at zero.
///
/// Expected: Ok with a negative counter
#[tokio::test]
async fn counter_can_go_negative() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member_activity::MemberActivityFactory::new(db, "100")
        .user_id("1")
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);
    repo.remove_reaction(100, 1).await?;

    assert_eq!(repo.find(100, 1).await?.unwrap().reaction_count, -1);

    Ok(())
}

/// Tests removing a reaction for an untracked member.
///
/// Expected: Ok(false) and no record created
#[tokio::test]
async fn unknown_member_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberActivityRepository::new(db);

    assert!(!repo.remove_reaction(100, 1).await?);
    assert!(repo.find(100, 1).await?.is_none());

    Ok(())
}
