use super::*;

/// Tests which records the inactivity sweep receives.
///
/// Verifies stale, never-active and already-inactive members are returned while
/// recently active members, bots, departed members and other guilds are not.
///
/// Expected: Ok with exactly the actionable members
#[tokio::test]
async fn returns_only_actionable_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let threshold = now - Duration::days(30);

    // stale
    factory::member_activity::MemberActivityFactory::new(db, "100")
        .user_id("1")
        .latest_message_at(Some(now - Duration::days(31)))
        .build()
        .await?;
    // never active
    factory::member_activity::MemberActivityFactory::new(db, "100")
        .user_id("2")
        .build()
        .await?;
    // inactive but recently active record
    factory::member_activity::MemberActivityFactory::new(db, "100")
        .user_id("3")
        .latest_message_at(Some(now - Duration::days(1)))
        .inactive_since(Some(now - Duration::days(2)))
        .build()
        .await?;
    // active
    factory::member_activity::MemberActivityFactory::new(db, "100")
        .user_id("4")
        .latest_message_at(Some(now - Duration::days(1)))
        .build()
        .await?;
    // bot
    factory::member_activity::MemberActivityFactory::new(db, "100")
        .user_id("5")
        .is_bot(true)
        .build()
        .await?;
    // departed
    factory::member_activity::MemberActivityFactory::new(db, "100")
        .user_id("6")
        .left_at(Some(now - Duration::days(3)))
        .build()
        .await?;
    // other guild
    factory::member_activity::MemberActivityFactory::new(db, "200")
        .user_id("7")
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);
    let candidates = repo.get_inactivity_candidates(100, threshold).await?;

    let ids: Vec<u64> = candidates.iter().map(|m| m.user_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    Ok(())
}
