use super::*;

/// Tests recording the first message of a member.
///
/// Verifies that a new record is created with the message counter at one and
/// every activity timestamp pointing at the message.
///
/// Expected: Ok with new record created
#[tokio::test]
async fn creates_record_on_first_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let at = Utc::now();
    let repo = MemberActivityRepository::new(db);
    repo.record_activity(&identity(100, 1), ActivityKind::Message, at)
        .await?;

    let member = repo.find(100, 1).await?.unwrap();
    assert_eq!(member.message_count, 1);
    assert_eq!(member.reaction_count, 0);
    assert_eq!(member.latest_message_at, Some(at));
    assert_eq!(member.latest_reaction_at, None);
    assert_eq!(member.latest_activity_at, Some(at));
    assert_eq!(member.inactive_since, None);

    Ok(())
}

/// Tests that repeated activity increments the counter in place.
///
/// Expected: Ok with a single record holding both counters
#[tokio::test]
async fn increments_counters_on_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberActivityRepository::new(db);
    let first = Utc::now() - Duration::minutes(10);
    let second = Utc::now() - Duration::minutes(5);
    let third = Utc::now();

    repo.record_activity(&identity(100, 1), ActivityKind::Message, first)
        .await?;
    repo.record_activity(&identity(100, 1), ActivityKind::Message, second)
        .await?;
    repo.record_activity(&identity(100, 1), ActivityKind::Reaction, third)
        .await?;

    let member = repo.find(100, 1).await?.unwrap();
    assert_eq!(member.message_count, 2);
    assert_eq!(member.reaction_count, 1);
    assert_eq!(member.latest_message_at, Some(second));
    assert_eq!(member.latest_reaction_at, Some(third));
    assert_eq!(member.latest_activity_at, Some(third));

    let count = entity::prelude::MemberActivity::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that activity clears inactive and departed status.
///
/// Expected: Ok with `inactive_since` and `left_at` reset to None
#[tokio::test]
async fn activity_revives_inactive_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member_activity::MemberActivityFactory::new(db, "100")
        .user_id("1")
        .message_count(4)
        .latest_message_at(Some(Utc::now() - Duration::days(40)))
        .inactive_since(Some(Utc::now() - Duration::days(5)))
        .left_at(Some(Utc::now() - Duration::days(1)))
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);
    repo.record_activity(&identity(100, 1), ActivityKind::Reaction, Utc::now())
        .await?;

    let member = repo.find(100, 1).await?.unwrap();
    assert_eq!(member.message_count, 4);
    assert_eq!(member.reaction_count, 1);
    assert!(member.inactive_since.is_none());
    assert!(member.left_at.is_none());

    Ok(())
}

/// Tests that records are scoped per guild.
///
/// Expected: Ok with one record per guild for the same user
#[tokio::test]
async fn keeps_guilds_separate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberActivityRepository::new(db);
    repo.record_activity(&identity(100, 1), ActivityKind::Message, Utc::now())
        .await?;
    repo.record_activity(&identity(200, 1), ActivityKind::Message, Utc::now())
        .await?;

    assert_eq!(repo.find(100, 1).await?.unwrap().message_count, 1);
    assert_eq!(repo.find(200, 1).await?.unwrap().message_count, 1);

    Ok(())
}
