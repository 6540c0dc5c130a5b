use super::*;

/// Tests that members seen in the live list lose their departure mark and become
/// sweep candidates again.
///
/// Member 1 was kicked 150 days ago and has been silent for 200 days; member 2 is
/// departed and not in the live list; member 3 in another guild shares the user id.
///
/// Expected: Ok(1) with only member 1 cleared and returned as a candidate
#[tokio::test]
async fn clears_departure_for_live_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let left_at = Some(now - Duration::days(150));
    for (guild, user) in [("100", "1"), ("100", "2"), ("200", "1")] {
        factory::member_activity::MemberActivityFactory::new(db, guild)
            .user_id(user)
            .latest_message_at(Some(now - Duration::days(200)))
            .left_at(left_at)
            .build()
            .await?;
    }

    let repo = MemberActivityRepository::new(db);
    let returned = repo.mark_present(100, &[1, 3]).await?;

    assert_eq!(returned, 1);
    assert!(repo.find(100, 1).await?.unwrap().left_at.is_none());
    assert_eq!(repo.find(100, 2).await?.unwrap().left_at, left_at);
    assert_eq!(repo.find(200, 1).await?.unwrap().left_at, left_at);

    let candidates = repo
        .get_inactivity_candidates(100, now - Duration::days(30))
        .await?;
    let ids: Vec<u64> = candidates.iter().map(|member| member.user_id).collect();
    assert_eq!(ids, vec![1]);

    Ok(())
}

/// Tests that members who never left are not rewritten.
///
/// Expected: Ok(0) with `updated_at` unchanged
#[tokio::test]
async fn ignores_members_already_present() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member_activity::MemberActivityFactory::new(db, "100")
        .user_id("1")
        .build()
        .await?;

    let repo = MemberActivityRepository::new(db);

    assert_eq!(repo.mark_present(100, &[1]).await?, 0);
    assert_eq!(repo.mark_present(100, &[]).await?, 0);
    assert_eq!(repo.find(100, 1).await?.unwrap().updated_at, created.updated_at);

    Ok(())
}
