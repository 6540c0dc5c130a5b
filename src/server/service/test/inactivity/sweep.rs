use super::*;

/// Tests that one failing guild does not abort the sweep.
///
/// Guild 100 has a candidate and its member list fails to load; guild 200 has
/// nothing to do.
///
/// Expected: Ok with only guild 200 reported
#[tokio::test]
async fn isolates_guild_failures() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    configure_guild(db, None).await?;
    factory::create_inactivity_config(db, "200").await?;
    factory::member_activity::MemberActivityFactory::new(db, GUILD.to_string())
        .user_id("1")
        .latest_message_at(days_ago(31))
        .build()
        .await?;

    let discord = FakeDiscord::new().failing_member_list();
    let evaluations: Vec<GuildEvaluation> = InactivityService::new(db, &discord, &discord, None)
        .sweep(Utc::now())
        .await?;

    assert_eq!(evaluations.len(), 1);
    assert_eq!(evaluations[0].guild_id, 200);
    assert!(MemberActivityRepository::new(db)
        .find(GUILD, 1)
        .await?
        .unwrap()
        .inactive_since
        .is_none());

    Ok(())
}

/// Tests that guilds without configuration are never evaluated.
///
/// Expected: Ok with no evaluations and the stale member untouched
#[tokio::test]
async fn ignores_unconfigured_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member_activity::MemberActivityFactory::new(db, GUILD.to_string())
        .user_id("1")
        .latest_message_at(days_ago(90))
        .build()
        .await?;

    let discord = FakeDiscord::new().with_member(GUILD, member(1, 400));
    let evaluations = InactivityService::new(db, &discord, &discord, None)
        .sweep(Utc::now())
        .await?;

    assert!(evaluations.is_empty());
    assert!(discord.calls().is_empty());

    Ok(())
}

/// Tests that a guild whose inactivity period overflows the calendar is skipped
/// without stopping the sweep.
///
/// Guild 50 stores an inactivity period of 200,000,000 days; guild 100 is configured
/// normally and has a stale member.
///
/// Expected: Ok with only guild 100 reported and its stale member marked inactive
#[tokio::test]
async fn skips_guild_with_out_of_range_period() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inactivity_config::InactivityConfigFactory::new(db, "50")
        .days_until_inactive(200_000_000)
        .build()
        .await?;
    configure_guild(db, None).await?;
    factory::member_activity::MemberActivityFactory::new(db, GUILD.to_string())
        .user_id("1")
        .latest_message_at(days_ago(31))
        .build()
        .await?;

    let discord = FakeDiscord::new().with_member(GUILD, member(1, 400));
    let evaluations = InactivityService::new(db, &discord, &discord, None)
        .sweep(Utc::now())
        .await?;

    assert_eq!(evaluations.len(), 1);
    assert_eq!(evaluations[0].guild_id, GUILD);
    assert_eq!(evaluations[0].marked_inactive, vec![1]);

    Ok(())
}
