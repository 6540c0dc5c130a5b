use super::*;

/// Tests the full lifecycle pass over a stale, an expired and an active member.
///
/// Verifies the stale member gets the role, the inactive timestamp and a notice; the
/// expired member gets the kick notice with the invite link, is kicked and reset; the
/// active member is untouched.
///
/// Expected: Ok with one member marked inactive and one kicked
#[tokio::test]
async fn marks_stale_and_kicks_expired_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = configure_guild(db, Some("https://discord.gg/back")).await?;
    let stale = factory::member_activity::MemberActivityFactory::new(db, GUILD.to_string())
        .user_id("1")
        .latest_message_at(days_ago(31))
        .build()
        .await?;
    factory::member_activity::MemberActivityFactory::new(db, GUILD.to_string())
        .user_id("2")
        .latest_message_at(days_ago(45))
        .inactive_since(days_ago(11))
        .build()
        .await?;
    factory::member_activity::MemberActivityFactory::new(db, GUILD.to_string())
        .user_id("3")
        .latest_message_at(days_ago(1))
        .build()
        .await?;

    let discord = FakeDiscord::new()
        .with_member(GUILD, member(1, 400))
        .with_member(GUILD, member(2, 400))
        .with_member(GUILD, member(3, 400));

    let now = Utc::now();
    let evaluation = InactivityService::new(db, &discord, &discord, None)
        .evaluate_guild(&config, now)
        .await?;

    assert_eq!(evaluation.marked_inactive, vec![1]);
    assert_eq!(evaluation.kicked, vec![2]);
    assert_eq!(evaluation.failed, 0);

    let repo = MemberActivityRepository::new(db);

    // M: role added, notice sent, not kicked
    assert!(discord.calls().contains(&Call::AddRole {
        guild_id: GUILD,
        user_id: 1,
        role_id: INACTIVE_ROLE
    }));
    assert_eq!(discord.dms_to(1).len(), 1);
    let m = repo.find(GUILD, 1).await?.unwrap();
    assert_eq!(m.inactive_since, Some(now));
    assert_eq!(m.latest_activity_at, stale.latest_activity_at);

    // K: notice with invite link, kicked, reset
    let kick_dms = discord.dms_to(2);
    assert_eq!(kick_dms.len(), 1);
    assert!(kick_dms[0].contains("https://discord.gg/back"));
    assert_eq!(discord.kicked(), vec![2]);
    let k = repo.find(GUILD, 2).await?.unwrap();
    assert!(k.inactive_since.is_none());
    assert_eq!(k.left_at, Some(now));

    // A: untouched
    assert!(discord.dms_to(3).is_empty());
    assert!(repo.find(GUILD, 3).await?.unwrap().inactive_since.is_none());

    Ok(())
}

/// Tests that the kick notice is sent before the kick.
///
/// Expected: Ok with the DM recorded ahead of the kick
#[tokio::test]
async fn kick_notice_precedes_kick() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = configure_guild(db, None).await?;
    factory::member_activity::MemberActivityFactory::new(db, GUILD.to_string())
        .user_id("2")
        .inactive_since(days_ago(11))
        .build()
        .await?;

    let discord = FakeDiscord::new().with_member(GUILD, member(2, 400));
    InactivityService::new(db, &discord, &discord, None)
        .evaluate_guild(&config, Utc::now())
        .await?;

    let calls = discord.calls();
    assert!(matches!(calls[0], Call::Dm { user_id: 2, .. }));
    assert_eq!(
        calls[1],
        Call::Kick {
            guild_id: GUILD,
            user_id: 2
        }
    );

    Ok(())
}

/// Tests that running the pass twice does not repeat any action.
///
/// Expected: Ok with the second pass making no Discord calls
#[tokio::test]
async fn second_pass_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = configure_guild(db, None).await?;
    factory::member_activity::MemberActivityFactory::new(db, GUILD.to_string())
        .user_id("1")
        .latest_message_at(days_ago(31))
        .build()
        .await?;
    factory::member_activity::MemberActivityFactory::new(db, GUILD.to_string())
        .user_id("2")
        .inactive_since(days_ago(11))
        .build()
        .await?;

    let discord = FakeDiscord::new()
        .with_member(GUILD, member(1, 400))
        .with_member(GUILD, member(2, 400));
    let service = InactivityService::new(db, &discord, &discord, None);

    service.evaluate_guild(&config, Utc::now()).await?;
    let calls_after_first = discord.calls().len();

    let second = service.evaluate_guild(&config, Utc::now()).await?;

    assert_eq!(discord.calls().len(), calls_after_first);
    assert!(second.marked_inactive.is_empty());
    assert!(second.kicked.is_empty());
    assert_eq!(second.within_grace, 1);

    Ok(())
}

/// Tests that closed DMs do not prevent the kick.
///
/// Expected: Ok with the member kicked
#[tokio::test]
async fn dm_failure_does_not_block_kick() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = configure_guild(db, None).await?;
    factory::member_activity::MemberActivityFactory::new(db, GUILD.to_string())
        .user_id("2")
        .inactive_since(days_ago(11))
        .build()
        .await?;

    let discord = FakeDiscord::new()
        .with_member(GUILD, member(2, 400))
        .failing_dms();
    let evaluation = InactivityService::new(db, &discord, &discord, None)
        .evaluate_guild(&config, Utc::now())
        .await?;

    assert_eq!(evaluation.kicked, vec![2]);
    assert_eq!(discord.kicked(), vec![2]);

    Ok(())
}

/// Tests that a failed kick leaves the record unchanged.
///
/// Expected: Ok with the failure counted and `inactive_since` kept
#[tokio::test]
async fn failed_kick_keeps_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = configure_guild(db, None).await?;
    let inactive_since = days_ago(11);
    factory::member_activity::MemberActivityFactory::new(db, GUILD.to_string())
        .user_id("2")
        .inactive_since(inactive_since)
        .build()
        .await?;

    let discord = FakeDiscord::new()
        .with_member(GUILD, member(2, 400))
        .failing_kicks();
    let evaluation = InactivityService::new(db, &discord, &discord, None)
        .evaluate_guild(&config, Utc::now())
        .await?;

    assert_eq!(evaluation.failed, 1);
    assert!(evaluation.kicked.is_empty());
    let record = MemberActivityRepository::new(db).find(GUILD, 2).await?.unwrap();
    assert_eq!(record.inactive_since, inactive_since);
    assert!(record.left_at.is_none());

    Ok(())
}

/// Tests that a failed role grant still marks the member inactive.
///
/// Expected: Ok with the member marked inactive and notified
#[tokio::test]
async fn role_failure_still_marks_inactive() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = configure_guild(db, None).await?;
    factory::member_activity::MemberActivityFactory::new(db, GUILD.to_string())
        .user_id("1")
        .latest_message_at(days_ago(40))
        .build()
        .await?;

    let discord = FakeDiscord::new()
        .with_member(GUILD, member(1, 400))
        .failing_roles();
    let evaluation = InactivityService::new(db, &discord, &discord, None)
        .evaluate_guild(&config, Utc::now())
        .await?;

    assert_eq!(evaluation.marked_inactive, vec![1]);
    assert_eq!(discord.dms_to(1).len(), 1);
    let record = MemberActivityRepository::new(db).find(GUILD, 1).await?.unwrap();
    assert!(record.inactive_since.is_some());

    Ok(())
}

/// Tests members who are gone from the guild and newcomers without activity.
///
/// Verifies the departed member is recorded as left and never kicked, and the
/// newcomer is left alone.
///
/// Expected: Ok with both skipped
#[tokio::test]
async fn skips_departed_members_and_newcomers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = configure_guild(db, None).await?;
    factory::member_activity::MemberActivityFactory::new(db, GUILD.to_string())
        .user_id("4")
        .inactive_since(days_ago(20))
        .build()
        .await?;
    factory::member_activity::MemberActivityFactory::new(db, GUILD.to_string())
        .user_id("5")
        .build()
        .await?;

    let discord = FakeDiscord::new().with_member(GUILD, member(5, 2));
    let now = Utc::now();
    let evaluation = InactivityService::new(db, &discord, &discord, None)
        .evaluate_guild(&config, now)
        .await?;

    assert_eq!(evaluation.skipped, 2);
    assert!(discord.calls().is_empty());

    let repo = MemberActivityRepository::new(db);
    let departed = repo.find(GUILD, 4).await?.unwrap();
    assert_eq!(departed.left_at, Some(now));
    assert!(departed.inactive_since.is_none());
    assert!(repo.find(GUILD, 5).await?.unwrap().inactive_since.is_none());

    Ok(())
}

/// Tests the maintainer summary.
///
/// Expected: Ok with one summary DM listing the newly inactive member
#[tokio::test]
async fn sends_summary_to_maintainer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = configure_guild(db, None).await?;
    factory::member_activity::MemberActivityFactory::new(db, GUILD.to_string())
        .user_id("1")
        .username("sleepy")
        .latest_message_at(days_ago(31))
        .build()
        .await?;

    let discord = FakeDiscord::new().with_member(GUILD, member(1, 400));
    InactivityService::new(db, &discord, &discord, Some(MAINTAINER))
        .evaluate_guild(&config, Utc::now())
        .await?;

    let summaries = discord.dms_to(MAINTAINER);
    assert_eq!(summaries.len(), 1);
    assert!(summaries[0].contains("sleepy"));
    assert!(summaries[0].contains("Marked inactive: 1"));
    assert!(summaries[0].chars().count() <= notice::DISCORD_MESSAGE_LIMIT);

    Ok(())
}
