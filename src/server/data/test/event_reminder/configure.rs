use super::*;

/// Tests storing reminder configuration for a new event.
///
/// Expected: Ok with configuration stored and no reminder recorded
#[tokio::test]
async fn stores_configuration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventReminderRepository::new(db);
    repo.configure(&ConfigureEventReminderParam {
        event_id: 900,
        guild_id: 100,
        channel_id: 300,
        role_id: Some(400),
        should_remind: true,
    })
    .await?;

    let reminder = repo.get_by_event_id(900).await?.unwrap();
    assert_eq!(reminder.guild_id, 100);
    assert_eq!(reminder.channel_id, Some(300));
    assert_eq!(reminder.role_id, Some(400));
    assert_eq!(reminder.should_remind, Some(true));
    assert!(reminder.latest_reminder_at.is_none());

    Ok(())
}

/// Tests that reconfiguring keeps the recorded reminder time.
///
/// Expected: Ok with configuration replaced and `latest_reminder_at` preserved
#[tokio::test]
async fn keeps_latest_reminder_on_reconfigure() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reminded_at = Utc::now() - Duration::hours(3);
    factory::event_reminder::EventReminderFactory::new(db, "100")
        .event_id("900")
        .channel_id(Some("300".to_string()))
        .should_remind(Some(true))
        .latest_reminder_at(Some(reminded_at))
        .build()
        .await?;

    let repo = EventReminderRepository::new(db);
    repo.configure(&ConfigureEventReminderParam {
        event_id: 900,
        guild_id: 100,
        channel_id: 301,
        role_id: None,
        should_remind: false,
    })
    .await?;

    let reminder = repo.get_by_event_id(900).await?.unwrap();
    assert_eq!(reminder.channel_id, Some(301));
    assert_eq!(reminder.should_remind, Some(false));
    assert_eq!(reminder.latest_reminder_at, Some(reminded_at));

    Ok(())
}
