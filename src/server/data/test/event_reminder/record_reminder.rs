use super::*;

/// Tests recording a reminder for an event configured only by description.
///
/// Expected: Ok with a row holding nothing but the reminder time
#[tokio::test]
async fn creates_row_with_only_reminder_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let at = Utc::now();
    let repo = EventReminderRepository::new(db);
    repo.record_reminder(900, 100, at).await?;

    let reminder = repo.get_by_event_id(900).await?.unwrap();
    assert_eq!(reminder.latest_reminder_at, Some(at));
    assert!(reminder.channel_id.is_none());
    assert!(reminder.role_id.is_none());
    assert!(reminder.should_remind.is_none());

    Ok(())
}

/// Tests recording a reminder for a configured event.
///
/// Expected: Ok with configuration untouched
#[tokio::test]
async fn keeps_configuration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::event_reminder::EventReminderFactory::new(db, "100")
        .event_id("900")
        .channel_id(Some("300".to_string()))
        .role_id(Some("400".to_string()))
        .should_remind(Some(true))
        .build()
        .await?;

    let at = Utc::now();
    let repo = EventReminderRepository::new(db);
    repo.record_reminder(900, 100, at).await?;

    let reminder = repo.get_by_event_id(900).await?.unwrap();
    assert_eq!(reminder.channel_id, Some(300));
    assert_eq!(reminder.role_id, Some(400));
    assert_eq!(reminder.should_remind, Some(true));
    assert_eq!(reminder.latest_reminder_at, Some(at));

    Ok(())
}
