use super::*;

/// Tests adding a reminder to a record.
///
/// Expected: Ok with the reminder created incomplete
#[tokio::test]
async fn creates_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::medical_record::create_record(db, user.id).await?;

    let due_at = Utc::now() + Duration::days(3);
    let repo = ReminderRepository::new(db);
    let reminder = repo
        .create(CreateReminderParams {
            record_id: record.id,
            kind: ReminderKind::Refill,
            title: "Refill blood pressure medication".to_string(),
            description: None,
            due_at,
        })
        .await?;

    assert_eq!(reminder.record_id, record.id);
    assert_eq!(reminder.kind, "refill");
    assert_eq!(reminder.due_at, due_at);
    assert!(!reminder.is_completed);
    assert!(reminder.completed_at.is_none());

    Ok(())
}

/// Tests foreign key constraint on record_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReminderRepository::new(db);
    let result = repo
        .create(CreateReminderParams {
            record_id: 999999,
            kind: ReminderKind::Appointment,
            title: "Orphan reminder".to_string(),
            description: None,
            due_at: Utc::now() + Duration::days(1),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
