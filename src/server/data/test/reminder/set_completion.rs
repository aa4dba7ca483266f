use super::*;

/// Tests completing and then re-opening a reminder.
///
/// Expected: completed_at stamped on completion and cleared on re-open
#[tokio::test]
async fn stamps_and_clears_completed_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::medical_record::create_record(db, user.id).await?;
    let reminder = factory::reminder::create_reminder(db, record.id).await?;

    let repo = ReminderRepository::new(db);

    let completed = repo
        .set_completion(reminder.id, record.id, true)
        .await?
        .unwrap();
    assert!(completed.is_completed);
    assert!(completed.completed_at.is_some());

    let reopened = repo
        .set_completion(reminder.id, record.id, false)
        .await?
        .unwrap();
    assert!(!reopened.is_completed);
    assert!(reopened.completed_at.is_none());

    Ok(())
}

/// Tests that completion updates are scoped to the reminder's record.
///
/// Expected: Ok(None) when the record id does not match
#[tokio::test]
async fn returns_none_for_foreign_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::medical_record::create_record(db, user.id).await?;
    let other_record = factory::medical_record::create_record(db, user.id).await?;
    let reminder = factory::reminder::create_reminder(db, record.id).await?;

    let repo = ReminderRepository::new(db);
    let result = repo.set_completion(reminder.id, other_record.id, true).await?;

    assert!(result.is_none());

    Ok(())
}
