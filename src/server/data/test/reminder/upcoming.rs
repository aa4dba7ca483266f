use super::*;

/// Tests the look-ahead window of the upcoming query.
///
/// Seeds reminders before, inside, and beyond a 7 day window.
///
/// Expected: Ok with only the in-window, incomplete reminder returned
#[tokio::test]
async fn filters_by_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::medical_record::create_record(db, user.id).await?;

    factory::reminder::ReminderFactory::new(db, record.id)
        .title("Already due")
        .due_at(Utc::now() - Duration::days(1))
        .build()
        .await?;
    factory::reminder::ReminderFactory::new(db, record.id)
        .title("Due soon")
        .due_at(Utc::now() + Duration::days(3))
        .build()
        .await?;
    factory::reminder::ReminderFactory::new(db, record.id)
        .title("Far away")
        .due_at(Utc::now() + Duration::days(30))
        .build()
        .await?;

    let repo = ReminderRepository::new(db);
    let upcoming = repo.upcoming(user.id, 7, 10).await?;

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].reminder.title, "Due soon");
    assert_eq!(upcoming[0].record_title, record.title);

    Ok(())
}

/// Tests that completed reminders are excluded from the upcoming list.
///
/// Expected: Ok with completed reminder absent
#[tokio::test]
async fn excludes_completed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::medical_record::create_record(db, user.id).await?;

    factory::reminder::ReminderFactory::new(db, record.id)
        .title("Done")
        .due_at(Utc::now() + Duration::days(2))
        .completed()
        .build()
        .await?;
    factory::reminder::ReminderFactory::new(db, record.id)
        .title("Pending")
        .due_at(Utc::now() + Duration::days(2))
        .build()
        .await?;

    let repo = ReminderRepository::new(db);
    let upcoming = repo.upcoming(user.id, 7, 10).await?;

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].reminder.title, "Pending");

    Ok(())
}

/// Tests ordering and the result cap.
///
/// Expected: Ok with soonest-first ordering, truncated at the limit
#[tokio::test]
async fn orders_and_caps_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::medical_record::create_record(db, user.id).await?;

    for day in (1..=5).rev() {
        factory::reminder::ReminderFactory::new(db, record.id)
            .title(format!("Due in {} days", day))
            .due_at(Utc::now() + Duration::days(day))
            .build()
            .await?;
    }

    let repo = ReminderRepository::new(db);
    let upcoming = repo.upcoming(user.id, 7, 3).await?;

    assert_eq!(upcoming.len(), 3);
    assert_eq!(upcoming[0].reminder.title, "Due in 1 days");
    assert_eq!(upcoming[2].reminder.title, "Due in 3 days");

    Ok(())
}

/// Tests that other users' reminders never appear.
///
/// Expected: Ok with only the owner's reminders
#[tokio::test]
async fn scopes_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let record = factory::medical_record::create_record(db, user.id).await?;
    let other_record = factory::medical_record::create_record(db, other.id).await?;

    factory::reminder::ReminderFactory::new(db, record.id)
        .due_at(Utc::now() + Duration::days(2))
        .build()
        .await?;
    factory::reminder::ReminderFactory::new(db, other_record.id)
        .due_at(Utc::now() + Duration::days(2))
        .build()
        .await?;

    let repo = ReminderRepository::new(db);
    let upcoming = repo.upcoming(user.id, 7, 10).await?;

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].reminder.record_id, record.id);

    Ok(())
}
