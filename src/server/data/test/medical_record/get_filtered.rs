use super::*;

/// Tests that the list is scoped to the requesting user.
///
/// Expected: Ok with only the owner's records returned
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
    factory::medical_record::create_record(db, user.id).await?;
    factory::medical_record::create_record(db, other.id).await?;

    let repo = MedicalRecordRepository::new(db);
    let page = repo
        .get_filtered(user.id, &RecordFilters::default(), 1, 10)
        .await?;

    assert_eq!(page.total, 1);
    assert!(page.records.iter().all(|r| r.user_id == user.id));

    Ok(())
}

/// Tests filtering by record type and status together.
///
/// Expected: Ok with only records matching both filters
#[tokio::test]
async fn filters_by_type_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::medical_record::MedicalRecordFactory::new(db, user.id)
        .record_type("lab-result")
        .status("resolved")
        .build()
        .await?;
    factory::medical_record::MedicalRecordFactory::new(db, user.id)
        .record_type("lab-result")
        .status("active")
        .build()
        .await?;
    factory::medical_record::MedicalRecordFactory::new(db, user.id)
        .record_type("surgery")
        .status("resolved")
        .build()
        .await?;

    let repo = MedicalRecordRepository::new(db);
    let page = repo
        .get_filtered(
            user.id,
            &RecordFilters {
                record_type: Some(RecordType::LabResult),
                status: Some(RecordStatus::Resolved),
                ..Default::default()
            },
            1,
            10,
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.records[0].record_type, "lab-result");
    assert_eq!(page.records[0].status, "resolved");

    Ok(())
}

/// Tests the date range filter against date_of_record.
///
/// Expected: Ok with records outside the window excluded
#[tokio::test]
async fn filters_by_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();
    factory::medical_record::MedicalRecordFactory::new(db, user.id)
        .title("Old record")
        .date_of_record(now - Duration::days(30))
        .build()
        .await?;
    factory::medical_record::MedicalRecordFactory::new(db, user.id)
        .title("Recent record")
        .date_of_record(now - Duration::days(2))
        .build()
        .await?;

    let repo = MedicalRecordRepository::new(db);
    let page = repo
        .get_filtered(
            user.id,
            &RecordFilters {
                date_from: Some(now - Duration::days(7)),
                date_to: Some(now),
                ..Default::default()
            },
            1,
            10,
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.records[0].title, "Recent record");

    Ok(())
}

/// Tests substring search across title, description, and doctor name.
///
/// Expected: Ok with matches from any of the three columns
#[tokio::test]
async fn searches_across_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::medical_record::MedicalRecordFactory::new(db, user.id)
        .title("Cardiology follow-up")
        .build()
        .await?;
    factory::medical_record::MedicalRecordFactory::new(db, user.id)
        .doctor_name("Dr. Cardio")
        .build()
        .await?;
    factory::medical_record::MedicalRecordFactory::new(db, user.id)
        .title("Dermatology visit")
        .build()
        .await?;

    let repo = MedicalRecordRepository::new(db);
    let page = repo
        .get_filtered(
            user.id,
            &RecordFilters {
                search: Some("Cardio".to_string()),
                ..Default::default()
            },
            1,
            10,
        )
        .await?;

    assert_eq!(page.total, 2);

    Ok(())
}

/// Tests pagination metadata and newest-first ordering.
///
/// Expected: Ok with correct page slices and total_pages
#[tokio::test]
async fn paginates_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();
    for days_ago in 1..=5 {
        factory::medical_record::MedicalRecordFactory::new(db, user.id)
            .title(format!("Record {} days ago", days_ago))
            .date_of_record(now - Duration::days(days_ago))
            .build()
            .await?;
    }

    let repo = MedicalRecordRepository::new(db);
    let first = repo
        .get_filtered(user.id, &RecordFilters::default(), 1, 2)
        .await?;

    assert_eq!(first.total, 5);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.records.len(), 2);
    assert_eq!(first.records[0].title, "Record 1 days ago");

    let last = repo
        .get_filtered(user.id, &RecordFilters::default(), 3, 2)
        .await?;

    assert_eq!(last.records.len(), 1);
    assert_eq!(last.records[0].title, "Record 5 days ago");

    Ok(())
}

/// Tests that children are attached to the right record in list results.
///
/// Expected: Ok with files and reminders grouped per record
#[tokio::test]
async fn loads_children_for_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let with_children = factory::medical_record::create_record(db, user.id).await?;
    let bare = factory::medical_record::create_record(db, user.id).await?;
    factory::record_file::create_record_file(db, with_children.id).await?;
    factory::reminder::create_reminder(db, with_children.id).await?;

    let repo = MedicalRecordRepository::new(db);
    let page = repo
        .get_filtered(user.id, &RecordFilters::default(), 1, 10)
        .await?;

    let loaded_with = page.records.iter().find(|r| r.id == with_children.id).unwrap();
    let loaded_bare = page.records.iter().find(|r| r.id == bare.id).unwrap();

    assert_eq!(loaded_with.files.len(), 1);
    assert_eq!(loaded_with.reminders.len(), 1);
    assert!(loaded_bare.files.is_empty());
    assert!(loaded_bare.reminders.is_empty());

    Ok(())
}
