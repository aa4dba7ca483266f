use super::*;

/// Tests creating a record with the minimal field set.
///
/// Verifies that enum fields are stored as their string form and that the new
/// record starts with no files or reminders.
///
/// Expected: Ok with record created
#[tokio::test]
async fn creates_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = MedicalRecordRepository::new(db);
    let record = repo.create(user.id, sample_params()).await?;

    assert_eq!(record.user_id, user.id);
    assert_eq!(record.title, "Annual checkup");
    assert_eq!(record.record_type, "consultation");
    assert_eq!(record.status, "active");
    assert_eq!(record.doctor_name, "Dr. Osei");
    assert!(record.files.is_empty());
    assert!(record.reminders.is_empty());

    Ok(())
}

/// Tests that vital signs and the derived BMI persist on create.
///
/// Expected: Ok with all vitals stored
#[tokio::test]
async fn creates_record_with_vitals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = MedicalRecordRepository::new(db);
    let record = repo
        .create(
            user.id,
            CreateRecordParams {
                systolic: Some(120),
                diastolic: Some(80),
                heart_rate: Some(72),
                temperature: Some(36.6),
                weight: Some(70.0),
                height: Some(175.0),
                bmi: Some(22.9),
                ..sample_params()
            },
        )
        .await?;

    assert_eq!(record.systolic, Some(120));
    assert_eq!(record.diastolic, Some(80));
    assert_eq!(record.bmi, Some(22.9));

    Ok(())
}

/// Tests foreign key constraint on user_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MedicalRecordRepository::new(db);
    let result = repo.create(999999, sample_params()).await;

    assert!(result.is_err());

    Ok(())
}
