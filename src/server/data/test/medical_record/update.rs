use super::*;

/// Tests a partial update leaving absent fields untouched.
///
/// Expected: Ok(Some) with title and status changed, rest unchanged
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::medical_record::MedicalRecordFactory::new(db, user.id)
        .title("Original title")
        .doctor_name("Dr. Osei")
        .build()
        .await?;

    let repo = MedicalRecordRepository::new(db);
    let updated = repo
        .update(
            record.id,
            user.id,
            UpdateRecordParams {
                title: Some("Corrected title".to_string()),
                status: Some(RecordStatus::Resolved),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Corrected title");
    assert_eq!(updated.status, "resolved");
    assert_eq!(updated.doctor_name, "Dr. Osei");

    Ok(())
}

/// Tests that the doctor group replaces all three doctor columns.
///
/// Expected: Ok(Some) with specialization cleared when omitted from the group
#[tokio::test]
async fn doctor_group_replaces_whole_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::medical_record::create_record(db, user.id).await?;

    let repo = MedicalRecordRepository::new(db);
    let updated = repo
        .update(
            record.id,
            user.id,
            UpdateRecordParams {
                doctor: Some(UpdateDoctorParams {
                    name: "Dr. Nkrumah".to_string(),
                    specialization: None,
                    hospital: Some("Central Hospital".to_string()),
                }),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.doctor_name, "Dr. Nkrumah");
    assert!(updated.doctor_specialization.is_none());
    assert_eq!(updated.doctor_hospital.as_deref(), Some("Central Hospital"));

    Ok(())
}

/// Tests that the vitals group rewrites every vital column including BMI.
///
/// Expected: Ok(Some) with previous vitals fully replaced
#[tokio::test]
async fn vitals_group_replaces_whole_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::medical_record::MedicalRecordFactory::new(db, user.id)
        .body_metrics(70.0, 175.0, 22.9)
        .build()
        .await?;

    let repo = MedicalRecordRepository::new(db);
    let updated = repo
        .update(
            record.id,
            user.id,
            UpdateRecordParams {
                vitals: Some(UpdateVitalsParams {
                    heart_rate: Some(68),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.heart_rate, Some(68));
    assert!(updated.weight.is_none());
    assert!(updated.height.is_none());
    assert!(updated.bmi.is_none());

    Ok(())
}

/// Tests that updates cannot reach another user's record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_foreign_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let record = factory::medical_record::create_record(db, owner.id).await?;

    let repo = MedicalRecordRepository::new(db);
    let updated = repo
        .update(
            record.id,
            intruder.id,
            UpdateRecordParams {
                title: Some("Hijacked".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
