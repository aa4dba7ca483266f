use super::*;

/// Tests a partial medication update.
///
/// Expected: Ok(Some) with provided fields changed, rest untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Medication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let medication = factory::medication::MedicationFactory::new(db, user.id)
        .name("Lisinopril")
        .dosage("10mg")
        .build()
        .await?;

    let repo = MedicationRepository::new(db);
    let updated = repo
        .update(
            medication.id,
            user.id,
            UpdateMedicationParams {
                dosage: Some("20mg".to_string()),
                active: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.dosage.as_deref(), Some("20mg"));
    assert!(!updated.active);
    assert_eq!(updated.name, "Lisinopril");

    Ok(())
}

/// Tests that updates cannot reach another user's medication.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_foreign_medication() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Medication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let medication = factory::medication::create_medication(db, owner.id).await?;

    let repo = MedicationRepository::new(db);
    let updated = repo
        .update(
            medication.id,
            intruder.id,
            UpdateMedicationParams {
                name: Some("Hijacked".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
