use super::*;

/// Tests creating a medication for a user.
///
/// Expected: Ok with medication created
#[tokio::test]
async fn creates_medication() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Medication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = MedicationRepository::new(db);
    let medication = repo
        .create(
            user.id,
            CreateMedicationParams {
                name: "Lisinopril".to_string(),
                dosage: Some("10mg".to_string()),
                frequency: Some("once daily".to_string()),
                start_date: None,
                end_date: None,
                notes: None,
                active: true,
            },
        )
        .await?;

    assert_eq!(medication.user_id, user.id);
    assert_eq!(medication.name, "Lisinopril");
    assert_eq!(medication.dosage.as_deref(), Some("10mg"));
    assert!(medication.active);

    Ok(())
}
