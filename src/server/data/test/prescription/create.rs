use super::*;

/// Tests creating a prescription with medicine line items.
///
/// Expected: Ok with prescription and both medicines stored
#[tokio::test]
async fn creates_prescription_with_medicines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prescription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PrescriptionRepository::new(db);
    let prescription = repo
        .create(
            user.id,
            CreatePrescriptionParams {
                doctor_name: "Dr. Mensah".to_string(),
                clinic: Some("City Clinic".to_string()),
                date_issued: Utc::now(),
                notes: None,
                medicines: vec![
                    CreateMedicineParams {
                        name: "Amoxicillin".to_string(),
                        dosage: Some("500mg".to_string()),
                        frequency: Some("three times daily".to_string()),
                        duration: Some("7 days".to_string()),
                    },
                    CreateMedicineParams {
                        name: "Paracetamol".to_string(),
                        dosage: None,
                        frequency: None,
                        duration: None,
                    },
                ],
            },
        )
        .await?;

    assert_eq!(prescription.user_id, user.id);
    assert_eq!(prescription.doctor_name, "Dr. Mensah");
    assert_eq!(prescription.medicines.len(), 2);
    assert_eq!(prescription.medicines[0].name, "Amoxicillin");

    Ok(())
}

/// Tests creating a prescription without medicines.
///
/// Expected: Ok with an empty medicine list
#[tokio::test]
async fn creates_prescription_without_medicines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prescription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PrescriptionRepository::new(db);
    let prescription = repo
        .create(
            user.id,
            CreatePrescriptionParams {
                doctor_name: "Dr. Mensah".to_string(),
                clinic: None,
                date_issued: Utc::now(),
                notes: Some("Lifestyle advice only".to_string()),
                medicines: vec![],
            },
        )
        .await?;

    assert!(prescription.medicines.is_empty());

    Ok(())
}
