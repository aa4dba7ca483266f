use super::*;

/// Tests listing prescriptions newest first with medicines attached.
///
/// Expected: Ok ordered by date_issued descending
#[tokio::test]
async fn lists_newest_first_with_medicines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prescription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let older = factory::prescription::PrescriptionFactory::new(db, user.id)
        .date_issued(Utc::now() - Duration::days(30))
        .build()
        .await?;
    let newer = factory::prescription::PrescriptionFactory::new(db, user.id)
        .date_issued(Utc::now() - Duration::days(1))
        .build()
        .await?;
    factory::prescription::create_prescription_medicine(db, newer.id, "Amoxicillin").await?;

    let repo = PrescriptionRepository::new(db);
    let prescriptions = repo.get_for_user(user.id).await?;

    assert_eq!(prescriptions.len(), 2);
    assert_eq!(prescriptions[0].id, newer.id);
    assert_eq!(prescriptions[0].medicines.len(), 1);
    assert_eq!(prescriptions[1].id, older.id);
    assert!(prescriptions[1].medicines.is_empty());

    Ok(())
}

/// Tests that lookups are scoped to the owning user.
///
/// Expected: Ok(None) for a prescription owned by someone else
#[tokio::test]
async fn find_scopes_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prescription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let prescription = factory::prescription::create_prescription(db, owner.id).await?;

    let repo = PrescriptionRepository::new(db);

    assert!(repo
        .find_by_id_for_user(prescription.id, owner.id)
        .await?
        .is_some());
    assert!(repo
        .find_by_id_for_user(prescription.id, intruder.id)
        .await?
        .is_none());

    Ok(())
}
