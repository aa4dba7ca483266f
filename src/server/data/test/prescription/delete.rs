use super::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// Tests deleting a prescription along with its medicine rows.
///
/// Expected: Ok(true) with medicine rows cascaded away
#[tokio::test]
async fn deletes_prescription_and_medicines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prescription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let prescription = factory::prescription::create_prescription(db, user.id).await?;
    factory::prescription::create_prescription_medicine(db, prescription.id, "Amoxicillin")
        .await?;

    let repo = PrescriptionRepository::new(db);
    let deleted = repo.delete(prescription.id, user.id).await?;

    assert!(deleted);

    let orphans = entity::prelude::PrescriptionMedicine::find()
        .filter(entity::prescription_medicine::Column::PrescriptionId.eq(prescription.id))
        .all(db)
        .await?;
    assert!(orphans.is_empty());

    Ok(())
}

/// Tests that deletes cannot reach another user's prescription.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_foreign_prescription() -> Result<(), DbErr> {
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

    assert!(!repo.delete(prescription.id, intruder.id).await?);
    assert!(repo
        .find_by_id_for_user(prescription.id, owner.id)
        .await?
        .is_some());

    Ok(())
}
