use super::*;

/// Tests deleting a medication scoped to its owner.
///
/// Expected: Ok(true) for the owner, Ok(false) for anyone else
#[tokio::test]
async fn deletes_for_owner_only() -> Result<(), DbErr> {
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

    assert!(!repo.delete(medication.id, intruder.id).await?);
    assert!(repo.delete(medication.id, owner.id).await?);
    assert!(repo.get_for_user(owner.id, None).await?.is_empty());

    Ok(())
}
