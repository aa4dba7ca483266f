use super::*;

/// Tests listing medications with active entries first.
///
/// Expected: Ok with active medications ahead of inactive ones
#[tokio::test]
async fn lists_active_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Medication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::medication::MedicationFactory::new(db, user.id)
        .name("Old course")
        .active(false)
        .build()
        .await?;
    factory::medication::MedicationFactory::new(db, user.id)
        .name("Current course")
        .active(true)
        .build()
        .await?;

    let repo = MedicationRepository::new(db);
    let medications = repo.get_for_user(user.id, None).await?;

    assert_eq!(medications.len(), 2);
    assert_eq!(medications[0].name, "Current course");
    assert_eq!(medications[1].name, "Old course");

    let active_only = repo.get_for_user(user.id, Some(true)).await?;

    assert_eq!(active_only.len(), 1);
    assert_eq!(active_only[0].name, "Current course");

    Ok(())
}

/// Tests that the list is scoped to the requesting user.
///
/// Expected: Ok with only the owner's medications
#[tokio::test]
async fn scopes_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Medication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::medication::create_medication(db, user.id).await?;
    factory::medication::create_medication(db, other.id).await?;

    let repo = MedicationRepository::new(db);
    let medications = repo.get_for_user(user.id, None).await?;

    assert_eq!(medications.len(), 1);
    assert_eq!(medications[0].user_id, user.id);

    Ok(())
}
