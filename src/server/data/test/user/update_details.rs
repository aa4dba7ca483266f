use super::*;

/// Tests a partial profile update.
///
/// Verifies that fields present in the params are written and absent fields
/// keep their current values.
///
/// Expected: Ok(Some) with only the provided fields changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Jane Doe")
        .email("jane@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_details(
            user.id,
            UpdateDetailsParams {
                phone: Some("+1-555-0100".to_string()),
                address: Some("12 Elm Street".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.phone.as_deref(), Some("+1-555-0100"));
    assert_eq!(updated.address.as_deref(), Some("12 Elm Street"));
    assert_eq!(updated.name, "Jane Doe");
    assert_eq!(updated.email, "jane@example.com");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo
        .update_details(
            999999,
            UpdateDetailsParams {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
