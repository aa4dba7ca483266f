use super::*;

/// Tests looking a user up by their email address.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("jane@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("jane@example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests looking up an email that is not registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("nobody@example.com").await?;

    assert!(found.is_none());

    Ok(())
}
