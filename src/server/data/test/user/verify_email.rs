use super::*;

/// Tests marking a user verified through their token digest.
///
/// Verifies that the user flips to verified and the digest is cleared so the
/// token cannot be replayed.
///
/// Expected: Ok(Some) verified, second call Ok(None)
#[tokio::test]
async fn verifies_and_consumes_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email_verified(false)
        .verification_token("verify-digest")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let verified = repo.verify_email("verify-digest").await?.unwrap();

    assert_eq!(verified.id, user.id);
    assert!(verified.email_verified);

    // Token is single use
    assert!(repo.verify_email("verify-digest").await?.is_none());

    Ok(())
}

/// Tests verification with a digest no user holds.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let verified = repo.verify_email("no-such-digest").await?;

    assert!(verified.is_none());

    Ok(())
}

/// Tests replacing a user's verification token digest.
///
/// Expected: Ok with the new digest matching on verify
#[tokio::test]
async fn set_verification_token_replaces_digest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email_verified(false)
        .verification_token("old-digest")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.set_verification_token(user.id, "new-digest").await?;

    assert!(repo.verify_email("old-digest").await?.is_none());
    assert!(repo.verify_email("new-digest").await?.is_some());

    Ok(())
}
