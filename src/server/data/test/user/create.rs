use super::*;

/// Tests creating a new user from registration parameters.
///
/// Verifies that the repository persists the name, email, password hash, and
/// verification token digest, and initializes the account as unverified with
/// no failed login attempts.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            email_verification_token: "digest".to_string(),
        })
        .await?;

    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.email, "jane@example.com");
    assert!(!user.email_verified);
    assert_eq!(user.login_attempts, 0);
    assert!(user.lock_until.is_none());
    assert!(user.last_login.is_none());

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Verifies that creating a second user with an already-registered email
/// fails at the database level.
///
/// Expected: Err(DbErr) due to unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("jane@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            name: "Other Jane".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            email_verification_token: "digest".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
