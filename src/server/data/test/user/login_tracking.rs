use super::*;

/// Tests that a failed login increments the attempt counter without locking.
///
/// Expected: Ok(false) with login_attempts incremented
#[tokio::test]
async fn failed_login_increments_attempts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let locked = repo.record_failed_login(user.id).await?;

    assert!(!locked);
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.login_attempts, 1);
    assert!(stored.lock_until.is_none());

    Ok(())
}

/// Tests that hitting the attempt limit locks the account.
///
/// Seeds the user one failure short of the limit, then records one more.
///
/// Expected: Ok(true) with lock_until set in the future
#[tokio::test]
async fn failed_login_locks_at_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .login_attempts(MAX_LOGIN_ATTEMPTS - 1)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let locked = repo.record_failed_login(user.id).await?;

    assert!(locked);
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.login_attempts, MAX_LOGIN_ATTEMPTS);
    assert!(stored.lock_until.unwrap() > chrono::Utc::now());

    Ok(())
}

/// Tests that a successful login clears attempts, lock, and stamps last_login.
///
/// Expected: Ok with counters reset and last_login set
#[tokio::test]
async fn successful_login_resets_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .login_attempts(3)
        .lock_until(chrono::Utc::now() - chrono::Duration::hours(1))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.record_successful_login(user.id).await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.login_attempts, 0);
    assert!(stored.lock_until.is_none());
    assert!(stored.last_login.is_some());

    Ok(())
}
