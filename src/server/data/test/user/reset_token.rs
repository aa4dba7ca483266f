use super::*;

/// Tests storing a reset token digest and finding its holder.
///
/// Expected: Ok(Some) with the user holding the digest
#[tokio::test]
async fn finds_user_by_unexpired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_reset_token(user.id, "abc123digest", 10).await?;

    let found = repo.find_by_reset_token("abc123digest").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that an expired reset token no longer matches.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .reset_token(
            "expired-digest",
            chrono::Utc::now() - chrono::Duration::minutes(1),
        )
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_reset_token("expired-digest").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that updating the password clears the pending reset token.
///
/// Expected: Ok with new hash stored and token gone
#[tokio::test]
async fn update_password_clears_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .reset_token(
            "pending-digest",
            chrono::Utc::now() + chrono::Duration::minutes(10),
        )
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.update_password(user.id, "$argon2id$newhash").await?;

    assert_eq!(
        repo.password_hash(user.id).await?,
        Some("$argon2id$newhash".to_string())
    );
    assert!(repo.find_by_reset_token("pending-digest").await?.is_none());

    Ok(())
}
