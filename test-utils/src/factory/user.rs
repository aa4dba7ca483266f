//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("jane@example.com")
///     .email_verified(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
    email_verified: bool,
    login_attempts: i32,
    lock_until: Option<DateTime<Utc>>,
    reset_password_token: Option<String>,
    reset_password_expires: Option<DateTime<Utc>>,
    email_verification_token: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - password_hash: a fixed PHC-format placeholder
    /// - email_verified: `true`
    /// - login_attempts: `0`, no lock, no pending tokens
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            password_hash:
                "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$placeholderhashvalue".to_string(),
            email_verified: true,
            login_attempts: 0,
            lock_until: None,
            reset_password_token: None,
            reset_password_expires: None,
            email_verification_token: None,
        }
    }

    /// Sets the display name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email address for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash for the user.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the email verification state for the user.
    pub fn email_verified(mut self, email_verified: bool) -> Self {
        self.email_verified = email_verified;
        self
    }

    /// Sets the failed login attempt counter.
    pub fn login_attempts(mut self, login_attempts: i32) -> Self {
        self.login_attempts = login_attempts;
        self
    }

    /// Sets the lockout expiry timestamp.
    pub fn lock_until(mut self, lock_until: DateTime<Utc>) -> Self {
        self.lock_until = Some(lock_until);
        self
    }

    /// Sets a pending password reset token digest with its expiry.
    pub fn reset_token(mut self, digest: impl Into<String>, expires: DateTime<Utc>) -> Self {
        self.reset_password_token = Some(digest.into());
        self.reset_password_expires = Some(expires);
        self
    }

    /// Sets a pending email verification token digest.
    pub fn verification_token(mut self, digest: impl Into<String>) -> Self {
        self.email_verification_token = Some(digest.into());
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            email_verified: ActiveValue::Set(self.email_verified),
            email_verification_token: ActiveValue::Set(self.email_verification_token),
            login_attempts: ActiveValue::Set(self.login_attempts),
            lock_until: ActiveValue::Set(self.lock_until),
            reset_password_token: ActiveValue::Set(self.reset_password_token),
            reset_password_expires: ActiveValue::Set(self.reset_password_expires),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user(&db).await?;
/// ```
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(!user.email.is_empty());
        assert!(!user.name.is_empty());
        assert!(user.email_verified);
        assert_eq!(user.login_attempts, 0);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.email, user2.email);

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = UserFactory::new(db)
            .name("Jane Doe")
            .email("jane@example.com")
            .email_verified(false)
            .login_attempts(3)
            .build()
            .await?;

        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane@example.com");
        assert!(!user.email_verified);
        assert_eq!(user.login_attempts, 3);

        Ok(())
    }
}
