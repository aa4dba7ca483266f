//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts in the
//! database. It handles account creation, profile and credential updates, the
//! failed-login lockout counters, and the single-use token columns used by the
//! email verification and password reset flows. Token digests never leave this
//! layer; callers hand in a digest and get back a domain `User`.

use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::user::{
    CreateUserParams, UpdateDetailsParams, User, LOCKOUT_HOURS, MAX_LOGIN_ATTEMPTS,
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user from registration parameters.
    ///
    /// The password arrives already hashed and the verification token already
    /// digested; this method only persists them.
    ///
    /// # Arguments
    /// - `params` - Name, email, password hash, and verification token digest
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique email violations
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            email_verified: ActiveValue::Set(false),
            email_verification_token: ActiveValue::Set(Some(params.email_verification_token)),
            login_attempts: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email address.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Retrieves the stored password hash for a user.
    ///
    /// Separate from `find_by_id` so callers that only need credential
    /// verification do not pass full profile data around.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - PHC-format hash
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn password_hash(&self, user_id: i32) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(entity.map(|e| e.password_hash))
    }

    /// Applies a partial profile update.
    ///
    /// Only fields that are `Some` in the params are written; everything else
    /// keeps its current value.
    ///
    /// # Arguments
    /// - `user_id` - User to update
    /// - `params` - Optional replacement values per profile field
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_details(
        &self,
        user_id: i32,
        params: UpdateDetailsParams,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(date_of_birth) = params.date_of_birth {
            active.date_of_birth = ActiveValue::Set(Some(date_of_birth));
        }
        if let Some(gender) = params.gender {
            active.gender = ActiveValue::Set(Some(gender));
        }
        if let Some(address) = params.address {
            active.address = ActiveValue::Set(Some(address));
        }
        if let Some(emergency_contact) = params.emergency_contact {
            active.emergency_contact = ActiveValue::Set(Some(emergency_contact));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Replaces the password hash and clears any pending reset token.
    ///
    /// # Returns
    /// - `Ok(())` - Password updated (no-op if the user does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_password(&self, user_id: i32, password_hash: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .col_expr(
                entity::user::Column::ResetPasswordToken,
                sea_orm::sea_query::Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::user::Column::ResetPasswordExpires,
                sea_orm::sea_query::Expr::value(Option::<chrono::DateTime<Utc>>::None),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Records a failed login attempt, locking the account when the limit is hit.
    ///
    /// Increments the attempt counter; once it reaches `MAX_LOGIN_ATTEMPTS`
    /// the `lock_until` timestamp is set `LOCKOUT_HOURS` into the future.
    ///
    /// # Returns
    /// - `Ok(true)` - This failure locked the account
    /// - `Ok(false)` - Attempt recorded, account not locked
    /// - `Err(DbErr)` - Database error during update
    pub async fn record_failed_login(&self, user_id: i32) -> Result<bool, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id).one(self.db).await? else {
            return Ok(false);
        };

        let attempts = entity.login_attempts + 1;
        let locked = attempts >= MAX_LOGIN_ATTEMPTS;

        let mut active: entity::user::ActiveModel = entity.into();
        active.login_attempts = ActiveValue::Set(attempts);
        if locked {
            active.lock_until = ActiveValue::Set(Some(Utc::now() + Duration::hours(LOCKOUT_HOURS)));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(locked)
    }

    /// Clears the failed-login counter and lock after a successful login,
    /// stamping `last_login` in the same write.
    ///
    /// # Returns
    /// - `Ok(())` - State cleared (no-op if the user does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn record_successful_login(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::LoginAttempts,
                sea_orm::sea_query::Expr::value(0),
            )
            .col_expr(
                entity::user::Column::LockUntil,
                sea_orm::sea_query::Expr::value(Option::<chrono::DateTime<Utc>>::None),
            )
            .col_expr(
                entity::user::Column::LastLogin,
                sea_orm::sea_query::Expr::value(Some(Utc::now())),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Stores a password reset token digest with its expiry.
    ///
    /// # Arguments
    /// - `user_id` - User requesting the reset
    /// - `token_digest` - sha256 digest of the emailed token
    /// - `expires_in_minutes` - Validity window for the token
    ///
    /// # Returns
    /// - `Ok(())` - Digest stored (no-op if the user does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_reset_token(
        &self,
        user_id: i32,
        token_digest: &str,
        expires_in_minutes: i64,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::ResetPasswordToken,
                sea_orm::sea_query::Expr::value(Some(token_digest)),
            )
            .col_expr(
                entity::user::Column::ResetPasswordExpires,
                sea_orm::sea_query::Expr::value(Some(
                    Utc::now() + Duration::minutes(expires_in_minutes),
                )),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Finds the user holding an unexpired reset token digest.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Digest matches and has not expired
    /// - `Ok(None)` - Unknown or expired digest
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_reset_token(&self, token_digest: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::ResetPasswordToken.eq(token_digest))
            .filter(entity::user::Column::ResetPasswordExpires.gt(Utc::now()))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Stores a fresh email verification token digest.
    ///
    /// # Returns
    /// - `Ok(())` - Digest stored (no-op if the user does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_verification_token(
        &self,
        user_id: i32,
        token_digest: &str,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::EmailVerificationToken,
                sea_orm::sea_query::Expr::value(Some(token_digest)),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Marks the holder of a verification token digest as verified.
    ///
    /// Clears the token in the same write so it cannot be replayed.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User verified
    /// - `Ok(None)` - Unknown digest
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn verify_email(&self, token_digest: &str) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::EmailVerificationToken.eq(token_digest))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.email_verified = ActiveValue::Set(true);
        active.email_verification_token = ActiveValue::Set(None);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }
}
