//! Authentication and account management service.
//!
//! Implements registration, login with failed-attempt lockout, profile and
//! password updates, and the two single-use token flows (password reset and
//! email verification). Raw single-use tokens are returned to the caller and
//! logged; only their sha256 digests are persisted. Email delivery is out of
//! scope, so the log line stands in for the outgoing message.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{RegisterDto, ResetPasswordDto, UpdateDetailsDto, UpdatePasswordDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, UpdateDetailsParams, User},
        service::{
            password::{hash_password, verify_password},
            token::{digest_token, issue_single_use_token, JwtKeys},
        },
        util::validate,
    },
};

/// How long a password reset token stays valid.
const RESET_TOKEN_MINUTES: i64 = 10;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Registers a new account and signs the user in.
    ///
    /// Validates the profile fields and password complexity, rejects already
    /// registered emails, and issues an email verification token whose raw
    /// value is logged in place of an outgoing email.
    ///
    /// # Returns
    /// - `Ok((String, User))` - Signed access token and the new user
    /// - `Err(AppError::Validation)` - A field failed validation
    /// - `Err(AppError::Duplicate)` - Email already registered
    pub async fn register(&self, dto: RegisterDto) -> Result<(String, User), AppError> {
        validate::name(&dto.name)?;
        validate::email(&dto.email)?;
        validate::password(&dto.password)?;
        if dto.password != dto.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::Duplicate("email".to_string()));
        }

        let verification = issue_single_use_token();
        let user = repo
            .create(CreateUserParams {
                name: dto.name,
                email: dto.email,
                password_hash: hash_password(&dto.password)?,
                email_verification_token: verification.digest,
            })
            .await?;

        tracing::info!(
            user_id = user.id,
            token = %verification.raw,
            "email verification token issued"
        );

        let token = self.jwt.sign(user.id)?;

        Ok((token, user))
    }

    /// Authenticates an email/password pair.
    ///
    /// Unknown emails and wrong passwords fail identically. Each wrong
    /// password counts toward the lockout limit; a locked account rejects
    /// logins until the lock expires, even with the correct password.
    ///
    /// # Returns
    /// - `Ok((String, User))` - Signed access token and the user
    /// - `Err(AppError::AuthErr)` - Invalid credentials or locked account
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if user.is_locked(chrono::Utc::now()) {
            return Err(AuthError::AccountLocked(user.id).into());
        }

        if !verify_password(password, &user.password_hash)? {
            let locked = repo.record_failed_login(user.id).await?;
            if locked {
                return Err(AuthError::AccountLocked(user.id).into());
            }
            return Err(AuthError::InvalidCredentials.into());
        }

        repo.record_successful_login(user.id).await?;
        let token = self.jwt.sign(user.id)?;

        // Re-read so last_login reflects this login
        let user = repo
            .find_by_id(user.id)
            .await?
            .ok_or(AuthError::UserGone(user.id))?;

        Ok((token, user))
    }

    /// Applies a partial profile update for the authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated profile
    /// - `Err(AppError::Validation)` - A provided field failed validation
    /// - `Err(AppError::Duplicate)` - New email already registered
    /// - `Err(AppError::NotFound)` - User no longer exists
    pub async fn update_details(
        &self,
        user_id: i32,
        dto: UpdateDetailsDto,
    ) -> Result<User, AppError> {
        if let Some(ref name) = dto.name {
            validate::name(name)?;
        }
        if let Some(ref email) = dto.email {
            validate::email(email)?;
        }
        if let Some(ref gender) = dto.gender {
            validate::gender(gender)?;
        }
        if let Some(date_of_birth) = dto.date_of_birth {
            validate::date_of_birth(date_of_birth)?;
        }

        let repo = UserRepository::new(self.db);

        if let Some(ref email) = dto.email {
            if let Some(holder) = repo.find_by_email(email).await? {
                if holder.id != user_id {
                    return Err(AppError::Duplicate("email".to_string()));
                }
            }
        }

        repo.update_details(
            user_id,
            UpdateDetailsParams {
                name: dto.name,
                email: dto.email,
                phone: dto.phone,
                date_of_birth: dto.date_of_birth,
                gender: dto.gender,
                address: dto.address,
                emergency_contact: dto.emergency_contact,
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))
    }

    /// Changes the authenticated user's password.
    ///
    /// # Returns
    /// - `Ok(String)` - Fresh access token for the new credentials
    /// - `Err(AppError::AuthErr)` - Current password is wrong
    /// - `Err(AppError::Validation)` - New password fails complexity rules
    pub async fn update_password(
        &self,
        user_id: i32,
        dto: UpdatePasswordDto,
    ) -> Result<String, AppError> {
        validate::password(&dto.new_password)?;
        if dto.new_password != dto.confirm_new_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        let repo = UserRepository::new(self.db);
        let current_hash = repo
            .password_hash(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        if !verify_password(&dto.current_password, &current_hash)? {
            return Err(AuthError::WrongCurrentPassword.into());
        }

        repo.update_password(user_id, &hash_password(&dto.new_password)?)
            .await?;

        Ok(self.jwt.sign(user_id)?)
    }

    /// Starts a password reset for the given email.
    ///
    /// Issues a short-lived single-use token, stores its digest, and logs the
    /// raw value in place of an outgoing email.
    ///
    /// # Returns
    /// - `Ok(())` - Token issued
    /// - `Err(AppError::Validation)` - No account with that email
    pub async fn forgot_password(&self, email: &str) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        let user = repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Validation("There is no user with that email".to_string()))?;

        let reset = issue_single_use_token();
        repo.set_reset_token(user.id, &reset.digest, RESET_TOKEN_MINUTES)
            .await?;

        tracing::info!(
            user_id = user.id,
            token = %reset.raw,
            "password reset token issued"
        );

        Ok(())
    }

    /// Completes a password reset with the raw token from the email link.
    ///
    /// # Returns
    /// - `Ok((String, User))` - Signed access token and the user, logged in
    /// - `Err(AppError::Validation)` - Token unknown, expired, or password invalid
    pub async fn reset_password(
        &self,
        raw_token: &str,
        dto: ResetPasswordDto,
    ) -> Result<(String, User), AppError> {
        validate::password(&dto.password)?;
        if dto.password != dto.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        let repo = UserRepository::new(self.db);
        let user = repo
            .find_by_reset_token(&digest_token(raw_token))
            .await?
            .ok_or_else(|| {
                AppError::Validation("Invalid or expired reset token".to_string())
            })?;

        repo.update_password(user.id, &hash_password(&dto.password)?)
            .await?;
        repo.record_successful_login(user.id).await?;

        let token = self.jwt.sign(user.id)?;

        Ok((token, user))
    }

    /// Marks an email address verified using the raw token from the link.
    ///
    /// # Returns
    /// - `Ok(User)` - Verified user
    /// - `Err(AppError::Validation)` - Token unknown or already used
    pub async fn verify_email(&self, raw_token: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.verify_email(&digest_token(raw_token))
            .await?
            .ok_or_else(|| AppError::Validation("Invalid verification token".to_string()))
    }

    /// Issues a fresh verification token for an unverified account.
    ///
    /// # Returns
    /// - `Ok(())` - Token issued and logged
    /// - `Err(AppError::Validation)` - Unknown email or already verified
    pub async fn resend_verification(&self, email: &str) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        let user = repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Validation("There is no user with that email".to_string()))?;

        if user.email_verified {
            return Err(AppError::Validation("Email is already verified".to_string()));
        }

        let verification = issue_single_use_token();
        repo.set_verification_token(user.id, &verification.digest)
            .await?;

        tracing::info!(
            user_id = user.id,
            token = %verification.raw,
            "email verification token reissued"
        );

        Ok(())
    }

    /// Loads the authenticated user's profile.
    ///
    /// # Returns
    /// - `Ok(User)` - Current profile
    /// - `Err(AppError::NotFound)` - User no longer exists
    pub async fn me(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User".to_string()))
    }
}
