//! User domain model and parameters.
//!
//! The domain model carries credential state (hash, lockout counters, token
//! digests) that must never reach API responses; `into_dto` strips all of it.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::user::UserDto;

/// Number of consecutive failed logins before the account locks.
pub const MAX_LOGIN_ATTEMPTS: i32 = 5;

/// How long an account stays locked after too many failed logins.
pub const LOCKOUT_HOURS: i64 = 2;

/// Application user with credentials and profile fields.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// PHC-format argon2 hash, never serialized.
    pub password_hash: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub email_verified: bool,
    pub login_attempts: i32,
    pub lock_until: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// Token digests stay behind in the entity; only the repository compares
    /// them.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            phone: entity.phone,
            date_of_birth: entity.date_of_birth,
            gender: entity.gender,
            address: entity.address,
            emergency_contact: entity.emergency_contact,
            email_verified: entity.email_verified,
            login_attempts: entity.login_attempts,
            lock_until: entity.lock_until,
            last_login: entity.last_login,
            created_at: entity.created_at,
        }
    }

    /// Whether the account is currently locked out of logging in.
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        self.lock_until.is_some_and(|until| until > now)
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - Profile fields only, no credential state
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            address: self.address,
            emergency_contact: self.emergency_contact,
            email_verified: self.email_verified,
            last_login: self.last_login,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a user during registration.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    /// Already-hashed password, hashing happens in the service layer.
    pub password_hash: String,
    /// Digest of the emailed verification token.
    pub email_verification_token: String,
}

/// Parameters for a partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateDetailsParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
}
