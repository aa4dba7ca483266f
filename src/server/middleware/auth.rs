//! Request authentication guard.
//!
//! Controllers call `AuthGuard::require` at the top of every protected
//! handler. The guard pulls the access token from the `Authorization: Bearer`
//! header or falls back to the httpOnly `token` cookie, verifies the JWT, and
//! loads the user so handlers always work with a live account.

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::JwtKeys,
};

/// Name of the cookie carrying the access token.
pub const TOKEN_COOKIE: &str = "token";

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Authenticates the request and returns the logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - Token valid and the account is usable
    /// - `Err(AppError::AuthErr)` - Missing/invalid token, deleted user, or
    ///   locked account
    pub async fn require(&self, headers: &HeaderMap) -> Result<User, AppError> {
        let token = extract_token(headers).ok_or(AuthError::MissingToken)?;
        let claims = self.jwt.verify(&token)?;

        let user = UserRepository::new(self.db)
            .find_by_id(claims.sub)
            .await?
            .ok_or(AuthError::UserGone(claims.sub))?;

        if user.is_locked(chrono::Utc::now()) {
            return Err(AuthError::AccountLocked(user.id).into());
        }

        Ok(user)
    }
}

/// Pulls the access token from the Authorization header or the token cookie.
fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(header::AUTHORIZATION) {
        if let Ok(value) = value.to_str() {
            if let Some(token) = value.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == TOKEN_COOKIE).then(|| value.to_string())
    })
}
