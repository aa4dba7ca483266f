use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token in the Authorization header and no token cookie.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing an authentication token")]
    MissingToken,

    /// Token failed signature or claim validation.
    ///
    /// Covers malformed, tampered, and expired tokens. Results in a 401
    /// Unauthorized response.
    #[error("Token validation failed: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token was valid but its user no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from token no longer exists")]
    UserGone(i32),

    /// Account is locked out after too many failed login attempts.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Account for user {0} is locked")]
    AccountLocked(i32),

    /// Email/password pair did not match a usable account.
    ///
    /// Deliberately indistinguishable between unknown email and wrong
    /// password. Results in a 401 Unauthorized response.
    #[error("Invalid credentials presented")]
    InvalidCredentials,

    /// Current password check failed during a password change.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Current password is incorrect")]
    WrongCurrentPassword,
}

/// Converts authentication errors into HTTP responses.
///
/// All variants map to 401 Unauthorized. Client-facing messages stay generic;
/// the precise variant is logged at debug level for diagnostics so responses
/// leak nothing about which part of the check failed.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("auth rejection: {}", self);

        let message = match self {
            Self::MissingToken => "You are not logged in. Please log in to get access.",
            Self::InvalidToken(_) => "Invalid or expired token. Please log in again.",
            Self::UserGone(_) => "The user belonging to this token no longer exists.",
            Self::AccountLocked(_) => {
                "Account locked due to too many failed login attempts. Please try again later."
            }
            Self::InvalidCredentials => "Invalid email or password",
            Self::WrongCurrentPassword => "Current password is incorrect",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto::fail(message.to_string())),
        )
            .into_response()
    }
}
