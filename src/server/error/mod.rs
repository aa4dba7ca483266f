//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic
//! for transforming errors into appropriate HTTP responses. The `AppError`
//! enum serves as the top-level error type that wraps domain-specific errors
//! and implements `IntoResponse` for automatic error handling in API
//! endpoints.

pub mod auth;
pub mod config;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and
/// provides automatic conversion to HTTP responses. Most variants use `#[from]`
/// for automatic error conversion. `AuthError` handles its own response
/// mapping, while the generic variants map to the standard status codes of the
/// API contract (400/403/404/409/500).
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Filesystem error while storing or removing uploaded files.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed multipart request body.
    ///
    /// Results in 400 Bad Request with the multipart error message.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// Request data failed a field-level validation rule.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    Validation(String),

    /// Resource not found or not owned by the requesting user.
    ///
    /// Results in 404 Not Found with `"{resource} not found"`.
    #[error("{0} not found")]
    NotFound(String),

    /// Unique field collision, e.g. registering an email twice.
    ///
    /// Results in 409 Conflict with `"Duplicate {field}"`.
    #[error("Duplicate {0}")]
    Duplicate(String),

    /// Authenticated user may not perform this action.
    ///
    /// Results in 403 Forbidden with the provided error message.
    #[error("{0}")]
    Forbidden(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Client errors (4xx) use a `"fail"` status and carry their message through;
/// server errors (5xx) use an `"error"` status, log the detail with
/// `tracing::error!`, and return a generic body to avoid information leakage.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::fail(msg))).into_response()
            }
            Self::MultipartErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::fail(err.to_string())),
            )
                .into_response(),
            Self::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::fail(format!("{resource} not found"))),
            )
                .into_response(),
            Self::Duplicate(field) => (
                StatusCode::CONFLICT,
                Json(ErrorDto::fail(format!("Duplicate {field}"))),
            )
                .into_response(),
            Self::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto::fail(msg))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a masked 500 response.
///
/// Logs the full error message for debugging, but returns a generic error
/// message to the client so internal details never reach the response body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::error("Internal server error")),
        )
            .into_response()
    }
}
