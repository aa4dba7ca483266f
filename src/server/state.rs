//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned cheaply into each
//! handler through axum's state extraction: the database connection is a
//! pool, `JwtKeys` holds pre-derived key material, and `FileStore` is a path
//! handle.

use sea_orm::DatabaseConnection;

use super::service::{token::JwtKeys, upload::FileStore};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// JWT signing and verification keys plus the token lifetime.
    pub jwt: JwtKeys,

    /// Handle on the upload directory for record attachments.
    pub files: FileStore,

    /// Whether the auth cookie is marked `Secure` (production only).
    pub secure_cookies: bool,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Initialized JWT key material
    /// - `files` - File store rooted at the upload directory
    /// - `secure_cookies` - Whether to set the `Secure` cookie attribute
    pub fn new(db: DatabaseConnection, jwt: JwtKeys, files: FileStore, secure_cookies: bool) -> Self {
        Self {
            db,
            jwt,
            files,
            secure_cookies,
        }
    }
}
