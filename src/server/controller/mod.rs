//! HTTP request handlers for the API endpoints.
//!
//! Controllers authenticate the request, convert DTOs to service inputs, call
//! the service layer, and convert domain models back to DTOs wrapped in the
//! response envelope. Every handler carries a `#[utoipa::path]` annotation
//! feeding the OpenAPI document.

pub mod auth;
pub mod medication;
pub mod prescription;
pub mod record;
