//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and the file store
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Credentials**: Password hashing, token signing, and single-use token digests

pub mod auth;
pub mod medication;
pub mod password;
pub mod prescription;
pub mod record;
pub mod token;
pub mod upload;
