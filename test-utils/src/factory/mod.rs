//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let record = factory::medical_record::create_record(&db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let record = factory::medical_record::MedicalRecordFactory::new(&db, user.id)
//!     .title("Blood panel")
//!     .record_type("lab-result")
//!     .status("resolved")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `medical_record` - Create medical record entities
//! - `record_file` - Create record file metadata entities
//! - `reminder` - Create reminder entities
//! - `medication` - Create medication entities
//! - `prescription` - Create prescription entities with medicines
//! - `helpers` - Shared utilities for factory methods

pub mod helpers;
pub mod medical_record;
pub mod medication;
pub mod prescription;
pub mod record_file;
pub mod reminder;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use medical_record::create_record;
pub use medication::create_medication;
pub use prescription::create_prescription;
pub use record_file::create_record_file;
pub use reminder::create_reminder;
pub use user::create_user;
