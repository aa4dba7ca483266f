//! Medication factory for creating test medication entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test medications with customizable fields.
pub struct MedicationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    dosage: Option<String>,
    frequency: Option<String>,
    active: bool,
}

impl<'a> MedicationFactory<'a> {
    /// Creates a new MedicationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Medication {id}"` where id is auto-incremented
    /// - dosage: `"500mg"`, frequency: `"twice daily"`, active
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owning user id
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Medication {}", id),
            dosage: Some("500mg".to_string()),
            frequency: Some("twice daily".to_string()),
            active: true,
        }
    }

    /// Sets the medication name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the dosage text.
    pub fn dosage(mut self, dosage: impl Into<String>) -> Self {
        self.dosage = Some(dosage.into());
        self
    }

    /// Sets the frequency text.
    pub fn frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    /// Sets whether the medication is currently taken.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the medication entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::medication::Model)` - Created medication entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::medication::Model, DbErr> {
        entity::medication::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            dosage: ActiveValue::Set(self.dosage),
            frequency: ActiveValue::Set(self.frequency),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a medication with default values for a user.
///
/// Shorthand for `MedicationFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user id
///
/// # Returns
/// - `Ok(entity::medication::Model)` - Created medication entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_medication(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::medication::Model, DbErr> {
    MedicationFactory::new(db, user_id).build().await
}
