//! Prescription factory for creating test prescription entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test prescriptions with customizable fields.
pub struct PrescriptionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    doctor_name: String,
    clinic: Option<String>,
    date_issued: DateTime<Utc>,
}

impl<'a> PrescriptionFactory<'a> {
    /// Creates a new PrescriptionFactory with default values.
    ///
    /// Defaults:
    /// - doctor_name: `"Dr. Test {id}"` where id is auto-incremented
    /// - clinic: `"Test Clinic"`, date_issued: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owning user id
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            doctor_name: format!("Dr. Test {}", id),
            clinic: Some("Test Clinic".to_string()),
            date_issued: Utc::now(),
        }
    }

    /// Sets the prescribing doctor's name.
    pub fn doctor_name(mut self, doctor_name: impl Into<String>) -> Self {
        self.doctor_name = doctor_name.into();
        self
    }

    /// Sets the clinic name.
    pub fn clinic(mut self, clinic: impl Into<String>) -> Self {
        self.clinic = Some(clinic.into());
        self
    }

    /// Sets the issue date.
    pub fn date_issued(mut self, date_issued: DateTime<Utc>) -> Self {
        self.date_issued = date_issued;
        self
    }

    /// Builds and inserts the prescription entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::prescription::Model)` - Created prescription entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::prescription::Model, DbErr> {
        entity::prescription::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            doctor_name: ActiveValue::Set(self.doctor_name),
            clinic: ActiveValue::Set(self.clinic),
            date_issued: ActiveValue::Set(self.date_issued),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a prescription with default values for a user.
///
/// Shorthand for `PrescriptionFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user id
///
/// # Returns
/// - `Ok(entity::prescription::Model)` - Created prescription entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_prescription(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::prescription::Model, DbErr> {
    PrescriptionFactory::new(db, user_id).build().await
}

/// Creates a medicine line item on an existing prescription.
///
/// # Arguments
/// - `db` - Database connection
/// - `prescription_id` - Owning prescription id
/// - `name` - Medicine name
///
/// # Returns
/// - `Ok(entity::prescription_medicine::Model)` - Created medicine entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_prescription_medicine(
    db: &DatabaseConnection,
    prescription_id: i32,
    name: impl Into<String>,
) -> Result<entity::prescription_medicine::Model, DbErr> {
    entity::prescription_medicine::ActiveModel {
        prescription_id: ActiveValue::Set(prescription_id),
        name: ActiveValue::Set(name.into()),
        dosage: ActiveValue::Set(Some("250mg".to_string())),
        frequency: ActiveValue::Set(Some("daily".to_string())),
        duration: ActiveValue::Set(Some("7 days".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
}
