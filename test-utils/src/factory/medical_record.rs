//! Medical record factory for creating test record entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test medical records with customizable fields.
///
/// Provides a builder pattern for creating record entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::medical_record::MedicalRecordFactory;
///
/// let record = MedicalRecordFactory::new(&db, user.id)
///     .record_type("lab-result")
///     .status("resolved")
///     .build()
///     .await?;
/// ```
pub struct MedicalRecordFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    record_type: String,
    description: String,
    doctor_name: String,
    date_of_record: DateTime<Utc>,
    date_of_next_visit: Option<DateTime<Utc>>,
    status: String,
    weight: Option<f64>,
    height: Option<f64>,
    bmi: Option<f64>,
}

impl<'a> MedicalRecordFactory<'a> {
    /// Creates a new MedicalRecordFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Record {id}"` where id is auto-incremented
    /// - record_type: `"consultation"`
    /// - status: `"active"`
    /// - date_of_record: now, no next visit, no vitals
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owning user id
    ///
    /// # Returns
    /// - `MedicalRecordFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Record {}", id),
            record_type: "consultation".to_string(),
            description: format!("Test medical record number {}", id),
            doctor_name: format!("Dr. Test {}", id),
            date_of_record: Utc::now(),
            date_of_next_visit: None,
            status: "active".to_string(),
            weight: None,
            height: None,
            bmi: None,
        }
    }

    /// Sets the record title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the record type string.
    pub fn record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = record_type.into();
        self
    }

    /// Sets the record description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the doctor name.
    pub fn doctor_name(mut self, doctor_name: impl Into<String>) -> Self {
        self.doctor_name = doctor_name.into();
        self
    }

    /// Sets the record date.
    pub fn date_of_record(mut self, date_of_record: DateTime<Utc>) -> Self {
        self.date_of_record = date_of_record;
        self
    }

    /// Sets the next visit date.
    pub fn date_of_next_visit(mut self, date_of_next_visit: DateTime<Utc>) -> Self {
        self.date_of_next_visit = Some(date_of_next_visit);
        self
    }

    /// Sets the record status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets weight, height, and BMI vitals together.
    pub fn body_metrics(mut self, weight: f64, height: f64, bmi: f64) -> Self {
        self.weight = Some(weight);
        self.height = Some(height);
        self.bmi = Some(bmi);
        self
    }

    /// Builds and inserts the medical record entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::medical_record::Model)` - Created record entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::medical_record::Model, DbErr> {
        let now = Utc::now();
        entity::medical_record::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            record_type: ActiveValue::Set(self.record_type),
            description: ActiveValue::Set(self.description),
            doctor_name: ActiveValue::Set(self.doctor_name),
            date_of_record: ActiveValue::Set(self.date_of_record),
            date_of_next_visit: ActiveValue::Set(self.date_of_next_visit),
            status: ActiveValue::Set(self.status),
            weight: ActiveValue::Set(self.weight),
            height: ActiveValue::Set(self.height),
            bmi: ActiveValue::Set(self.bmi),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a medical record with default values for a user.
///
/// Shorthand for `MedicalRecordFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user id
///
/// # Returns
/// - `Ok(entity::medical_record::Model)` - Created record entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_record(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::medical_record::Model, DbErr> {
    MedicalRecordFactory::new(db, user_id).build().await
}
