//! Medication service for business logic and validation.

use sea_orm::DatabaseConnection;

use crate::{
    model::medication::{CreateMedicationDto, UpdateMedicationDto},
    server::{
        data::medication::MedicationRepository,
        error::AppError,
        model::medication::{CreateMedicationParams, Medication, UpdateMedicationParams},
        util::validate,
    },
};

pub struct MedicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MedicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a medication for a user; defaults to active.
    ///
    /// # Returns
    /// - `Ok(Medication)` - The created medication
    /// - `Err(AppError::Validation)` - Bad name or date range
    pub async fn create(
        &self,
        user_id: i32,
        dto: CreateMedicationDto,
    ) -> Result<Medication, AppError> {
        validate::name(&dto.name)?;
        validate_date_range(dto.start_date, dto.end_date)?;

        let medication = MedicationRepository::new(self.db)
            .create(
                user_id,
                CreateMedicationParams {
                    name: dto.name,
                    dosage: dto.dosage,
                    frequency: dto.frequency,
                    start_date: dto.start_date,
                    end_date: dto.end_date,
                    notes: dto.notes,
                    active: dto.active.unwrap_or(true),
                },
            )
            .await?;

        Ok(medication)
    }

    /// Gets a user's medications, active first then by name, optionally
    /// filtered by active state.
    pub async fn list(
        &self,
        user_id: i32,
        active: Option<bool>,
    ) -> Result<Vec<Medication>, AppError> {
        let medications = MedicationRepository::new(self.db)
            .get_for_user(user_id, active)
            .await?;

        Ok(medications)
    }

    /// Applies a partial update to a medication.
    ///
    /// # Returns
    /// - `Ok(Medication)` - Updated medication
    /// - `Err(AppError::Validation)` - Bad name or date range
    /// - `Err(AppError::NotFound)` - No such medication for this user
    pub async fn update(
        &self,
        medication_id: i32,
        user_id: i32,
        dto: UpdateMedicationDto,
    ) -> Result<Medication, AppError> {
        if let Some(ref name) = dto.name {
            validate::name(name)?;
        }
        validate_date_range(dto.start_date, dto.end_date)?;

        MedicationRepository::new(self.db)
            .update(
                medication_id,
                user_id,
                UpdateMedicationParams {
                    name: dto.name,
                    dosage: dto.dosage,
                    frequency: dto.frequency,
                    start_date: dto.start_date,
                    end_date: dto.end_date,
                    notes: dto.notes,
                    active: dto.active,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Medication".to_string()))
    }

    /// Deletes a medication.
    ///
    /// # Returns
    /// - `Ok(())` - Medication deleted
    /// - `Err(AppError::NotFound)` - No such medication for this user
    pub async fn delete(&self, medication_id: i32, user_id: i32) -> Result<(), AppError> {
        let deleted = MedicationRepository::new(self.db)
            .delete(medication_id, user_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Medication".to_string()));
        }

        Ok(())
    }
}

/// Rejects an end date earlier than the start date when both are supplied.
fn validate_date_range(
    start_date: Option<chrono::NaiveDate>,
    end_date: Option<chrono::NaiveDate>,
) -> Result<(), AppError> {
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            return Err(AppError::Validation(
                "End date cannot be before the start date".to_string(),
            ));
        }
    }

    Ok(())
}
