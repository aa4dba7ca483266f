//! Prescription service for business logic and validation.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::prescription::CreatePrescriptionDto,
    server::{
        data::prescription::PrescriptionRepository,
        error::AppError,
        model::prescription::{CreateMedicineParams, CreatePrescriptionParams, Prescription},
        util::validate,
    },
};

pub struct PrescriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PrescriptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a prescription with its medicine line items.
    ///
    /// The issue date defaults to now; every medicine needs a name.
    ///
    /// # Returns
    /// - `Ok(Prescription)` - The created prescription with medicines
    /// - `Err(AppError::Validation)` - Bad doctor or medicine name
    pub async fn create(
        &self,
        user_id: i32,
        dto: CreatePrescriptionDto,
    ) -> Result<Prescription, AppError> {
        validate::name(&dto.doctor_name)?;
        for medicine in &dto.medicines {
            if medicine.name.trim().is_empty() {
                return Err(AppError::Validation(
                    "Every medicine needs a name".to_string(),
                ));
            }
        }

        let prescription = PrescriptionRepository::new(self.db)
            .create(
                user_id,
                CreatePrescriptionParams {
                    doctor_name: dto.doctor_name,
                    clinic: dto.clinic,
                    date_issued: dto.date_issued.unwrap_or_else(Utc::now),
                    notes: dto.notes,
                    medicines: dto
                        .medicines
                        .into_iter()
                        .map(|medicine| CreateMedicineParams {
                            name: medicine.name,
                            dosage: medicine.dosage,
                            frequency: medicine.frequency,
                            duration: medicine.duration,
                        })
                        .collect(),
                },
            )
            .await?;

        Ok(prescription)
    }

    /// Gets all of a user's prescriptions, newest first.
    pub async fn list(&self, user_id: i32) -> Result<Vec<Prescription>, AppError> {
        let prescriptions = PrescriptionRepository::new(self.db)
            .get_for_user(user_id)
            .await?;

        Ok(prescriptions)
    }

    /// Gets one prescription with its medicines.
    ///
    /// # Returns
    /// - `Ok(Prescription)` - The prescription
    /// - `Err(AppError::NotFound)` - No such prescription for this user
    pub async fn get(
        &self,
        prescription_id: i32,
        user_id: i32,
    ) -> Result<Prescription, AppError> {
        PrescriptionRepository::new(self.db)
            .find_by_id_for_user(prescription_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Prescription".to_string()))
    }

    /// Deletes a prescription along with its medicines.
    ///
    /// # Returns
    /// - `Ok(())` - Prescription deleted
    /// - `Err(AppError::NotFound)` - No such prescription for this user
    pub async fn delete(&self, prescription_id: i32, user_id: i32) -> Result<(), AppError> {
        let deleted = PrescriptionRepository::new(self.db)
            .delete(prescription_id, user_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Prescription".to_string()));
        }

        Ok(())
    }
}
