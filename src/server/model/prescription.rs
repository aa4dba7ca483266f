//! Prescription domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::prescription::{PrescriptionDto, PrescriptionMedicineDto};

/// A single medicine line item on a prescription.
#[derive(Debug, Clone, PartialEq)]
pub struct PrescriptionMedicine {
    pub id: i32,
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub duration: Option<String>,
}

impl PrescriptionMedicine {
    pub fn from_entity(entity: entity::prescription_medicine::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            dosage: entity.dosage,
            frequency: entity.frequency,
            duration: entity.duration,
        }
    }

    pub fn into_dto(self) -> PrescriptionMedicineDto {
        PrescriptionMedicineDto {
            id: self.id,
            name: self.name,
            dosage: self.dosage,
            frequency: self.frequency,
            duration: self.duration,
        }
    }
}

/// A prescription with its medicine line items.
#[derive(Debug, Clone, PartialEq)]
pub struct Prescription {
    pub id: i32,
    pub user_id: i32,
    pub doctor_name: String,
    pub clinic: Option<String>,
    pub date_issued: DateTime<Utc>,
    pub notes: Option<String>,
    pub medicines: Vec<PrescriptionMedicine>,
}

impl Prescription {
    /// Assembles the domain model from a prescription entity and its medicines.
    pub fn from_entity(
        entity: entity::prescription::Model,
        medicines: Vec<entity::prescription_medicine::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            doctor_name: entity.doctor_name,
            clinic: entity.clinic,
            date_issued: entity.date_issued,
            notes: entity.notes,
            medicines: medicines
                .into_iter()
                .map(PrescriptionMedicine::from_entity)
                .collect(),
        }
    }

    pub fn into_dto(self) -> PrescriptionDto {
        PrescriptionDto {
            id: self.id,
            doctor_name: self.doctor_name,
            clinic: self.clinic,
            date_issued: self.date_issued,
            notes: self.notes,
            medicines: self
                .medicines
                .into_iter()
                .map(PrescriptionMedicine::into_dto)
                .collect(),
        }
    }
}

/// Parameters for creating a prescription with its medicines.
#[derive(Debug, Clone)]
pub struct CreatePrescriptionParams {
    pub doctor_name: String,
    pub clinic: Option<String>,
    pub date_issued: DateTime<Utc>,
    pub notes: Option<String>,
    pub medicines: Vec<CreateMedicineParams>,
}

/// A medicine line item within a prescription create.
#[derive(Debug, Clone)]
pub struct CreateMedicineParams {
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub duration: Option<String>,
}
