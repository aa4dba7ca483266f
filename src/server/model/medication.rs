//! Medication domain model and parameters.

use chrono::NaiveDate;

use crate::model::medication::MedicationDto;

/// A medication a user is or was taking.
#[derive(Debug, Clone, PartialEq)]
pub struct Medication {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub active: bool,
}

impl Medication {
    pub fn from_entity(entity: entity::medication::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            dosage: entity.dosage,
            frequency: entity.frequency,
            start_date: entity.start_date,
            end_date: entity.end_date,
            notes: entity.notes,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> MedicationDto {
        MedicationDto {
            id: self.id,
            name: self.name,
            dosage: self.dosage,
            frequency: self.frequency,
            start_date: self.start_date,
            end_date: self.end_date,
            notes: self.notes,
            active: self.active,
        }
    }
}

/// Parameters for creating a medication.
#[derive(Debug, Clone)]
pub struct CreateMedicationParams {
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub active: bool,
}

/// Parameters for a partial medication update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateMedicationParams {
    pub name: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub active: Option<bool>,
}
