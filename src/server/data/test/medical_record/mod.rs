use crate::server::{
    data::medical_record::MedicalRecordRepository,
    model::record::{
        CreateRecordParams, RecordFilters, RecordStatus, RecordType, UpdateDoctorParams,
        UpdateRecordParams, UpdateVitalsParams,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_filtered;
mod stats;
mod update;

/// Baseline create params used across the tests in this module.
fn sample_params() -> CreateRecordParams {
    CreateRecordParams {
        title: "Annual checkup".to_string(),
        record_type: RecordType::Consultation,
        description: "Routine annual physical examination".to_string(),
        doctor_name: "Dr. Osei".to_string(),
        doctor_specialization: Some("General practice".to_string()),
        doctor_hospital: None,
        date_of_record: Utc::now(),
        date_of_next_visit: None,
        status: RecordStatus::Active,
        diagnosis_primary: None,
        diagnosis_notes: None,
        systolic: None,
        diastolic: None,
        heart_rate: None,
        temperature: None,
        weight: None,
        height: None,
        bmi: None,
    }
}
