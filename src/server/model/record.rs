//! Medical record domain models, enums, and parameters.
//!
//! Records store doctor, diagnosis, and vital sign details flat on the row;
//! the domain model regroups them into the nested shapes the API exposes.
//! The string-backed enums (`RecordType`, `RecordStatus`, `ReminderKind`)
//! validate client input at the service boundary and keep the database
//! columns as plain text.

use chrono::{DateTime, Utc};

use crate::{
    model::record::{
        DiagnosisDto, DoctorDto, MedicalRecordDto, RecordFileDto, RecordStatsDto, ReminderDto,
        TypeCountDto, UpcomingReminderDto, VitalSignsDto,
    },
    server::error::AppError,
};

/// Category of a medical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    LabResult,
    Prescription,
    Imaging,
    Vaccination,
    Surgery,
    Consultation,
    AllergyTest,
    Other,
}

impl RecordType {
    pub const ALL: &'static [RecordType] = &[
        Self::LabResult,
        Self::Prescription,
        Self::Imaging,
        Self::Vaccination,
        Self::Surgery,
        Self::Consultation,
        Self::AllergyTest,
        Self::Other,
    ];

    /// The wire/database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LabResult => "lab-result",
            Self::Prescription => "prescription",
            Self::Imaging => "imaging",
            Self::Vaccination => "vaccination",
            Self::Surgery => "surgery",
            Self::Consultation => "consultation",
            Self::AllergyTest => "allergy-test",
            Self::Other => "other",
        }
    }

    /// Parses a client-supplied type string.
    ///
    /// # Returns
    /// - `Ok(RecordType)` - Recognized type
    /// - `Err(AppError::Validation)` - Unknown type value
    pub fn parse(value: &str) -> Result<Self, AppError> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("Invalid record type '{value}'")))
    }
}

/// Lifecycle status of a medical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    Active,
    Resolved,
    Ongoing,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Resolved => "resolved",
            Self::Ongoing => "ongoing",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "active" => Ok(Self::Active),
            "resolved" => Ok(Self::Resolved),
            "ongoing" => Ok(Self::Ongoing),
            _ => Err(AppError::Validation(format!(
                "Invalid record status '{value}'"
            ))),
        }
    }
}

/// What a reminder is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    Medication,
    Appointment,
    FollowUp,
    Refill,
}

impl ReminderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medication => "medication",
            Self::Appointment => "appointment",
            Self::FollowUp => "follow-up",
            Self::Refill => "refill",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "medication" => Ok(Self::Medication),
            "appointment" => Ok(Self::Appointment),
            "follow-up" => Ok(Self::FollowUp),
            "refill" => Ok(Self::Refill),
            _ => Err(AppError::Validation(format!(
                "Invalid reminder kind '{value}'"
            ))),
        }
    }
}

/// Body-mass index from weight (kg) and height (cm), rounded to one decimal.
///
/// Returns `None` unless both readings are present and the height is positive.
pub fn compute_bmi(weight: Option<f64>, height: Option<f64>) -> Option<f64> {
    match (weight, height) {
        (Some(w), Some(h)) if h > 0.0 => {
            let meters = h / 100.0;
            Some((w / (meters * meters) * 10.0).round() / 10.0)
        }
        _ => None,
    }
}

/// A file attached to a medical record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFile {
    pub id: i32,
    pub record_id: i32,
    /// Generated on-disk name, unique across the upload directory.
    pub file_name: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub uploaded_at: DateTime<Utc>,
}

impl RecordFile {
    pub fn from_entity(entity: entity::record_file::Model) -> Self {
        Self {
            id: entity.id,
            record_id: entity.record_id,
            file_name: entity.file_name,
            original_name: entity.original_name,
            mime_type: entity.mime_type,
            size: entity.size,
            uploaded_at: entity.uploaded_at,
        }
    }

    pub fn into_dto(self) -> RecordFileDto {
        RecordFileDto {
            id: self.id,
            file_name: self.file_name,
            original_name: self.original_name,
            mime_type: self.mime_type,
            size: self.size,
            uploaded_at: self.uploaded_at,
        }
    }
}

/// A reminder attached to a medical record.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: i32,
    pub record_id: i32,
    pub kind: String,
    pub title: String,
    pub description: Option<String>,
    pub due_at: DateTime<Utc>,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Reminder {
    pub fn from_entity(entity: entity::reminder::Model) -> Self {
        Self {
            id: entity.id,
            record_id: entity.record_id,
            kind: entity.kind,
            title: entity.title,
            description: entity.description,
            due_at: entity.due_at,
            is_completed: entity.is_completed,
            completed_at: entity.completed_at,
        }
    }

    pub fn into_dto(self) -> ReminderDto {
        ReminderDto {
            id: self.id,
            kind: self.kind,
            title: self.title,
            description: self.description,
            due_at: self.due_at,
            is_completed: self.is_completed,
            completed_at: self.completed_at,
        }
    }
}

/// Medical record with its attached files and reminders.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicalRecord {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub record_type: String,
    pub description: String,
    pub doctor_name: String,
    pub doctor_specialization: Option<String>,
    pub doctor_hospital: Option<String>,
    pub date_of_record: DateTime<Utc>,
    pub date_of_next_visit: Option<DateTime<Utc>>,
    pub status: String,
    pub diagnosis_primary: Option<String>,
    pub diagnosis_notes: Option<String>,
    pub systolic: Option<i32>,
    pub diastolic: Option<i32>,
    pub heart_rate: Option<i32>,
    pub temperature: Option<f64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub bmi: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub files: Vec<RecordFile>,
    pub reminders: Vec<Reminder>,
}

impl MedicalRecord {
    /// Assembles the domain model from a record entity and its children.
    pub fn from_entity(
        entity: entity::medical_record::Model,
        files: Vec<entity::record_file::Model>,
        reminders: Vec<entity::reminder::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            record_type: entity.record_type,
            description: entity.description,
            doctor_name: entity.doctor_name,
            doctor_specialization: entity.doctor_specialization,
            doctor_hospital: entity.doctor_hospital,
            date_of_record: entity.date_of_record,
            date_of_next_visit: entity.date_of_next_visit,
            status: entity.status,
            diagnosis_primary: entity.diagnosis_primary,
            diagnosis_notes: entity.diagnosis_notes,
            systolic: entity.systolic,
            diastolic: entity.diastolic,
            heart_rate: entity.heart_rate,
            temperature: entity.temperature,
            weight: entity.weight,
            height: entity.height,
            bmi: entity.bmi,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            files: files.into_iter().map(RecordFile::from_entity).collect(),
            reminders: reminders.into_iter().map(Reminder::from_entity).collect(),
        }
    }

    /// Converts the record to the nested DTO shape for API responses.
    ///
    /// Doctor columns fold into a `doctor` object; diagnosis and vital sign
    /// groups are omitted entirely when every column in the group is empty.
    pub fn into_dto(self) -> MedicalRecordDto {
        let diagnosis = if self.diagnosis_primary.is_some() || self.diagnosis_notes.is_some() {
            Some(DiagnosisDto {
                primary: self.diagnosis_primary,
                notes: self.diagnosis_notes,
            })
        } else {
            None
        };

        let has_vitals = self.systolic.is_some()
            || self.diastolic.is_some()
            || self.heart_rate.is_some()
            || self.temperature.is_some()
            || self.weight.is_some()
            || self.height.is_some();
        let vital_signs = has_vitals.then(|| VitalSignsDto {
            systolic: self.systolic,
            diastolic: self.diastolic,
            heart_rate: self.heart_rate,
            temperature: self.temperature,
            weight: self.weight,
            height: self.height,
            bmi: self.bmi,
        });

        MedicalRecordDto {
            id: self.id,
            title: self.title,
            record_type: self.record_type,
            description: self.description,
            doctor: DoctorDto {
                name: self.doctor_name,
                specialization: self.doctor_specialization,
                hospital: self.doctor_hospital,
            },
            date_of_record: self.date_of_record,
            date_of_next_visit: self.date_of_next_visit,
            status: self.status,
            diagnosis,
            vital_signs,
            files: self.files.into_iter().map(RecordFile::into_dto).collect(),
            reminders: self.reminders.into_iter().map(Reminder::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a medical record. Enum fields are pre-validated.
#[derive(Debug, Clone)]
pub struct CreateRecordParams {
    pub title: String,
    pub record_type: RecordType,
    pub description: String,
    pub doctor_name: String,
    pub doctor_specialization: Option<String>,
    pub doctor_hospital: Option<String>,
    pub date_of_record: DateTime<Utc>,
    pub date_of_next_visit: Option<DateTime<Utc>>,
    pub status: RecordStatus,
    pub diagnosis_primary: Option<String>,
    pub diagnosis_notes: Option<String>,
    pub systolic: Option<i32>,
    pub diastolic: Option<i32>,
    pub heart_rate: Option<i32>,
    pub temperature: Option<f64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub bmi: Option<f64>,
}

/// Parameters for a partial record update; `None` fields are left untouched.
///
/// The doctor, diagnosis, and vital sign groups are all-or-nothing: when one
/// is `Some`, every column in that group is rewritten from it (including the
/// derived BMI for vitals).
#[derive(Debug, Clone, Default)]
pub struct UpdateRecordParams {
    pub title: Option<String>,
    pub record_type: Option<RecordType>,
    pub description: Option<String>,
    pub doctor: Option<UpdateDoctorParams>,
    pub date_of_record: Option<DateTime<Utc>>,
    pub date_of_next_visit: Option<DateTime<Utc>>,
    pub status: Option<RecordStatus>,
    pub diagnosis: Option<UpdateDiagnosisParams>,
    pub vitals: Option<UpdateVitalsParams>,
}

/// Replacement doctor group for an update.
#[derive(Debug, Clone)]
pub struct UpdateDoctorParams {
    pub name: String,
    pub specialization: Option<String>,
    pub hospital: Option<String>,
}

/// Replacement diagnosis group for an update.
#[derive(Debug, Clone, Default)]
pub struct UpdateDiagnosisParams {
    pub primary: Option<String>,
    pub notes: Option<String>,
}

/// Replacement vital sign group for an update.
#[derive(Debug, Clone, Default)]
pub struct UpdateVitalsParams {
    pub systolic: Option<i32>,
    pub diastolic: Option<i32>,
    pub heart_rate: Option<i32>,
    pub temperature: Option<f64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub bmi: Option<f64>,
}

/// Filters for the record list query. All fields combine with AND.
#[derive(Debug, Clone, Default)]
pub struct RecordFilters {
    pub record_type: Option<RecordType>,
    pub status: Option<RecordStatus>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    /// Substring match against title, description, and doctor name.
    pub search: Option<String>,
}

/// Parameters for persisting an uploaded file's metadata.
#[derive(Debug, Clone)]
pub struct NewFileParams {
    pub record_id: i32,
    pub file_name: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
}

/// Parameters for adding a reminder to a record.
#[derive(Debug, Clone)]
pub struct CreateReminderParams {
    pub record_id: i32,
    pub kind: ReminderKind,
    pub title: String,
    pub description: Option<String>,
    pub due_at: DateTime<Utc>,
}

/// Paginated collection of records with metadata.
#[derive(Debug, Clone)]
pub struct PaginatedRecords {
    pub records: Vec<MedicalRecord>,
    pub total: u64,
    /// One-indexed page number as exposed by the API.
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

/// Aggregated dashboard statistics over a user's records.
#[derive(Debug, Clone, Default)]
pub struct RecordStats {
    pub total_records: u64,
    pub active_records: u64,
    pub resolved_records: u64,
    pub type_counts: Vec<(String, u64)>,
    pub latest_record: Option<DateTime<Utc>>,
}

impl RecordStats {
    pub fn into_dto(self) -> RecordStatsDto {
        RecordStatsDto {
            total_records: self.total_records,
            active_records: self.active_records,
            resolved_records: self.resolved_records,
            type_counts: self
                .type_counts
                .into_iter()
                .map(|(record_type, count)| TypeCountDto { record_type, count })
                .collect(),
            latest_record: self.latest_record,
        }
    }
}

/// A pending reminder joined with the record it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingReminder {
    pub reminder: Reminder,
    pub record_title: String,
}

impl UpcomingReminder {
    pub fn into_dto(self) -> UpcomingReminderDto {
        UpcomingReminderDto {
            record_id: self.reminder.record_id,
            record_title: self.record_title,
            reminder: self.reminder.into_dto(),
        }
    }
}
