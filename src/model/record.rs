use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Doctor details nested on a medical record.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Vital signs on API responses; `bmi` is always server-derived.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VitalSignsDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systolic: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diastolic: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
}

/// Vital signs as accepted on create/update; clients cannot submit a BMI.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VitalSignsInputDto {
    pub systolic: Option<i32>,
    pub diastolic: Option<i32>,
    pub heart_rate: Option<i32>,
    pub temperature: Option<f64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordFileDto {
    pub id: i32,
    pub file_name: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDto {
    pub id: i32,
    pub kind: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_at: DateTime<Utc>,
    pub is_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Full medical record as returned by the API, with files and reminders.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordDto {
    pub id: i32,
    pub title: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub description: String,
    pub doctor: DoctorDto,
    pub date_of_record: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_next_visit: Option<DateTime<Utc>>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<DiagnosisDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vital_signs: Option<VitalSignsDto>,
    pub files: Vec<RecordFileDto>,
    pub reminders: Vec<ReminderDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedicalRecordDto {
    pub title: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub description: String,
    pub doctor: DoctorDto,
    pub date_of_record: DateTime<Utc>,
    pub date_of_next_visit: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub diagnosis: Option<DiagnosisDto>,
    pub vital_signs: Option<VitalSignsInputDto>,
}

/// Partial record update; absent fields are left untouched.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMedicalRecordDto {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub description: Option<String>,
    pub doctor: Option<DoctorDto>,
    pub date_of_record: Option<DateTime<Utc>>,
    pub date_of_next_visit: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub diagnosis: Option<DiagnosisDto>,
    pub vital_signs: Option<VitalSignsInputDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedRecordsDto {
    pub records: Vec<MedicalRecordDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeCountDto {
    #[serde(rename = "type")]
    pub record_type: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordStatsDto {
    pub total_records: u64,
    pub active_records: u64,
    pub resolved_records: u64,
    pub type_counts: Vec<TypeCountDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_record: Option<DateTime<Utc>>,
}

/// Pending reminder joined with the record it belongs to.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingReminderDto {
    pub record_id: i32,
    pub record_title: String,
    #[serde(flatten)]
    pub reminder: ReminderDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReminderDto {
    pub kind: String,
    pub title: String,
    pub description: Option<String>,
    pub due_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReminderDto {
    pub is_completed: bool,
}
