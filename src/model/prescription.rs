use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionMedicineDto {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// Prescription with its embedded medicine line items.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDto {
    pub id: i32,
    pub doctor_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic: Option<String>,
    pub date_issued: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub medicines: Vec<PrescriptionMedicineDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionMedicineDto {
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub duration: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionDto {
    pub doctor_name: String,
    pub clinic: Option<String>,
    /// Defaults to the current time when omitted.
    pub date_issued: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    #[serde(default)]
    pub medicines: Vec<CreatePrescriptionMedicineDto>,
}
