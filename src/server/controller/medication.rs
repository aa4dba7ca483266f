//! Medication endpoints.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        medication::{CreateMedicationDto, MedicationDto, UpdateMedicationDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::medication::MedicationService,
        state::AppState,
    },
};

/// Tag for grouping medication endpoints in OpenAPI documentation
pub static MEDICATION_TAG: &str = "medications";

#[derive(Deserialize)]
pub struct MedicationListParams {
    pub active: Option<bool>,
}

/// Add a medication.
///
/// # Returns
/// - `201 Created` - The created medication
/// - `400 Bad Request` - Bad name or date range
#[utoipa::path(
    post,
    path = "/api/medications",
    tag = MEDICATION_TAG,
    request_body = CreateMedicationDto,
    responses(
        (status = 201, description = "Medication created", body = ApiResponse<MedicationDto>),
        (status = 400, description = "Invalid medication data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_medication(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateMedicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = MedicationService::new(&state.db);
    let medication = service.create(user.id, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Medication created",
            medication.into_dto(),
        )),
    ))
}

/// List the user's medications.
///
/// Active medications sort first, then alphabetically by name.
///
/// # Returns
/// - `200 OK` - Medications, optionally filtered by active state
#[utoipa::path(
    get,
    path = "/api/medications",
    tag = MEDICATION_TAG,
    params(
        ("active" = Option<bool>, Query, description = "Filter by active state")
    ),
    responses(
        (status = 200, description = "Medications retrieved", body = ApiResponse<Vec<MedicationDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_medications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<MedicationListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = MedicationService::new(&state.db);
    let medications = service.list(user.id, params.active).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Medications retrieved",
            medications
                .into_iter()
                .map(|m| m.into_dto())
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Apply a partial update to a medication.
///
/// # Returns
/// - `200 OK` - Updated medication
/// - `400 Bad Request` - Bad name or date range
/// - `404 Not Found` - No such medication for this user
#[utoipa::path(
    put,
    path = "/api/medications/{id}",
    tag = MEDICATION_TAG,
    params(
        ("id" = i32, Path, description = "Medication ID")
    ),
    request_body = UpdateMedicationDto,
    responses(
        (status = 200, description = "Medication updated", body = ApiResponse<MedicationDto>),
        (status = 400, description = "Invalid medication data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Medication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_medication(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(medication_id): Path<i32>,
    Json(payload): Json<UpdateMedicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = MedicationService::new(&state.db);
    let medication = service.update(medication_id, user.id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Medication updated",
            medication.into_dto(),
        )),
    ))
}

/// Delete a medication.
///
/// # Returns
/// - `200 OK` - Medication removed
/// - `404 Not Found` - No such medication for this user
#[utoipa::path(
    delete,
    path = "/api/medications/{id}",
    tag = MEDICATION_TAG,
    params(
        ("id" = i32, Path, description = "Medication ID")
    ),
    responses(
        (status = 200, description = "Medication deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Medication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_medication(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(medication_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = MedicationService::new(&state.db);
    service.delete(medication_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<()>::message("Medication deleted")),
    ))
}
