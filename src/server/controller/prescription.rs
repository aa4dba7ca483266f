//! Prescription endpoints.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        prescription::{CreatePrescriptionDto, PrescriptionDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::prescription::PrescriptionService, state::AppState,
    },
};

/// Tag for grouping prescription endpoints in OpenAPI documentation
pub static PRESCRIPTION_TAG: &str = "prescriptions";

/// Add a prescription with its medicine line items.
///
/// # Returns
/// - `201 Created` - The created prescription
/// - `400 Bad Request` - Bad doctor or medicine name
#[utoipa::path(
    post,
    path = "/api/prescriptions",
    tag = PRESCRIPTION_TAG,
    request_body = CreatePrescriptionDto,
    responses(
        (status = 201, description = "Prescription created", body = ApiResponse<PrescriptionDto>),
        (status = 400, description = "Invalid prescription data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_prescription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePrescriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = PrescriptionService::new(&state.db);
    let prescription = service.create(user.id, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Prescription created",
            prescription.into_dto(),
        )),
    ))
}

/// List the user's prescriptions, newest issue date first.
///
/// # Returns
/// - `200 OK` - Prescriptions with embedded medicines
#[utoipa::path(
    get,
    path = "/api/prescriptions",
    tag = PRESCRIPTION_TAG,
    responses(
        (status = 200, description = "Prescriptions retrieved", body = ApiResponse<Vec<PrescriptionDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_prescriptions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = PrescriptionService::new(&state.db);
    let prescriptions = service.list(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Prescriptions retrieved",
            prescriptions
                .into_iter()
                .map(|p| p.into_dto())
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Get one prescription with its medicines.
///
/// # Returns
/// - `200 OK` - The prescription
/// - `404 Not Found` - No such prescription for this user
#[utoipa::path(
    get,
    path = "/api/prescriptions/{id}",
    tag = PRESCRIPTION_TAG,
    params(
        ("id" = i32, Path, description = "Prescription ID")
    ),
    responses(
        (status = 200, description = "Prescription retrieved", body = ApiResponse<PrescriptionDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Prescription not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_prescription_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(prescription_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = PrescriptionService::new(&state.db);
    let prescription = service.get(prescription_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Prescription retrieved",
            prescription.into_dto(),
        )),
    ))
}

/// Delete a prescription with its medicines.
///
/// # Returns
/// - `200 OK` - Prescription removed
/// - `404 Not Found` - No such prescription for this user
#[utoipa::path(
    delete,
    path = "/api/prescriptions/{id}",
    tag = PRESCRIPTION_TAG,
    params(
        ("id" = i32, Path, description = "Prescription ID")
    ),
    responses(
        (status = 200, description = "Prescription deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Prescription not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_prescription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(prescription_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = PrescriptionService::new(&state.db);
    service.delete(prescription_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<()>::message("Prescription deleted")),
    ))
}
