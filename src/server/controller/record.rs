//! Medical record endpoints, including file attachments and reminders.
//!
//! Every endpoint authenticates via `AuthGuard` and operates only on the
//! caller's own records; a record id owned by someone else responds 404.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        record::{
            CreateMedicalRecordDto, CreateReminderDto, MedicalRecordDto, PaginatedRecordsDto,
            RecordFileDto, RecordStatsDto, ReminderDto, UpcomingReminderDto,
            UpdateMedicalRecordDto, UpdateReminderDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::record::{
            MedicalRecord, PaginatedRecords, RecordFilters, RecordStatus, RecordType,
        },
        service::record::{RecordService, UploadPart},
        state::AppState,
    },
};

/// Tag for grouping record endpoints in OpenAPI documentation
pub static RECORD_TAG: &str = "records";

/// Multipart field name carrying the uploaded files.
const FILES_FIELD: &str = "files";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub status: Option<String>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct ReminderWindowParams {
    pub days: Option<i64>,
}

fn paginated_dto(page: PaginatedRecords) -> PaginatedRecordsDto {
    PaginatedRecordsDto {
        records: page
            .records
            .into_iter()
            .map(MedicalRecord::into_dto)
            .collect(),
        total: page.total,
        page: page.page,
        limit: page.limit,
        total_pages: page.total_pages,
    }
}

/// Create a medical record.
///
/// The BMI is derived server-side from weight and height; any client-supplied
/// value is ignored by the input shape.
///
/// # Returns
/// - `201 Created` - The created record
/// - `400 Bad Request` - A field failed validation
#[utoipa::path(
    post,
    path = "/api/records",
    tag = RECORD_TAG,
    request_body = CreateMedicalRecordDto,
    responses(
        (status = 201, description = "Record created", body = ApiResponse<MedicalRecordDto>),
        (status = 400, description = "Invalid record data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_record(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateMedicalRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = RecordService::new(&state.db, &state.files);
    let record = service.create(user.id, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Record created", record.into_dto())),
    ))
}

/// List the user's medical records.
///
/// Supports type/status/date filters and a substring search over title,
/// description, doctor name, and primary diagnosis. Pages are one-indexed.
///
/// # Returns
/// - `200 OK` - Page of records, newest first
/// - `400 Bad Request` - A filter value failed to parse
#[utoipa::path(
    get,
    path = "/api/records",
    tag = RECORD_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, one-indexed (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Records per page (default: 10)"),
        ("type" = Option<String>, Query, description = "Filter by record type"),
        ("status" = Option<String>, Query, description = "Filter by record status"),
        ("dateFrom" = Option<String>, Query, description = "Earliest record date (RFC 3339)"),
        ("dateTo" = Option<String>, Query, description = "Latest record date (RFC 3339)"),
        ("search" = Option<String>, Query, description = "Substring search term")
    ),
    responses(
        (status = 200, description = "Page of records", body = ApiResponse<PaginatedRecordsDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_records(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let filters = RecordFilters {
        record_type: params
            .record_type
            .as_deref()
            .map(RecordType::parse)
            .transpose()?,
        status: params.status.as_deref().map(RecordStatus::parse).transpose()?,
        date_from: params.date_from,
        date_to: params.date_to,
        search: params.search,
    };

    let service = RecordService::new(&state.db, &state.files);
    let page = service
        .list(user.id, filters, params.page, params.limit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Records retrieved", paginated_dto(page))),
    ))
}

/// Get dashboard statistics over the user's records.
///
/// # Returns
/// - `200 OK` - Totals, status and type breakdowns, newest record date
#[utoipa::path(
    get,
    path = "/api/records/stats",
    tag = RECORD_TAG,
    responses(
        (status = 200, description = "Record statistics", body = ApiResponse<RecordStatsDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_record_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = RecordService::new(&state.db, &state.files);
    let stats = service.stats(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Statistics retrieved", stats.into_dto())),
    ))
}

/// Get pending reminders due soon across all of the user's records.
///
/// # Returns
/// - `200 OK` - Up to 10 reminders due within the window, soonest first
#[utoipa::path(
    get,
    path = "/api/records/reminders",
    tag = RECORD_TAG,
    params(
        ("days" = Option<i64>, Query, description = "Look-ahead window in days (default: 7)")
    ),
    responses(
        (status = 200, description = "Upcoming reminders", body = ApiResponse<Vec<UpcomingReminderDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_upcoming_reminders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ReminderWindowParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = RecordService::new(&state.db, &state.files);
    let reminders = service.upcoming_reminders(user.id, params.days).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Upcoming reminders retrieved",
            reminders
                .into_iter()
                .map(|r| r.into_dto())
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Get one medical record with its files and reminders.
///
/// # Returns
/// - `200 OK` - The record
/// - `404 Not Found` - No such record for this user
#[utoipa::path(
    get,
    path = "/api/records/{id}",
    tag = RECORD_TAG,
    params(
        ("id" = i32, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Record retrieved", body = ApiResponse<MedicalRecordDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_record_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(record_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = RecordService::new(&state.db, &state.files);
    let record = service.get(record_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Record retrieved", record.into_dto())),
    ))
}

/// Apply a partial update to a medical record.
///
/// # Returns
/// - `200 OK` - Updated record
/// - `400 Bad Request` - A provided field failed validation
/// - `404 Not Found` - No such record for this user
#[utoipa::path(
    put,
    path = "/api/records/{id}",
    tag = RECORD_TAG,
    params(
        ("id" = i32, Path, description = "Record ID")
    ),
    request_body = UpdateMedicalRecordDto,
    responses(
        (status = 200, description = "Record updated", body = ApiResponse<MedicalRecordDto>),
        (status = 400, description = "Invalid record data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_record(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(record_id): Path<i32>,
    Json(payload): Json<UpdateMedicalRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = RecordService::new(&state.db, &state.files);
    let record = service.update(record_id, user.id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Record updated", record.into_dto())),
    ))
}

/// Delete a medical record with its reminders and files.
///
/// # Returns
/// - `200 OK` - Record removed
/// - `404 Not Found` - No such record for this user
#[utoipa::path(
    delete,
    path = "/api/records/{id}",
    tag = RECORD_TAG,
    params(
        ("id" = i32, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Record deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_record(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(record_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = RecordService::new(&state.db, &state.files);
    service.delete(record_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<()>::message("Record deleted")),
    ))
}

/// Upload file attachments to a record.
///
/// Multipart form with up to five parts under the `files` field. Only
/// jpg/jpeg/png/pdf/doc/docx are accepted and the declared content type must
/// match the extension.
///
/// # Returns
/// - `201 Created` - Metadata for the stored files
/// - `400 Bad Request` - Too many parts or a disallowed file type
/// - `404 Not Found` - No such record for this user
#[utoipa::path(
    post,
    path = "/api/records/{id}/files",
    tag = RECORD_TAG,
    params(
        ("id" = i32, Path, description = "Record ID")
    ),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Files uploaded", body = ApiResponse<Vec<RecordFileDto>>),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_record_files(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(record_id): Path<i32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }

        let original_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Uploaded part has no filename".to_string()))?;
        let content_type = field
            .content_type()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Uploaded part has no content type".to_string()))?;
        let bytes = field.bytes().await?;

        parts.push(UploadPart {
            original_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    let service = RecordService::new(&state.db, &state.files);
    let files = service.attach_files(record_id, user.id, parts).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Files uploaded",
            files.into_iter().map(|f| f.into_dto()).collect::<Vec<_>>(),
        )),
    ))
}

/// Download a file attached to a record.
///
/// # Returns
/// - `200 OK` - File bytes with the stored content type, inline disposition
/// - `404 Not Found` - Record, file row, or stored bytes missing
#[utoipa::path(
    get,
    path = "/api/records/{id}/files/{file_id}",
    tag = RECORD_TAG,
    params(
        ("id" = i32, Path, description = "Record ID"),
        ("file_id" = i32, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "File contents"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_record_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((record_id, file_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = RecordService::new(&state.db, &state.files);
    let (file, bytes) = service.get_file(record_id, file_id, user.id).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, file.mime_type),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", file.original_name),
            ),
        ],
        bytes,
    ))
}

/// Delete a file attached to a record.
///
/// # Returns
/// - `200 OK` - File row and stored bytes removed
/// - `404 Not Found` - Record or file row missing
#[utoipa::path(
    delete,
    path = "/api/records/{id}/files/{file_id}",
    tag = RECORD_TAG,
    params(
        ("id" = i32, Path, description = "Record ID"),
        ("file_id" = i32, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "File deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_record_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((record_id, file_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = RecordService::new(&state.db, &state.files);
    service.delete_file(record_id, file_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<()>::message("File deleted")),
    ))
}

/// Add a reminder to a record.
///
/// # Returns
/// - `201 Created` - The created reminder
/// - `400 Bad Request` - Bad reminder kind or title
/// - `404 Not Found` - No such record for this user
#[utoipa::path(
    post,
    path = "/api/records/{id}/reminders",
    tag = RECORD_TAG,
    params(
        ("id" = i32, Path, description = "Record ID")
    ),
    request_body = CreateReminderDto,
    responses(
        (status = 201, description = "Reminder created", body = ApiResponse<ReminderDto>),
        (status = 400, description = "Invalid reminder data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reminder(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(record_id): Path<i32>,
    Json(payload): Json<CreateReminderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = RecordService::new(&state.db, &state.files);
    let reminder = service.add_reminder(record_id, user.id, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Reminder created", reminder.into_dto())),
    ))
}

/// Set a reminder's completion state.
///
/// Completing stamps the completion time; un-completing clears it.
///
/// # Returns
/// - `200 OK` - Updated reminder
/// - `404 Not Found` - Record or reminder missing for this user
#[utoipa::path(
    put,
    path = "/api/records/{id}/reminders/{reminder_id}",
    tag = RECORD_TAG,
    params(
        ("id" = i32, Path, description = "Record ID"),
        ("reminder_id" = i32, Path, description = "Reminder ID")
    ),
    request_body = UpdateReminderDto,
    responses(
        (status = 200, description = "Reminder updated", body = ApiResponse<ReminderDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reminder not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reminder(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((record_id, reminder_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateReminderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = RecordService::new(&state.db, &state.files);
    let reminder = service
        .set_reminder_completion(record_id, reminder_id, user.id, payload.is_completed)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Reminder updated", reminder.into_dto())),
    ))
}
