//! Axum route configuration and API documentation.
//!
//! Public auth routes sit behind a per-IP rate limit; everything else
//! authenticates inside the handler via `AuthGuard`. The OpenAPI document is
//! assembled from the controllers' path annotations and served through
//! Swagger UI at `/swagger-ui`.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model,
    server::{
        controller::{auth, medication, prescription, record},
        error::AppError,
        service::upload::MAX_UPLOAD_BYTES,
        state::AppState,
    },
};

/// Requests per second allowed on the public auth endpoints, per IP.
const AUTH_RATE_PER_SECOND: u64 = 2;

/// Burst allowance on top of the sustained auth rate.
const AUTH_RATE_BURST: u32 = 10;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Carelog API",
        description = "Personal health record API: accounts, medical records with file \
            attachments and reminders, medications, and prescriptions."
    ),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::me,
        auth::update_details,
        auth::update_password,
        auth::forgot_password,
        auth::reset_password,
        auth::verify_email,
        auth::resend_verification,
        record::create_record,
        record::get_records,
        record::get_record_stats,
        record::get_upcoming_reminders,
        record::get_record_by_id,
        record::update_record,
        record::delete_record,
        record::upload_record_files,
        record::download_record_file,
        record::delete_record_file,
        record::create_reminder,
        record::update_reminder,
        medication::create_medication,
        medication::get_medications,
        medication::update_medication,
        medication::delete_medication,
        prescription::create_prescription,
        prescription::get_prescriptions,
        prescription::get_prescription_by_id,
        prescription::delete_prescription,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::user::UserDto,
        model::user::AuthDto,
        model::user::RegisterDto,
        model::user::LoginDto,
        model::user::UpdateDetailsDto,
        model::user::UpdatePasswordDto,
        model::user::ForgotPasswordDto,
        model::user::ResetPasswordDto,
        model::user::ResendVerificationDto,
        model::record::MedicalRecordDto,
        model::record::CreateMedicalRecordDto,
        model::record::UpdateMedicalRecordDto,
        model::record::PaginatedRecordsDto,
        model::record::RecordStatsDto,
        model::record::RecordFileDto,
        model::record::ReminderDto,
        model::record::CreateReminderDto,
        model::record::UpdateReminderDto,
        model::record::UpcomingReminderDto,
        model::medication::MedicationDto,
        model::medication::CreateMedicationDto,
        model::medication::UpdateMedicationDto,
        model::prescription::PrescriptionDto,
        model::prescription::CreatePrescriptionDto,
        model::prescription::PrescriptionMedicineDto,
        model::prescription::CreatePrescriptionMedicineDto,
    )),
    tags(
        (name = "auth", description = "Accounts and authentication"),
        (name = "records", description = "Medical records, files, and reminders"),
        (name = "medications", description = "Current and past medications"),
        (name = "prescriptions", description = "Prescriptions with medicine line items")
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// # Returns
/// - `Ok(Router<AppState>)` - Full route tree with middleware attached
/// - `Err(AppError)` - Rate limiter configuration was invalid
pub fn router() -> Result<Router<AppState>, AppError> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(AUTH_RATE_PER_SECOND)
            .burst_size(AUTH_RATE_BURST)
            .finish()
            .ok_or_else(|| {
                AppError::InternalError("Invalid rate limiter configuration".to_string())
            })?,
    );

    let public_auth = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/forgotpassword", post(auth::forgot_password))
        .route("/api/auth/resetpassword/{token}", put(auth::reset_password))
        .route("/api/auth/verifyemail/{token}", get(auth::verify_email))
        .route(
            "/api/auth/resendverification",
            post(auth::resend_verification),
        )
        .layer(GovernorLayer::new(governor_conf));

    let account = Router::new()
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/updatedetails", put(auth::update_details))
        .route("/api/auth/updatepassword", put(auth::update_password));

    let records = Router::new()
        .route(
            "/api/records",
            get(record::get_records).post(record::create_record),
        )
        .route("/api/records/stats", get(record::get_record_stats))
        .route(
            "/api/records/reminders",
            get(record::get_upcoming_reminders),
        )
        .route(
            "/api/records/{id}",
            get(record::get_record_by_id)
                .put(record::update_record)
                .delete(record::delete_record),
        )
        .route(
            "/api/records/{id}/files",
            post(record::upload_record_files)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(
            "/api/records/{id}/files/{file_id}",
            get(record::download_record_file).delete(record::delete_record_file),
        )
        .route(
            "/api/records/{id}/reminders",
            post(record::create_reminder),
        )
        .route(
            "/api/records/{id}/reminders/{reminder_id}",
            put(record::update_reminder),
        );

    let medications = Router::new()
        .route(
            "/api/medications",
            get(medication::get_medications).post(medication::create_medication),
        )
        .route(
            "/api/medications/{id}",
            put(medication::update_medication).delete(medication::delete_medication),
        );

    let prescriptions = Router::new()
        .route(
            "/api/prescriptions",
            get(prescription::get_prescriptions).post(prescription::create_prescription),
        )
        .route(
            "/api/prescriptions/{id}",
            get(prescription::get_prescription_by_id).delete(prescription::delete_prescription),
        );

    Ok(Router::new()
        .merge(public_auth)
        .merge(account)
        .merge(records)
        .merge(medications)
        .merge(prescriptions)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()))
}
