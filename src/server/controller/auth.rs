//! Authentication and account endpoints.
//!
//! Successful logins and registrations return the JWT in the response body
//! and also set it as an httpOnly `token` cookie, so both bearer-header and
//! cookie clients work. Logout overwrites the cookie with an expired one.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{
            AuthDto, ForgotPasswordDto, LoginDto, RegisterDto, ResendVerificationDto,
            ResetPasswordDto, UpdateDetailsDto, UpdatePasswordDto, UserDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, TOKEN_COOKIE},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Builds the Set-Cookie header carrying the access token.
fn token_cookie(state: &AppState, token: &str, max_age: i64) -> (header::HeaderName, String) {
    let secure = if state.secure_cookies { "; Secure" } else { "" };

    (
        header::SET_COOKIE,
        format!(
            "{TOKEN_COOKIE}={token}; Max-Age={max_age}; Path=/; HttpOnly; SameSite=Strict{secure}"
        ),
    )
}

/// Register a new account.
///
/// Validates the profile fields and password complexity, creates the user,
/// and signs them in. An email verification token is issued alongside.
///
/// # Returns
/// - `201 Created` - Account created, token in body and cookie
/// - `400 Bad Request` - A field failed validation
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<AuthDto>),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let (token, user) = service.register(payload).await?;
    let cookie = token_cookie(&state, &token, state.jwt.max_age_seconds());

    Ok((
        StatusCode::CREATED,
        [cookie],
        Json(ApiResponse::success(
            "Account created",
            AuthDto {
                token,
                user: user.into_dto(),
            },
        )),
    ))
}

/// Log in with email and password.
///
/// Wrong passwords count toward the lockout limit; after five failures the
/// account locks for two hours.
///
/// # Returns
/// - `200 OK` - Logged in, token in body and cookie
/// - `401 Unauthorized` - Bad credentials or locked account
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<AuthDto>),
        (status = 401, description = "Invalid credentials or locked account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let (token, user) = service.login(&payload.email, &payload.password).await?;
    let cookie = token_cookie(&state, &token, state.jwt.max_age_seconds());

    Ok((
        StatusCode::OK,
        [cookie],
        Json(ApiResponse::success(
            "Logged in",
            AuthDto {
                token,
                user: user.into_dto(),
            },
        )),
    ))
}

/// Log out by expiring the token cookie.
///
/// # Returns
/// - `200 OK` - Cookie cleared
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out"),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let cookie = token_cookie(&state, "", 0);

    Ok((
        StatusCode::OK,
        [cookie],
        Json(ApiResponse::<()>::message("Logged out")),
    ))
}

/// Get the current user's profile.
///
/// # Returns
/// - `200 OK` - Profile of the authenticated user
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current profile", body = ApiResponse<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Current user", user.into_dto())),
    ))
}

/// Update the current user's profile details.
///
/// Absent fields are left untouched.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - A provided field failed validation
/// - `409 Conflict` - New email already registered
#[utoipa::path(
    put,
    path = "/api/auth/updatedetails",
    tag = AUTH_TAG,
    request_body = UpdateDetailsDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_details(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateDetailsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = AuthService::new(&state.db, &state.jwt);
    let updated = service.update_details(user.id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Details updated", updated.into_dto())),
    ))
}

/// Change the current user's password.
///
/// Verifies the current password before applying the new one, then returns a
/// fresh token.
///
/// # Returns
/// - `200 OK` - Password changed, fresh token in body and cookie
/// - `400 Bad Request` - New password fails complexity rules
/// - `401 Unauthorized` - Current password wrong
#[utoipa::path(
    put,
    path = "/api/auth/updatepassword",
    tag = AUTH_TAG,
    request_body = UpdatePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = ApiResponse<AuthDto>),
        (status = 400, description = "Invalid new password", body = ErrorDto),
        (status = 401, description = "Not authenticated or wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let service = AuthService::new(&state.db, &state.jwt);
    let token = service.update_password(user.id, payload).await?;
    let cookie = token_cookie(&state, &token, state.jwt.max_age_seconds());

    Ok((
        StatusCode::OK,
        [cookie],
        Json(ApiResponse::success(
            "Password updated",
            AuthDto {
                token,
                user: user.into_dto(),
            },
        )),
    ))
}

/// Request a password reset token.
///
/// The raw token is logged in place of an outgoing email.
///
/// # Returns
/// - `200 OK` - Token issued
/// - `400 Bad Request` - No account with that email
#[utoipa::path(
    post,
    path = "/api/auth/forgotpassword",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Reset token issued"),
        (status = 400, description = "Unknown email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    service.forgot_password(&payload.email).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<()>::message("Password reset token issued")),
    ))
}

/// Complete a password reset with the token from the email link.
///
/// # Returns
/// - `200 OK` - Password reset, logged in with a fresh token
/// - `400 Bad Request` - Token unknown/expired or password invalid
#[utoipa::path(
    put,
    path = "/api/auth/resetpassword/{token}",
    tag = AUTH_TAG,
    params(
        ("token" = String, Path, description = "Raw reset token from the email link")
    ),
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password reset", body = ApiResponse<AuthDto>),
        (status = 400, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let (token, user) = service.reset_password(&token, payload).await?;
    let cookie = token_cookie(&state, &token, state.jwt.max_age_seconds());

    Ok((
        StatusCode::OK,
        [cookie],
        Json(ApiResponse::success(
            "Password reset",
            AuthDto {
                token,
                user: user.into_dto(),
            },
        )),
    ))
}

/// Verify an email address with the token from the verification link.
///
/// # Returns
/// - `200 OK` - Email verified
/// - `400 Bad Request` - Token unknown or already used
#[utoipa::path(
    get,
    path = "/api/auth/verifyemail/{token}",
    tag = AUTH_TAG,
    params(
        ("token" = String, Path, description = "Raw verification token from the email link")
    ),
    responses(
        (status = 200, description = "Email verified", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid verification token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_email(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let user = service.verify_email(&token).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Email verified", user.into_dto())),
    ))
}

/// Re-issue the email verification token for an unverified account.
///
/// # Returns
/// - `200 OK` - Token issued
/// - `400 Bad Request` - Unknown email or already verified
#[utoipa::path(
    post,
    path = "/api/auth/resendverification",
    tag = AUTH_TAG,
    request_body = ResendVerificationDto,
    responses(
        (status = 200, description = "Verification token issued"),
        (status = 400, description = "Unknown email or already verified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resend_verification(
    State(state): State<AppState>,
    Json(payload): Json<ResendVerificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    service.resend_verification(&payload.email).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<()>::message("Verification email sent")),
    ))
}
