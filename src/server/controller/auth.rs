use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        auth::{LoginDto, RegisterDto, TokenDto},
        user::UserDto,
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user account.
///
/// Stores a salted argon2 hash of the password; the plain password is never
/// persisted or logged.
///
/// # Returns
/// - `201 Created` - The new user profile
/// - `409 Conflict` - Email already registered
/// - `422 Unprocessable Entity` - Malformed body
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 422, description = "Malformed body", body = ValidationErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    let user = service
        .register(payload.email, payload.full_name, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Exchange credentials for a signed, time-limited bearer token.
///
/// # Returns
/// - `200 OK` - Access token
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/token",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Token issued", body = TokenDto),
        (status = 401, description = "Incorrect email or password", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    let token = service
        .login(&state.tokens, &payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(TokenDto::bearer(token))))
}
