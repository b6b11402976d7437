use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::AppError, middleware::auth::CurrentUser, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// Get the authenticated user's own profile.
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user profile", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn me(CurrentUser(user): CurrentUser) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Get a user profile by id.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User profile", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(user_id).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}
