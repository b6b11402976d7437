use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was present on the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature or expiry validation, or its
    /// subject was not a user id.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid or expired bearer token")]
    InvalidToken,

    /// The token subject did not resolve to a user row.
    ///
    /// Can happen when an account is deleted while a token for it is still
    /// in circulation. Results in a 401 Unauthorized response.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Login failed because the email is unknown or the password does not
    /// match.
    ///
    /// Results in a 401 Unauthorized response with a message that does not
    /// reveal which of the two was wrong.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// The account exists but has been deactivated.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Inactive user account")]
    InactiveUser,

    /// The user is authenticated but lacks the role or ownership the
    /// operation requires.
    ///
    /// # Fields
    /// - User id of the caller, for diagnostics
    /// - Client-facing message naming the missing capability
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Token and credential problems map to 401 with generic messages; role and
/// account-state problems map to 403. Details are logged at debug level while
/// client-facing messages stay generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not authenticated".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Could not validate credentials".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Incorrect email or password".to_string(),
                }),
            )
                .into_response(),
            Self::InactiveUser => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Inactive user".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, msg) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: msg })).into_response()
            }
        }
    }
}
