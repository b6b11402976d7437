//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! The variants map one-to-one onto the API's status codes: 401 and 403 come
//! from `AuthError`, 404 from `NotFound`, 409 from `Conflict`, 412 from
//! `PreconditionFailed`, 422 from `Validation`, and everything unexpected is
//! reported as a 500 with details kept server-side.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, FieldViolationDto, ValidationErrorDto},
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Authentication errors handle their own response mapping, while
/// the remaining variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness or state-transition violation, e.g. a duplicate email or a
    /// second ticket for the same attendee.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Business-rule gate failure, e.g. a disabled feature flag, an exhausted
    /// ticket quota or a closed poll.
    ///
    /// Results in 412 Precondition Failed with the provided error message.
    #[error("{0}")]
    PreconditionFailed(String),

    /// Semantic validation failure with one violation per offending field.
    ///
    /// Results in 422 Unprocessable Entity carrying the field list.
    #[error("validation failed")]
    Validation(Vec<FieldViolationDto>),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Shorthand for a single-field validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldViolationDto {
            field: field.into(),
            message: message.into(),
        }])
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication errors delegate to their own response handling, while other errors
/// use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::PreconditionFailed(msg) => {
                (StatusCode::PRECONDITION_FAILED, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorDto {
                    error: "Validation failed".to_string(),
                    fields,
                }),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for
/// errors that don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
