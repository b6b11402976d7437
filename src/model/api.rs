use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic error response body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// One field-level validation violation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldViolationDto {
    pub field: String,
    pub message: String,
}

/// Error response body for 422 validation failures.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    pub fields: Vec<FieldViolationDto>,
}

/// Body of the health check endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub message: String,
}
