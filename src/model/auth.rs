use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration request body.
///
/// The password only ever exists in this in-flight struct; it is hashed
/// before anything is persisted and the struct is never logged.
#[derive(Deserialize, ToSchema)]
pub struct RegisterDto {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// Login request body.
#[derive(Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Issued access token.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: String,
}

impl TokenDto {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
