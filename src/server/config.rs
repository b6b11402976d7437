use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_TOKEN_EXPIRE_MINUTES: i64 = 60;

pub struct Config {
    pub database_url: String,

    /// Secret used to sign and verify access tokens.
    pub secret_key: String,

    pub access_token_expire_minutes: i64,

    /// Origins allowed by the CORS layer. `*` means any origin.
    pub allowed_origins: Vec<String>,

    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let access_token_expire_minutes = match std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES") {
            Ok(raw) => raw
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidEnvVar("ACCESS_TOKEN_EXPIRE_MINUTES".to_string()))?,
            Err(_) => DEFAULT_TOKEN_EXPIRE_MINUTES,
        };

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            secret_key: std::env::var("SECRET_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("SECRET_KEY".to_string()))?,
            access_token_expire_minutes,
            allowed_origins,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
        })
    }
}
