use thiserror::Error;

/// Configuration problems detected at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidEnvVar(String),
}
