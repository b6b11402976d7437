//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a pooled handle and `TokenKeys` holds
//! reference-counted key material.

use sea_orm::DatabaseConnection;

use crate::server::util::token::TokenKeys;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signing and verification keys for bearer tokens, plus their lifetime.
    pub tokens: TokenKeys,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(db: DatabaseConnection, tokens: TokenKeys) -> Self {
        Self { db, tokens }
    }
}
