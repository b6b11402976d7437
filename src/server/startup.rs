use crate::server::{config::Config, error::AppError, state::AppState, util::token::TokenKeys};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the first request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared application state from a connected database and config.
pub fn build_state(db: sea_orm::DatabaseConnection, config: &Config) -> AppState {
    let tokens = TokenKeys::new(&config.secret_key, config.access_token_expire_minutes);
    AppState::new(db, tokens)
}
