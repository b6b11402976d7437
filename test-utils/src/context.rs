use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

/// Test context containing the database connection for a single test.
///
/// Provides an in-memory SQLite database connection for isolated unit and
/// integration testing. The database is created lazily on first access and
/// persists for the lifetime of the test context.
pub struct TestContext {
    /// Optional database connection to in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called. Using `Option` allows
    /// deferred connection until actually needed by the test.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// The database connection will be created lazily when `database()` is
    /// first called.
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// Returns a reference to the existing database connection if one exists, otherwise
    /// creates a new in-memory SQLite database and stores the connection. The connection
    /// persists for the lifetime of this test context.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Creates database tables and indexes from the provided statements.
    ///
    /// Executes each CREATE TABLE statement in sequence, then the CREATE INDEX
    /// statements (composite unique keys cannot be expressed on the entity
    /// models, so they arrive as separate statements). Typically called
    /// internally by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `tables` - CREATE TABLE statements to execute, in dependency order
    /// - `indexes` - CREATE INDEX statements to execute afterwards
    ///
    /// # Returns
    /// - `Ok(())` - Schema created successfully
    /// - `Err(TestError::Database)` - Failed to create a table or index
    pub async fn with_schema(
        &mut self,
        tables: Vec<TableCreateStatement>,
        indexes: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in tables {
            db.execute(&stmt).await?;
        }

        for stmt in indexes {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
