use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

const MEMORY_URL: &str = "sqlite::memory:";

/// Private in-memory SQLite database for one test.
///
/// The database lives as long as the context, or as long as any clone of the
/// connection handed out by `db()`.
pub struct TestContext {
    db: DatabaseConnection,
}

impl TestContext {
    /// Opens an empty in-memory database.
    pub async fn connect() -> Result<Self, TestError> {
        let db = Database::connect(MEMORY_URL).await?;
        Ok(Self { db })
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Runs the statements in order, stopping at the first failure.
    pub async fn create_tables(&self, stmts: &[TableCreateStatement]) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(stmt).await?;
        }
        Ok(())
    }
}
