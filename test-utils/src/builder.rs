use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError, factory};

/// Fluent setup for a test database.
///
/// Tables are created from SeaORM entities in the order they were added, then
/// any requested seed rows are inserted.
///
/// ```rust,ignore
/// let test = TestBuilder::new().with_bird_tables().with_birds(3).build().await?;
/// let repo = BirdRepository::new(test.db());
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    birds: usize,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a CREATE TABLE statement generated from `entity`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the bird resource needs.
    pub fn with_bird_tables(self) -> Self {
        self.with_table(Bird)
    }

    /// Seeds `count` default birds once the tables exist.
    pub fn with_birds(mut self, count: usize) -> Self {
        self.birds = count;
        self
    }

    /// Connects, creates the tables and inserts the seed rows.
    ///
    /// Seeding without `with_bird_tables` fails with `TestError::Database`.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::connect().await?;
        test.create_tables(&self.tables).await?;

        if self.birds > 0 {
            factory::create_birds(test.db(), self.birds).await?;
        }

        Ok(test)
    }
}
