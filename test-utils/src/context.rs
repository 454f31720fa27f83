use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

const IN_MEMORY_SQLITE: &str = "sqlite::memory:";

/// An isolated database for a single test.
///
/// The connection is opened on first use and dropped with the context, taking the
/// in-memory database with it.
#[derive(Default)]
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the connection, opening it if this is the first call.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => Database::connect(IN_MEMORY_SQLITE).await?,
        };

        Ok(self.db.insert(db))
    }

    /// Runs the given CREATE TABLE statements in order.
    pub(crate) async fn create_tables(
        &mut self,
        tables: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        let db = self.database().await?;

        for table in &tables {
            db.execute(table).await?;
        }

        Ok(())
    }
}
