use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs and creates them in a fresh database.
///
/// Tables are created in the order they were added, so referenced tables must come
/// before the tables pointing at them.
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the table backing `entity`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the full game registry schema: games and their sources, destinations and
    /// their subscriptions, and the release announcement ledger.
    pub fn with_game_tables(self) -> Self {
        self.with_table(Game)
            .with_table(GameSource)
            .with_table(Destination)
            .with_table(GameSubscription)
            .with_table(ReleaseAnnouncement)
    }

    /// Opens the database and creates every added table.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.create_tables(self.tables).await?;

        Ok(context)
    }
}
