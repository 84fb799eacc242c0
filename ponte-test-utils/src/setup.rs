use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Shared integration-test environment backed by an in-memory SQLite
/// database.
///
/// A fresh setup has no tables at all, which is exactly the degraded mode
/// the dictionary falls back from; add the configuration tables with
/// [`test_setup_with_dict_tables!`] to exercise the persistent path.
pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    /// Creates the provided tables in the test database.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_dict_tables {
    // Pattern 1: bare in-memory database, no tables
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: dictionary configuration tables plus the customer lookup
    (dict) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::DictAlias),
                schema.create_table_from_entity(entity::prelude::DictField),
                schema.create_table_from_entity(entity::prelude::DictFolder),
                schema.create_table_from_entity(entity::prelude::DictAgrup),
                schema.create_table_from_entity(entity::prelude::Customer),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
