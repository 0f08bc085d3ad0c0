use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// In-memory SQLite database for a single test.
///
/// SQLite enforces the foreign keys (and their cascade/restrict policies) declared by the
/// entity relations, so tests observe the same delete behavior as production.
pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates every table of the riding log schema, parents before children.
#[macro_export]
macro_rules! test_setup_with_einhorn_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::AuthUser),
                schema.create_table_from_entity(entity::prelude::TraindbCompany),
                schema.create_table_from_entity(entity::prelude::TraindbLine),
                schema.create_table_from_entity(entity::prelude::TraindbStation),
                schema.create_table_from_entity(entity::prelude::TraindbLineStation),
                schema.create_table_from_entity(entity::prelude::EinhornProfile),
                schema.create_table_from_entity(entity::prelude::EinhornProfileAcceptUser),
                schema.create_table_from_entity(entity::prelude::EinhornProfileDenyUser),
                schema.create_table_from_entity(entity::prelude::SheetClass),
                schema.create_table_from_entity(entity::prelude::SheetClassCompany),
                schema.create_table_from_entity(entity::prelude::TrainClass),
                schema.create_table_from_entity(entity::prelude::TrainClassSheetClass),
                schema.create_table_from_entity(entity::prelude::TrainClassCompany),
                schema.create_table_from_entity(entity::prelude::TrainDia),
                schema.create_table_from_entity(entity::prelude::TrainDiaSegment),
                schema.create_table_from_entity(entity::prelude::TripLog),
                schema.create_table_from_entity(entity::prelude::TripLogPartner),
                schema.create_table_from_entity(entity::prelude::TrainLog),
                schema.create_table_from_entity(entity::prelude::SegmentLog),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
