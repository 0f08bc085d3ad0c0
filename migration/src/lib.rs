pub use sea_orm_migration::prelude::*;

mod m20251101_000001_auth_user;
mod m20251101_000002_traindb_company;
mod m20251101_000003_traindb_line;
mod m20251101_000004_traindb_station;
mod m20251101_000005_traindb_line_station;
mod m20251101_000006_einhorn_profile;
mod m20251101_000007_sheet_class;
mod m20251101_000008_train_class;
mod m20251101_000009_train_dia;
mod m20251101_000010_train_dia_segment;
mod m20251101_000011_trip_log;
mod m20251101_000012_train_log;
mod m20251101_000013_segment_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_auth_user::Migration),
            Box::new(m20251101_000002_traindb_company::Migration),
            Box::new(m20251101_000003_traindb_line::Migration),
            Box::new(m20251101_000004_traindb_station::Migration),
            Box::new(m20251101_000005_traindb_line_station::Migration),
            Box::new(m20251101_000006_einhorn_profile::Migration),
            Box::new(m20251101_000007_sheet_class::Migration),
            Box::new(m20251101_000008_train_class::Migration),
            Box::new(m20251101_000009_train_dia::Migration),
            Box::new(m20251101_000010_train_dia_segment::Migration),
            Box::new(m20251101_000011_trip_log::Migration),
            Box::new(m20251101_000012_train_log::Migration),
            Box::new(m20251101_000013_segment_log::Migration),
        ]
    }
}
