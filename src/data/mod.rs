//! Data access layer repositories.
//!
//! One repository per aggregate of the riding log schema. Every repository is generic over
//! [`sea_orm::ConnectionTrait`] so the services can run the same queries on the pool
//! connection or inside a transaction. Repositories return [`sea_orm::DbErr`]; turning
//! missing records and rejected input into domain errors is left to the services.

pub mod profile;
pub mod segment_log;
pub mod sheet_class;
pub mod train_class;
pub mod train_dia;
pub mod train_dia_segment;
pub mod train_log;
pub mod traindb;
pub mod trip_log;
pub mod user;
