//! Error types for the Einhorn riding log.
//!
//! Errors are split by domain (configuration, validation, record lookups) and aggregated
//! into the top level [`Error`]. Repositories return [`sea_orm::DbErr`] directly, services
//! return [`Error`] so callers can match on the failure category.

pub mod config;
pub mod record;
pub mod validation;

use thiserror::Error;

use crate::error::{config::ConfigError, record::RecordError, validation::ValidationError};

/// Main error type for the Einhorn services.
///
/// Uses `thiserror`'s `#[from]` conversions so domain errors and database errors propagate
/// through the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A write was rejected because it would break a field constraint or invariant.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A referenced record does not exist or cannot be used for the requested operation.
    #[error(transparent)]
    RecordError(#[from] RecordError),
    /// Internal error indicating a bug in Einhorn's code.
    #[error("Internal error, this indicates a bug in einhorn: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
