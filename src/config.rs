use std::str::FromStr;

use dioxus_logger::tracing::Level;

use crate::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub log_level: Level,
    pub sqlx_logging: bool,
    pub rebuild_caches: bool,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let log_level = match lookup("EINHORN_LOG_LEVEL") {
            Some(value) => {
                Level::from_str(&value).map_err(|_| ConfigError::InvalidEnvValue {
                    var: "EINHORN_LOG_LEVEL".to_string(),
                    reason: format!(
                        "{:?} is not one of trace, debug, info, warn or error",
                        value
                    ),
                })?
            }
            None => Level::INFO,
        };

        Ok(Self {
            database_url,
            log_level,
            sqlx_logging: parse_flag("EINHORN_SQLX_LOGGING", lookup("EINHORN_SQLX_LOGGING"))?,
            rebuild_caches: parse_flag("EINHORN_REBUILD_CACHES", lookup("EINHORN_REBUILD_CACHES"))?,
        })
    }
}

fn parse_flag(var: &str, value: Option<String>) -> Result<bool, ConfigError> {
    let value = match value {
        Some(value) => value,
        None => return Ok(false),
    };

    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("{:?} is not a boolean", value),
        }),
    }
}
