//! Service configuration from environment variables.

use std::env;
use std::time::Duration;

use notebook_core::DEFAULT_MAX_NAME_LENGTH;

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Upper bound on each operation, including any transaction it opens.
    /// `None` means no deadline beyond the caller's own.
    pub operation_timeout: Option<Duration>,
    /// Maximum notebook name length, in characters.
    pub max_name_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            operation_timeout: None,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `NOTEBOOK_OPERATION_TIMEOUT_MS`: per-operation deadline (default: none)
    /// - `NOTEBOOK_MAX_NAME_LENGTH`: maximum name length (default: 255)
    pub fn from_env() -> Result<Self, ConfigError> {
        let operation_timeout = match env::var("NOTEBOOK_OPERATION_TIMEOUT_MS") {
            Ok(raw) => Some(Duration::from_millis(parse_var(
                "NOTEBOOK_OPERATION_TIMEOUT_MS",
                &raw,
            )?)),
            Err(_) => None,
        };

        let max_name_length = match env::var("NOTEBOOK_MAX_NAME_LENGTH") {
            Ok(raw) => parse_var("NOTEBOOK_MAX_NAME_LENGTH", &raw)?,
            Err(_) => DEFAULT_MAX_NAME_LENGTH,
        };

        if max_name_length == 0 {
            return Err(ConfigError::InvalidValue {
                name: "NOTEBOOK_MAX_NAME_LENGTH".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            operation_timeout,
            max_name_length,
        })
    }

    /// Set the per-operation deadline.
    #[must_use]
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = Some(timeout);
        self
    }
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
