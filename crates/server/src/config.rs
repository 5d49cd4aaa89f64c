//! Configuration loading and validation for the HTTP server.
//!
//! All values are read from environment variables at startup. The process will
//! exit with a clear error message if any value cannot be parsed or is invalid.

use anyhow::{Context, Result};
use serde::Deserialize;

use common::validate::DEFAULT_MAX_TEXT_LEN;

/// Validated server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// TCP port the HTTP server listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Maximum accepted text length, in characters.
    #[serde(default = "default_max_text_len")]
    pub max_text_len: usize,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_listen_port() -> u16 {
    8080
}
fn default_max_text_len() -> usize {
    DEFAULT_MAX_TEXT_LEN
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        if self.max_text_len == 0 {
            anyhow::bail!("MAX_TEXT_LEN must be > 0");
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("LOG_LEVEL must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(default_listen_port(), 8080);
        assert_eq!(default_max_text_len(), 5_000);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_rejects_zero_max_text_len() {
        let cfg = Config {
            listen_port: default_listen_port(),
            max_text_len: 0,
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_log_level() {
        let cfg = Config {
            listen_port: default_listen_port(),
            max_text_len: default_max_text_len(),
            log_level: "  ".into(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_valid_config() {
        let cfg = Config {
            listen_port: 8080,
            max_text_len: 5_000,
            log_level: "info".into(),
        };
        assert!(cfg.validate().is_ok());
    }
}
