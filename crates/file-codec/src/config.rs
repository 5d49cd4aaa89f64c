//! Configuration loading and validation for the file-codec batch tool.

use anyhow::{Context, Result};
use serde::Deserialize;

use common::validate::DEFAULT_MAX_FILE_LEN;

/// Direction to run the codec in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Vowel → expansion.
    Encode,
    /// Expansion → vowel.
    Decode,
}

/// Validated file-codec configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path of the text file to read. **Required.**
    pub input_path: String,

    /// Path the transformed text is written to. **Required.**
    pub output_path: String,

    /// Codec direction (`encode` or `decode`). **Required.**
    pub mode: Mode,

    /// Maximum accepted file content length, in characters.
    #[serde(default = "default_max_file_len")]
    pub max_file_len: usize,

    /// Tracing log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_file_len() -> usize {
    DEFAULT_MAX_FILE_LEN
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build file-codec configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise file-codec configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if self.input_path.trim().is_empty() {
            anyhow::bail!("INPUT_PATH is required and must not be empty");
        }
        if self.output_path.trim().is_empty() {
            anyhow::bail!("OUTPUT_PATH is required and must not be empty");
        }
        if self.max_file_len == 0 {
            anyhow::bail!("MAX_FILE_LEN must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(default_max_file_len(), 50_000);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_rejects_empty_input_path() {
        let cfg = Config {
            input_path: "  ".into(),
            output_path: "out.txt".into(),
            mode: Mode::Encode,
            max_file_len: default_max_file_len(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_max_file_len() {
        let cfg = Config {
            input_path: "in.txt".into(),
            output_path: "out.txt".into(),
            mode: Mode::Decode,
            max_file_len: 0,
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_valid_config() {
        let cfg = Config {
            input_path: "in.txt".into(),
            output_path: "out.txt".into(),
            mode: Mode::Encode,
            max_file_len: default_max_file_len(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_ok());
    }
}
