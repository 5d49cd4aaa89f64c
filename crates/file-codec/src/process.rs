//! One-shot file transformation: read, validate, transform, write.
//!
//! File content follows the file validation rules (lowercase a-z, spaces,
//! line breaks, length cap). A file that fails validation aborts the run
//! with every failure listed; nothing is written.

use anyhow::{Context, Result};
use tracing::{info, warn};

use common::codec::SubstitutionCodec;
use common::validate::{self, TextRules};

use crate::config::{Config, Mode};

/// Read the input file, run the codec, and write the output file.
///
/// # Errors
///
/// Returns an error if the input file cannot be read, if its content fails
/// validation, or if the output file cannot be written.
pub async fn run(cfg: &Config) -> Result<()> {
    let content = tokio::fs::read_to_string(&cfg.input_path)
        .await
        .with_context(|| format!("failed to read input file: {}", cfg.input_path))?;

    let codec = SubstitutionCodec::new();
    let output = transform(&content, cfg.mode, &codec, cfg.max_file_len)?;

    tokio::fs::write(&cfg.output_path, &output)
        .await
        .with_context(|| format!("failed to write output file: {}", cfg.output_path))?;

    info!(
        input = %cfg.input_path,
        output = %cfg.output_path,
        input_chars = content.chars().count(),
        output_chars = output.chars().count(),
        mode = ?cfg.mode,
        "file processed"
    );
    Ok(())
}

/// Validate `content` against the file rules and run the codec in `mode`.
///
/// # Errors
///
/// Returns an error listing every validation failure if the content is not
/// acceptable.
pub fn transform(
    content: &str,
    mode: Mode,
    codec: &SubstitutionCodec,
    max_len: usize,
) -> Result<String> {
    let rules = TextRules::file(max_len);
    let report = validate::validate(content, &rules);

    if !report.is_valid() {
        anyhow::bail!(
            "input file failed validation: {}",
            report.error_messages().join("; ")
        );
    }
    for warning in &report.warnings {
        warn!(%warning, "validation warning");
    }

    Ok(match mode {
        Mode::Encode => codec.encode(content),
        Mode::Decode => codec.decode(content),
    })
}
