//! Input validation for text submitted to the codec.
//!
//! The codec itself is total over all strings; restricting input to the
//! permitted alphabet is caller policy. This module implements that policy
//! for both the API (single-line text, space-separated words) and the file
//! tool (multi-line content, larger cap).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum length for text submitted through the API, in characters.
pub const DEFAULT_MAX_TEXT_LEN: usize = 5_000;

/// Default maximum length for file content, in characters.
pub const DEFAULT_MAX_FILE_LEN: usize = 50_000;

/// Fraction of the length cap beyond which a warning is attached.
const NEAR_LIMIT_FRACTION: f64 = 0.8;

/// Rules a text must satisfy before it is handed to the codec.
#[derive(Debug, Clone)]
pub struct TextRules {
    /// Maximum length in characters.
    pub max_len: usize,
    /// Whether `\n` and `\r` are permitted (file content).
    pub allow_newlines: bool,
}

impl TextRules {
    /// Rules for text submitted through the API: lowercase a-z and spaces.
    pub fn text(max_len: usize) -> Self {
        Self {
            max_len,
            allow_newlines: false,
        }
    }

    /// Rules for file content: additionally permits line breaks.
    pub fn file(max_len: usize) -> Self {
        Self {
            max_len,
            allow_newlines: true,
        }
    }

    fn allows(&self, c: char) -> bool {
        c.is_ascii_lowercase() || c == ' ' || (self.allow_newlines && (c == '\n' || c == '\r'))
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The text is the empty string.
    #[error("the text must not be empty")]
    Empty,

    /// The text contains only whitespace.
    #[error("the text must not contain only whitespace")]
    OnlyWhitespace,

    /// The text exceeds the maximum length.
    #[error("the text exceeds the maximum length of {max} characters (got {len})")]
    TooLong {
        /// Configured cap.
        max: usize,
        /// Actual length in characters.
        len: usize,
    },

    /// The text contains characters outside the permitted alphabet.
    #[error("only lowercase letters (a-z) and spaces are allowed; invalid: {found}")]
    InvalidCharacters {
        /// The distinct offending characters, in order of first occurrence.
        found: String,
    },
}

/// Outcome of validating one text against a set of [`TextRules`].
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Validation failures; empty when the text is acceptable.
    pub errors: Vec<ValidationError>,
    /// Non-fatal observations.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Returns `true` if no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The errors rendered as display strings, for protocol responses.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

/// Character statistics over a text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Total character count.
    pub chars: usize,
    /// Whitespace-separated word count.
    pub words: usize,
    /// Line count (`\n`-separated; a text without newlines is one line).
    pub lines: usize,
    /// Lowercase vowel count, i.e. the number of characters encoding will expand.
    pub vowels: usize,
    /// Lowercase consonant count.
    pub consonants: usize,
    /// Whitespace character count.
    pub spaces: usize,
}

/// Validate `text` against `rules`, collecting every failure and warning.
///
/// Empty and whitespace-only texts short-circuit: no further checks run.
pub fn validate(text: &str, rules: &TextRules) -> ValidationReport {
    let mut report = ValidationReport::default();

    if text.is_empty() {
        report.errors.push(ValidationError::Empty);
        return report;
    }

    if text.trim().is_empty() {
        report.errors.push(ValidationError::OnlyWhitespace);
        return report;
    }

    let len = text.chars().count();
    if len > rules.max_len {
        report.errors.push(ValidationError::TooLong {
            max: rules.max_len,
            len,
        });
    } else if len as f64 > rules.max_len as f64 * NEAR_LIMIT_FRACTION {
        report
            .warnings
            .push(format!("approaching the {} character limit", rules.max_len));
    }

    let invalid = invalid_characters(text, rules);
    if !invalid.is_empty() {
        let found = invalid
            .iter()
            .map(|c| format!("'{c}'"))
            .collect::<Vec<_>>()
            .join(", ");
        report
            .errors
            .push(ValidationError::InvalidCharacters { found });
    }

    report
}

/// Distinct characters in `text` outside the alphabet `rules` permits,
/// in order of first occurrence.
pub fn invalid_characters(text: &str, rules: &TextRules) -> Vec<char> {
    let mut seen = Vec::new();
    for c in text.chars() {
        if !rules.allows(c) && !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen
}

/// Compute [`TextStatistics`] for `text`.
pub fn text_statistics(text: &str) -> TextStatistics {
    let mut vowels = 0;
    let mut consonants = 0;
    let mut spaces = 0;
    for c in text.chars() {
        if matches!(c, 'a' | 'e' | 'i' | 'o' | 'u') {
            vowels += 1;
        } else if c.is_ascii_lowercase() {
            consonants += 1;
        } else if c.is_whitespace() {
            spaces += 1;
        }
    }

    TextStatistics {
        chars: text.chars().count(),
        words: text.split_whitespace().count(),
        lines: text.split('\n').count(),
        vowels,
        consonants,
        spaces,
    }
}
