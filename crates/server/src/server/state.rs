//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use common::validate::DEFAULT_MAX_TEXT_LEN;
use common::SubstitutionCodec;

/// Application state shared across all request handlers.
///
/// The codec is immutable after construction and `Arc`-wrapped so that Axum
/// can clone the state for each request without rebuilding the rule tables.
#[derive(Clone)]
pub struct AppState {
    /// The vowel substitution codec.
    pub codec: Arc<SubstitutionCodec>,
    /// Maximum accepted text length, in characters.
    pub max_text_len: usize,
}

impl AppState {
    /// Create a new [`AppState`] with the provided text length cap.
    pub fn new(codec: SubstitutionCodec, max_text_len: usize) -> Self {
        Self {
            codec: Arc::new(codec),
            max_text_len,
        }
    }
}

impl Default for AppState {
    /// Creates a default [`AppState`] with default limits, suitable for tests.
    fn default() -> Self {
        Self::new(SubstitutionCodec::new(), DEFAULT_MAX_TEXT_LEN)
    }
}
