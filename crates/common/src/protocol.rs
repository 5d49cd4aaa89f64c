//! Request and response types exchanged between the API and its callers.
//!
//! These types are serialised as JSON over the public HTTP API.

use serde::{Deserialize, Serialize};

use crate::codec::{CodecStats, SuggestedOperation};
use crate::validate::TextStatistics;

// ---------------------------------------------------------------------------
// Encode / decode endpoints
// ---------------------------------------------------------------------------

/// Request body for `POST /encode` and `POST /decode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformRequest {
    /// The text to run through the codec.
    pub text: String,
}

/// Successful response body for `POST /encode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeResponse {
    /// The encoded text, every vowel replaced by its expansion.
    pub text: String,
    /// Size accounting and per-vowel substitution counts.
    pub stats: CodecStats,
}

/// Successful response body for `POST /decode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeResponse {
    /// The decoded text, every expansion replaced by its vowel.
    pub text: String,
}

// ---------------------------------------------------------------------------
// Inspect endpoint
// ---------------------------------------------------------------------------

/// Response body for `POST /inspect`.
///
/// Always returned with `200 OK`; an invalid text is a verdict, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectResponse {
    /// Whether the text passes the API input rules.
    pub valid: bool,
    /// Human-readable validation failures, empty when `valid`.
    pub errors: Vec<String>,
    /// Non-fatal observations (e.g. approaching the length cap).
    pub warnings: Vec<String>,
    /// Character/word/line/vowel counts for the text.
    pub statistics: TextStatistics,
    /// Which codec operation the content suggests.
    pub suggested_operation: SuggestedOperation,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"bad_request"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status; `"ok"` once the server is accepting requests.
    pub status: String,
    /// Number of forward substitution rules loaded.
    pub rules_loaded: usize,
    /// Maximum accepted text length, in characters.
    pub max_text_len: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_request_round_trip() {
        let req = TransformRequest {
            text: "mesa".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        let decoded: TransformRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.text, "mesa");
    }

    #[test]
    fn error_response_new() {
        let e = ErrorResponse::new("bad_request", "text must not be empty");
        assert_eq!(e.code, "bad_request");
        assert!(e.message.contains("must not be empty"));
    }

    #[test]
    fn health_response_serde() {
        let h = HealthResponse {
            status: "ok".into(),
            rules_loaded: 5,
            max_text_len: 5_000,
        };
        let json = serde_json::to_string(&h).unwrap();
        let decoded: HealthResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.rules_loaded, 5);
        assert_eq!(decoded.max_text_len, 5_000);
    }

    #[test]
    fn suggested_operation_serialises_lowercase() {
        let json = serde_json::to_string(&SuggestedOperation::Encode).unwrap();
        assert_eq!(json, "\"encode\"");
    }
}
