//! Axum request handlers for all service endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{
    DecodeResponse, EncodeResponse, ErrorResponse, HealthResponse, InspectResponse,
    TransformRequest,
};
use common::validate::{self, TextRules, ValidationError};
use common::ServiceError;

use super::state::AppState;

/// `POST /encode` — replace every vowel in the request text with its expansion.
///
/// The text must satisfy the API input rules (lowercase a-z and spaces, within
/// the configured length cap); failures map to 400 or 413. The response
/// carries the encoded text plus substitution statistics.
pub async fn encode(State(state): State<AppState>, Json(req): Json<TransformRequest>) -> Response {
    if let Some(rejection) = reject_invalid(&req.text, &state) {
        return rejection;
    }

    let encoded = state.codec.encode(&req.text);
    let stats = state.codec.stats(&req.text, &encoded);
    (StatusCode::OK, Json(EncodeResponse { text: encoded, stats })).into_response()
}

/// `POST /decode` — replace every expansion in the request text with its vowel.
///
/// Applies the same input rules as `/encode`; encoded text stays within the
/// permitted alphabet, so the validation is shared.
pub async fn decode(State(state): State<AppState>, Json(req): Json<TransformRequest>) -> Response {
    if let Some(rejection) = reject_invalid(&req.text, &state) {
        return rejection;
    }

    let decoded = state.codec.decode(&req.text);
    (StatusCode::OK, Json(DecodeResponse { text: decoded })).into_response()
}

/// `POST /inspect` — validation verdict, statistics, and operation hint.
///
/// Always returns `200 OK`; an invalid text is reported in the body rather
/// than as an HTTP error.
pub async fn inspect(State(state): State<AppState>, Json(req): Json<TransformRequest>) -> Response {
    let rules = TextRules::text(state.max_text_len);
    let report = validate::validate(&req.text, &rules);

    let body = InspectResponse {
        valid: report.is_valid(),
        errors: report.error_messages(),
        warnings: report.warnings.clone(),
        statistics: validate::text_statistics(&req.text),
        suggested_operation: state.codec.suggest(&req.text),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// `GET /health` — liveness check.
///
/// The rule tables are compile-time constants, so the service is ready as
/// soon as it is serving; the body reports the loaded rule count and the
/// configured text cap.
pub async fn health(State(state): State<AppState>) -> Response {
    let body = HealthResponse {
        status: "ok".into(),
        rules_loaded: state.codec.rule_count(),
        max_text_len: state.max_text_len,
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

/// Validate `text` against the API rules; `Some(response)` when it must be
/// rejected, `None` when the handler may proceed.
fn reject_invalid(text: &str, state: &AppState) -> Option<Response> {
    let rules = TextRules::text(state.max_text_len);
    let report = validate::validate(text, &rules);

    let first = report.errors.first()?;
    let message = first.to_string();
    let service_error = match first {
        ValidationError::TooLong { .. } => ServiceError::PayloadTooLarge(message.clone()),
        _ => ServiceError::BadRequest(message.clone()),
    };

    let status = StatusCode::from_u16(service_error.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = ErrorResponse::new(service_error.code(), message);
    Some((status, Json(body)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use common::SubstitutionCodec;

    use crate::server::router;

    fn test_server() -> TestServer {
        TestServer::new(router::build(AppState::default())).expect("router should start")
    }

    #[tokio::test]
    async fn encode_replaces_vowels() {
        let server = test_server();
        let res = server
            .post("/encode")
            .json(&serde_json::json!({"text": "mesa"}))
            .await;
        assert_eq!(res.status_code(), StatusCode::OK);
        let body: EncodeResponse = res.json();
        assert_eq!(body.text, "mentersai");
        assert_eq!(body.stats.substitutions[&'e'], 1);
        assert_eq!(body.stats.substitutions[&'a'], 1);
    }

    #[tokio::test]
    async fn decode_restores_original() {
        let server = test_server();
        let res = server
            .post("/decode")
            .json(&serde_json::json!({"text": "mentersai"}))
            .await;
        assert_eq!(res.status_code(), StatusCode::OK);
        let body: DecodeResponse = res.json();
        assert_eq!(body.text, "mesa");
    }

    #[tokio::test]
    async fn encode_rejects_invalid_characters() {
        let server = test_server();
        let res = server
            .post("/encode")
            .json(&serde_json::json!({"text": "Mesa!"}))
            .await;
        assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = res.json();
        assert_eq!(body.code, "bad_request");
        assert!(body.message.contains("'M'"), "{}", body.message);
    }

    #[tokio::test]
    async fn encode_rejects_empty_text() {
        let server = test_server();
        let res = server
            .post("/encode")
            .json(&serde_json::json!({"text": ""}))
            .await;
        assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = res.json();
        assert!(body.message.contains("empty"), "{}", body.message);
    }

    #[tokio::test]
    async fn encode_rejects_oversized_text() {
        let state = AppState::new(SubstitutionCodec::new(), 10);
        let server = TestServer::new(router::build(state)).expect("router should start");
        let res = server
            .post("/encode")
            .json(&serde_json::json!({"text": "texto bem maior que o limite"}))
            .await;
        assert_eq!(res.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        let body: ErrorResponse = res.json();
        assert_eq!(body.code, "payload_too_large");
    }

    #[tokio::test]
    async fn inspect_reports_verdict_and_statistics() {
        let server = test_server();
        let res = server
            .post("/inspect")
            .json(&serde_json::json!({"text": "uma mesa"}))
            .await;
        assert_eq!(res.status_code(), StatusCode::OK);
        let body: InspectResponse = res.json();
        assert!(body.valid);
        assert!(body.errors.is_empty());
        assert_eq!(body.statistics.words, 2);
        assert_eq!(body.statistics.vowels, 4);
        assert_eq!(
            body.suggested_operation,
            common::codec::SuggestedOperation::Encode
        );
    }

    #[tokio::test]
    async fn inspect_is_200_for_invalid_text() {
        let server = test_server();
        let res = server
            .post("/inspect")
            .json(&serde_json::json!({"text": "Texto Inválido!"}))
            .await;
        assert_eq!(res.status_code(), StatusCode::OK);
        let body: InspectResponse = res.json();
        assert!(!body.valid);
        assert!(!body.errors.is_empty());
    }

    #[tokio::test]
    async fn health_reports_rule_count() {
        let server = test_server();
        let res = server.get("/health").await;
        assert_eq!(res.status_code(), StatusCode::OK);
        let body: HealthResponse = res.json();
        assert_eq!(body.status, "ok");
        assert_eq!(body.rules_loaded, 5);
        assert_eq!(body.max_text_len, 5_000);
    }
}
