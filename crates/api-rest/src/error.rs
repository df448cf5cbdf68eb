//! REST error types with structured JSON responses.

use api_shared::ErrorRes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use risk_core::AssessmentError;

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail),
        };

        (status, Json(ErrorRes::new(code, message))).into_response()
    }
}

/// Both assessment failures surface as not-found. The reason for an unavailable patient
/// source is logged by the assessor and never returned to the caller.
impl From<AssessmentError> for ApiError {
    fn from(err: AssessmentError) -> Self {
        ApiError::NotFound(format!("patient not found: {}", err.patient_id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn not_found_returns_404_envelope() {
        let response = ApiError::NotFound("patient not found: 9".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "patient not found: 9");
    }

    #[tokio::test]
    async fn unavailable_hides_reason() {
        let err = AssessmentError::unavailable("4", "connection failed: 10.0.0.3:8081");
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("10.0.0.3"), "reason leaked: {text}");
        assert!(text.contains("patient not found: 4"));
    }
}
