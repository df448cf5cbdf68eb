//! # API REST
//!
//! REST API implementation for the diabetes risk engine.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for response types and `risk-core` for the assessment itself.

#![warn(rust_2018_idioms)]

mod error;

pub use error::ApiError;

use api_shared::{ErrorBody, ErrorRes, HealthRes, HealthService, RiskAssessmentRes};
use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use risk_client::{ClientResult, HttpCollaboratorClient};
use risk_core::{CoreConfig, RiskAssessor, TriggerExtractor};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

/// Application state for the REST API server.
#[derive(Clone)]
pub struct AppState {
    pub assessor: Arc<RiskAssessor>,
}

impl AppState {
    pub fn new(assessor: RiskAssessor) -> Self {
        Self {
            assessor: Arc::new(assessor),
        }
    }

    /// Wire the HTTP collaborator client and the configured vocabulary into an assessor.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if either collaborator base URL is unusable.
    pub fn from_config(cfg: &CoreConfig) -> ClientResult<Self> {
        let client = Arc::new(HttpCollaboratorClient::new(cfg)?);
        let extractor = TriggerExtractor::new(cfg.vocabulary());
        Ok(Self::new(RiskAssessor::new(client.clone(), client, extractor)))
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, assess_risk),
    components(schemas(HealthRes, RiskAssessmentRes, ErrorRes, ErrorBody))
)]
pub struct ApiDoc;

/// Build the REST router.
///
/// `/api/risk/{patientId}` is kept alongside `/risk/{patientId}` for gateways that mount the
/// service under `/api`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/risk/:patient_id", get(assess_risk))
        .route("/api/risk/:patient_id", get(assess_risk))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/risk/{patient_id}",
    params(
        ("patient_id" = String, Path, description = "Identifier known to the patient service")
    ),
    responses(
        (status = 200, description = "Risk assessment report", body = RiskAssessmentRes),
        (status = 404, description = "Patient not found or patient service unavailable", body = ErrorRes)
    )
)]
/// Assess a patient's diabetes risk.
///
/// # Errors
/// Returns `404 Not Found` if:
/// - the patient service has no such patient,
/// - the patient service cannot be reached or returns an unusable record.
#[axum::debug_handler]
async fn assess_risk(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<RiskAssessmentRes>, ApiError> {
    let report = state.assessor.assess(&patient_id).await?;
    Ok(Json(report.into()))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
