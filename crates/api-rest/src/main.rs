//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the risk REST API server on its own.
//!
//! ## Intended use
//! Useful for development when you want the router without `.env` loading. The workspace's main
//! `risk-run` binary serves the same router.

use anyhow::Context;
use api_rest::{router, AppState};
use risk_core::{resolve_core_config, RawCoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the risk REST API server
///
/// # Environment Variables
/// - `RISK_REST_ADDR`: Server address (default: "0.0.0.0:8083")
/// - `PATIENT_SERVICE_URL`, `NOTE_SERVICE_URL`: collaborator base URLs
/// - `RISK_REQUEST_TIMEOUT_SECS`: per-call collaborator timeout
/// - `RISK_VOCABULARY`: `en` or `fr`
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - configuration values fail validation,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("RISK_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8083".into());

    let cfg = resolve_core_config(RawCoreConfig {
        patient_service_url: std::env::var("PATIENT_SERVICE_URL").ok(),
        note_service_url: std::env::var("NOTE_SERVICE_URL").ok(),
        request_timeout_secs: std::env::var("RISK_REQUEST_TIMEOUT_SECS").ok(),
        vocabulary: std::env::var("RISK_VOCABULARY").ok(),
    })
    .context("invalid risk configuration")?;

    let state = AppState::from_config(&cfg)?;

    tracing::info!("-- Starting Risk REST API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
