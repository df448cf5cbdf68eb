use anyhow::Context;
use api_rest::{router, AppState};
use risk_core::{resolve_core_config, RawCoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the diabetes risk service
///
/// Loads `.env` if present, resolves configuration once and serves the REST router.
///
/// # Environment Variables
/// - `RISK_REST_ADDR`: REST server address (default: "0.0.0.0:8083")
/// - `PATIENT_SERVICE_URL`: patient data source base URL (default: "http://localhost:8081/api")
/// - `NOTE_SERVICE_URL`: note data source base URL (default: "http://localhost:8082/api")
/// - `RISK_REQUEST_TIMEOUT_SECS`: per-call collaborator timeout in seconds (default: 5)
/// - `RISK_VOCABULARY`: trigger vocabulary, `en` or `fr` (default: "en")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, startup or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("risk=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("RISK_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8083".into());

    let cfg = resolve_core_config(RawCoreConfig {
        patient_service_url: std::env::var("PATIENT_SERVICE_URL").ok(),
        note_service_url: std::env::var("NOTE_SERVICE_URL").ok(),
        request_timeout_secs: std::env::var("RISK_REQUEST_TIMEOUT_SECS").ok(),
        vocabulary: std::env::var("RISK_VOCABULARY").ok(),
    })
    .context("invalid risk configuration")?;

    tracing::info!(
        patient_service = cfg.patient_service_url(),
        note_service = cfg.note_service_url(),
        vocabulary = cfg.vocabulary().version(),
        "++ Risk configuration resolved"
    );
    tracing::info!("++ Starting Risk REST on {}", rest_addr);

    let state = AppState::from_config(&cfg)?;

    let listener = tokio::net::TcpListener::bind(&rest_addr)
        .await
        .with_context(|| format!("failed to bind {rest_addr}"))?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
