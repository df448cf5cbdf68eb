//! # Risk Client
//!
//! HTTP implementations of the collaborator traits defined in `risk-core`.
//!
//! One [`HttpCollaboratorClient`] talks to both data sources:
//! - `GET {patient_base}/patients/{id}` for demographics
//! - `GET {note_base}/notes/patient/{id}` for clinical notes
//!
//! Identifiers are percent-encoded as single path segments, so an id containing `/` or `?` can
//! never reach a different resource.

mod wire;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use risk_core::{
    AssessmentError, AssessmentResult, ClinicalNote, CoreConfig, NoteSource, PatientRecord,
    PatientSource,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("failed to build http client: {0}")]
    Build(#[from] reqwest::Error),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Collaborator client backed by a shared `reqwest` connection pool.
#[derive(Clone, Debug)]
pub struct HttpCollaboratorClient {
    http: reqwest::Client,
    patient_base: Url,
    note_base: Url,
}

impl HttpCollaboratorClient {
    /// Build a client from resolved configuration.
    ///
    /// The configured timeout applies to every request, connect included.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if either base URL is not an absolute `http` or
    /// `https` URL, and [`ClientError::Build`] if the TLS backend cannot be initialised.
    pub fn new(cfg: &CoreConfig) -> ClientResult<Self> {
        let patient_base = parse_base_url(cfg.patient_service_url())?;
        let note_base = parse_base_url(cfg.note_service_url())?;

        let http = reqwest::Client::builder()
            .timeout(cfg.request_timeout())
            .connect_timeout(cfg.request_timeout())
            .build()?;

        Ok(Self {
            http,
            patient_base,
            note_base,
        })
    }

    pub fn patient_base(&self) -> &Url {
        &self.patient_base
    }

    pub fn note_base(&self) -> &Url {
        &self.note_base
    }

    fn patient_url(&self, patient_id: &str) -> Url {
        with_segments(&self.patient_base, &["patients", patient_id])
    }

    fn notes_url(&self, patient_id: &str) -> Url {
        with_segments(&self.note_base, &["notes", "patient", patient_id])
    }

    async fn get_bytes(&self, url: Url) -> Result<(StatusCode, Vec<u8>), String> {
        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| describe_transport_error(&e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| format!("failed to read response body: {e}"))?;

        Ok((status, body.to_vec()))
    }

    async fn try_fetch_notes(&self, patient_id: &str) -> Result<Vec<ClinicalNote>, String> {
        let (status, body) = self.get_bytes(self.notes_url(patient_id)).await?;
        if !status.is_success() {
            return Err(format!("note service returned {status}"));
        }
        wire::notes_from_json(patient_id, &body)
    }
}

#[async_trait]
impl PatientSource for HttpCollaboratorClient {
    async fn fetch_patient(&self, patient_id: &str) -> AssessmentResult<PatientRecord> {
        let (status, body) = self
            .get_bytes(self.patient_url(patient_id))
            .await
            .map_err(|reason| AssessmentError::unavailable(patient_id, reason))?;

        if status == StatusCode::NOT_FOUND {
            return Err(AssessmentError::not_found(patient_id));
        }
        if !status.is_success() {
            return Err(AssessmentError::unavailable(
                patient_id,
                format!("patient service returned {status}"),
            ));
        }

        wire::patient_from_json(patient_id, &body)
            .map_err(|reason| AssessmentError::unavailable(patient_id, reason))
    }
}

#[async_trait]
impl NoteSource for HttpCollaboratorClient {
    async fn fetch_notes(&self, patient_id: &str) -> Vec<ClinicalNote> {
        match self.try_fetch_notes(patient_id).await {
            Ok(notes) => {
                tracing::debug!(patient_id, count = notes.len(), "fetched clinical notes");
                notes
            }
            Err(reason) => {
                tracing::warn!(patient_id, %reason, "note service failed; assessing with no notes");
                Vec::new()
            }
        }
    }
}

fn parse_base_url(raw: &str) -> ClientResult<Url> {
    let url = Url::parse(raw).map_err(|e| ClientError::InvalidBaseUrl(format!("{raw}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidBaseUrl(format!(
            "{raw}: scheme must be http or https"
        )));
    }
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidBaseUrl(format!(
            "{raw}: cannot be used as a base"
        )));
    }

    Ok(url)
}

fn with_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // `parse_base_url` rejects cannot-be-a-base URLs, so segments are always available.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        format!("request failed: {err}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Path;
    use axum::http::StatusCode as AxumStatus;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::Router;
    use chrono::NaiveDate;
    use risk_core::{Gender, RiskAssessor, RiskLevel, TriggerExtractor, TriggerVocabulary};
    use std::sync::Arc;
    use std::time::Duration;

    async fn patient_handler(Path(id): Path<String>) -> axum::response::Response {
        match id.as_str() {
            "1" => (
                AxumStatus::OK,
                r#"{"id":1,"firstName":"Test","lastName":"TestNone","birthDate":"1966-12-31","gender":"F"}"#,
            )
                .into_response(),
            "a/b" => (
                AxumStatus::OK,
                r#"{"id":"a/b","firstName":"Slash","lastName":"Id","birthDate":"2000-01-01","gender":"M"}"#,
            )
                .into_response(),
            "notes-down" => (
                AxumStatus::OK,
                r#"{"id":"notes-down","firstName":"Edward","lastName":"Arnold","birthDate":"1981-03-02","gender":"M"}"#,
            )
                .into_response(),
            "broken" => (AxumStatus::OK, r#"{"firstName":"No"}"#).into_response(),
            "boom" => AxumStatus::INTERNAL_SERVER_ERROR.into_response(),
            "slow" => {
                tokio::time::sleep(Duration::from_secs(3)).await;
                AxumStatus::OK.into_response()
            }
            _ => AxumStatus::NOT_FOUND.into_response(),
        }
    }

    async fn notes_handler(Path(id): Path<String>) -> axum::response::Response {
        match id.as_str() {
            "1" => (
                AxumStatus::OK,
                r#"[{"id":"n1","patientId":"1","content":"Weight and Height recorded"},{"id":"n2","patientId":"1","content":null}]"#,
            )
                .into_response(),
            "null" => (AxumStatus::OK, "null").into_response(),
            "garbage" => (AxumStatus::OK, "not json").into_response(),
            "boom" | "notes-down" => AxumStatus::SERVICE_UNAVAILABLE.into_response(),
            _ => (AxumStatus::OK, "[]").into_response(),
        }
    }

    async fn spawn_stub() -> String {
        let app = Router::new()
            .route("/api/patients/:id", get(patient_handler))
            .route("/api/notes/patient/:id", get(notes_handler));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        format!("http://{addr}/api")
    }

    fn client_for(base: &str, timeout: Duration) -> HttpCollaboratorClient {
        let cfg = CoreConfig::new(base, base, timeout, TriggerVocabulary::english())
            .expect("valid config");
        HttpCollaboratorClient::new(&cfg).expect("client should build")
    }

    #[test]
    fn test_urls_percent_encode_patient_id() {
        let client = client_for("http://localhost:8081/api/", Duration::from_secs(1));

        assert_eq!(
            client.patient_url("42").as_str(),
            "http://localhost:8081/api/patients/42"
        );
        assert_eq!(
            client.patient_url("a/b?c").as_str(),
            "http://localhost:8081/api/patients/a%2Fb%3Fc"
        );
        assert_eq!(
            client.notes_url("42").as_str(),
            "http://localhost:8081/api/notes/patient/42"
        );
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let cfg = CoreConfig::new(
            "ftp://example.com",
            "http://localhost",
            Duration::from_secs(1),
            TriggerVocabulary::english(),
        )
        .unwrap();

        let err = HttpCollaboratorClient::new(&cfg).expect_err("ftp should be rejected");
        assert!(matches!(err, ClientError::InvalidBaseUrl(_)));

        let cfg = CoreConfig::new(
            "not a url",
            "http://localhost",
            Duration::from_secs(1),
            TriggerVocabulary::english(),
        )
        .unwrap();
        assert!(matches!(
            HttpCollaboratorClient::new(&cfg),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_patient_decodes_record() {
        let base = spawn_stub().await;
        let client = client_for(&base, Duration::from_secs(2));

        let patient = client.fetch_patient("1").await.expect("patient should load");

        assert_eq!(patient.id, "1");
        assert_eq!(patient.full_name(), "Test TestNone");
        assert_eq!(patient.birth_date, NaiveDate::from_ymd_opt(1966, 12, 31).unwrap());
        assert_eq!(patient.gender, Gender::Female);
    }

    #[tokio::test]
    async fn test_fetch_patient_with_reserved_characters() {
        let base = spawn_stub().await;
        let client = client_for(&base, Duration::from_secs(2));

        let patient = client.fetch_patient("a/b").await.expect("encoded id should route");
        assert_eq!(patient.full_name(), "Slash Id");
    }

    #[tokio::test]
    async fn test_fetch_patient_maps_404_to_not_found() {
        let base = spawn_stub().await;
        let client = client_for(&base, Duration::from_secs(2));

        let err = client.fetch_patient("999").await.expect_err("should be missing");
        assert!(matches!(err, AssessmentError::NotFound { ref patient_id } if patient_id == "999"));
    }

    #[tokio::test]
    async fn test_fetch_patient_maps_other_failures_to_unavailable() {
        let base = spawn_stub().await;
        let client = client_for(&base, Duration::from_secs(2));

        let err = client.fetch_patient("boom").await.expect_err("500 should fail");
        assert!(matches!(err, AssessmentError::Unavailable { .. }));

        let err = client.fetch_patient("broken").await.expect_err("bad body should fail");
        match err {
            AssessmentError::Unavailable { reason, .. } => {
                assert!(reason.contains("schema mismatch"), "unexpected reason: {reason}")
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_patient_times_out() {
        let base = spawn_stub().await;
        let client = client_for(&base, Duration::from_secs(1));

        let err = client.fetch_patient("slow").await.expect_err("should time out");
        match err {
            AssessmentError::Unavailable { reason, .. } => {
                assert!(reason.contains("timed out"), "unexpected reason: {reason}")
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_patient_connection_refused_is_unavailable() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{addr}/api"), Duration::from_secs(1));

        let err = client.fetch_patient("1").await.expect_err("nothing is listening");
        assert!(matches!(err, AssessmentError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn test_fetch_notes_decodes_list() {
        let base = spawn_stub().await;
        let client = client_for(&base, Duration::from_secs(2));

        let notes = client.fetch_notes("1").await;

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].content, "Weight and Height recorded");
        assert_eq!(notes[1].content, "");
    }

    #[tokio::test]
    async fn test_fetch_notes_failures_become_empty() {
        let base = spawn_stub().await;
        let client = client_for(&base, Duration::from_secs(2));

        assert!(client.fetch_notes("null").await.is_empty());
        assert!(client.fetch_notes("garbage").await.is_empty());
        assert!(client.fetch_notes("boom").await.is_empty());
        assert!(client.fetch_notes("unknown").await.is_empty());
    }

    #[tokio::test]
    async fn test_assessment_survives_note_service_failure() {
        let base = spawn_stub().await;
        let client = Arc::new(client_for(&base, Duration::from_secs(2)));
        let assessor = RiskAssessor::new(
            client.clone(),
            client,
            TriggerExtractor::new(Arc::new(TriggerVocabulary::english())),
        );

        let report = assessor
            .assess_on("notes-down", NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())
            .await
            .expect("a failing note service should not fail the assessment");

        assert_eq!(report.patient_id, "notes-down");
        assert_eq!(report.age, 45);
        assert_eq!(report.trigger_count, 0);
        assert!(report.matched_triggers.is_empty());
        assert_eq!(report.risk_level, RiskLevel::None);
    }
}
