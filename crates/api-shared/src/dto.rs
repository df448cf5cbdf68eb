//! JSON bodies exposed by the risk APIs.
//!
//! Field names are camelCase on the wire. Each type derives `ToSchema` so the REST server can
//! publish an OpenAPI document without a separate schema definition.

use risk_core::RiskAssessment;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Diabetes risk report for one patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessmentRes {
    #[schema(example = "1")]
    pub patient_id: String,
    #[schema(example = "Test TestNone")]
    pub patient_name: String,
    pub age: u32,
    #[schema(example = "F")]
    pub gender: String,
    /// One of `NONE`, `BORDERLINE`, `IN_DANGER`, `EARLY_ONSET`.
    #[schema(example = "NONE")]
    pub risk_level: String,
    pub trigger_count: usize,
    pub matched_triggers: Vec<String>,
    #[schema(example = "en-1")]
    pub vocabulary_version: String,
    #[schema(example = "Patient: Test TestNone (age 59) diabetes assessment is None")]
    pub message: String,
}

impl From<RiskAssessment> for RiskAssessmentRes {
    fn from(report: RiskAssessment) -> Self {
        Self {
            patient_id: report.patient_id,
            patient_name: report.patient_name,
            age: report.age,
            gender: report.gender,
            risk_level: report.risk_level.code().to_string(),
            trigger_count: report.trigger_count,
            matched_triggers: report.matched_triggers,
            vocabulary_version: report.vocabulary_version,
            message: report.message,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "NOT_FOUND")]
    pub code: String,
    pub message: String,
}

/// Error envelope: `{"error": {"code": ..., "message": ...}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: ErrorBody,
}

impl ErrorRes {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}
