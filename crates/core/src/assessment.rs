//! Assessment orchestration.
//!
//! [`RiskAssessor`] composes the collaborator sources, the trigger extractor and the classifier
//! into a single [`RiskAssessment`]. It holds no mutable state, so one instance can serve any
//! number of concurrent requests.
//!
//! Failure semantics:
//! - a patient that cannot be resolved fails the whole assessment,
//! - notes that cannot be fetched degrade to an empty list and a trigger count of zero.

use crate::classifier::{classify, RiskLevel};
use crate::error::AssessmentResult;
use crate::sources::{NoteSource, PatientSource};
use crate::triggers::TriggerExtractor;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

/// The derived, non-persisted report for one patient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RiskAssessment {
    pub patient_id: String,
    pub patient_name: String,
    pub age: u32,
    pub gender: String,
    pub risk_level: RiskLevel,
    pub trigger_count: usize,
    /// Distinct vocabulary terms found, in vocabulary order.
    pub matched_triggers: Vec<String>,
    pub vocabulary_version: String,
    pub message: String,
}

/// Summary line for a report.
pub fn summary_message(patient_name: &str, age: u32, level: RiskLevel) -> String {
    format!(
        "Patient: {} (age {}) diabetes assessment is {}",
        patient_name,
        age,
        level.label()
    )
}

/// Produces diabetes risk reports from collaborator data.
#[derive(Clone)]
pub struct RiskAssessor {
    patients: Arc<dyn PatientSource>,
    notes: Arc<dyn NoteSource>,
    extractor: TriggerExtractor,
}

impl RiskAssessor {
    pub fn new(
        patients: Arc<dyn PatientSource>,
        notes: Arc<dyn NoteSource>,
        extractor: TriggerExtractor,
    ) -> Self {
        Self {
            patients,
            notes,
            extractor,
        }
    }

    pub fn extractor(&self) -> &TriggerExtractor {
        &self.extractor
    }

    /// Assess a patient as of today's UTC date.
    ///
    /// # Errors
    ///
    /// See [`assess_on`](Self::assess_on).
    pub async fn assess(&self, patient_id: &str) -> AssessmentResult<RiskAssessment> {
        self.assess_on(patient_id, Utc::now().date_naive()).await
    }

    /// Assess a patient as of `assessment_date`.
    ///
    /// The patient and note fetches are issued concurrently. The note result is discarded if
    /// the patient cannot be resolved.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError` if:
    /// - the patient source reports the patient as absent (`NotFound`),
    /// - the patient source is unreachable or returns an unusable record (`Unavailable`),
    /// - the patient's birth date is after `assessment_date` (`Unavailable`).
    pub async fn assess_on(
        &self,
        patient_id: &str,
        assessment_date: NaiveDate,
    ) -> AssessmentResult<RiskAssessment> {
        tracing::info!(patient_id, "assessing diabetes risk");

        let (patient, notes) = tokio::join!(
            self.patients.fetch_patient(patient_id),
            self.notes.fetch_notes(patient_id)
        );

        let patient = patient.inspect_err(|e| {
            tracing::warn!(patient_id, error = %e, "patient could not be resolved");
        })?;
        let age = patient.age_on(assessment_date)?;

        let matched = self.extractor.matched_terms(&notes);
        let trigger_count = matched.len();
        let risk_level = classify(age, &patient.gender, trigger_count);
        let patient_name = patient.full_name();

        tracing::info!(
            patient_id,
            age,
            notes = notes.len(),
            trigger_count,
            risk_level = %risk_level,
            "risk assessment completed"
        );

        Ok(RiskAssessment {
            patient_id: patient_id.to_string(),
            message: summary_message(&patient_name, age, risk_level),
            patient_name,
            age,
            gender: patient.gender.code().to_string(),
            risk_level,
            trigger_count,
            matched_triggers: matched.into_iter().map(str::to_string).collect(),
            vocabulary_version: self.extractor.vocabulary().version().to_string(),
        })
    }
}
