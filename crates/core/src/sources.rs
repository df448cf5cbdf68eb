//! Collaborator seams.
//!
//! The orchestrator depends on these traits only; the HTTP transport lives in `risk-client`.

use crate::error::AssessmentResult;
use crate::note::ClinicalNote;
use crate::patient::PatientRecord;
use async_trait::async_trait;

/// Resolves patient demographics by identifier.
#[async_trait]
pub trait PatientSource: Send + Sync + 'static {
    /// Fetch one patient record.
    ///
    /// Returns [`AssessmentError::NotFound`](crate::AssessmentError::NotFound) when the source
    /// reports the identifier as absent, and
    /// [`AssessmentError::Unavailable`](crate::AssessmentError::Unavailable) when the source
    /// cannot be reached or returns an unusable record.
    async fn fetch_patient(&self, patient_id: &str) -> AssessmentResult<PatientRecord>;
}

/// Lists every clinical note attached to a patient.
#[async_trait]
pub trait NoteSource: Send + Sync + 'static {
    /// Fetch all notes for a patient.
    ///
    /// Never fails. Implementations return an empty list when the source is unreachable or
    /// responds with an error, so "no notes" and "notes unavailable" look the same.
    async fn fetch_notes(&self, patient_id: &str) -> Vec<ClinicalNote>;
}
