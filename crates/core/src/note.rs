//! Clinical notes as seen by the risk engine.

use chrono::NaiveDateTime;

/// A free-text practitioner note attached to a patient.
///
/// Content is never null for a persisted note; an empty string is permitted and contributes
/// nothing to trigger extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClinicalNote {
    pub id: String,
    pub patient_id: String,
    pub content: String,
    pub author_name: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl ClinicalNote {
    /// Build a note with only the fields the engine reads.
    pub fn new(
        id: impl Into<String>,
        patient_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            patient_id: patient_id.into(),
            content: content.into(),
            author_name: None,
            created_at: None,
        }
    }
}
