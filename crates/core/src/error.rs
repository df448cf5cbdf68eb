/// Failures that stop an assessment from producing a report.
///
/// Note-source failures are absorbed by the note source and never appear here.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("patient not found: {patient_id}")]
    NotFound { patient_id: String },
    #[error("patient source unavailable for {patient_id}: {reason}")]
    Unavailable { patient_id: String, reason: String },
}

impl AssessmentError {
    pub fn not_found(patient_id: impl Into<String>) -> Self {
        Self::NotFound {
            patient_id: patient_id.into(),
        }
    }

    pub fn unavailable(patient_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            patient_id: patient_id.into(),
            reason: reason.into(),
        }
    }

    /// The identifier the failed assessment was requested for.
    pub fn patient_id(&self) -> &str {
        match self {
            Self::NotFound { patient_id } | Self::Unavailable { patient_id, .. } => patient_id,
        }
    }
}

pub type AssessmentResult<T> = std::result::Result<T, AssessmentError>;

/// Errors raised while resolving startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
