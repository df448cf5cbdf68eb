//! # Risk Core
//!
//! Core business logic for the diabetes risk assessment engine.
//!
//! This crate contains pure assessment logic:
//! - Patient and clinical note models (read-only, request-scoped copies)
//! - Versioned trigger vocabularies and trigger extraction
//! - The age/gender conditioned risk classifier
//! - The assessment orchestrator and its collaborator traits
//!
//! **No transport concerns**: HTTP clients belong in `risk-client`; HTTP servers and response
//! types belong in `api-rest` and `api-shared`.

pub mod assessment;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod note;
pub mod patient;
pub mod sources;
pub mod triggers;
pub mod vocabulary;

pub use assessment::{summary_message, RiskAssessment, RiskAssessor};
pub use classifier::{classify, RiskLevel};
pub use config::{resolve_core_config, CoreConfig, RawCoreConfig};
pub use error::{AssessmentError, AssessmentResult, ConfigError, ConfigResult};
pub use note::ClinicalNote;
pub use patient::{Gender, PatientRecord};
pub use sources::{NoteSource, PatientSource};
pub use triggers::TriggerExtractor;
pub use vocabulary::{TriggerVocabulary, VocabularyKind};
