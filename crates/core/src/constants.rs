//! Constants used throughout the risk core crate.
//!
//! Trigger vocabularies live here so that a change to any term list is a reviewed, versioned
//! code change rather than something editable at runtime.

/// Default base URL of the patient data source.
pub const DEFAULT_PATIENT_SERVICE_URL: &str = "http://localhost:8081/api";

/// Default base URL of the note data source.
pub const DEFAULT_NOTE_SERVICE_URL: &str = "http://localhost:8082/api";

/// Default timeout, in seconds, applied to each collaborator request.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Upper bound accepted for the collaborator request timeout.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Patients younger than this are classified with the gender-conditioned rules.
pub const YOUNG_PATIENT_AGE_LIMIT: u32 = 30;

/// Version tag of the English trigger vocabulary.
pub const ENGLISH_VOCABULARY_VERSION: &str = "en-1";

/// English clinical trigger terms.
pub const ENGLISH_TRIGGER_TERMS: &[&str] = &[
    "hemoglobin a1c",
    "microalbumin",
    "height",
    "weight",
    "smoker",
    "abnormal",
    "cholesterol",
    "dizziness",
    "relapse",
    "reaction",
    "antibodies",
];

/// Version tag of the French trigger vocabulary.
pub const FRENCH_VOCABULARY_VERSION: &str = "fr-1";

/// French clinical trigger terms.
///
/// Gendered and plural variants are listed separately and each counts on its own.
pub const FRENCH_TRIGGER_TERMS: &[&str] = &[
    "hémoglobine a1c",
    "microalbumine",
    "taille",
    "poids",
    "fumeur",
    "fumeuse",
    "anormal",
    "cholestérol",
    "vertiges",
    "vertige",
    "rechute",
    "réaction",
    "anticorps",
];
