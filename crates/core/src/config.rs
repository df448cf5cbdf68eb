//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into services. Nothing in
//! this crate reads process environment variables; binaries read them and hand the raw values to
//! [`resolve_core_config`].

use crate::constants::{
    DEFAULT_NOTE_SERVICE_URL, DEFAULT_PATIENT_SERVICE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    MAX_REQUEST_TIMEOUT_SECS,
};
use crate::error::{ConfigError, ConfigResult};
use crate::vocabulary::{TriggerVocabulary, VocabularyKind};
use std::sync::Arc;
use std::time::Duration;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    patient_service_url: String,
    note_service_url: String,
    request_timeout: Duration,
    vocabulary: Arc<TriggerVocabulary>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// Trailing slashes are stripped from both base URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidInput`] if either URL is blank or the timeout is zero or
    /// above the supported maximum.
    pub fn new(
        patient_service_url: impl Into<String>,
        note_service_url: impl Into<String>,
        request_timeout: Duration,
        vocabulary: TriggerVocabulary,
    ) -> ConfigResult<Self> {
        let patient_service_url = normalise_base_url("patient_service_url", patient_service_url)?;
        let note_service_url = normalise_base_url("note_service_url", note_service_url)?;

        if request_timeout.is_zero()
            || request_timeout > Duration::from_secs(MAX_REQUEST_TIMEOUT_SECS)
        {
            return Err(ConfigError::InvalidInput(format!(
                "request timeout must be between 1 and {} seconds",
                MAX_REQUEST_TIMEOUT_SECS
            )));
        }

        Ok(Self {
            patient_service_url,
            note_service_url,
            request_timeout,
            vocabulary: Arc::new(vocabulary),
        })
    }

    pub fn patient_service_url(&self) -> &str {
        &self.patient_service_url
    }

    pub fn note_service_url(&self) -> &str {
        &self.note_service_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Shared handle to the active trigger vocabulary.
    pub fn vocabulary(&self) -> Arc<TriggerVocabulary> {
        self.vocabulary.clone()
    }
}

fn normalise_base_url(name: &str, value: impl Into<String>) -> ConfigResult<String> {
    let value = value.into();
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidInput(format!("{name} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

/// Turn an optional raw value into `Some(trimmed)` when it holds anything.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the trigger vocabulary selector from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the English vocabulary.
pub fn vocabulary_from_env_value(value: Option<String>) -> ConfigResult<TriggerVocabulary> {
    let kind = non_blank(value)
        .map(|v| v.parse::<VocabularyKind>())
        .transpose()?
        .unwrap_or_default();

    Ok(TriggerVocabulary::for_kind(kind))
}

/// Parse the collaborator request timeout (whole seconds) from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default timeout.
pub fn request_timeout_from_env_value(value: Option<String>) -> ConfigResult<Duration> {
    match non_blank(value) {
        None => Ok(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
        Some(v) => v.parse::<u64>().map(Duration::from_secs).map_err(|_| {
            ConfigError::InvalidInput(format!(
                "request timeout must be a whole number of seconds, got '{v}'"
            ))
        }),
    }
}

/// Raw, unvalidated configuration values as read from the environment.
#[derive(Clone, Debug, Default)]
pub struct RawCoreConfig {
    pub patient_service_url: Option<String>,
    pub note_service_url: Option<String>,
    pub request_timeout_secs: Option<String>,
    pub vocabulary: Option<String>,
}

/// Resolve a [`CoreConfig`] from raw values, applying defaults for anything unset.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidInput`] if any provided value fails to parse or validate.
pub fn resolve_core_config(raw: RawCoreConfig) -> ConfigResult<CoreConfig> {
    let patient_service_url =
        non_blank(raw.patient_service_url).unwrap_or_else(|| DEFAULT_PATIENT_SERVICE_URL.into());
    let note_service_url =
        non_blank(raw.note_service_url).unwrap_or_else(|| DEFAULT_NOTE_SERVICE_URL.into());
    let request_timeout = request_timeout_from_env_value(raw.request_timeout_secs)?;
    let vocabulary = vocabulary_from_env_value(raw.vocabulary)?;

    CoreConfig::new(
        patient_service_url,
        note_service_url,
        request_timeout,
        vocabulary,
    )
}
