//! Versioned trigger vocabularies.
//!
//! A [`TriggerVocabulary`] is resolved once at startup and shared read-only by every assessment.
//! Each vocabulary carries a version tag that is copied into reports, so a reader can tell
//! which term list produced a given trigger count.

use crate::constants::{
    ENGLISH_TRIGGER_TERMS, ENGLISH_VOCABULARY_VERSION, FRENCH_TRIGGER_TERMS,
    FRENCH_VOCABULARY_VERSION,
};
use crate::error::{ConfigError, ConfigResult};
use std::str::FromStr;

/// Selector for one of the built-in vocabularies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VocabularyKind {
    #[default]
    English,
    French,
}

impl FromStr for VocabularyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(VocabularyKind::English),
            "fr" | "french" => Ok(VocabularyKind::French),
            other => Err(ConfigError::InvalidInput(format!(
                "unknown trigger vocabulary '{other}' (expected 'en' or 'fr')"
            ))),
        }
    }
}

/// An immutable, versioned list of lowercase trigger terms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerVocabulary {
    version: String,
    terms: Vec<String>,
}

impl TriggerVocabulary {
    /// Create a vocabulary from arbitrary terms.
    ///
    /// Terms are trimmed and lower-cased. Blank terms are dropped and duplicates keep only their
    /// first occurrence, so the term order is stable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidInput`] if `version` is blank or no usable terms remain.
    pub fn new<I, S>(version: impl Into<String>, terms: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let version = version.into();
        if version.trim().is_empty() {
            return Err(ConfigError::InvalidInput(
                "vocabulary version cannot be empty".into(),
            ));
        }

        let mut normalised: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if term.is_empty() || normalised.contains(&term) {
                continue;
            }
            normalised.push(term);
        }

        if normalised.is_empty() {
            return Err(ConfigError::InvalidInput(
                "vocabulary must contain at least one term".into(),
            ));
        }

        Ok(Self {
            version,
            terms: normalised,
        })
    }

    /// The built-in English vocabulary.
    pub fn english() -> Self {
        Self::builtin(ENGLISH_VOCABULARY_VERSION, ENGLISH_TRIGGER_TERMS)
    }

    /// The built-in French vocabulary.
    pub fn french() -> Self {
        Self::builtin(FRENCH_VOCABULARY_VERSION, FRENCH_TRIGGER_TERMS)
    }

    pub fn for_kind(kind: VocabularyKind) -> Self {
        match kind {
            VocabularyKind::English => Self::english(),
            VocabularyKind::French => Self::french(),
        }
    }

    // Built-in lists are already lowercase, trimmed and distinct.
    fn builtin(version: &str, terms: &[&str]) -> Self {
        Self {
            version: version.to_string(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for TriggerVocabulary {
    fn default() -> Self {
        Self::english()
    }
}
