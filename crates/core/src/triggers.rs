//! Trigger term extraction from free-text notes.
//!
//! All note content is folded into a single lower-cased blob and every vocabulary term is tested
//! for literal substring containment. Matching is not tokenised and not word-boundary aware, so
//! a term inside a longer word still counts. Each distinct term counts at most once.

use crate::note::ClinicalNote;
use crate::vocabulary::TriggerVocabulary;
use std::sync::Arc;

/// Counts distinct vocabulary terms present across a patient's notes.
#[derive(Clone, Debug)]
pub struct TriggerExtractor {
    vocabulary: Arc<TriggerVocabulary>,
}

impl TriggerExtractor {
    pub fn new(vocabulary: Arc<TriggerVocabulary>) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &TriggerVocabulary {
        &self.vocabulary
    }

    /// Vocabulary terms found anywhere in `notes`, in vocabulary order.
    pub fn matched_terms<'a>(&'a self, notes: &[ClinicalNote]) -> Vec<&'a str> {
        if notes.is_empty() {
            return Vec::new();
        }

        let blob = fold_notes(notes);
        self.vocabulary
            .terms()
            .iter()
            .filter(|term| blob.contains(term.as_str()))
            .map(String::as_str)
            .inspect(|term| tracing::debug!(trigger = term, "trigger found"))
            .collect()
    }

    /// Number of distinct vocabulary terms found in `notes`.
    ///
    /// Always within `0..=vocabulary.len()`.
    pub fn count_triggers(&self, notes: &[ClinicalNote]) -> usize {
        self.matched_terms(notes).len()
    }
}

// `str::to_lowercase` applies the Unicode default case mapping and never consults a locale.
fn fold_notes(notes: &[ClinicalNote]) -> String {
    notes
        .iter()
        .map(|note| note.content.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
