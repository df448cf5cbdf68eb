//! Diabetes risk classification.
//!
//! Classification is a pure function of age, gender and trigger count. The rule table is split
//! into three bands (young male, young non-male, thirty and over). Within a band rules are
//! ordered by descending threshold and the first satisfied rule wins.
//!
//! | Band | triggers ≥ | Level |
//! |---|---|---|
//! | under 30, male | 5 | [`RiskLevel::EarlyOnset`] |
//! | under 30, male | 3 | [`RiskLevel::InDanger`] |
//! | under 30, other | 7 | [`RiskLevel::EarlyOnset`] |
//! | under 30, other | 4 | [`RiskLevel::InDanger`] |
//! | 30 and over | 8 | [`RiskLevel::EarlyOnset`] |
//! | 30 and over | 6 | [`RiskLevel::InDanger`] |
//! | 30 and over | 2 | [`RiskLevel::Borderline`] |
//!
//! Anything unmatched is [`RiskLevel::None`].

use crate::constants::YOUNG_PATIENT_AGE_LIMIT;
use crate::patient::Gender;
use serde::{Deserialize, Serialize};

/// Ordered diabetes risk tiers, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    None,
    Borderline,
    InDanger,
    EarlyOnset,
}

impl RiskLevel {
    /// Human-readable label used in report summaries.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::None => "None",
            RiskLevel::Borderline => "Borderline",
            RiskLevel::InDanger => "In Danger",
            RiskLevel::EarlyOnset => "Early onset",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskLevel::None => "No risk",
            RiskLevel::Borderline => "Borderline risk",
            RiskLevel::InDanger => "In danger",
            RiskLevel::EarlyOnset => "Early onset",
        }
    }

    /// Wire code, matching the serde representation.
    pub fn code(self) -> &'static str {
        match self {
            RiskLevel::None => "NONE",
            RiskLevel::Borderline => "BORDERLINE",
            RiskLevel::InDanger => "IN_DANGER",
            RiskLevel::EarlyOnset => "EARLY_ONSET",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Minimum trigger count and the level it yields.
type Rule = (usize, RiskLevel);

const YOUNG_MALE_RULES: &[Rule] = &[(5, RiskLevel::EarlyOnset), (3, RiskLevel::InDanger)];

const YOUNG_FEMALE_RULES: &[Rule] = &[(7, RiskLevel::EarlyOnset), (4, RiskLevel::InDanger)];

const ADULT_RULES: &[Rule] = &[
    (8, RiskLevel::EarlyOnset),
    (6, RiskLevel::InDanger),
    (2, RiskLevel::Borderline),
];

/// Classify a patient into a risk tier.
///
/// Only [`Gender::Male`] selects the young-male band. Female and unrecognised gender values
/// both use the young-female thresholds.
pub fn classify(age: u32, gender: &Gender, trigger_count: usize) -> RiskLevel {
    let rules = if age < YOUNG_PATIENT_AGE_LIMIT {
        if gender.is_male() {
            YOUNG_MALE_RULES
        } else {
            YOUNG_FEMALE_RULES
        }
    } else {
        ADULT_RULES
    };

    rules
        .iter()
        .find(|(threshold, _)| trigger_count >= *threshold)
        .map(|(_, level)| *level)
        .unwrap_or(RiskLevel::None)
}
