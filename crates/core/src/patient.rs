//! Patient demographics as seen by the risk engine.
//!
//! The engine never owns patient data. A [`PatientRecord`] is a read-only copy fetched from the
//! patient data source for the duration of one assessment.

use crate::error::{AssessmentError, AssessmentResult};
use chrono::NaiveDate;

/// Administrative gender as recorded by the patient data source.
///
/// The source constrains gender to the codes `M` and `F`. Values outside that set are kept
/// verbatim so the report can echo what the source actually returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Unrecognised(String),
}

impl Gender {
    /// Parse a gender code, ignoring case.
    ///
    /// The whole value must be the code; padded values such as `" M"` are unrecognised.
    pub fn parse(code: &str) -> Self {
        if code.eq_ignore_ascii_case("m") {
            Gender::Male
        } else if code.eq_ignore_ascii_case("f") {
            Gender::Female
        } else {
            Gender::Unrecognised(code.to_string())
        }
    }

    /// The single-letter code, or the raw value for unrecognised genders.
    pub fn code(&self) -> &str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unrecognised(raw) => raw,
        }
    }

    pub fn is_male(&self) -> bool {
        matches!(self, Gender::Male)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Demographic record of a single patient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientRecord {
    /// Opaque identifier assigned by the patient data source.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl PatientRecord {
    /// Display name used in reports: given name, a space, then family name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole elapsed years on `date`.
    ///
    /// A birthday falling on `date` counts as having turned that age. Someone born on 29 February
    /// turns a year older on 1 March in non-leap years.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::Unavailable`] if the birth date is after `date`, since such a
    /// record cannot yield a meaningful age.
    pub fn age_on(&self, date: NaiveDate) -> AssessmentResult<u32> {
        date.years_since(self.birth_date).ok_or_else(|| {
            AssessmentError::unavailable(
                &self.id,
                format!(
                    "birth date {} is after assessment date {}",
                    self.birth_date, date
                ),
            )
        })
    }
}
