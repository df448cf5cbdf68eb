//! Collaborator wire models and translation helpers.
//!
//! Responsibilities:
//! - Define the JSON shapes returned by the patient and note data sources
//! - Decode them with `serde_path_to_error` so failures name the offending field
//! - Translate wire structs into `risk-core` domain types
//!
//! The wire models accept the variations the collaborators are known to produce (numeric
//! identifiers, contact details nested under `contactInfo`, `null` note content). Anything the
//! engine needs and cannot recover is a decode error.

use chrono::{NaiveDate, NaiveDateTime};
use risk_core::{ClinicalNote, Gender, PatientRecord};
use serde::de::DeserializeOwned;
use serde::Deserialize;

// ============================================================================
// Wire types
// ============================================================================

/// An identifier that may be serialised as a JSON string or number.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
enum IdWire {
    Text(String),
    Number(i64),
}

impl IdWire {
    fn into_string(self) -> String {
        match self {
            IdWire::Text(s) => s,
            IdWire::Number(n) => n.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactInfoWire {
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
}

/// Body of `GET /patients/{id}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PatientWire {
    #[serde(default)]
    id: Option<IdWire>,
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
    gender: String,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    contact_info: Option<ContactInfoWire>,
}

/// One element of the `GET /notes/patient/{id}` array.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteWire {
    #[serde(default)]
    id: Option<IdWire>,
    #[serde(default)]
    patient_id: Option<IdWire>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    author_name: Option<String>,
}

// ============================================================================
// Decoding
// ============================================================================

fn decode<T: DeserializeOwned>(what: &str, body: &[u8]) -> Result<T, String> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let value = serde_path_to_error::deserialize::<_, T>(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        let path = if path.is_empty() || path == "." {
            "<root>"
        } else {
            path.as_str()
        };
        format!("{what} schema mismatch at {path}: {source}")
    })?;

    deserializer
        .end()
        .map_err(|err| format!("{what} schema mismatch at <root>: {err}"))?;

    Ok(value)
}

/// Decode a patient body into a [`PatientRecord`].
///
/// `requested_id` is used when the body carries no identifier of its own.
pub(crate) fn patient_from_json(requested_id: &str, body: &[u8]) -> Result<PatientRecord, String> {
    let wire: PatientWire = decode("Patient", body)?;
    let contact = wire.contact_info.unwrap_or_default();

    Ok(PatientRecord {
        id: wire
            .id
            .map(IdWire::into_string)
            .unwrap_or_else(|| requested_id.to_string()),
        first_name: wire.first_name,
        last_name: wire.last_name,
        birth_date: wire.birth_date,
        gender: Gender::parse(&wire.gender),
        address: wire.address.or(contact.address),
        phone_number: wire.phone_number.or(contact.phone_number),
    })
}

/// Decode a note list body into [`ClinicalNote`]s.
///
/// A JSON `null` body is an empty list, and `null` content is an empty string.
pub(crate) fn notes_from_json(
    requested_id: &str,
    body: &[u8],
) -> Result<Vec<ClinicalNote>, String> {
    let wire: Option<Vec<NoteWire>> = decode("Note list", body)?;

    Ok(wire
        .unwrap_or_default()
        .into_iter()
        .map(|note| note_from_wire(requested_id, note))
        .collect())
}

fn note_from_wire(requested_id: &str, wire: NoteWire) -> ClinicalNote {
    let created_at = wire.created_at.and_then(|raw| {
        raw.parse::<NaiveDateTime>()
            .inspect_err(|e| tracing::debug!(created_at = %raw, error = %e, "ignoring note timestamp"))
            .ok()
    });

    ClinicalNote {
        id: wire.id.map(IdWire::into_string).unwrap_or_default(),
        patient_id: wire
            .patient_id
            .map(IdWire::into_string)
            .unwrap_or_else(|| requested_id.to_string()),
        content: wire.content.unwrap_or_default(),
        author_name: wire.author_name,
        created_at,
    }
}
