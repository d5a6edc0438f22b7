//! Repair of raw model output into a [`NoteResponse`]
//!
//! The model is asked for a JSON object but nothing guarantees it sends one.
//! Whatever comes back, the transcript must survive into `subjective`.

use serde_json::{Map, Value};
use tracing::warn;

use crate::note::types::{MedicalTerms, NoteResponse, SoapNote};

/// Turn the model's raw reply into a note, falling back to the transcript
/// wherever the reply is unusable.
pub fn repair_output(raw: &str, transcript: &str) -> NoteResponse {
    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Gemini output not JSON ({}), wrapping transcript as subjective", e);
            return NoteResponse::new(SoapNote::subjective_only(transcript), MedicalTerms::new());
        }
    };

    let empty = Map::new();
    let fields = match &parsed {
        Value::Object(map) => map,
        other => {
            warn!("Gemini output is JSON but not an object: {}", other);
            &empty
        }
    };

    let subjective = text_field(fields, "subjective")
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| transcript.to_string());

    let soap = SoapNote {
        subjective,
        objective: text_field(fields, "objective").unwrap_or_default(),
        assessment: text_field(fields, "assessment").unwrap_or_default(),
        plan: text_field(fields, "plan").unwrap_or_default(),
    };

    NoteResponse::new(soap, medical_terms(fields))
}

/// A SOAP section as text. `null` counts as absent; non-string values are
/// rendered as compact JSON.
fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn medical_terms(fields: &Map<String, Value>) -> MedicalTerms {
    match fields.get("extracted_entities") {
        Some(Value::Object(terms)) => terms.clone(),
        None | Some(Value::Null) => MedicalTerms::new(),
        Some(other) => {
            warn!("Dropping extracted_entities that is not an object: {}", other);
            MedicalTerms::new()
        }
    }
}
