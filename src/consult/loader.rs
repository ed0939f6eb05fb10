//! Loading and validating consultation records

use std::path::Path;

use serde_json::Value;

use crate::consult::models::ConsultationRecord;
use crate::{PawnoteError, Result};

/// Field paths the prompt template reads.
///
/// Checked in one pass before typed deserialization so a missing field
/// surfaces as a single clear error instead of failing at access time.
/// An explicit JSON `null` counts as missing.
pub const REQUIRED_FIELDS: &[&str] = &[
    "patient.name",
    "patient.species",
    "patient.breed",
    "patient.gender",
    "patient.weight",
    "consultation.date",
    "consultation.reason",
    "consultation.type",
    "consultation.clinical_notes",
    "consultation.diagnostics",
    "consultation.treatment_items.procedures",
    "consultation.treatment_items.medicines",
    "consultation.treatment_items.prescriptions",
    "consultation.treatment_items.foods",
    "consultation.treatment_items.supplies",
];

/// Load a consultation record from a JSON file.
pub fn load_record(path: &Path) -> Result<ConsultationRecord> {
    if !path.is_file() {
        return Err(PawnoteError::InputNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| PawnoteError::InputNotFound(format!("{}: {}", path.display(), e)))?;

    let value: Value = serde_json::from_str(&content)
        .map_err(|e| PawnoteError::MalformedInput(e.to_string()))?;

    validate_required_fields(&value)?;

    serde_json::from_value(value).map_err(|e| PawnoteError::MalformedInput(e.to_string()))
}

/// Check every required field path against the raw document.
fn validate_required_fields(value: &Value) -> Result<()> {
    for field in REQUIRED_FIELDS {
        let pointer = format!("/{}", field.replace('.', "/"));
        match value.pointer(&pointer) {
            Some(v) if !v.is_null() => {}
            _ => return Err(PawnoteError::MissingField((*field).to_string())),
        }
    }
    Ok(())
}
