//! Consultation record input handling
//!
//! Loads and validates the structured consultation JSON the prompt is built from.

mod loader;
mod models;

pub use loader::{load_record, REQUIRED_FIELDS};
pub use models::{Consultation, ConsultationRecord, Patient, TreatmentItems};
