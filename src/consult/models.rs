//! Data model for a veterinary consultation record

use serde::Deserialize;

/// A consultation record as loaded from the input file.
///
/// Immutable after loading; discarded once the prompt has been built.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsultationRecord {
    /// The patient (the animal seen in this consultation)
    pub patient: Patient,

    /// Details of the visit itself
    pub consultation: Consultation,
}

/// Patient information
#[derive(Debug, Clone, Deserialize)]
pub struct Patient {
    /// The animal's name
    pub name: String,

    /// Species (dog, cat, ...)
    pub species: String,

    /// Breed
    pub breed: String,

    /// Gender
    pub gender: String,

    /// Weight, as recorded by the clinic (free-form, e.g. "31.5 kg")
    pub weight: String,
}

/// Details of a single consultation
#[derive(Debug, Clone, Deserialize)]
pub struct Consultation {
    /// Visit date, passed through verbatim
    pub date: String,

    /// Reason for the visit
    pub reason: String,

    /// Visit type (e.g. "routine", "emergency")
    #[serde(rename = "type")]
    pub visit_type: String,

    /// Clinician's notes, included verbatim in the prompt
    pub clinical_notes: String,

    /// Diagnostics/tests conducted, included verbatim in the prompt
    pub diagnostics: String,

    /// Everything dispensed or performed during the visit
    pub treatment_items: TreatmentItems,
}

/// Treatment items grouped by kind
#[derive(Debug, Clone, Deserialize)]
pub struct TreatmentItems {
    /// Procedures performed
    pub procedures: Vec<String>,

    /// Medications administered
    pub medicines: Vec<String>,

    /// Prescriptions sent home
    pub prescriptions: Vec<String>,

    /// Foods dispensed or recommended
    pub foods: Vec<String>,

    /// Supplies dispensed
    pub supplies: Vec<String>,
}
