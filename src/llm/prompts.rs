//! Prompt construction for discharge note generation

use crate::consult::{Consultation, ConsultationRecord, Patient, TreatmentItems};

/// Fixed persona sent as the system message.
pub const SYSTEM_PROMPT: &str =
    "You are a veterinary assistant helping to generate discharge notes for pet owners.";

/// Build the user prompt from a consultation record.
///
/// Section order is fixed: patient information, consultation details,
/// clinical notes (verbatim), treatment items, diagnostics (verbatim),
/// closing tone/format instruction. Treatment lists are interpolated in
/// their literal sequence form.
pub fn build_discharge_prompt(record: &ConsultationRecord) -> String {
    let Patient {
        name,
        species,
        breed,
        gender,
        weight,
    } = &record.patient;

    let Consultation {
        date,
        reason,
        visit_type,
        clinical_notes,
        diagnostics,
        treatment_items,
    } = &record.consultation;

    let TreatmentItems {
        procedures,
        medicines,
        prescriptions,
        foods,
        supplies,
    } = treatment_items;

    format!(
        "You are a veterinary assistant tasked with generating a professional, friendly, \
and easy-to-understand discharge note for a pet owner.\n\
\n\
Based on the consultation details below, write a summary that includes:\n\
- The reason for the visit and what was observed\n\
- Any treatments or procedures performed\n\
- Medications or prescriptions provided\n\
- Specific care instructions for the pet at home\n\
- Clear next steps, including follow-ups or warnings\n\
\n\
Make sure the note is concise, informative, and appropriate for a non-medical audience.\n\
\n\
---\n\
\n\
Patient Information:\n\
- Name: {name}\n\
- Species: {species}\n\
- Breed: {breed}\n\
- Gender: {gender}\n\
- Weight: {weight}\n\
\n\
Consultation Details:\n\
- Date: {date}\n\
- Reason for Visit: {reason}\n\
- Visit Type: {visit_type}\n\
\n\
Clinical Notes:\n\
{clinical_notes}\n\
\n\
Treatments Provided:\n\
- Procedures: {procedures:?}\n\
- Medications: {medicines:?}\n\
- Prescriptions: {prescriptions:?}\n\
- Foods: {foods:?}\n\
- Supplies: {supplies:?}\n\
\n\
Diagnostics/Tests Conducted:\n\
{diagnostics}\n\
\n\
---\n\
\n\
Write the discharge note as if you are addressing the pet owner directly, using warm, \
supportive and natural language. Format it with clear headings and bullet points where \
appropriate."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ConsultationRecord {
        ConsultationRecord {
            patient: Patient {
                name: "Rex".to_string(),
                species: "dog".to_string(),
                breed: "Labrador Retriever".to_string(),
                gender: "male".to_string(),
                weight: "31.5 kg".to_string(),
            },
            consultation: Consultation {
                date: "2025-03-14".to_string(),
                reason: "Limping on right hind leg".to_string(),
                visit_type: "orthopedic follow-up".to_string(),
                clinical_notes: "Mild swelling around the right stifle.\nRange of motion reduced."
                    .to_string(),
                diagnostics: "Radiographs of right stifle: no fracture, mild effusion."
                    .to_string(),
                treatment_items: TreatmentItems {
                    procedures: vec!["joint palpation".to_string(), "radiographs".to_string()],
                    medicines: vec!["meloxicam injection 0.2 mg/kg".to_string()],
                    prescriptions: vec!["meloxicam oral suspension, 7 days".to_string()],
                    foods: vec![],
                    supplies: vec!["soft bandage".to_string()],
                },
            },
        }
    }

    #[test]
    fn prompt_interpolates_every_field() {
        let prompt = build_discharge_prompt(&sample_record());

        for expected in [
            "Rex",
            "dog",
            "Labrador Retriever",
            "male",
            "31.5 kg",
            "2025-03-14",
            "Limping on right hind leg",
            "orthopedic follow-up",
        ] {
            assert!(prompt.contains(expected), "missing {expected:?} in:\n{prompt}");
        }
    }

    #[test]
    fn sections_appear_in_order() {
        let prompt = build_discharge_prompt(&sample_record());

        let markers = [
            "Patient Information:",
            "Consultation Details:",
            "Clinical Notes:",
            "Treatments Provided:",
            "Diagnostics/Tests Conducted:",
            "addressing the pet owner directly",
        ];

        let mut last = 0;
        for marker in markers {
            let pos = prompt
                .find(marker)
                .unwrap_or_else(|| panic!("marker {marker:?} not found"));
            assert!(pos > last, "{marker:?} out of order");
            last = pos;
        }
    }

    #[test]
    fn clinical_notes_and_diagnostics_are_verbatim() {
        let prompt = build_discharge_prompt(&sample_record());

        assert!(prompt.contains("Mild swelling around the right stifle.\nRange of motion reduced."));
        assert!(prompt.contains("Radiographs of right stifle: no fracture, mild effusion."));
    }

    #[test]
    fn treatment_lists_render_as_sequences() {
        let prompt = build_discharge_prompt(&sample_record());

        assert!(prompt.contains(r#"- Procedures: ["joint palpation", "radiographs"]"#));
        assert!(prompt.contains("- Foods: []"));
        assert!(prompt.contains(r#"- Supplies: ["soft bandage"]"#));
    }

    #[test]
    fn closing_instruction_sets_tone_and_format() {
        let prompt = build_discharge_prompt(&sample_record());

        assert!(prompt.contains("warm, supportive and natural language"));
        assert!(prompt.contains("headings and bullet points"));
        assert!(prompt.ends_with("appropriate."));
    }

    #[test]
    fn system_prompt_describes_the_persona() {
        assert!(SYSTEM_PROMPT.contains("veterinary assistant"));
        assert!(SYSTEM_PROMPT.contains("discharge notes"));
    }
}
