//! Command implementations for the pawnote CLI

use anyhow::Result;
use std::path::Path;

use crate::config::Settings;
use crate::consult::load_record;
use crate::llm::build_generator;
use crate::output::write_note;

/// Generate a discharge note for a consultation record and write it to disk.
///
/// Loads and validates the record, asks the configured provider for a note,
/// and writes the result under the configured output directory.
pub async fn generate_note(settings: &Settings, input_path: &Path) -> Result<()> {
    let record = load_record(input_path)?;
    tracing::debug!(
        patient = %record.patient.name,
        date = %record.consultation.date,
        "Loaded consultation record"
    );

    let generator = build_generator(settings)?;
    tracing::info!("Requesting discharge note from provider");
    let note = generator.generate(&record).await?;

    let written = write_note(&note, input_path, &settings.output.dir)?;
    println!(
        "Discharge note generated successfully and saved to {}",
        written.display()
    );

    Ok(())
}
