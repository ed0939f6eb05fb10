//! Writing the discharge note to disk

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{PawnoteError, Result};

/// Suffix appended to the input file's stem.
const OUTPUT_SUFFIX: &str = "_output";

/// Envelope persisted to disk.
#[derive(Debug, Serialize)]
pub struct OutputEnvelope {
    pub solution: String,
}

/// Write the note to `<out_dir>/<input stem>_output.json`, overwriting any
/// previous file. The directory is created if absent. Returns the written path.
pub fn write_note(note: &str, input_path: &Path, out_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir).map_err(|e| {
        PawnoteError::Write(format!(
            "Failed to create output directory {}: {}",
            out_dir.display(),
            e
        ))
    })?;

    let path = output_path(input_path, out_dir);

    let envelope = OutputEnvelope {
        solution: note.to_string(),
    };
    let body = serde_json::to_string_pretty(&envelope)
        .map_err(|e| PawnoteError::Write(format!("Failed to serialize output: {e}")))?;

    std::fs::write(&path, body)
        .map_err(|e| PawnoteError::Write(format!("Failed to write {}: {}", path.display(), e)))?;

    Ok(path)
}

/// Derive the output file name from the input file's stem.
fn output_path(input_path: &Path, out_dir: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    out_dir.join(format!("{}{}.json", stem.to_string_lossy(), OUTPUT_SUFFIX))
}
