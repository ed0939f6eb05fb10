//! Output handling for pawnote
//!
//! Persists the generated discharge note as a JSON envelope.

mod writer;

pub use writer::{write_note, OutputEnvelope};
