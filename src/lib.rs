//! pawnote - Turn veterinary consultation records into owner-friendly discharge notes
//!
//! One run does one thing: load a consultation JSON, build a prompt from its
//! fields, ask a chat-completion API for a discharge note, and write the
//! result to `solution/<stem>_output.json`.

pub mod cli;
pub mod config;
pub mod consult;
pub mod llm;
pub mod output;

use thiserror::Error;

/// Main error type for pawnote
#[derive(Error, Debug)]
pub enum PawnoteError {
    #[error("Input file not found or unreadable: {0}")]
    InputNotFound(String),

    #[error("Malformed consultation record: {0}")]
    MalformedInput(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Completion service error: {0}")]
    Upstream(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PawnoteError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "pawnote";
