//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// pawnote - Generate an owner-friendly discharge note from a veterinary consultation record
#[derive(Parser, Debug)]
#[command(name = "pawnote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the consultation record JSON file
    pub consultation_file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
