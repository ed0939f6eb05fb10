//! CLI module for pawnote
//!
//! Contains argument parsing and the generation pipeline driver.

pub mod args;
pub mod commands;

pub use args::Cli;
