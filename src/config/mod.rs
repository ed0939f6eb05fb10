//! Configuration module for pawnote
//!
//! Handles loading application settings from a TOML file plus environment overrides.

mod settings;

pub use settings::Settings;
