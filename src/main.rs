//! pawnote - Discharge note generation for veterinary consultations
//!
//! Entry point for the pawnote CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pawnote::cli::Cli;
use pawnote::config::Settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse CLI arguments first so --verbose can raise the default log level
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "info" };

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let settings = Settings::load()?;

    pawnote::cli::commands::generate_note(&settings, &cli.consultation_file).await?;

    Ok(())
}
