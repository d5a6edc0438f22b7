//! soapnote - Consultation transcripts to SOAP notes
//!
//! Entry point for the soapnote CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use soapnote::cli::{Cli, Commands};
use soapnote::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            soapnote::cli::commands::print_completions(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Serve { bind, port } => {
                    soapnote::cli::commands::serve(&settings, bind, port).await?;
                }
                Commands::Generate {
                    input,
                    patient_name,
                    compact,
                } => {
                    soapnote::cli::commands::generate_note(&settings, input, patient_name, compact)
                        .await?;
                }
                Commands::Config(config_cmd) => {
                    soapnote::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
