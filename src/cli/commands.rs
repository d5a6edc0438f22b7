//! CLI command implementations

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

use crate::cli::args::{Cli, ConfigCommand};
use crate::config::Settings;
use crate::note::{NoteGenerator, TranscriptRequest};

/// Run the HTTP server, applying command-line overrides on top of settings
pub async fn serve(settings: &Settings, bind: Option<String>, port: Option<u16>) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(bind) = bind {
        settings.server.bind = bind;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    crate::http::serve(&settings).await
}

/// Generate a note for one transcript and print the response JSON.
///
/// Like the HTTP endpoint this succeeds even when generation degrades; the
/// failure is reported in the `error` field of the printed JSON.
pub async fn generate_note(
    settings: &Settings,
    input: Option<PathBuf>,
    patient_name: Option<String>,
    compact: bool,
) -> Result<()> {
    let transcript = read_transcript(input.as_deref()).await?;

    let request = TranscriptRequest {
        transcript: Some(transcript),
        patient_name,
    };

    let generator = NoteGenerator::from_settings(settings);
    let response = generator.generate(&request).await;

    let json = if compact {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    println!("{}", json);

    Ok(())
}

/// Read a transcript from a file, or stdin for `None` / `-`.
async fn read_transcript(input: Option<&Path>) -> Result<String> {
    let mut transcript = match input {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read transcript: {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read transcript from stdin")?;
            buf
        }
    };

    // Drop the newline editors and shells append
    let trimmed_len = transcript.trim_end_matches(['\r', '\n']).len();
    transcript.truncate(trimmed_len);

    Ok(transcript)
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            if !shown.llm.api_key.is_empty() {
                shown.llm.api_key = "********".to_string();
            }
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Print completion script for the requested shell to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let command_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, command_name, &mut io::stdout());
}
