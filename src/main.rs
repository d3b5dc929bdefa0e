//! Noughts - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{AppConfig, tui};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play => {
            init_file_logging(&config)?;
            tui::run(&config)
        }
        Command::Replay { moves, json } => {
            init_stderr_logging(&config);
            run_replay(&moves, json)
        }
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_logging(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();
}

fn run_replay(moves: &[usize], json: bool) -> Result<()> {
    info!(count = moves.len(), "Replaying moves");
    let report = noughts::replay(moves);
    if json {
        println!("{}", report.to_json().context("Failed to serialize snapshot")?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}
