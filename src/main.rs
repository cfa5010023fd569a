//! Strictly TTT - Unified CLI
//!
//! Plays tic-tac-toe on the console or a terminal board, or prints the
//! derived win patterns.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::Path;
use strictly_ttt::{AppConfig, ConsoleDriver, Frontend, Shape, default_patterns, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    let command = cli.command.unwrap_or(match config.frontend() {
        Frontend::Console => Command::Console,
        Frontend::Tui => Command::Tui,
    });

    match command {
        Command::Console => {
            init_tracing(config.log_filter(), None)?;
            run_console(&config)
        }
        Command::Tui => {
            // The TUI owns the terminal, so logs go to a file
            init_tracing(config.log_filter(), Some(config.log_file().as_path()))?;
            run_tui()
        }
        Command::Patterns { json } => {
            init_tracing(config.log_filter(), None)?;
            print_patterns(json)
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides `default_filter`.
fn init_tracing(default_filter: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Plays one console game on stdin/stdout.
#[instrument(skip(config))]
fn run_console(config: &AppConfig) -> Result<()> {
    info!("Starting console game");
    let stdin = io::stdin();
    let stdout = io::stdout();
    ConsoleDriver::new(stdin.lock(), stdout.lock())
        .with_patterns(*config.show_patterns_on_start())
        .run()?;
    Ok(())
}

/// Prints every derived pattern, sorted for stable output.
fn print_patterns(json: bool) -> Result<()> {
    let mut patterns: Vec<Shape> = default_patterns().into_iter().collect();
    patterns.sort_by(|a, b| a.offsets().cmp(b.offsets()));

    if json {
        println!("{}", serde_json::to_string_pretty(&patterns)?);
    } else {
        for pattern in &patterns {
            println!("{}", pattern);
        }
    }
    Ok(())
}
