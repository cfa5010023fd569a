//! Command-line interface for strictly_ttt.

use clap::{Parser, Subcommand};

/// Strictly TTT - tic-tac-toe with win lines derived by symmetry
#[derive(Parser, Debug)]
#[command(name = "strictly_ttt")]
#[command(about = "Tic-tac-toe with generated win patterns", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run; defaults to the configured front-end
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play on the console, typing x and y on separate lines
    Console,

    /// Play on a full-screen terminal board
    Tui,

    /// Print every derived win pattern
    Patterns {
        /// Emit JSON instead of one pattern per line
        #[arg(long)]
        json: bool,
    },
}
