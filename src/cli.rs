//! Command-line interface for the tictactoe binary.

use clap::{Args, Parser, Subcommand};
use tictactoe::PlayerKind;

/// Tic-tac-toe against humans or computer players
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game on the console
    Play(PlayArgs),
}

/// Options for a console game. Flags override the config file.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Path to a TOML game configuration
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Who plays X
    #[arg(long, value_enum)]
    pub x: Option<PlayerKind>,

    /// Who plays O
    #[arg(long, value_enum)]
    pub o: Option<PlayerKind>,

    /// Display name for X
    #[arg(long)]
    pub x_name: Option<String>,

    /// Display name for O
    #[arg(long)]
    pub o_name: Option<String>,

    /// Seed for random agents
    #[arg(long)]
    pub seed: Option<u64>,
}
