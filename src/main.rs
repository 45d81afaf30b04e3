//! Tictactoe - console front end
//!
//! Plays one game between any pairing of human and computer players.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use tictactoe::{Game, GameConfig, Mark, Orchestrator, PlayerNames, ask_name, build_player};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play(args) => run_play(args),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run a console game
#[instrument(skip_all)]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = load_config(&args)?;

    let mut stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut names = Vec::with_capacity(2);
    for mark in [Mark::X, Mark::O] {
        let side = config.side(mark);
        let name = match side.name() {
            Some(name) => name.clone(),
            None if !side.kind().is_automated() => {
                ask_name(&mut stdin, &mut stdout, &side.kind().default_name(mark))?
            }
            None => config.display_name(mark),
        };
        names.push(name);
    }
    let (x_name, o_name) = (names[0].clone(), names[1].clone());

    let player_x = build_player(*config.x().kind(), &x_name, Mark::X, *config.seed());
    let player_o = build_player(*config.o().kind(), &o_name, Mark::O, *config.seed());
    let game = Game::new(PlayerNames::new(x_name, o_name));

    let mut orchestrator = Orchestrator::new(game, player_x, player_o);
    let phase = orchestrator.run(&mut stdout.lock())?;
    info!(%phase, "Session finished");
    Ok(())
}

/// Merges the optional config file with command-line overrides.
#[instrument(skip_all)]
fn load_config(args: &PlayArgs) -> Result<GameConfig> {
    let config = match &args.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => GameConfig::default(),
    }
    .with_overrides(args.x, args.x_name.clone(), args.o, args.o_name.clone(), args.seed);

    info!(x = %config.x().kind(), o = %config.o().kind(), "Configuration resolved");
    Ok(config)
}
