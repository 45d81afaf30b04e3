//! Tic-tac-toe engine with pluggable move sources.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of optional marks with line and fullness predicates
//! - **Game**: lifecycle state machine that validates and applies moves
//! - **Players**: move providers behind one trait (human, random, minimax)
//! - **Orchestrator**: drives a game between two players on a text console
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, Mark, MinimaxAgent, Phase, Player};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::default();
//! game.start()?;
//! game.play(1, 1)?;
//!
//! let mut agent = MinimaxAgent::new("AI O", Mark::O);
//! let reply = agent.make_move(&game)?;
//! assert_eq!(game.play(reply.row, reply.col)?, Phase::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, SideConfig};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, BoardError, Coordinate, DRAW_LABEL, Game, GameError, Mark, Phase, PhaseViolation,
    PlayerNames, SIZE, rules,
};

// Crate-level exports - Players
pub use players::{
    HumanPlayer, LineSource, MinimaxAgent, Player, PlayerError, PlayerKind, RandomAgent,
    SmartAgent, ask_name, build_player,
};

// Crate-level exports - Orchestration
pub use orchestrator::Orchestrator;
