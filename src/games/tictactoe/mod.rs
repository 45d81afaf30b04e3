//! Tic-tac-toe board, rules and game engine.

mod board;
mod error;
mod game;
pub mod rules;
mod types;

pub use board::{Board, SIZE};
pub use error::{BoardError, GameError, PhaseViolation};
pub use game::{DRAW_LABEL, Game};
pub use types::{Coordinate, Mark, Phase, PlayerNames};
