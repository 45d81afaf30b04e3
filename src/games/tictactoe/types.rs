//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};

use super::board::SIZE;

/// A player's mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A (row, col) pair identifying a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, new)]
#[display("({row}, {col})")]
pub struct Coordinate {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Coordinate {
    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coordinate { row, col }))
    }
}

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Phase {
    /// Created but not yet started.
    #[display("Not Started")]
    NotStarted,
    /// Accepting moves.
    #[display("In Progress")]
    InProgress,
    /// Ended with a completed line.
    #[display("{_0} Wins")]
    Won(Mark),
    /// Ended with a full board and no line.
    Draw,
}

impl Phase {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Draw)
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Phase::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

/// Display names for the two sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct PlayerNames {
    /// Name of the X side.
    x: String,
    /// Name of the O side.
    o: String,
}

impl PlayerNames {
    /// Returns the name of whoever plays `mark`.
    pub fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            x: "Player X".to_string(),
            o: "Player O".to_string(),
        }
    }
}
