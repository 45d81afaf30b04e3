//! Error types for board and game operations.

use derive_more::{Display, Error, From};

/// Failure of a board access or placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The coordinate lies outside the board.
    #[display("Cell ({row}, {col}) is out of bounds")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// Lifecycle rule broken by a call to [`Game`](super::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PhaseViolation {
    /// `start` called on a game that is not in `NotStarted`.
    #[display("Game has already started or finished")]
    AlreadyStarted,
    /// `play` called before `start`.
    #[display("Game is not started")]
    NotStarted,
    /// `play` called after the game ended.
    #[display("Game is already over")]
    AlreadyOver,
}

/// Failure of a game operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// Rejected by the board.
    #[display("{_0}")]
    #[from]
    Board(BoardError),

    /// Not allowed in the current phase.
    #[display("{_0}")]
    #[from]
    InvalidPhase(PhaseViolation),
}
