//! Game engine for tic-tac-toe.
//!
//! [`Game`] owns the board and the lifecycle state machine:
//!
//! ```text
//! NotStarted -> InProgress -> Won(X) | Won(O) | Draw
//! ```
//!
//! Terminal phases have no outgoing transitions. Every rejected call leaves
//! the board and phase exactly as they were.

use super::board::Board;
use super::error::{GameError, PhaseViolation};
use super::types::{Coordinate, Mark, Phase, PlayerNames};
use tracing::{debug, info, instrument};

/// Label returned by [`Game::result`] for a drawn game.
pub const DRAW_LABEL: &str = "Draw";

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    phase: Phase,
    to_move: Mark,
    names: PlayerNames,
    history: Vec<Coordinate>,
}

impl Game {
    /// Creates a game that has not started yet. X moves first.
    #[instrument]
    pub fn new(names: PlayerNames) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::NotStarted,
            to_move: Mark::X,
            names,
            history: Vec::new(),
        }
    }

    /// Creates a game with custom display names.
    pub fn with_names(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self::new(PlayerNames::new(x.into(), o.into()))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the mark of the side to move.
    ///
    /// After a win this is still the winner's mark.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the display names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Returns the applied moves in order.
    pub fn history(&self) -> &[Coordinate] {
        &self.history
    }

    /// Moves the game from `NotStarted` to `InProgress`.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseViolation::AlreadyStarted`] in any other phase.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::NotStarted {
            return Err(PhaseViolation::AlreadyStarted.into());
        }
        self.phase = Phase::InProgress;
        info!(x = %self.names.x(), o = %self.names.o(), "Game started");
        Ok(())
    }

    /// Places the current side's mark at `(row, col)` and returns the new phase.
    ///
    /// A move that completes a line through `(row, col)` wins, even if it
    /// also fills the board. Turns only switch while the game continues.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPhase`] unless the game is in progress, and
    /// propagates [`BoardError`](super::BoardError) from the placement.
    #[instrument(skip(self), fields(player = %self.to_move, phase = %self.phase))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<Phase, GameError> {
        match self.phase {
            Phase::InProgress => {}
            Phase::NotStarted => return Err(PhaseViolation::NotStarted.into()),
            Phase::Won(_) | Phase::Draw => return Err(PhaseViolation::AlreadyOver.into()),
        }

        let mark = self.to_move;
        self.board.place(row, col, Some(mark))?;
        let at = Coordinate::new(row, col);
        self.history.push(at);

        if self.board.has_line_through(at, mark) {
            self.phase = Phase::Won(mark);
            info!(winner = %mark, moves = self.history.len(), "Game won");
        } else if self.board.is_full() {
            self.phase = Phase::Draw;
            info!("Game drawn");
        } else {
            self.to_move = mark.opponent();
            debug!(%at, next = %self.to_move, "Move applied");
        }

        Ok(self.phase)
    }

    /// Name of the side to move, only while the game is in progress.
    pub fn current_player_name(&self) -> Option<&str> {
        match self.phase {
            Phase::InProgress => Some(self.names.name_of(self.to_move)),
            _ => None,
        }
    }

    /// Winner's name for a win, [`DRAW_LABEL`] for a draw, `None` otherwise.
    pub fn result(&self) -> Option<&str> {
        match self.phase {
            Phase::Won(mark) => Some(self.names.name_of(mark)),
            Phase::Draw => Some(DRAW_LABEL),
            Phase::NotStarted | Phase::InProgress => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(PlayerNames::default())
    }
}
