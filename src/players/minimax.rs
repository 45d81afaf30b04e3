//! Exhaustive minimax search.
//!
//! The agent scores every empty cell by searching the full game tree below
//! it, assuming both sides play perfectly from then on. A finished line
//! scores `+1` for the agent's own mark and `-1` for the opponent's; a full
//! board without a line scores `0`.
//!
//! The search runs on a private copy of the board. Hypothetical marks are
//! placed through [`Probe`], which clears its cell when dropped, so the copy
//! is back in its starting state whenever a call returns.
//!
//! Candidates are visited in row-major order and a later candidate only
//! replaces the best one when it scores strictly higher (or lower, for the
//! minimizing side), so among equal moves the first in scan order wins.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Board, BoardError, Coordinate, Game, Mark};
use std::ops::{Deref, DerefMut};
use tracing::{debug, error, instrument};

/// A hypothetical mark on the search board, removed on drop.
struct Probe<'a> {
    board: &'a mut Board,
    at: Coordinate,
}

impl<'a> Probe<'a> {
    fn place(board: &'a mut Board, at: Coordinate, mark: Mark) -> Result<Self, BoardError> {
        board.place(at.row, at.col, Some(mark))?;
        Ok(Self { board, at })
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        // In bounds, since the placement succeeded; clearing cannot fail.
        if let Err(e) = self.board.place(self.at.row, self.at.col, None) {
            error!(error = %e, at = %self.at, "Failed to clear probe");
        }
    }
}

/// Perfect-play agent for either mark.
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    name: String,
    mark: Mark,
}

impl MinimaxAgent {
    /// Creates an agent that maximizes for `mark`.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    /// Returns the mark this agent plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the best cell for this agent's mark on `board`.
    ///
    /// `board` is not modified. Returns `None` on a full board.
    ///
    /// # Errors
    ///
    /// Only fails if the board rejects a placement on a cell it reported
    /// empty, which a consistent board never does.
    #[instrument(skip_all, fields(mark = %self.mark))]
    pub fn best_move(&self, board: &Board) -> Result<Option<Coordinate>, BoardError> {
        let mut scratch = board.clone();
        let mut best: Option<(Coordinate, i8)> = None;

        for at in Coordinate::all() {
            if !scratch.is_vacant(at) {
                continue;
            }
            let value = {
                let mut probe = Probe::place(&mut scratch, at, self.mark)?;
                score(&mut probe, at, self.mark, self.mark)?
            };
            debug!(%at, value, "Scored candidate");
            if best.is_none_or(|(_, top)| value > top) {
                best = Some((at, value));
            }
        }

        Ok(best.map(|(at, _)| at))
    }
}

/// Scores the position right after `moved` played at `last`, from `me`'s view.
fn score(board: &mut Board, last: Coordinate, moved: Mark, me: Mark) -> Result<i8, BoardError> {
    if board.has_line_through(last, moved) {
        return Ok(if moved == me { 1 } else { -1 });
    }
    if board.is_full() {
        return Ok(0);
    }

    let side = moved.opponent();
    let maximizing = side == me;
    let mut best: Option<i8> = None;

    for at in Coordinate::all() {
        if !board.is_vacant(at) {
            continue;
        }
        let child = {
            let mut probe = Probe::place(board, at, side)?;
            score(&mut probe, at, side, me)?
        };
        best = Some(match best {
            None => child,
            Some(current) if maximizing => current.max(child),
            Some(current) => current.min(child),
        });
    }

    // Not full, so at least one child was scored.
    Ok(best.unwrap_or(0))
}

impl Player for MinimaxAgent {
    fn make_move(&mut self, game: &Game) -> Result<Coordinate, PlayerError> {
        self.best_move(game.board())?.ok_or(PlayerError::NoMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
