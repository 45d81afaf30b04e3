//! The 3x3 grid of cell marks.

use super::error::BoardError;
use super::rules;
use super::types::{Coordinate, Mark};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the board.
pub const SIZE: usize = 3;

/// 3x3 tic-tac-toe board.
///
/// A cell holding a mark is never overwritten by another mark; it can only
/// be cleared back to empty. Clones are deep and independent, so a search
/// can explore a copy without touching the live game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Mark>; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
        if row >= SIZE || col >= SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(())
    }

    /// Returns the mark at `(row, col)`, or `None` for an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if either index is not below [`SIZE`].
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Mark>, BoardError> {
        Self::check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Sets the cell at `(row, col)`.
    ///
    /// Passing `None` clears the cell and always succeeds for an in-bounds
    /// coordinate. Passing a mark fails if the cell is already occupied, and
    /// leaves the board untouched in that case.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] or [`BoardError::CellOccupied`].
    pub fn place(&mut self, row: usize, col: usize, mark: Option<Mark>) -> Result<(), BoardError> {
        Self::check_bounds(row, col)?;
        let cell = &mut self.cells[row][col];
        if mark.is_some() && cell.is_some() {
            return Err(BoardError::CellOccupied { row, col });
        }
        *cell = mark;
        Ok(())
    }

    /// Returns true if `at` is on the board and empty.
    pub fn is_vacant(&self, at: Coordinate) -> bool {
        matches!(self.get(at.row, at.col), Ok(None))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        Coordinate::all().filter(|at| self.is_vacant(*at))
    }

    /// Returns all cells as rows.
    pub fn cells(&self) -> &[[Option<Mark>; SIZE]; SIZE] {
        &self.cells
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns true if any row, column or diagonal is entirely `mark`.
    pub fn has_line(&self, mark: Mark) -> bool {
        rules::has_line(self, mark)
    }

    /// Like [`has_line`](Self::has_line), restricted to lines through `at`.
    pub fn has_line_through(&self, at: Coordinate, mark: Mark) -> bool {
        rules::has_line_through(self, at, mark)
    }

    /// Returns the mark owning a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        [Mark::X, Mark::O].into_iter().find(|mark| self.has_line(*mark))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            let symbols: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(mark) => mark.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", symbols.join(" | "))?;
            if i < SIZE - 1 {
                writeln!(f, "{}", "-".repeat(SIZE * 4 - 3))?;
            }
        }
        Ok(())
    }
}
