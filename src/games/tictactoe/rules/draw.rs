//! Full-board detection for tic-tac-toe.

use super::super::Board;

/// Checks if every cell holds a mark.
///
/// A full board with no completed line is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().flatten().all(Option::is_some)
}
