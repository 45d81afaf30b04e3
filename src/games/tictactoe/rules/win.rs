//! Line detection for tic-tac-toe.

use super::super::{Board, Coordinate, Mark};

/// The 8 winning lines as `(row, col)` triples.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn is_complete(board: &Board, line: &[(usize, usize); 3], mark: Mark) -> bool {
    let cells = board.cells();
    line.iter().all(|&(row, col)| cells[row][col] == Some(mark))
}

/// Returns true if any line is entirely occupied by `mark`.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    LINES.iter().any(|line| is_complete(board, line, mark))
}

/// Returns true if a line passing through `at` is entirely occupied by `mark`.
///
/// Only the row, the column and whichever diagonals contain `at` are checked.
pub fn has_line_through(board: &Board, at: Coordinate, mark: Mark) -> bool {
    LINES
        .iter()
        .filter(|line| line.contains(&(at.row, at.col)))
        .any(|line| is_complete(board, line, mark))
}
