//! Tests for the tic-tac-toe board.

use proptest::prelude::*;
use tictactoe::{Board, BoardError, Coordinate, Mark, SIZE};

fn any_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

fn out_of_bounds() -> impl Strategy<Value = (usize, usize)> {
    prop_oneof![
        (SIZE..1000usize, 0..1000usize),
        (0..1000usize, SIZE..1000usize),
    ]
}

proptest! {
    #[test]
    fn test_out_of_bounds_get_and_place((row, col) in out_of_bounds(), mark in any_mark()) {
        let mut board = Board::new();
        prop_assert_eq!(board.get(row, col), Err(BoardError::OutOfBounds { row, col }));
        prop_assert_eq!(
            board.place(row, col, Some(mark)),
            Err(BoardError::OutOfBounds { row, col })
        );
        prop_assert_eq!(board.place(row, col, None), Err(BoardError::OutOfBounds { row, col }));
        prop_assert_eq!(board, Board::new());
    }

    #[test]
    fn test_occupied_cell_rejects_any_mark(
        row in 0..SIZE,
        col in 0..SIZE,
        first in any_mark(),
        second in any_mark(),
    ) {
        let mut board = Board::new();
        board.place(row, col, Some(first)).unwrap();
        prop_assert_eq!(
            board.place(row, col, Some(second)),
            Err(BoardError::CellOccupied { row, col })
        );
        prop_assert_eq!(board.get(row, col), Ok(Some(first)));
    }

    #[test]
    fn test_clone_is_independent(
        moves in proptest::collection::vec((0..SIZE, 0..SIZE, any_mark()), 0..9),
    ) {
        let mut original = Board::new();
        for &(row, col, mark) in &moves {
            let _ = original.place(row, col, Some(mark));
        }
        let snapshot: Vec<Option<Mark>> = Coordinate::all()
            .map(|at| original.get(at.row, at.col).unwrap())
            .collect();

        let mut copy = original.clone();
        for at in Coordinate::all() {
            copy.place(at.row, at.col, None).unwrap();
            copy.place(at.row, at.col, Some(Mark::O)).unwrap();
        }

        let after: Vec<Option<Mark>> = Coordinate::all()
            .map(|at| original.get(at.row, at.col).unwrap())
            .collect();
        prop_assert_eq!(snapshot, after);
    }
}

#[test]
fn test_clear_always_succeeds_in_bounds() {
    let mut board = Board::new();
    board.place(2, 2, Some(Mark::X)).unwrap();
    board.place(2, 2, None).unwrap();
    assert_eq!(board.get(2, 2), Ok(None));
    board.place(0, 1, None).unwrap();
    assert_eq!(board, Board::new());
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new();
    board.place(0, 0, Some(Mark::X)).unwrap();
    board.place(1, 1, Some(Mark::O)).unwrap();
    let cells: Vec<Coordinate> = board.empty_cells().collect();
    assert_eq!(cells.len(), 7);
    assert_eq!(cells[0], Coordinate::new(0, 1));
    assert_eq!(cells[2], Coordinate::new(1, 0));
    assert_eq!(cells[3], Coordinate::new(1, 2));
    assert_eq!(cells[6], Coordinate::new(2, 2));
}

#[test]
fn test_is_full_and_has_line() {
    let mut board = Board::new();
    assert!(!board.is_full());
    for at in Coordinate::all() {
        let mark = if (at.row + at.col) % 2 == 0 { Mark::X } else { Mark::O };
        board.place(at.row, at.col, Some(mark)).unwrap();
    }
    // X holds both diagonals on a checkerboard.
    assert!(board.is_full());
    assert!(board.has_line(Mark::X));
    assert!(!board.has_line(Mark::O));
    assert_eq!(board.winner(), Some(Mark::X));
}

#[test]
fn test_display() {
    let mut board = Board::new();
    board.place(0, 0, Some(Mark::X)).unwrap();
    board.place(1, 1, Some(Mark::O)).unwrap();
    let expected = "X | . | .\n---------\n. | O | .\n---------\n. | . | .\n";
    assert_eq!(board.to_string(), expected);
}
