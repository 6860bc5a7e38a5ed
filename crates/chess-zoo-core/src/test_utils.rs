//! Shared test helpers for integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests, integration tests, and benchmarks (via the
//! `test-utils` feature).

use crate::board::Board;
use crate::cell::Cell;
use crate::id::PieceId;
use crate::piece::{Piece, Wall};

pub fn cell(row: i32, col: i32) -> Cell {
    Cell::new(row, col)
}

/// Place a piece by symbol. Panics if the cell is taken.
pub fn add_piece(board: &mut Board, symbol: char, row: i32, col: i32) -> PieceId {
    board
        .place_piece(Piece::from_symbol(symbol, cell(row, col)))
        .expect("test piece placement")
}

/// Place a default-shaped wall. Panics if the cell is taken.
pub fn add_wall(board: &mut Board, row: i32, col: i32) {
    board
        .place_wall(cell(row, col), Wall::DEFAULT_SHAPE)
        .expect("test wall placement");
}

/// Build a board from piece symbols and wall cells.
pub fn board_with(pieces: &[(char, i32, i32)], walls: &[(i32, i32)]) -> (Board, Vec<PieceId>) {
    let mut board = Board::new();
    for &(row, col) in walls {
        add_wall(&mut board, row, col);
    }
    let ids = pieces
        .iter()
        .map(|&(symbol, row, col)| add_piece(&mut board, symbol, row, col))
        .collect();
    (board, ids)
}

/// Wall off the closed rectangle outline `[min, max]`.
pub fn add_wall_ring(board: &mut Board, min: Cell, max: Cell) {
    for col in min.col..=max.col {
        add_wall(board, min.row, col);
        add_wall(board, max.row, col);
    }
    for row in (min.row + 1)..max.row {
        add_wall(board, row, min.col);
        add_wall(board, row, max.col);
    }
}

/// A crowded board for benchmarks: `n` pieces of mixed kinds on a
/// diagonal lattice with scattered walls between them.
pub fn lattice_board(n: usize) -> Board {
    const SYMBOLS: [char; 12] = ['K', 'Q', 'R', 'B', 'N', 'P', 'k', 'q', 'r', 'b', 'n', 'p'];
    let mut board = Board::new();
    for i in 0..n {
        let row = (i as i32 / 16) * 3;
        let col = (i as i32 % 16) * 3;
        add_piece(&mut board, SYMBOLS[i % SYMBOLS.len()], row, col);
        if i % 3 == 0 {
            add_wall(&mut board, row + 1, col + 1);
        }
    }
    board
}
