//! Move generation for pieces on the unbounded board.
//!
//! Only piece movement rules are modelled: no check, pins, castling, en
//! passant or promotion. Walls block every piece; pieces capture enemies by
//! landing on them. Sliding pieces stop after [`MAX_SLIDE_DISTANCE`] steps
//! so that an open ray on an infinite board still terminates.

use crate::board::Board;
use crate::cell::{Cell, DIAGONAL_STEPS, ORTHOGONAL_STEPS};
use crate::id::PieceId;
use crate::occupancy::Occupancy;
use crate::piece::{Piece, PieceKind};

/// Longest ray a rook, bishop or queen may slide.
pub const MAX_SLIDE_DISTANCE: i32 = 1000;

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Legal destinations of the piece with id `id`. Empty if the id is stale.
pub fn legal_moves(board: &Board, id: PieceId) -> Vec<Cell> {
    board
        .piece(id)
        .map(|piece| moves_for(piece, board))
        .unwrap_or_default()
}

/// Legal destinations of `piece` on `board`, in no particular order.
pub fn moves_for(piece: &Piece, board: &Board) -> Vec<Cell> {
    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, board, &mut moves),
        PieceKind::Knight => step_moves(piece, board, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::King => step_moves(piece, board, &KING_OFFSETS, &mut moves),
        PieceKind::Rook => slide_moves(piece, board, &ORTHOGONAL_STEPS, &mut moves),
        PieceKind::Bishop => slide_moves(piece, board, &DIAGONAL_STEPS, &mut moves),
        PieceKind::Queen => slide_moves(piece, board, &QUEEN_DIRECTIONS, &mut moves),
        PieceKind::Unknown => {}
    }
    moves
}

/// What a mover finds on a candidate cell.
enum Landing {
    Blocked,
    Empty,
    Capture,
}

fn landing(piece: &Piece, board: &Board, cell: Cell) -> Landing {
    if !cell.in_bounds() || board.is_wall(cell) {
        return Landing::Blocked;
    }
    match board.piece_on(cell) {
        None => Landing::Empty,
        Some((_, other)) if other.is_enemy_of(piece) => Landing::Capture,
        Some(_) => Landing::Blocked,
    }
}

fn pawn_moves(piece: &Piece, board: &Board, moves: &mut Vec<Cell>) {
    let dir = piece.color.pawn_direction();

    if let Some(one) = piece.cell.offset(dir, 0) {
        if let Landing::Empty = landing(piece, board, one) {
            moves.push(one);

            if piece.cell.row == piece.color.pawn_home_row() {
                if let Some(two) = one.offset(dir, 0) {
                    if let Landing::Empty = landing(piece, board, two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(diag) = piece.cell.offset(dir, dc) {
            if let Landing::Capture = landing(piece, board, diag) {
                moves.push(diag);
            }
        }
    }
}

fn step_moves(piece: &Piece, board: &Board, offsets: &[(i32, i32)], moves: &mut Vec<Cell>) {
    for cell in piece.cell.neighbors(offsets) {
        match landing(piece, board, cell) {
            Landing::Empty | Landing::Capture => moves.push(cell),
            Landing::Blocked => {}
        }
    }
}

fn slide_moves(piece: &Piece, board: &Board, directions: &[(i32, i32)], moves: &mut Vec<Cell>) {
    for &(dr, dc) in directions {
        let mut current = piece.cell;
        for _ in 0..MAX_SLIDE_DISTANCE {
            let Some(next) = current.offset(dr, dc) else {
                break;
            };
            match landing(piece, board, next) {
                Landing::Empty => moves.push(next),
                Landing::Capture => {
                    moves.push(next);
                    break;
                }
                Landing::Blocked => break,
            }
            current = next;
        }
    }
}
