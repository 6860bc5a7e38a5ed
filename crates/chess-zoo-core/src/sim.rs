//! The random movement driver and simulation bookkeeping types.
//!
//! Each piece step samples a few distinct pieces, and the first one with a
//! legal move makes a uniformly random move, capturing whatever enemy stood
//! on the destination. A step never fails: when nothing can move, the board
//! is left untouched.

use crate::board::Board;
use crate::cell::Cell;
use crate::id::PieceId;
use crate::movegen;
use crate::piece::Piece;
use crate::rng::SimRng;
use tracing::debug;

/// Upper bound on the pieces sampled per step.
pub const MAX_PICK_ATTEMPTS: usize = 5;

// ---------------------------------------------------------------------------
// Step outcome
// ---------------------------------------------------------------------------

/// Result of one piece step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceStep {
    /// One piece moved, possibly capturing an enemy.
    Moved {
        piece: PieceId,
        from: Cell,
        to: Cell,
        captured: Option<Piece>,
    },
    /// None of the sampled pieces had a legal move.
    Stalled,
    /// The board holds no pieces.
    Empty,
}

impl PieceStep {
    pub fn moved(&self) -> bool {
        matches!(self, PieceStep::Moved { .. })
    }

    pub fn captured(&self) -> Option<&Piece> {
        match self {
            PieceStep::Moved { captured, .. } => captured.as_ref(),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Random movement driver
// ---------------------------------------------------------------------------

/// Move at most one piece. Samples up to `min(piece_count, 5)` distinct
/// pieces; the first with a non-empty move set moves to a uniformly random
/// destination.
pub fn step_random_move(board: &mut Board, rng: &mut SimRng) -> PieceStep {
    let ids = board.piece_ids();
    if ids.is_empty() {
        return PieceStep::Empty;
    }

    let attempts = ids.len().min(MAX_PICK_ATTEMPTS);
    for index in rng.sample_indices(ids.len(), attempts) {
        let id = ids[index];
        let moves = movegen::legal_moves(board, id);
        let Some(&to) = rng.pick(&moves) else {
            continue;
        };
        let Some(from) = board.piece(id).map(|p| p.cell) else {
            continue;
        };
        let Ok(captured) = board.relocate(id, to) else {
            continue;
        };

        match &captured {
            Some(victim) => debug!(%from, %to, victim = %victim.symbol(), "piece captured"),
            None => debug!(%from, %to, "piece moved"),
        }
        return PieceStep::Moved {
            piece: id,
            from,
            to,
            captured,
        };
    }

    debug!(attempts, "no sampled piece could move");
    PieceStep::Stalled
}

// ---------------------------------------------------------------------------
// State hash
// ---------------------------------------------------------------------------

/// A simple deterministic hash of simulation state for comparing runs.
///
/// Uses FNV-1a (64-bit) for speed and simplicity. Not cryptographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateHash(pub u64);

impl StateHash {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    /// Start a new hash.
    pub fn new() -> Self {
        Self(Self::FNV_OFFSET)
    }

    /// Feed bytes into the hash.
    pub fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 ^= b as u64;
            self.0 = self.0.wrapping_mul(Self::FNV_PRIME);
        }
    }

    /// Feed a u64 into the hash.
    pub fn write_u64(&mut self, v: u64) {
        self.write(&v.to_le_bytes());
    }

    /// Feed a cell into the hash.
    pub fn write_cell(&mut self, cell: Cell) {
        self.write(&cell.row.to_le_bytes());
        self.write(&cell.col.to_le_bytes());
    }

    /// Finalize and return the hash value.
    pub fn finish(self) -> u64 {
        self.0
    }
}

impl Default for StateHash {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupancy::Occupancy;

    fn place(board: &mut Board, symbol: char, row: i32, col: i32) -> PieceId {
        board
            .place_piece(Piece::from_symbol(symbol, Cell::new(row, col)))
            .unwrap()
    }

    #[test]
    fn empty_board_is_noop() {
        let mut board = Board::new();
        let mut rng = SimRng::new(1);
        assert_eq!(step_random_move(&mut board, &mut rng), PieceStep::Empty);
    }

    #[test]
    fn boxed_in_pieces_stall() {
        let mut board = Board::new();
        place(&mut board, 'K', 0, 0);
        for (dr, dc) in movegen::KING_OFFSETS {
            board.place_wall(Cell::new(dr, dc), "wall").unwrap();
        }
        let before = board.state_hash();
        let mut rng = SimRng::new(2);
        assert_eq!(step_random_move(&mut board, &mut rng), PieceStep::Stalled);
        assert_eq!(board.state_hash(), before);
    }

    #[test]
    fn single_king_moves_one_step() {
        let mut board = Board::new();
        let id = place(&mut board, 'K', 0, 0);
        let mut rng = SimRng::new(3);

        let step = step_random_move(&mut board, &mut rng);
        let PieceStep::Moved { piece, from, to, captured } = step.clone() else {
            panic!("expected a move, got {step:?}");
        };
        assert_eq!(piece, id);
        assert_eq!(from, Cell::new(0, 0));
        assert_eq!(from.chebyshev_distance(&to), 1);
        assert!(captured.is_none());
        assert_eq!(board.piece(id).unwrap().cell, to);
        assert_eq!(board.piece_at(to), Some(id));
    }

    #[test]
    fn forced_capture_removes_exactly_one() {
        // The knight's only open landing square holds a black pawn, and the
        // pawn itself is walled in, so whichever piece is sampled first,
        // the step must be that capture.
        let mut board = Board::new();
        let knight = place(&mut board, 'N', 0, 0);
        let victim = place(&mut board, 'p', 2, 1);
        for (dr, dc) in movegen::KNIGHT_OFFSETS {
            if (dr, dc) != (2, 1) {
                board.place_wall(Cell::new(dr, dc), "wall").unwrap();
            }
        }
        board.place_wall(Cell::new(3, 1), "wall").unwrap();

        let mut rng = SimRng::new(4);
        let step = step_random_move(&mut board, &mut rng);
        assert_eq!(step.captured().map(|p| p.symbol()), Some('p'));
        assert_eq!(board.piece_count(), 1);
        assert!(board.piece(victim).is_none());
        assert_eq!(board.piece(knight).unwrap().cell, Cell::new(2, 1));
    }

    #[test]
    fn seeded_runs_match() {
        let build = || {
            let mut board = Board::new();
            place(&mut board, 'Q', 0, 0);
            place(&mut board, 'n', 3, 3);
            place(&mut board, 'P', 6, 1);
            place(&mut board, 'k', -4, 2);
            board
        };
        let mut a = build();
        let mut b = build();
        let mut rng_a = SimRng::new(77);
        let mut rng_b = SimRng::new(77);
        for _ in 0..50 {
            step_random_move(&mut a, &mut rng_a);
            step_random_move(&mut b, &mut rng_b);
        }
        assert_eq!(a.state_hash(), b.state_hash());
    }

    #[test]
    fn state_hash_order_matters() {
        let mut h1 = StateHash::new();
        h1.write_u64(1);
        h1.write_u64(2);

        let mut h2 = StateHash::new();
        h2.write_u64(2);
        h2.write_u64(1);

        assert_ne!(h1.finish(), h2.finish());
    }
}
