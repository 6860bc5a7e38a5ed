//! The chess layer: a sparse, coordinate-keyed index of walls and pieces.
//!
//! Maintains a bidirectional mapping:
//! - `walls`: cell -> wall
//! - `pieces`: piece id -> piece (including its cell)
//! - `piece_cells`: cell -> piece id
//!
//! Ordered maps keep iteration, and therefore every seeded run,
//! deterministic.

use crate::cell::Cell;
use crate::fixed::f64_to_fixed64;
use crate::id::{PieceId, VisitorId};
use crate::occupancy::Occupancy;
use crate::piece::{Color, Piece, PieceKind, Wall};
use crate::rng::SimRng;
use crate::sim::StateHash;
use slotmap::SlotMap;
use std::collections::BTreeMap;

/// Half-width of the box used by [`Board::add_random_piece`].
pub const RANDOM_PIECE_SPREAD: i32 = 5;

/// Placement attempts made by [`Board::add_random_piece`] before giving up.
pub const RANDOM_PIECE_ATTEMPTS: usize = 20;

/// Errors from board editing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell {0} is occupied")]
    Occupied(Cell),
    #[error("cell {0} is outside the coordinate bound")]
    OutOfBounds(Cell),
    #[error("piece is not on the board")]
    PieceNotFound,
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Board {
    walls: BTreeMap<Cell, Wall>,
    pieces: SlotMap<PieceId, Piece>,
    piece_cells: BTreeMap<Cell, PieceId>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Placement --

    /// Place a wall. Rejects cells already holding a wall or a piece.
    pub fn place_wall(&mut self, cell: Cell, shape: &str) -> Result<(), BoardError> {
        if !cell.in_bounds() {
            return Err(BoardError::OutOfBounds(cell));
        }
        if self.walls.contains_key(&cell) || self.piece_cells.contains_key(&cell) {
            return Err(BoardError::Occupied(cell));
        }
        self.walls.insert(cell, Wall::with_shape(cell, shape));
        Ok(())
    }

    /// Remove the wall on `cell`, returning it.
    pub fn remove_wall(&mut self, cell: Cell) -> Option<Wall> {
        self.walls.remove(&cell)
    }

    /// Place a piece. Rejects cells already holding a wall or a piece.
    pub fn place_piece(&mut self, piece: Piece) -> Result<PieceId, BoardError> {
        let cell = piece.cell;
        if !cell.in_bounds() {
            return Err(BoardError::OutOfBounds(cell));
        }
        if self.walls.contains_key(&cell) || self.piece_cells.contains_key(&cell) {
            return Err(BoardError::Occupied(cell));
        }
        let id = self.pieces.insert(piece);
        self.piece_cells.insert(cell, id);
        Ok(id)
    }

    /// Remove a piece, returning it.
    pub fn remove_piece(&mut self, id: PieceId) -> Result<Piece, BoardError> {
        let piece = self.pieces.remove(id).ok_or(BoardError::PieceNotFound)?;
        self.piece_cells.remove(&piece.cell);
        Ok(piece)
    }

    /// Move a piece to `to`, removing whatever piece stood there.
    ///
    /// Performs no legality check; the movement driver only calls it with
    /// destinations produced by the move generator. Returns the captured
    /// piece, if any.
    pub fn relocate(&mut self, id: PieceId, to: Cell) -> Result<Option<Piece>, BoardError> {
        let from = self.pieces.get(id).ok_or(BoardError::PieceNotFound)?.cell;
        if from == to {
            return Ok(None);
        }
        let captured = match self.piece_cells.get(&to).copied() {
            Some(victim) => self.remove_piece(victim).ok(),
            None => None,
        };
        self.piece_cells.remove(&from);
        self.piece_cells.insert(to, id);
        if let Some(piece) = self.pieces.get_mut(id) {
            piece.cell = to;
        }
        Ok(captured)
    }

    /// Place a random piece of random color in the box around the origin.
    ///
    /// Gives up (returning `None`) after [`RANDOM_PIECE_ATTEMPTS`] draws
    /// that all hit occupied cells.
    pub fn add_random_piece(&mut self, rng: &mut SimRng) -> Option<PieceId> {
        let kind = *rng.pick(&PieceKind::ALL)?;
        let color = if rng.chance(f64_to_fixed64(0.5)) {
            Color::White
        } else {
            Color::Black
        };
        let span = (2 * RANDOM_PIECE_SPREAD) as u64;
        for _ in 0..RANDOM_PIECE_ATTEMPTS {
            let row = rng.below(span) as i32 - RANDOM_PIECE_SPREAD;
            let col = rng.below(span) as i32 - RANDOM_PIECE_SPREAD;
            let cell = Cell::new(row, col);
            if let Ok(id) = self.place_piece(Piece::new(kind, color, cell)) {
                return Some(id);
            }
        }
        None
    }

    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }

    pub fn clear_pieces(&mut self) {
        self.pieces.clear();
        self.piece_cells.clear();
    }

    pub fn clear(&mut self) {
        self.clear_walls();
        self.clear_pieces();
    }

    // -- Point queries --

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    /// The piece on `cell` together with its id.
    pub fn piece_on(&self, cell: Cell) -> Option<(PieceId, &Piece)> {
        let id = *self.piece_cells.get(&cell)?;
        self.pieces.get(id).map(|piece| (id, piece))
    }

    pub fn wall(&self, cell: Cell) -> Option<&Wall> {
        self.walls.get(&cell)
    }

    // -- Area queries --

    /// Pieces strictly closer than `radius` (Euclidean) to `center`.
    pub fn pieces_near(&self, center: Cell, radius: i32) -> Vec<PieceId> {
        let r = radius.max(0);
        let min = Cell::new(center.row.saturating_sub(r), i32::MIN);
        let max = Cell::new(center.row.saturating_add(r), i32::MAX);
        let limit = i64::from(r) * i64::from(r);

        self.piece_cells
            .range(min..=max)
            .filter(|(cell, _)| center.distance_sq(cell) < limit)
            .map(|(_, &id)| id)
            .collect()
    }

    // -- Iteration --

    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces.iter()
    }

    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.walls.values()
    }

    /// Ids of all pieces in storage order.
    pub fn piece_ids(&self) -> Vec<PieceId> {
        self.pieces.keys().collect()
    }

    // -- Stats --

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Deterministic hash over walls and pieces, for comparing seeded runs.
    pub fn state_hash(&self) -> u64 {
        let mut hash = StateHash::new();
        for cell in self.walls.keys() {
            hash.write_cell(*cell);
        }
        for (cell, id) in &self.piece_cells {
            hash.write_cell(*cell);
            if let Some(piece) = self.pieces.get(*id) {
                hash.write(&[piece.symbol() as u8]);
            }
        }
        hash.finish()
    }
}

impl Occupancy for Board {
    fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains_key(&cell)
    }

    fn piece_at(&self, cell: Cell) -> Option<PieceId> {
        self.piece_cells.get(&cell).copied()
    }

    fn has_visitor(&self, _cell: Cell, _excluding: Option<VisitorId>) -> bool {
        false
    }
}
