//! The occupancy contract shared by move generation, path search and the
//! visitor behaviour.
//!
//! Pieces and visitors never look at each other's storage. Anything that
//! needs to know whether a cell is free goes through [`Occupancy`].

use crate::cell::Cell;
use crate::id::{PieceId, VisitorId};

/// A read-only view answering "what stands on this cell" at one instant.
pub trait Occupancy {
    /// Whether a wall stands on `cell`.
    fn is_wall(&self, cell: Cell) -> bool;

    /// The piece standing on `cell`, if any.
    fn piece_at(&self, cell: Cell) -> Option<PieceId>;

    /// Whether a visitor other than `excluding` stands on `cell`.
    fn has_visitor(&self, cell: Cell, excluding: Option<VisitorId>) -> bool;

    /// Wall, piece or visitor occupancy. Pass the asking visitor as
    /// `excluding` so it does not block its own cell.
    fn is_occupied(&self, cell: Cell, excluding: Option<VisitorId>) -> bool {
        self.is_wall(cell) || self.piece_at(cell).is_some() || self.has_visitor(cell, excluding)
    }
}
