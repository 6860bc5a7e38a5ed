//! A frozen view of the board plus every visitor's cell.
//!
//! Built once at the start of a visitor pass. Every visitor in the pass
//! reads the same view, so siblings updated earlier in the pass are still
//! seen where they stood when the pass began.

use crate::visitor::Visitor;
use chess_zoo_core::board::Board;
use chess_zoo_core::cell::Cell;
use chess_zoo_core::id::{PieceId, VisitorId};
use chess_zoo_core::occupancy::Occupancy;
use slotmap::SlotMap;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct CrowdView<'a> {
    board: &'a Board,
    visitors: BTreeMap<Cell, Vec<VisitorId>>,
}

impl<'a> CrowdView<'a> {
    pub fn new(board: &'a Board, visitors: &SlotMap<VisitorId, Visitor>) -> Self {
        let mut by_cell: BTreeMap<Cell, Vec<VisitorId>> = BTreeMap::new();
        for (id, visitor) in visitors {
            by_cell.entry(visitor.cell()).or_default().push(id);
        }
        Self {
            board,
            visitors: by_cell,
        }
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Visitors standing on `cell` when the view was taken.
    pub fn visitors_at(&self, cell: Cell) -> &[VisitorId] {
        self.visitors.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Occupancy for CrowdView<'_> {
    fn is_wall(&self, cell: Cell) -> bool {
        self.board.is_wall(cell)
    }

    fn piece_at(&self, cell: Cell) -> Option<PieceId> {
        self.board.piece_at(cell)
    }

    fn has_visitor(&self, cell: Cell, excluding: Option<VisitorId>) -> bool {
        self.visitors_at(cell).iter().any(|&id| Some(id) != excluding)
    }
}
