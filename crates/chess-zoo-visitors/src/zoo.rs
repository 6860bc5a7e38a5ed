//! The zoo: one board, its visitors, and the two clocks that drive them.
//!
//! The host calls [`Zoo::advance`] from its frame loop with the current
//! time. Pieces move on a configurable interval while the simulation is
//! active; visitors update every [`VISITOR_STEP_MS`] regardless. When both
//! are due the piece pass runs first, then the visitor pass, each as a whole.

use crate::behavior::update_visitor;
use crate::crowd::CrowdView;
use crate::visitor::Visitor;
use chess_zoo_core::board::{Board, BoardError};
use chess_zoo_core::cell::Cell;
use chess_zoo_core::config::{ZooConfig, clamp_piece_step};
use chess_zoo_core::fixed::Millis;
use chess_zoo_core::id::{PieceId, VisitorId};
use chess_zoo_core::occupancy::Occupancy;
use chess_zoo_core::rng::SimRng;
use chess_zoo_core::sim::{PieceStep, StateHash, step_random_move};
use slotmap::SlotMap;
use tracing::debug;

/// Fixed interval between visitor passes.
pub const VISITOR_STEP_MS: Millis = 150;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ZooError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("cell {0} holds a wall or a piece")]
    Occupied(Cell),
    #[error("visitor not found: {0:?}")]
    VisitorNotFound(VisitorId),
}

// ---------------------------------------------------------------------------
// Advance report
// ---------------------------------------------------------------------------

/// What one [`Zoo::advance`] call did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdvanceResult {
    /// Outcome of the piece pass, if one was due.
    pub piece_step: Option<PieceStep>,
    /// Whether a visitor pass ran.
    pub visitors_stepped: bool,
}

// ---------------------------------------------------------------------------
// Zoo
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Zoo {
    board: Board,
    visitors: SlotMap<VisitorId, Visitor>,
    rng: SimRng,
    piece_step_ms: Millis,
    simulation_active: bool,
    last_piece_step: Millis,
    last_visitor_step: Millis,
}

impl Zoo {
    /// An empty zoo configured by `config`, with both clocks starting at `now`.
    pub fn new(config: &ZooConfig, now: Millis) -> Self {
        Self::with_board(Board::new(), config, now)
    }

    pub fn with_board(board: Board, config: &ZooConfig, now: Millis) -> Self {
        Self {
            board,
            visitors: SlotMap::with_key(),
            rng: SimRng::new(config.seed),
            piece_step_ms: clamp_piece_step(config.piece_step_ms),
            simulation_active: config.simulation_active,
            last_piece_step: now,
            last_visitor_step: now,
        }
    }

    // -- Accessors --

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board editing. Visitors standing on a cell that later gains a
    /// wall or piece give up their path on their next step.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn visitor(&self, id: VisitorId) -> Option<&Visitor> {
        self.visitors.get(id)
    }

    pub fn visitors(&self) -> impl Iterator<Item = (VisitorId, &Visitor)> {
        self.visitors.iter()
    }

    pub fn visitor_count(&self) -> usize {
        self.visitors.len()
    }

    pub fn piece_step_ms(&self) -> Millis {
        self.piece_step_ms
    }

    pub fn is_simulation_active(&self) -> bool {
        self.simulation_active
    }

    // -- Visitors --

    /// Spawn a visitor on `cell`. Walls and pieces refuse it; other visitors
    /// do not.
    pub fn place_visitor(&mut self, cell: Cell, now: Millis) -> Result<VisitorId, ZooError> {
        if !cell.in_bounds() {
            return Err(BoardError::OutOfBounds(cell).into());
        }
        if self.board.is_wall(cell) || self.board.piece_at(cell).is_some() {
            return Err(ZooError::Occupied(cell));
        }
        let visitor = Visitor::spawn(cell, now, &mut self.rng);
        let id = self.visitors.insert(visitor);
        debug!(?id, %cell, "visitor placed");
        Ok(id)
    }

    /// Insert an already-built visitor as is, e.g. one restored by the host.
    pub fn insert_visitor(&mut self, visitor: Visitor) -> VisitorId {
        self.visitors.insert(visitor)
    }

    pub fn remove_visitor(&mut self, id: VisitorId) -> Result<Visitor, ZooError> {
        self.visitors.remove(id).ok_or(ZooError::VisitorNotFound(id))
    }

    /// Remove every visitor standing on `cell`.
    pub fn remove_visitors_at(&mut self, cell: Cell) -> Vec<Visitor> {
        let ids: Vec<VisitorId> = self
            .visitors
            .iter()
            .filter(|(_, v)| v.cell == cell)
            .map(|(id, _)| id)
            .collect();
        ids.into_iter()
            .filter_map(|id| self.visitors.remove(id))
            .collect()
    }

    pub fn clear_visitors(&mut self) {
        self.visitors.clear();
    }

    // -- Pieces --

    /// Drop a random piece near the origin using the zoo's generator.
    pub fn add_random_piece(&mut self) -> Option<PieceId> {
        self.board.add_random_piece(&mut self.rng)
    }

    // -- Simulation control --

    /// Start or pause the piece driver. The piece clock restarts at `now`
    /// either way. Visitors are unaffected.
    pub fn set_simulation_active(&mut self, active: bool, now: Millis) {
        self.simulation_active = active;
        self.last_piece_step = now;
    }

    /// Set the piece interval. Values below the floor are raised to it.
    pub fn set_piece_step_ms(&mut self, ms: Millis) {
        self.piece_step_ms = clamp_piece_step(ms);
    }

    /// Move one piece now, whether or not the simulation is active.
    pub fn step_pieces(&mut self, now: Millis) -> PieceStep {
        self.last_piece_step = now;
        step_random_move(&mut self.board, &mut self.rng)
    }

    /// Run one visitor pass. Every visitor is evaluated against the board
    /// and the visitor positions as they were when the pass began.
    pub fn step_visitors(&mut self, now: Millis) {
        self.last_visitor_step = now;
        let view = CrowdView::new(&self.board, &self.visitors);
        for (id, visitor) in self.visitors.iter_mut() {
            update_visitor(id, visitor, &view, now, &mut self.rng);
        }
    }

    /// Run whichever passes are due at `now`, pieces first.
    pub fn advance(&mut self, now: Millis) -> AdvanceResult {
        let mut result = AdvanceResult::default();

        if self.simulation_active
            && now.saturating_sub(self.last_piece_step) >= self.piece_step_ms
        {
            result.piece_step = Some(self.step_pieces(now));
        }

        if now.saturating_sub(self.last_visitor_step) >= VISITOR_STEP_MS {
            self.step_visitors(now);
            result.visitors_stepped = true;
        }

        result
    }

    /// Deterministic hash over the board, every visitor and the generator.
    pub fn state_hash(&self) -> u64 {
        let mut hash = StateHash::new();
        hash.write_u64(self.board.state_hash());
        for visitor in self.visitors.values() {
            hash.write_cell(visitor.cell);
            hash.write_u64(visitor.state_timer);
            hash.write(&[visitor.state as u8]);
        }
        hash.write_u64(self.rng.state());
        hash.finish()
    }
}
