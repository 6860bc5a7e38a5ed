//! Chess Zoo Visitors -- the spectators wandering between the pieces.
//!
//! Visitors pick a nearby piece, walk to a free viewing spot around it,
//! watch, and now and then say something about it. They never touch the
//! board: everything they know about walls, pieces and each other comes
//! through the [`Occupancy`](chess_zoo_core::occupancy::Occupancy) contract.
//!
//! # Key Types
//!
//! - [`zoo::Zoo`] -- Board, visitors and both cadences behind one `advance`.
//! - [`visitor::Visitor`] -- Position, state, timers, path and appearance.
//! - [`behavior::update_visitor`] -- The per-tick state machine.
//! - [`path::find_path`] -- Bounded 4-connected breadth-first search.
//! - [`crowd::CrowdView`] -- Start-of-pass occupancy snapshot.

pub mod behavior;
pub mod comments;
pub mod crowd;
pub mod path;
pub mod visitor;
pub mod zoo;
