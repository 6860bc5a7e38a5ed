//! Chess Zoo Core -- the chess layer of the zoo simulation.
//!
//! This crate owns the board (walls and pieces on an unbounded sparse
//! grid), the occupancy contract shared with the spectator layer, move
//! generation, and the random movement driver that animates the pieces.
//!
//! # Piece Step
//!
//! Each call to [`sim::step_random_move`]:
//!
//! 1. Samples up to five distinct pieces.
//! 2. Generates legal destinations for each in turn.
//! 3. Moves the first piece that has one to a random destination,
//!    capturing any enemy standing there.
//!
//! When nothing can move the board is left untouched. No simulation step
//! ever returns an error; only host-facing editing and configuration do.
//!
//! # Key Types
//!
//! - [`board::Board`] -- Walls and pieces keyed by cell, pieces by id.
//! - [`occupancy::Occupancy`] -- The "is this cell free" contract.
//! - [`movegen`] -- Per-kind move rules with bounded slides.
//! - [`rng::SimRng`] -- Seedable generator behind every random choice.
//! - [`config::ZooConfig`] -- Host settings, loadable from TOML.

pub mod board;
pub mod cell;
pub mod config;
pub mod fixed;
pub mod id;
pub mod movegen;
pub mod occupancy;
pub mod piece;
pub mod rng;
pub mod sim;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
