//! Cells of the unbounded zoo floor.
//!
//! The floor has no edges. Coordinates are clamped to a large symmetric
//! range only so that slides and searches always terminate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest row or column any entity may occupy.
pub const MIN_COORD: i32 = -1_000_000;

/// Largest row or column any entity may occupy.
pub const MAX_COORD: i32 = 1_000_000;

/// The four orthogonal steps: up, down, left, right.
pub const ORTHOGONAL_STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The four diagonal steps.
pub const DIAGONAL_STEPS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight neighbouring steps, orthogonal first.
pub const NEIGHBOR_STEPS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// An integer grid coordinate. Rows grow downwards, so white pawns advance
/// towards smaller rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether the cell lies inside the coordinate bound.
    pub fn in_bounds(&self) -> bool {
        (MIN_COORD..=MAX_COORD).contains(&self.row) && (MIN_COORD..=MAX_COORD).contains(&self.col)
    }

    /// The cell `(dr, dc)` away, or `None` on integer overflow.
    ///
    /// The result is not bound-checked; callers filter with [`Cell::in_bounds`].
    pub fn offset(&self, dr: i32, dc: i32) -> Option<Cell> {
        Some(Cell::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?))
    }

    /// Squared Euclidean distance, widened to `i64`.
    pub fn distance_sq(&self, other: &Cell) -> i64 {
        let dr = i64::from(self.row) - i64::from(other.row);
        let dc = i64::from(self.col) - i64::from(other.col);
        dr * dr + dc * dc
    }

    /// Manhattan distance to another cell.
    pub fn manhattan_distance(&self, other: &Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Chebyshev (king-step) distance to another cell.
    pub fn chebyshev_distance(&self, other: &Cell) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// The in-bound neighbours reachable with the given steps.
    pub fn neighbors(self, steps: &[(i32, i32)]) -> impl Iterator<Item = Cell> + '_ {
        steps
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(dr, dc))
            .filter(Cell::in_bounds)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Cell::new(row, col)
    }
}
