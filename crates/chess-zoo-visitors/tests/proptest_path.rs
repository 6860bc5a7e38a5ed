//! Property-based tests for path search.
//!
//! Random obstacle fields are generated inside a walled 9x9 room and the
//! search is compared against a brute-force distance relaxation over the
//! same room.

use chess_zoo_core::board::Board;
use chess_zoo_core::cell::{Cell, ORTHOGONAL_STEPS};
use chess_zoo_core::occupancy::Occupancy;
use chess_zoo_core::piece::{Piece, Wall};
use chess_zoo_core::test_utils::add_wall_ring;
use chess_zoo_visitors::path::find_path;
use proptest::prelude::*;

const HALF: i32 = 4;

// ===========================================================================
// Generators
// ===========================================================================

fn arb_cell() -> impl Strategy<Value = Cell> {
    (-HALF..=HALF, -HALF..=HALF).prop_map(|(row, col)| Cell::new(row, col))
}

/// A room with walls and pieces scattered inside. Obstacles that land on
/// `start` are skipped so the searcher always has somewhere to stand.
fn arb_room() -> impl Strategy<Value = (Board, Cell, Cell)> {
    let walls = proptest::collection::vec(arb_cell(), 0..30);
    let pieces = proptest::collection::vec(arb_cell(), 0..10);
    (walls, pieces, arb_cell(), arb_cell()).prop_map(|(walls, pieces, start, end)| {
        let mut board = Board::new();
        add_wall_ring(
            &mut board,
            Cell::new(-HALF - 1, -HALF - 1),
            Cell::new(HALF + 1, HALF + 1),
        );
        for cell in walls.into_iter().filter(|&c| c != start) {
            let _ = board.place_wall(cell, Wall::DEFAULT_SHAPE);
        }
        for cell in pieces.into_iter().filter(|&c| c != start) {
            let _ = board.place_piece(Piece::from_symbol('p', cell));
        }
        (board, start, end)
    })
}

// ===========================================================================
// Brute force
// ===========================================================================

/// Step distance from `start` to `end` by repeated relaxation over the room.
fn brute_force_distance(board: &Board, start: Cell, end: Cell) -> Option<usize> {
    let side = (2 * HALF + 1) as usize;
    let index = |c: Cell| ((c.row + HALF) as usize) * side + (c.col + HALF) as usize;
    let inside = |c: Cell| c.row.abs() <= HALF && c.col.abs() <= HALF;
    let passable = |c: Cell| c == end || !board.is_occupied(c, None);

    let mut dist = vec![usize::MAX; side * side];
    dist[index(start)] = 0;
    loop {
        let mut changed = false;
        for row in -HALF..=HALF {
            for col in -HALF..=HALF {
                let here = Cell::new(row, col);
                let d = dist[index(here)];
                // Only the end cell may be entered but not left.
                if d == usize::MAX || (here == end && here != start) {
                    continue;
                }
                for next in here.neighbors(&ORTHOGONAL_STEPS) {
                    if inside(next) && passable(next) && dist[index(next)] > d + 1 {
                        dist[index(next)] = d + 1;
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }
    let d = dist[index(end)];
    (d != usize::MAX).then_some(d)
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Paths are shortest, 4-connected, avoid obstacles and end on `end`.
    #[test]
    fn path_matches_brute_force((board, start, end) in arb_room()) {
        let expected = brute_force_distance(&board, start, end);
        let found = find_path(start, end, &board);

        match (expected, found) {
            (None, None) => {}
            (Some(d), Some(path)) => {
                prop_assert_eq!(path.len(), d);
                if start == end {
                    prop_assert!(path.is_empty());
                } else {
                    prop_assert_eq!(path.last().copied(), Some(end));
                }
                let mut prev = start;
                for (i, &step) in path.iter().enumerate() {
                    prop_assert_eq!(prev.manhattan_distance(&step), 1);
                    if i + 1 < path.len() {
                        prop_assert!(!board.is_occupied(step, None));
                    }
                    prev = step;
                }
            }
            (expected, found) => {
                prop_assert!(false, "brute force {:?}, search {:?}", expected, found);
            }
        }
    }
}
