//! Bounded breadth-first path search for visitors.

use chess_zoo_core::cell::{Cell, ORTHOGONAL_STEPS};
use chess_zoo_core::occupancy::Occupancy;
use std::collections::{HashMap, VecDeque};
use tracing::warn;

/// Most cells a single search may dequeue before giving up.
pub const MAX_SEARCH_NODES: usize = 5_000;

/// Shortest 4-connected path from `start` to `end`.
///
/// The returned cells exclude `start` and end with `end`. Walls, pieces and
/// visitors block every cell except `end`, which is always enterable; the
/// mover re-checks it when it actually steps. `start == end` yields an empty
/// path. `None` means unreachable, or that the search dequeued more than
/// [`MAX_SEARCH_NODES`] cells.
pub fn find_path(start: Cell, end: Cell, view: &impl Occupancy) -> Option<Vec<Cell>> {
    // Maps each discovered cell to the cell it was reached from.
    let mut parents: HashMap<Cell, Cell> = HashMap::new();
    parents.insert(start, start);

    let mut queue: VecDeque<Cell> = VecDeque::from([start]);
    let mut expanded = 0usize;

    while let Some(current) = queue.pop_front() {
        expanded += 1;
        if expanded > MAX_SEARCH_NODES {
            warn!(%start, %end, budget = MAX_SEARCH_NODES, "path search budget exhausted");
            return None;
        }

        if current == end {
            return Some(walk_back(&parents, start, end));
        }

        for next in current.neighbors(&ORTHOGONAL_STEPS) {
            if parents.contains_key(&next) {
                continue;
            }
            if next != end && view.is_occupied(next, None) {
                continue;
            }
            parents.insert(next, current);
            queue.push_back(next);
        }
    }

    None
}

fn walk_back(parents: &HashMap<Cell, Cell>, start: Cell, end: Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut cell = end;
    while cell != start {
        path.push(cell);
        match parents.get(&cell) {
            Some(&parent) => cell = parent,
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_zoo_core::board::Board;
    use chess_zoo_core::test_utils::{add_piece, add_wall, add_wall_ring, board_with, cell};

    fn assert_connected(start: Cell, path: &[Cell]) {
        let mut prev = start;
        for &step in path {
            assert_eq!(prev.manhattan_distance(&step), 1, "{prev} -> {step}");
            prev = step;
        }
    }

    #[test]
    fn same_cell_is_empty_path() {
        let board = Board::new();
        assert_eq!(find_path(cell(2, 2), cell(2, 2), &board), Some(vec![]));
    }

    #[test]
    fn straight_line_on_empty_board() {
        let board = Board::new();
        let path = find_path(cell(0, 0), cell(0, 3), &board).unwrap();
        assert_eq!(path, vec![cell(0, 1), cell(0, 2), cell(0, 3)]);
    }

    #[test]
    fn routes_around_wall() {
        let (board, _) = board_with(&[], &[(0, 1), (1, 1), (-1, 1)]);
        let path = find_path(cell(0, 0), cell(0, 2), &board).unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path.last(), Some(&cell(0, 2)));
        assert_connected(cell(0, 0), &path);
        assert!(path.iter().all(|c| c.col != 1 || c.row.abs() == 2));
    }

    #[test]
    fn destination_may_be_occupied() {
        let mut board = Board::new();
        add_piece(&mut board, 'Q', 0, 2);
        let path = find_path(cell(0, 0), cell(0, 2), &board).unwrap();
        assert_eq!(path.last(), Some(&cell(0, 2)));
    }

    #[test]
    fn pieces_block_intermediate_cells() {
        let mut board = Board::new();
        add_piece(&mut board, 'p', 0, 1);
        let path = find_path(cell(0, 0), cell(0, 2), &board).unwrap();
        assert!(!path.contains(&cell(0, 1)));
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let mut board = Board::new();
        add_wall_ring(&mut board, cell(-2, -2), cell(2, 2));
        assert_eq!(find_path(cell(0, 0), cell(5, 5), &board), None);
    }

    #[test]
    fn distant_goal_exhausts_budget() {
        // 60 cells apart on an open board needs far more than the budget.
        let board = Board::new();
        assert_eq!(find_path(cell(0, 0), cell(0, 60), &board), None);
    }

    #[test]
    fn near_goal_fits_budget() {
        let board = Board::new();
        let path = find_path(cell(0, 0), cell(20, 20), &board).unwrap();
        assert_eq!(path.len(), 40);
        assert_connected(cell(0, 0), &path);
    }

    #[test]
    fn diagonal_neighbor_takes_two_steps() {
        let mut board = Board::new();
        add_wall(&mut board, 0, 1);
        let path = find_path(cell(0, 0), cell(1, 1), &board).unwrap();
        assert_eq!(path, vec![cell(1, 0), cell(1, 1)]);
    }
}
