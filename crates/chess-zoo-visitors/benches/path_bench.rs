//! Criterion benchmarks for visitor path search and full visitor passes.
//!
//! - `path_search`: open-board and maze searches, plus one that runs the
//!   node budget dry.
//! - `visitor_pass`: a crowd of visitors around a piece lattice.

use chess_zoo_core::board::Board;
use chess_zoo_core::config::ZooConfig;
use chess_zoo_core::test_utils::*;
use chess_zoo_visitors::path::find_path;
use chess_zoo_visitors::zoo::{VISITOR_STEP_MS, Zoo};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// ===========================================================================
// Boards
// ===========================================================================

/// Vertical wall strips with alternating gaps at the top and bottom, so the
/// shortest path snakes through every corridor.
fn serpentine(width: i32, height: i32) -> Board {
    let mut board = Board::new();
    add_wall_ring(&mut board, cell(-1, -1), cell(height, width));
    for col in (1..width).step_by(2) {
        let gap = if (col / 2) % 2 == 0 { height - 1 } else { 0 };
        for row in 0..height {
            if row != gap {
                add_wall(&mut board, row, col);
            }
        }
    }
    board
}

// ===========================================================================
// Path search
// ===========================================================================

fn bench_path_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_search");

    let open = Board::new();
    for distance in [5, 20, 40] {
        group.bench_with_input(BenchmarkId::new("open", distance), &distance, |b, &d| {
            b.iter(|| black_box(find_path(cell(0, 0), cell(d, d / 2), &open)));
        });
    }

    let maze = serpentine(31, 20);
    group.bench_function("serpentine_31x20", |b| {
        b.iter(|| black_box(find_path(cell(0, 0), cell(0, 30), &maze)));
    });

    group.bench_function("budget_exhausted", |b| {
        b.iter(|| black_box(find_path(cell(0, 0), cell(0, 500), &open)));
    });

    group.finish();
}

// ===========================================================================
// Visitor passes
// ===========================================================================

fn bench_visitor_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("visitor_pass");

    for crowd in [10usize, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(crowd), &crowd, |b, &crowd| {
            b.iter_batched(
                || {
                    let mut zoo = Zoo::with_board(lattice_board(64), &ZooConfig::default(), 0);
                    for i in 0..crowd {
                        let _ = zoo.place_visitor(cell(-3 - (i as i32 % 10), i as i32 / 10), 0);
                    }
                    zoo
                },
                |mut zoo| {
                    let mut now = 0;
                    for _ in 0..20 {
                        now += VISITOR_STEP_MS;
                        zoo.step_visitors(now);
                    }
                    zoo.visitor_count()
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_path_search, bench_visitor_pass);
criterion_main!(benches);
