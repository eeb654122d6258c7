//! Performance measurement for the generation step at varying board sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use turflife::Board;

/// Build a two-player board with roughly a quarter of its cells alive
fn seeded_board(size: i32) -> Option<Board> {
    let mut board = Board::new(size, size).ok()?;
    let mut rng = StdRng::seed_from_u64(12345);
    let fill = (size as usize * size as usize) / 4;
    for _ in 0..fill {
        let i = rng.random_range(0..size);
        let j = rng.random_range(0..size);
        let player = rng.random_range(1..=2);
        board.add_cell(i, j, player, true).ok()?;
    }
    Some(board)
}

fn bench_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve");

    for size in &[16, 64, 256] {
        let Some(board) = seeded_board(*size) else {
            group.finish();
            return;
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut step = black_box(board.clone());
                step.evolve();
                black_box(step);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evolve);
criterion_main!(benches);
