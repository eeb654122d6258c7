//! The generation transition rule
//!
//! One call computes a complete next generation from a frozen snapshot of
//! the current grid. The rule layers a territorial vote on top of classic
//! Life: live neighbors are tallied per owning player, a tie between the
//! two leading players forces the cell dead, and an uncontested cell that
//! survives or is born belongs to the player with the strict majority of
//! live neighbors. Ownership of dead cells is preserved untouched.

use ndarray::Array2;

use crate::engine::tally::NeighborTally;

/// Compute the next-generation grid from a snapshot of the current one
///
/// The returned buffer is built without ever reading partially updated
/// state: every cell starts as its provisional value (same owner, forced
/// dead) and is only promoted to alive by the rule below. Callers swap the
/// result in as a whole.
///
/// Per cell, with `total` live Moore neighbors (no wraparound at borders):
/// 1. If two or more players tie for the most live neighbors, the cell is
///    forced dead and keeps its provisional owner mark.
/// 2. Otherwise a live cell survives iff `total` is 2 or 3, and a dead
///    cell is born iff `total` is 3; in either case the cell's next owner
///    is the single leading player.
/// 3. Otherwise the provisional dead value stands.
pub fn next_generation(cells: &Array2<i32>, max_player: i32) -> Array2<i32> {
    let (rows, cols) = cells.dim();
    // Provisionally every live cell dies and every owner mark is kept
    let mut next = cells.mapv(|value| -value.abs());
    let mut tally = NeighborTally::new(max_player);

    for ((i, j), &current) in cells.indexed_iter() {
        tally.reset();
        let row_range = i.saturating_sub(1)..(i + 2).min(rows);
        for ni in row_range {
            let col_range = j.saturating_sub(1)..(j + 2).min(cols);
            for nj in col_range {
                if (ni, nj) == (i, j) {
                    continue;
                }
                if let Some(&neighbor) = cells.get((ni, nj)) {
                    tally.record(neighbor);
                }
            }
        }

        let outcome = tally.outcome();
        if outcome.is_contested() {
            continue;
        }
        let survives = current > 0 && (outcome.total == 2 || outcome.total == 3);
        let born = current <= 0 && outcome.total == 3;
        if survives || born {
            if let Some(cell) = next.get_mut((i, j)) {
                *cell = outcome.leader;
            }
        }
    }

    next
}
