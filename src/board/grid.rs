//! Grid state storage with bounds-checked cell access
//!
//! Each cell is a single signed integer: the magnitude is the owning player
//! id (0 = unowned) and the sign encodes liveness, positive = alive,
//! non-positive = dead. An unowned cell is therefore always dead. All reads
//! and writes go through this store; placement operations and the evolution
//! engine never touch the array directly.

use std::collections::HashMap;

use ndarray::Array2;

use crate::engine::evolution::next_generation;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{BoardError, Result};

/// Per-player cell statistics reported by [`Board::counts`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellCounts {
    /// Cells owned by the player, dead or alive
    pub owned: usize,
    /// Cells owned by the player that are currently alive
    pub live: usize,
}

/// Bounded M×N board of signed cell values with per-run metadata
///
/// The board is created once with fixed dimensions and mutated in place for
/// its whole life; it is never resized. The generation counter increments
/// once per [`Board::evolve`] call, and the highest player id seen across
/// placement calls sizes the evolution engine's per-player tallies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<i32>,
    rows: usize,
    cols: usize,
    generation: u64,
    max_player: i32,
}

impl Board {
    /// Create an empty board of the given dimensions
    ///
    /// Every cell starts dead and unowned.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if either dimension is not
    /// positive or exceeds [`MAX_GRID_DIMENSION`].
    pub fn new(rows: i32, cols: i32) -> Result<Self> {
        if rows <= 0 || cols <= 0 {
            return Err(BoardError::InvalidDimensions {
                rows,
                cols,
                reason: "dimensions must be positive",
            });
        }
        if rows as usize > MAX_GRID_DIMENSION || cols as usize > MAX_GRID_DIMENSION {
            return Err(BoardError::InvalidDimensions {
                rows,
                cols,
                reason: "dimensions exceed the maximum grid size",
            });
        }
        Ok(Self {
            cells: Array2::zeros((rows as usize, cols as usize)),
            rows: rows as usize,
            cols: cols as usize,
            generation: 0,
            max_player: 0,
        })
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Generations elapsed since construction
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Highest player id observed across all placement calls
    pub const fn max_player(&self) -> i32 {
        self.max_player
    }

    /// Read-only view of the raw cell values
    pub const fn cells(&self) -> &Array2<i32> {
        &self.cells
    }

    /// Validate that every `(i, j)` pair lies on the grid
    ///
    /// An index is valid iff `0 <= index < dimension`, on both axes.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] naming the first offending
    /// position.
    pub fn check_coordinates(&self, points: &[[i32; 2]]) -> Result<()> {
        for &point in points {
            let [i, j] = point;
            if i < 0 || j < 0 || i as usize >= self.rows || j as usize >= self.cols {
                return Err(BoardError::OutOfBounds {
                    position: point,
                    dimensions: (self.rows, self.cols),
                });
            }
        }
        Ok(())
    }

    /// Validate that a `[start, end)` rectangle lies entirely on the grid
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] naming the violating corner.
    pub fn check_rectangle(&self, start: [i32; 2], end: [i32; 2]) -> Result<()> {
        // Corners of a half-open rectangle: start inclusive, end exclusive
        self.check_coordinates(&[start, [end[0] - 1, end[1] - 1]])
    }

    /// Read a single cell value
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `(i, j)` is off the grid.
    pub fn cell(&self, i: i32, j: i32) -> Result<i32> {
        self.check_coordinates(&[[i, j]])?;
        Ok(self
            .cells
            .get((i as usize, j as usize))
            .copied()
            .unwrap_or(0))
    }

    /// Write a single cell value; coordinates must already be validated
    pub(crate) fn write_cell(&mut self, i: usize, j: usize, value: i32) {
        if let Some(cell) = self.cells.get_mut((i, j)) {
            *cell = value;
        }
    }

    /// Record a player id in the running maximum
    pub(crate) const fn note_player(&mut self, player: i32) {
        if player > self.max_player {
            self.max_player = player;
        }
    }

    /// True iff any cell on the board is alive
    pub fn has_live_cells(&self) -> bool {
        self.cells.iter().any(|&value| value > 0)
    }

    /// Per-player owned and live cell counts
    ///
    /// Owned counts include live cells; unowned cells (owner 0) are not
    /// reported. Players with no cells on the board are absent from the map.
    pub fn counts(&self) -> HashMap<i32, CellCounts> {
        let mut counts: HashMap<i32, CellCounts> = HashMap::new();
        for &value in &self.cells {
            let owner = value.abs();
            if owner == 0 {
                continue;
            }
            let entry = counts.entry(owner).or_default();
            entry.owned += 1;
            if value > 0 {
                entry.live += 1;
            }
        }
        counts
    }

    /// Advance the board by one generation
    ///
    /// The next generation is computed entirely from a frozen snapshot of
    /// the current grid and swapped in as a whole, then the generation
    /// counter increments. Evolution never fails on a previously valid
    /// board.
    pub fn evolve(&mut self) {
        self.cells = next_generation(&self.cells, self.max_player);
        self.generation += 1;
    }
}
