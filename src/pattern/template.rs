//! Reusable rectangular cell footprints with center-anchored placement
//!
//! A pattern is a boolean grid where `true` marks a live offset. Patterns
//! carry no board reference; placement operations translate them onto a
//! board through the bounding rectangle computed here.

use ndarray::Array2;

use crate::io::error::Result;
use crate::pattern::loader::{self, PatternFormat};

/// Immutable-after-load rectangular footprint with a defined center
///
/// The footprint may only be replaced as a whole via [`Pattern::load`],
/// so readers never observe a partially updated pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    footprint: Array2<bool>,
}

impl Pattern {
    /// Create an all-dead footprint of the given size
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            footprint: Array2::from_elem((rows, cols), false),
        }
    }

    /// Parse a pattern from textual data in the given format
    ///
    /// For [`PatternFormat::Plaintext`] the data is the pattern text itself;
    /// for [`PatternFormat::PlaintextFile`] it is a filesystem path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the text does not
    /// follow the `.`/`O` grammar.
    pub fn parse(data: &str, format: PatternFormat) -> Result<Self> {
        let footprint = loader::parse(data, format)?;
        Ok(Self { footprint })
    }

    /// Replace this pattern's footprint and dimensions from textual data
    ///
    /// The replacement is atomic: on error the existing footprint is kept
    /// unchanged, and on success the new footprint is swapped in whole.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the text does not
    /// follow the `.`/`O` grammar.
    pub fn load(&mut self, data: &str, format: PatternFormat) -> Result<()> {
        self.footprint = loader::parse(data, format)?;
        Ok(())
    }

    /// Number of rows in the footprint
    pub fn rows(&self) -> usize {
        self.footprint.nrows()
    }

    /// Number of columns in the footprint
    pub fn cols(&self) -> usize {
        self.footprint.ncols()
    }

    /// True when the footprint contains no cells at all
    pub fn is_empty(&self) -> bool {
        self.footprint.is_empty()
    }

    /// Center cell of the footprint, `(floor((R-1)/2), floor((C-1)/2))`
    pub fn center(&self) -> [usize; 2] {
        [
            self.rows().saturating_sub(1) / 2,
            self.cols().saturating_sub(1) / 2,
        ]
    }

    /// Bounding rectangle `[start, end)` when centered at `(ci, cj)`
    ///
    /// The top-left corner is placed so the pattern's center lands on the
    /// anchor; `end` is exclusive on both axes and may exceed a board's
    /// extent, which placement operations must reject.
    pub fn bounding_rectangle(&self, ci: i32, cj: i32) -> ([i32; 2], [i32; 2]) {
        let center = self.center();
        let start = [ci - center[0] as i32, cj - center[1] as i32];
        let end = [start[0] + self.rows() as i32, start[1] + self.cols() as i32];
        (start, end)
    }

    /// Footprint-relative coordinates of every live cell, row-major order
    pub fn live_offsets(&self) -> Vec<[usize; 2]> {
        self.footprint
            .indexed_iter()
            .filter(|&(_, &live)| live)
            .map(|((i, j), _)| [i, j])
            .collect()
    }

    /// Whether the footprint cell at `(i, j)` is live
    ///
    /// Out-of-footprint coordinates read as dead.
    pub fn is_live(&self, i: usize, j: usize) -> bool {
        self.footprint.get((i, j)).copied().unwrap_or(false)
    }
}
