//! Multi-player territorial extension of Conway's Game of Life
//!
//! Cells on a bounded grid are dead-unowned, dead-but-owned, or alive;
//! players claim territory, place patterns on land they own, and the grid
//! evolves under classic survival/birth rules extended with a per-player
//! neighbor vote: contested cells die, uncontested ones go to the player
//! with the strict majority of live neighbors.

#![forbid(unsafe_code)]

/// Board state storage and placement/territory operations
pub mod board;
/// The generation evolution engine
pub mod engine;
/// Errors, configuration, rendering, and the CLI driver
pub mod io;
/// Pattern templates and textual loaders
pub mod pattern;

pub use board::{Board, CellCounts};
pub use io::error::{BoardError, Result};
pub use pattern::{Pattern, PatternFormat};
