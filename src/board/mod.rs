//! Board state storage and placement operations
//!
//! The grid store owns all cell values and bounds validation; the territory
//! module layers the player-facing placement rules on top of it.

/// Cell storage, bounds validation, and aggregate queries
pub mod grid;
/// Ownership assignment and live-cell placement rules
pub mod territory;

pub use grid::{Board, CellCounts};
