//! Generation evolution engine
//!
//! Implements the snapshot-to-buffer transition: the current grid is read
//! as an immutable snapshot, a disjoint next-generation buffer is filled,
//! and the board swaps the buffer in atomically.

/// The per-cell transition rule and full-grid step
pub mod evolution;
/// Per-player neighbor tallies and leader extraction
pub mod tally;
