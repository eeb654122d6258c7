//! Simulation constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible random fills
pub const DEFAULT_SEED: u64 = 42;

/// Default maximum generations before the driver stops
pub const DEFAULT_GENERATIONS: u64 = 100;

/// Default board row count
pub const DEFAULT_ROWS: i32 = 10;

/// Default board column count
pub const DEFAULT_COLS: i32 = 10;

/// Default number of competing players
pub const DEFAULT_PLAYERS: i32 = 2;

/// Default number of randomly seeded live cells
pub const DEFAULT_FILL_CELLS: usize = 25;
