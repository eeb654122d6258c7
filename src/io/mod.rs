//! Input/output, error handling, and the simulation driver

/// Command-line interface and simulation runner
pub mod cli;
/// Simulation constants and runtime defaults
pub mod configuration;
/// Error types and the crate result alias
pub mod error;
/// Plain-text board rendering
pub mod render;
