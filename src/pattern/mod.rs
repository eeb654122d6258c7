//! Pattern templates and their textual loaders
//!
//! Patterns are reusable rectangular footprints of live/dead offsets with a
//! defined center. They are board-independent; the same instance may be
//! placed on any number of boards.

/// Plaintext and file-based pattern parsing
pub mod loader;
/// The `Pattern` footprint type and its geometric queries
pub mod template;

pub use loader::PatternFormat;
pub use template::Pattern;
