//! Error types for board construction, placement, and pattern loading

use std::fmt;
use std::path::PathBuf;

/// Main error type for all board and pattern operations
#[derive(Debug)]
pub enum BoardError {
    /// Board construction rejected the requested dimensions
    InvalidDimensions {
        /// Requested row count
        rows: i32,
        /// Requested column count
        cols: i32,
        /// Explanation of why the dimensions are invalid
        reason: &'static str,
    },

    /// Player identifier is not a positive integer
    InvalidPlayer {
        /// The rejected player id
        player: i32,
    },

    /// Coordinates or a pattern bounding rectangle fall outside the grid
    OutOfBounds {
        /// Offending position (row, col)
        position: [i32; 2],
        /// Current grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Ownership precondition violated on an unforced placement
    ///
    /// The board is left untouched; callers may retry with `forced`
    /// or on territory the player actually owns.
    PlacementDenied {
        /// Position where the precondition failed
        position: [i32; 2],
        /// Acting player
        player: i32,
        /// Cell value found at the position
        occupant: i32,
    },

    /// Pattern text contains a character outside the `.`/`O` grammar
    UnrecognizedCharacter {
        /// The offending character
        character: char,
        /// Line number within the pattern text (1-based)
        line: usize,
        /// Column number within the line (1-based)
        column: usize,
    },

    /// Pattern text is structurally unusable (empty or ragged rows)
    InvalidPattern {
        /// Description of what is wrong with the pattern text
        reason: String,
    },

    /// Pattern file could not be read from the filesystem
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols, reason } => {
                write!(f, "Invalid board dimensions {rows}x{cols}: {reason}")
            }
            Self::InvalidPlayer { player } => {
                write!(f, "Player must be a positive integer, got {player}")
            }
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the {}x{} grid",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
            Self::PlacementDenied {
                position,
                player,
                occupant,
            } => {
                write!(
                    f,
                    "Player {player} cannot place at ({}, {}): cell holds {occupant}",
                    position[0], position[1]
                )
            }
            Self::UnrecognizedCharacter {
                character,
                line,
                column,
            } => {
                write!(
                    f,
                    "Unrecognized pattern character '{character}' at line {line}, column {column}"
                )
            }
            Self::InvalidPattern { reason } => {
                write!(f, "Invalid pattern text: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for board operation results
pub type Result<T> = std::result::Result<T, BoardError>;
