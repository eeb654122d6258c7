//! Plaintext pattern parsing for literal text and pattern files
//!
//! The grammar is the classic plaintext convention: `.` marks a dead cell,
//! `O` a live one, one row per line. File loading additionally skips blank
//! and whitespace-only lines so pattern files may be padded for readability.

use std::fs;
use std::path::{Path, PathBuf};

use ndarray::Array2;

use crate::io::error::{BoardError, Result};

/// Closed set of supported pattern sources
///
/// Each variant has its own parse path; dispatch is by match rather than
/// by a runtime format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternFormat {
    /// Literal multi-line `.`/`O` grid
    Plaintext,
    /// Path to a file containing a `.`/`O` grid
    PlaintextFile,
}

/// Parse pattern data in the given format into a boolean footprint
///
/// # Errors
///
/// Returns [`BoardError::FileSystem`] if a pattern file cannot be read,
/// [`BoardError::UnrecognizedCharacter`] for characters outside the
/// grammar, and [`BoardError::InvalidPattern`] for empty or ragged input.
pub fn parse(data: &str, format: PatternFormat) -> Result<Array2<bool>> {
    match format {
        PatternFormat::Plaintext => {
            let lines: Vec<&str> = data.lines().collect();
            parse_lines(&lines)
        }
        PatternFormat::PlaintextFile => parse_file(Path::new(data)),
    }
}

fn parse_file(path: &Path) -> Result<Array2<bool>> {
    let text = fs::read_to_string(path).map_err(|source| BoardError::FileSystem {
        path: PathBuf::from(path),
        operation: "pattern load",
        source,
    })?;
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    parse_lines(&lines)
}

fn parse_lines(lines: &[&str]) -> Result<Array2<bool>> {
    let rows = lines.len();
    let cols = lines.first().map_or(0, |l| l.chars().count());
    if rows == 0 || cols == 0 {
        return Err(BoardError::InvalidPattern {
            reason: "pattern text contains no cells".to_string(),
        });
    }

    let mut cells = Vec::with_capacity(rows * cols);
    for (row, line) in lines.iter().enumerate() {
        let width = line.chars().count();
        if width != cols {
            return Err(BoardError::InvalidPattern {
                reason: format!("line {} has width {width}, expected {cols}", row + 1),
            });
        }
        for (col, character) in line.chars().enumerate() {
            match character {
                '.' => cells.push(false),
                'O' => cells.push(true),
                _ => {
                    return Err(BoardError::UnrecognizedCharacter {
                        character,
                        line: row + 1,
                        column: col + 1,
                    });
                }
            }
        }
    }

    Array2::from_shape_vec((rows, cols), cells).map_err(|e| BoardError::InvalidPattern {
        reason: e.to_string(),
    })
}
