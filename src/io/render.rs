//! Plain-text board rendering
//!
//! A reporting collaborator, not part of the core model: reads cell values
//! through the board's public view and never mutates state. Live cells
//! render as their owner's id, owned territory as `.`, unowned cells as a
//! space. Rows are framed with `-` rule lines and `|` separators.

use std::fmt::Write;

use crate::board::Board;

fn glyph(value: i32) -> char {
    if value > 0 {
        // Ids above 9 collapse to one glyph; rendering stays column-aligned
        char::from_digit(value.min(9) as u32, 10).unwrap_or('#')
    } else if value < 0 {
        '.'
    } else {
        ' '
    }
}

/// Render the board as a framed text grid
pub fn render(board: &Board) -> String {
    let cols = board.cols();
    let rule: String = vec!["-"; cols].join(" ");
    let mut out = String::new();
    for row in board.cells().rows() {
        let _ = writeln!(out, "{rule}");
        let line: Vec<String> = row.iter().map(|&value| glyph(value).to_string()).collect();
        let _ = writeln!(out, "{}", line.join("|"));
    }
    let _ = writeln!(out, "{rule}");
    out
}
