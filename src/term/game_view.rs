//! GameView: maps a `Board` into grid text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Board;
use crate::types::Cell;

/// Render the board as the canonical ASCII grid.
///
/// A separator line of N ` ---` segments precedes every row and closes the
/// grid; rows are pipe-delimited with a blank for empty cells and the player
/// digit otherwise:
///
/// ```text
///  --- --- ---
/// | 1 |   | 2 |
///  --- --- ---
/// |   | 1 |   |
///  --- --- ---
/// |   |   | 2 |
///  --- --- ---
/// ```
pub fn render(board: &Board) -> String {
    let separator = " ---".repeat(board.size());
    let mut out = String::new();

    for row in board.rows() {
        out.push_str(&separator);
        out.push('\n');
        out.push('|');
        for cell in row {
            out.push(' ');
            out.push(cell_char(*cell));
            out.push_str(" |");
        }
        out.push('\n');
    }
    out.push_str(&separator);
    out.push('\n');
    out
}

fn cell_char(cell: Cell) -> char {
    match cell {
        Some(player) => player.marker(),
        None => ' ',
    }
}
