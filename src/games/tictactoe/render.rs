//! Fixed-format text rendering of the board.

use super::{Cell, Grid, Player, BOARD_SIZE};

/// Closing line printed under the grid.
pub const SEPARATOR: &str = "_______";

/// Renders the grid as three `|a|b|c|` rows and a closing separator.
///
/// Empty cells are `-`, X is `x`, O is `o`.
pub fn render_text(grid: &Grid) -> String {
    let mut out = String::with_capacity((BOARD_SIZE * 2 + 2) * BOARD_SIZE + SEPARATOR.len());
    for (at, cell) in grid.iter() {
        if at.x == 0 {
            out.push('|');
        }
        out.push(marker(cell));
        out.push('|');
        if at.x == BOARD_SIZE - 1 {
            out.push('\n');
        }
    }
    out.push_str(SEPARATOR);
    out
}

fn marker(cell: Cell) -> char {
    match cell {
        Cell::Empty => '-',
        Cell::Occupied(Player::X) => 'x',
        Cell::Occupied(Player::O) => 'o',
    }
}
