//! Draw detection logic for tic-tac-toe.

use super::super::{Cell, Grid};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.iter().all(|(_, cell)| cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Coordinate, Player};
    use super::super::win::winning_cells;
    use super::*;
    use crate::patterns::default_patterns;

    fn fill(rows: [&str; 3]) -> Grid {
        let mut grid = Grid::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, mark) in row.chars().enumerate() {
                let cell = match mark {
                    'x' => Cell::Occupied(Player::X),
                    'o' => Cell::Occupied(Player::O),
                    _ => Cell::Empty,
                };
                grid.set(Coordinate::new(x, y), cell);
            }
        }
        grid
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Grid::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&fill(["x--", "-o-", "---"])));
    }

    #[test]
    fn test_draw_detection() {
        let grid = fill(["xox", "oxx", "oxo"]);
        assert!(is_full(&grid));
        assert!(winning_cells(&grid, &default_patterns()).is_empty());
    }

    #[test]
    fn test_full_board_can_hold_a_line() {
        let grid = fill(["xxx", "oox", "xoo"]);
        assert!(is_full(&grid));
        assert!(!winning_cells(&grid, &default_patterns()).is_empty());
    }
}
