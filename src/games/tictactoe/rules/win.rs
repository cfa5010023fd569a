//! Win detection by anchoring every pattern at every board cell.

use super::super::{Coordinate, Grid, Player};
use crate::patterns::Shape;
use std::collections::{BTreeSet, HashSet};
use tracing::{instrument, trace};

/// Places `shape` with its origin at `anchor`.
///
/// Returns `None` when any cell of the placement falls off the board.
pub fn anchored_cells(shape: &Shape, anchor: Coordinate) -> Option<Vec<Coordinate>> {
    let dx = i32::try_from(anchor.x).ok()?;
    let dy = i32::try_from(anchor.y).ok()?;
    shape
        .translate(dx, dy)
        .ok()?
        .offsets()
        .iter()
        .map(|o| Coordinate::checked(o.dx, o.dy))
        .collect()
}

/// Whether every cell in `cells` is held by `player`.
fn held_by(grid: &Grid, cells: &[Coordinate], player: Player) -> bool {
    cells.iter().all(|&at| grid.get(at).and_then(|c| c.player()) == Some(player))
}

/// Collects every cell of every fully occupied placement.
///
/// Each pattern is tried at every anchor; placements that leave the board
/// are skipped. X and O are checked independently and all matching cells
/// are unioned, so overlapping lines are all reported.
#[instrument(skip_all, fields(patterns = patterns.len()))]
pub fn winning_cells(grid: &Grid, patterns: &HashSet<Shape>) -> BTreeSet<Coordinate> {
    let mut winners = BTreeSet::new();

    for anchor in Coordinate::all() {
        for shape in patterns {
            let Some(cells) = anchored_cells(shape, anchor) else {
                continue;
            };
            if held_by(grid, &cells, Player::X) || held_by(grid, &cells, Player::O) {
                trace!(shape = %shape.name(), %anchor, "Placement fully occupied");
                winners.extend(cells);
            }
        }
    }

    winners
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;
    use crate::patterns::default_patterns;

    fn place(grid: &mut Grid, player: Player, cells: &[(usize, usize)]) {
        for &(x, y) in cells {
            grid.set(Coordinate::new(x, y), Cell::Occupied(player));
        }
    }

    fn coords(cells: &[(usize, usize)]) -> BTreeSet<Coordinate> {
        cells.iter().map(|&(x, y)| Coordinate::new(x, y)).collect()
    }

    #[test]
    fn test_anchored_cells_in_bounds() {
        let cells = anchored_cells(&Shape::horizontal_line(), Coordinate::new(0, 2));
        assert_eq!(cells, Some(vec![
            Coordinate::new(0, 2),
            Coordinate::new(1, 2),
            Coordinate::new(2, 2),
        ]));
    }

    #[test]
    fn test_anchored_cells_off_board() {
        assert_eq!(anchored_cells(&Shape::horizontal_line(), Coordinate::new(1, 0)), None);
        assert_eq!(anchored_cells(&Shape::diagonal_line(), Coordinate::new(0, 1)), None);
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert!(winning_cells(&Grid::new(), &default_patterns()).is_empty());
    }

    #[test]
    fn test_winner_row() {
        let mut grid = Grid::new();
        place(&mut grid, Player::X, &[(0, 1), (1, 1), (2, 1)]);
        assert_eq!(
            winning_cells(&grid, &default_patterns()),
            coords(&[(0, 1), (1, 1), (2, 1)])
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut grid = Grid::new();
        place(&mut grid, Player::O, &[(2, 0), (1, 1), (0, 2)]);
        assert_eq!(
            winning_cells(&grid, &default_patterns()),
            coords(&[(2, 0), (1, 1), (0, 2)])
        );
    }

    #[test]
    fn test_overlapping_lines_are_unioned() {
        let mut grid = Grid::new();
        place(&mut grid, Player::X, &[(0, 0), (1, 0), (2, 0), (0, 1), (0, 2)]);
        assert_eq!(
            winning_cells(&grid, &default_patterns()),
            coords(&[(0, 0), (1, 0), (2, 0), (0, 1), (0, 2)])
        );
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut grid = Grid::new();
        place(&mut grid, Player::X, &[(0, 0), (1, 0)]);
        place(&mut grid, Player::O, &[(2, 0)]);
        assert!(winning_cells(&grid, &default_patterns()).is_empty());
    }
}
