//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// The occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Whether nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A board coordinate. `x` is the column, `y` the row, both in `0..BOARD_SIZE`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({}, {})", x, y)]
pub struct Coordinate {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Coordinate {
    /// Creates a coordinate without bounds checking.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Converts signed coordinates, returning `None` when off the board.
    pub fn checked(x: i32, y: i32) -> Option<Self> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < BOARD_SIZE && y < BOARD_SIZE).then_some(Self { x, y })
    }

    /// All board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coordinate::new(x, y)))
    }
}

/// Fixed 3x3 cell storage. Sole owner of the cell state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid {
    /// Cells indexed `[y][x]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `at`.
    pub fn get(&self, at: Coordinate) -> Option<Cell> {
        self.cells.get(at.y)?.get(at.x).copied()
    }

    /// Sets the cell at `at`. Returns `false` when `at` is off the board.
    pub fn set(&mut self, at: Coordinate, cell: Cell) -> bool {
        match self.cells.get_mut(at.y).and_then(|row| row.get_mut(at.x)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Whether the cell at `at` is empty. Off-board cells are not empty.
    pub fn is_empty(&self, at: Coordinate) -> bool {
        matches!(self.get(at), Some(Cell::Empty))
    }

    /// Iterates over `(coordinate, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        Coordinate::all().filter_map(move |at| self.get(at).map(|cell| (at, cell)))
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}
