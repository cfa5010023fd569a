//! Tic-tac-toe board engine.

mod error;
mod game;
mod render;
pub mod rules;
mod types;

pub use error::{BoardError, PlaceError};
pub use game::Game;
pub use render::{SEPARATOR, render_text};
pub use types::{BOARD_SIZE, Cell, Coordinate, GameStatus, Grid, Player};
