//! Error types for board access and piece placement.

use derive_more::{Display, Error};

/// Why a placement was refused.
///
/// [`Game::place_piece`](super::Game::place_piece) folds all of these into
/// `false`; [`Game::try_place_piece`](super::Game::try_place_piece) keeps
/// the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// The game has already been finalized.
    #[display("Game is already over")]
    GameOver,

    /// The coordinate is not on the board.
    #[display("Position ({}, {}) is off the board", x, y)]
    OutOfRange {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
    },

    /// The target cell already holds a piece.
    #[display("Position ({}, {}) is already occupied", x, y)]
    Occupied {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
    },
}

/// Error reading board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The coordinate is not on the board.
    #[display("Index ({}, {}) doesn't exist", x, y)]
    OutOfRange {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
    },
}
