//! Strictly TTT library - tic-tac-toe with generated win patterns
//!
//! Win conditions are derived, not listed: a straight line and a diagonal
//! are mirrored and rotated into every orientation, and the board engine
//! anchors each orientation at every cell to find completed lines.
//!
//! # Architecture
//!
//! - **Patterns**: shapes, symmetry transforms and orbits
//! - **Games**: the tic-tac-toe board engine
//! - **Console / TUI**: thin front-ends that translate input into engine calls
//!
//! # Example
//!
//! ```
//! use strictly_ttt::{Game, Player};
//!
//! let mut game = Game::new();
//! for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     assert!(game.place_piece(x, y));
//! }
//! assert!(game.is_finished());
//! assert_eq!(game.winner(), Some(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;
mod patterns;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, Frontend};

// Crate-level exports - Console front-end
pub use console::{ConsoleDriver, INVALID_COORDINATE, RETRY_MESSAGE, final_message, parse_coordinate};

// Crate-level exports - Terminal UI
pub use tui::{App, run_tui};

// Crate-level exports - Pattern library
pub use patterns::{
    Matrix, Offset, Shape, ShapeError, Transform, apply_matrix, default_patterns, mirror_images, orbit, rotations,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, BoardError, Cell, Coordinate, Game, GameStatus, Grid, PlaceError, Player, SEPARATOR,
    render_text, rules,
};
