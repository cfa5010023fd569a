//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Grid`](super::Grid). Rules are separated from
//! the engine so they can be evaluated without touching game state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{anchored_cells, winning_cells};
