//! Cursor movement for keyboard navigation.

use crate::games::tictactoe::{BOARD_SIZE, Coordinate};
use crossterm::event::KeyCode;

/// Moves cursor based on arrow keys. Stops at the board edges.
pub fn move_cursor(cursor: Coordinate, key: KeyCode) -> Coordinate {
    let last = BOARD_SIZE - 1;
    match key {
        KeyCode::Right => Coordinate::new((cursor.x + 1).min(last), cursor.y),
        KeyCode::Left => Coordinate::new(cursor.x.saturating_sub(1), cursor.y),
        KeyCode::Down => Coordinate::new(cursor.x, (cursor.y + 1).min(last)),
        KeyCode::Up => Coordinate::new(cursor.x, cursor.y.saturating_sub(1)),
        // No change for other keys
        _ => cursor,
    }
}
