//! Application state and logic.
//!
//! The app is a thin adapter: each cell acts as a selectable widget and
//! every selection becomes an engine call. No game rules live here.

use super::input::move_cursor;
use crate::console::final_message;
use crate::games::tictactoe::{Cell, Coordinate, Game, GameStatus, Player};
use crossterm::event::KeyCode;
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Coordinate,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        let game = Game::new();
        let status_message = turn_message(game.current_player());
        Self {
            game,
            cursor: Coordinate::new(1, 1),
            status_message,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The highlighted cell.
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the cell at `at` can still be selected.
    pub fn is_enabled(&self, at: Coordinate) -> bool {
        self.game.status() == GameStatus::InProgress
            && self.game.grid().get(at).is_some_and(Cell::is_empty)
    }

    /// Whether the cell at `at` is part of a completed line.
    pub fn is_highlighted(&self, at: Coordinate) -> bool {
        self.game.winning_cells().is_some_and(|cells| cells.contains(&at))
    }

    /// The symbol shown on a cell, empty when unplayed.
    pub fn label(&self, at: Coordinate) -> &'static str {
        match self.game.grid().get(at) {
            Some(Cell::Occupied(Player::X)) => "X",
            Some(Cell::Occupied(Player::O)) => "O",
            _ => "",
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    /// Selects the cell at `at`, placing the current player's piece.
    pub fn select(&mut self, at: Coordinate) {
        if !self.is_enabled(at) {
            debug!(%at, "Selection on disabled cell ignored");
            return;
        }

        if !self.game.place_at(at) {
            return;
        }

        self.status_message = if self.game.is_finished() {
            final_message(self.game.winner())
        } else {
            turn_message(self.game.current_player())
        };
    }

    /// Restarts the game and restores every cell.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.status_message = turn_message(self.game.current_player());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn turn_message(player: Player) -> String {
    format!("{}'s turn", player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_all(app: &mut App, cells: &[(usize, usize)]) {
        for &(x, y) in cells {
            app.select(Coordinate::new(x, y));
        }
    }

    #[test]
    fn test_select_places_and_disables() {
        let mut app = App::new();
        let at = Coordinate::new(0, 0);
        app.select(at);
        assert_eq!(app.label(at), "X");
        assert!(!app.is_enabled(at));
        assert_eq!(app.status_message(), "O's turn");
    }

    #[test]
    fn test_win_highlights_and_disables_all() {
        let mut app = App::new();
        select_all(&mut app, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(app.status_message(), "The winner is X!");
        assert!(app.is_highlighted(Coordinate::new(0, 1)));
        assert!(!app.is_highlighted(Coordinate::new(1, 1)));
        assert!(Coordinate::all().all(|at| !app.is_enabled(at)));
    }

    #[test]
    fn test_full_board_with_line_shows_draw() {
        let mut app = App::new();
        select_all(
            &mut app,
            &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (0, 2), (1, 2), (2, 1), (2, 2)],
        );

        assert_eq!(app.status_message(), "It's a draw!");
        assert!(Coordinate::all().all(|at| !app.is_highlighted(at) && !app.is_enabled(at)));
    }

    #[test]
    fn test_restart_restores_cells() {
        let mut app = App::new();
        select_all(&mut app, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        app.handle_key(KeyCode::Char('r'));

        assert!(Coordinate::all().all(|at| app.is_enabled(at) && app.label(at).is_empty()));
        assert!(!app.is_highlighted(Coordinate::new(0, 0)));
        assert_eq!(app.status_message(), "X's turn");
    }

    #[test]
    fn test_keys_move_and_select() {
        let mut app = App::new();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.label(Coordinate::new(0, 0)), "X");

        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
