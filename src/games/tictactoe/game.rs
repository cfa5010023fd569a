//! Board engine for tic-tac-toe.
//!
//! The engine owns the grid and turn order. Win detection asks the
//! pattern library for the derived win shapes on every check and scans
//! every anchored placement, see [`rules::winning_cells`].

use super::error::{BoardError, PlaceError};
use super::render::render_text;
use super::rules;
use super::types::{Cell, Coordinate, GameStatus, Grid, Player};
use crate::patterns::default_patterns;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// State is mutated by [`place_piece`](Self::place_piece) and finalized by
/// the first [`is_finished`](Self::is_finished) call that detects a win or
/// a draw. After that the game is frozen until [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    current_player: Player,
    game_over: bool,
    winner: Option<Player>,
    winning_cells: Option<BTreeSet<Coordinate>>,
    history: Vec<Coordinate>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            current_player: Player::X,
            game_over: false,
            winner: None,
            winning_cells: None,
            history: Vec::new(),
        }
    }

    /// Places the current player's piece at `(x, y)`.
    ///
    /// Returns `false` without changing anything if the game is over, the
    /// coordinate is off the board, or the cell is taken.
    pub fn place_piece(&mut self, x: i32, y: i32) -> bool {
        self.try_place_piece(x, y).is_ok()
    }

    /// Places the current player's piece at a board coordinate.
    ///
    /// Same rules as [`place_piece`](Self::place_piece).
    pub fn place_at(&mut self, at: Coordinate) -> bool {
        let (Ok(x), Ok(y)) = (i32::try_from(at.x), i32::try_from(at.y)) else {
            debug!(%at, "Coordinate does not fit the board");
            return false;
        };
        self.place_piece(x, y)
    }

    /// Like [`place_piece`](Self::place_piece), but reports why a
    /// placement was refused.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_place_piece(&mut self, x: i32, y: i32) -> Result<Coordinate, PlaceError> {
        let at = self.validate(x, y).inspect_err(|e| debug!(error = %e, "Placement rejected"))?;

        self.grid.set(at, Cell::Occupied(self.current_player));
        self.history.push(at);
        debug!(%at, "Piece placed");
        self.current_player = self.current_player.opponent();

        Ok(at)
    }

    fn validate(&self, x: i32, y: i32) -> Result<Coordinate, PlaceError> {
        if self.game_over {
            return Err(PlaceError::GameOver);
        }
        let at = Coordinate::checked(x, y).ok_or(PlaceError::OutOfRange { x, y })?;
        if !self.grid.is_empty(at) {
            return Err(PlaceError::Occupied { x, y });
        }
        Ok(at)
    }

    /// Whether the game has ended, finalizing the result on first detection.
    ///
    /// Once this returns `true` it keeps returning `true` and the winner and
    /// winning cells no longer change. A full board is a draw even when the
    /// last piece completed a line; lines are only scanned before that.
    #[instrument(skip(self))]
    pub fn is_finished(&mut self) -> bool {
        if self.game_over {
            return true;
        }

        if rules::is_full(&self.grid) {
            self.winner = None;
            self.game_over = true;
            info!("Game drawn");
            return true;
        }

        let cells = rules::winning_cells(&self.grid, &default_patterns());
        if let Some(&first) = cells.first() {
            self.winner = self.grid.get(first).and_then(Cell::player);
            self.game_over = true;
            info!(winner = ?self.winner, cells = cells.len(), "Game won");
            self.winning_cells = Some(cells);
            return true;
        }

        false
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The winner once finalized. `None` for a draw or an unfinished game.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Every cell of every completed line, once a win is finalized.
    pub fn winning_cells(&self) -> Option<&BTreeSet<Coordinate>> {
        self.winning_cells.as_ref()
    }

    /// The cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] when `(x, y)` is off the board.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, BoardError> {
        Coordinate::checked(x, y)
            .and_then(|at| self.grid.get(at))
            .ok_or(BoardError::OutOfRange { x, y })
    }

    /// Restores a fresh game: empty board, X to move, nothing finalized.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }

    /// Fixed-format text view of the board.
    pub fn render_text(&self) -> String {
        render_text(&self.grid)
    }

    /// The board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Successful placements, oldest first.
    pub fn history(&self) -> &[Coordinate] {
        &self.history
    }

    /// Empty cells in row-major order, or none once the game is over.
    pub fn available_moves(&self) -> Vec<Coordinate> {
        if self.game_over {
            return Vec::new();
        }
        self.grid
            .iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(at, _)| at)
            .collect()
    }

    /// Status as last finalized. Does not run detection itself.
    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.winner) {
            (false, _) => GameStatus::InProgress,
            (true, Some(player)) => GameStatus::Won(player),
            (true, None) => GameStatus::Draw,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Game, moves: &[(i32, i32)]) {
        for &(x, y) in moves {
            assert!(game.place_piece(x, y), "move ({x}, {y}) should be legal");
        }
    }

    #[test]
    fn test_new_game() {
        let mut game = Game::new();
        assert_eq!(game.current_player(), Player::X);
        assert!(!game.is_finished());
        assert_eq!(game.winner(), None);
        assert_eq!(game.winning_cells(), None);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_place_switches_player() {
        let mut game = Game::new();
        assert!(game.place_piece(1, 1));
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.cell_at(1, 1), Ok(Cell::Occupied(Player::X)));
    }

    #[test]
    fn test_try_place_reports_reason() {
        let mut game = Game::new();
        assert_eq!(game.try_place_piece(3, 0), Err(PlaceError::OutOfRange { x: 3, y: 0 }));
        assert_eq!(game.try_place_piece(0, 0), Ok(Coordinate::new(0, 0)));
        assert_eq!(game.try_place_piece(0, 0), Err(PlaceError::Occupied { x: 0, y: 0 }));
    }

    #[test]
    fn test_place_at_coordinate() {
        let mut game = Game::new();
        assert!(game.place_at(Coordinate::new(2, 1)));
        assert_eq!(game.cell_at(2, 1), Ok(Cell::Occupied(Player::X)));
        assert!(!game.place_at(Coordinate::new(2, 1)));
        assert!(!game.place_at(Coordinate::new(3, 0)));
        assert!(!game.place_at(Coordinate::new(usize::MAX, 0)));
        assert_eq!(game.history(), &[Coordinate::new(2, 1)]);
    }

    #[test]
    fn test_rejected_placement_leaves_state() {
        let mut game = Game::new();
        play(&mut game, &[(0, 0)]);
        let before = game.clone();

        assert!(!game.place_piece(0, 0));
        assert!(!game.place_piece(-1, 2));
        assert_eq!(game.grid(), before.grid());
        assert_eq!(game.current_player(), before.current_player());
        assert_eq!(game.history(), before.history());
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut game = Game::new();
        // x o x / x o o / o x x
        play(&mut game, &[
            (0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2), (2, 2),
        ]);
        assert!(game.is_finished());
        assert_eq!(game.winner(), None);
        assert_eq!(game.winning_cells(), None);
        assert_eq!(game.status(), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_is_draw_even_with_line() {
        let mut game = Game::new();
        // x o x / o x o / o x x with X taking (2, 2) last
        play(&mut game, &[
            (0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (0, 2), (1, 2), (2, 1), (2, 2),
        ]);
        assert!(game.is_finished());
        assert_eq!(game.winner(), None);
        assert_eq!(game.winning_cells(), None);
        assert_eq!(game.status(), GameStatus::Draw);
    }

    #[test]
    fn test_line_before_full_board_is_win() {
        let mut game = Game::new();
        play(&mut game, &[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]);
        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Player::X));
        let expected: BTreeSet<_> =
            [(0, 0), (1, 1), (2, 2)].map(|(x, y)| Coordinate::new(x, y)).into();
        assert_eq!(game.winning_cells(), Some(&expected));
    }

    #[test]
    fn test_finalized_result_is_frozen() {
        let mut game = Game::new();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(game.is_finished());
        assert!(!game.place_piece(2, 2));
        assert_eq!(game.try_place_piece(2, 2), Err(PlaceError::GameOver));
        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Player::X));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut game = Game::new();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(game.is_finished());

        game.reset();
        assert_eq!(game.current_player(), Player::X);
        assert!(!game.is_finished());
        assert!(game.history().is_empty());
        assert_eq!(game.available_moves().len(), 9);
        assert_eq!(game.winning_cells(), None);
    }

    #[test]
    fn test_available_moves_empty_after_game_over() {
        let mut game = Game::new();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(game.available_moves().len(), 4);
        assert!(game.is_finished());
        assert!(game.available_moves().is_empty());
    }

    #[test]
    fn test_status_after_win() {
        let mut game = Game::new();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(game.status(), GameStatus::InProgress);
        game.is_finished();
        assert_eq!(game.status(), GameStatus::Won(Player::X));
    }
}
