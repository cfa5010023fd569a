//! Line-oriented console front-end.
//!
//! Reads a column and a row on separate lines each turn and prints the
//! board after every attempt. Works over any reader and writer so a whole
//! session can be scripted.

use crate::games::tictactoe::{Game, Player};
use crate::patterns::default_patterns;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Coordinate used for input that is not a number. Always off the board.
pub const INVALID_COORDINATE: i32 = -1;

/// Message printed when a placement is refused.
pub const RETRY_MESSAGE: &str = "That position is marked / unavailable, please try again.";

/// Final line for a finished game.
pub fn final_message(winner: Option<Player>) -> String {
    match winner {
        Some(player) => format!("The winner is {}!", player),
        None => "It's a draw!".to_string(),
    }
}

/// Parses one coordinate, mapping anything non-numeric to
/// [`INVALID_COORDINATE`].
pub fn parse_coordinate(line: &str) -> i32 {
    line.trim().parse().unwrap_or(INVALID_COORDINATE)
}

/// Drives a [`Game`] from a line-oriented input stream.
#[derive(Debug)]
pub struct ConsoleDriver<R, W> {
    game: Game,
    input: R,
    output: W,
    show_patterns: bool,
}

impl<R: BufRead, W: Write> ConsoleDriver<R, W> {
    /// Creates a driver with a fresh game.
    pub fn new(input: R, output: W) -> Self {
        Self {
            game: Game::new(),
            input,
            output,
            show_patterns: false,
        }
    }

    /// Prints the derived win patterns before the first turn.
    pub fn with_patterns(mut self, show: bool) -> Self {
        self.show_patterns = show;
        self
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until the game finishes and returns the winner.
    ///
    /// # Errors
    ///
    /// Fails if the input ends before the game does or on any I/O error.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Option<Player>> {
        writeln!(self.output, "This is a new TTT game")?;
        if self.show_patterns {
            self.print_patterns()?;
        }

        while !self.game.is_finished() {
            let player = self.game.current_player();
            writeln!(self.output, "It's {}'s turn, please type position: ", player)?;
            let x = self.read_coordinate()?;
            let y = self.read_coordinate()?;

            if !self.game.place_piece(x, y) {
                debug!(x, y, "Console placement refused");
                writeln!(self.output, "{}", RETRY_MESSAGE)?;
            }

            writeln!(self.output, "{}", self.game.render_text())?;
        }

        let winner = self.game.winner();
        info!(?winner, "Console game finished");
        writeln!(self.output, "{}", final_message(winner))?;
        self.output.flush()?;
        Ok(winner)
    }

    fn read_coordinate(&mut self) -> Result<i32> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read position")?;
        if read == 0 {
            bail!("Input closed before the game finished");
        }
        Ok(parse_coordinate(&line))
    }

    fn print_patterns(&mut self) -> Result<()> {
        let mut lines: Vec<String> = default_patterns().iter().map(ToString::to_string).collect();
        lines.sort();
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate(" 2\n"), 2);
        assert_eq!(parse_coordinate("two"), INVALID_COORDINATE);
        assert_eq!(parse_coordinate(""), INVALID_COORDINATE);
    }

    #[test]
    fn test_final_message() {
        assert_eq!(final_message(None), "It's a draw!");
        assert_eq!(final_message(Some(Player::O)), "The winner is O!");
    }

    #[test]
    fn test_closed_input_is_error() {
        let mut output = Vec::new();
        let mut driver = ConsoleDriver::new("0\n".as_bytes(), &mut output);
        assert!(driver.run().is_err());
    }

    #[test]
    fn test_patterns_printed_first() {
        let input = "0\n0\n1\n0\n0\n1\n1\n1\n0\n2\n";
        let mut output = Vec::new();
        let winner = ConsoleDriver::new(input.as_bytes(), &mut output)
            .with_patterns(true)
            .run()
            .unwrap();
        assert_eq!(winner, Some(Player::X));

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "This is a new TTT game");
        assert_eq!(lines[1..5].iter().filter(|l| l.contains(" - (")).count(), 4);
    }
}
