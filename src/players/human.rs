//! Human player that reads coordinates from a line-oriented input.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Coordinate, Game};
use std::io::{self, BufRead, Cursor, Stdin, Stdout, Write};
use tracing::{debug, instrument};

/// Source of newline-terminated input.
///
/// Implemented for [`Stdin`] itself, which locks per call, so two human
/// players can share the console.
pub trait LineSource {
    /// Appends the next line to `buf`, returning the bytes read (0 at end of input).
    fn next_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for Stdin {
    fn next_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.read_line(buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn next_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Reads an unsigned integer, re-prompting until one is entered.
fn read_index<R: LineSource, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<usize, PlayerError> {
    write!(output, "{prompt}")?;
    output.flush()?;
    loop {
        let mut line = String::new();
        if input.next_line(&mut line)? == 0 {
            return Err(PlayerError::InputClosed);
        }
        match line.trim().parse::<usize>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                debug!(input = %line.trim(), "Rejected non-numeric input");
                write!(output, "Please enter a valid number: ")?;
                output.flush()?;
            }
        }
    }
}

/// Asks for a display name, falling back to `default` on blank input.
///
/// # Errors
///
/// Returns [`PlayerError::Io`] if the prompt cannot be written or input read.
#[instrument(skip(input, output))]
pub fn ask_name<R: LineSource, W: Write>(
    input: &mut R,
    output: &mut W,
    default: &str,
) -> Result<String, PlayerError> {
    write!(output, "Enter name for {default}: ")?;
    output.flush()?;
    let mut line = String::new();
    input.next_line(&mut line)?;
    let name = line.trim();
    if name.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(name.to_string())
    }
}

/// Human player answering row and column prompts.
///
/// Coordinates are passed to the engine as typed; the engine decides
/// whether they are legal.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> HumanPlayer<R, W> {
    /// Creates a human player over the given input and output.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl HumanPlayer<Stdin, Stdout> {
    /// Creates a human player on the console.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn make_move(&mut self, _game: &Game) -> Result<Coordinate, PlayerError> {
        let row = read_index(&mut self.input, &mut self.output, "Enter row: ")?;
        let col = read_index(&mut self.input, &mut self.output, "Enter column: ")?;
        debug!(row, col, "Human entered move");
        Ok(Coordinate::new(row, col))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_row_then_column() {
        let mut player = HumanPlayer::new("Alice", Cursor::new("1\n2\n"), Vec::new());
        let at = player.make_move(&Game::default()).unwrap();
        assert_eq!(at, Coordinate::new(1, 2));
        let prompts = String::from_utf8(player.output).unwrap();
        assert_eq!(prompts, "Enter row: Enter column: ");
    }

    #[test]
    fn test_reprompts_on_garbage() {
        let mut player = HumanPlayer::new("Alice", Cursor::new("x\n-1\n0\n 2 \n"), Vec::new());
        let at = player.make_move(&Game::default()).unwrap();
        assert_eq!(at, Coordinate::new(0, 2));
        let prompts = String::from_utf8(player.output).unwrap();
        assert_eq!(prompts.matches("Please enter a valid number: ").count(), 2);
    }

    #[test]
    fn test_input_closed() {
        let mut player = HumanPlayer::new("Alice", Cursor::new("1\n"), Vec::new());
        let err = player.make_move(&Game::default()).unwrap_err();
        assert!(matches!(err, PlayerError::InputClosed));
    }

    #[test]
    fn test_ask_name_uses_default_on_blank() {
        let mut out = Vec::new();
        let name = ask_name(&mut Cursor::new("   \n"), &mut out, "Player X").unwrap();
        assert_eq!(name, "Player X");
        assert_eq!(String::from_utf8(out).unwrap(), "Enter name for Player X: ");

        let name = ask_name(&mut Cursor::new("Bob\n"), &mut Vec::new(), "Player O").unwrap();
        assert_eq!(name, "Bob");
    }
}
