//! Interactive front-end: renders the board, reads moves in chess notation
//! and reports captures and errors.
//!
//! [`Shell::run`] is the "main loop" which reads the input stream until it is
//! exhausted.

use std::io::{BufRead, Write};

use itertools::Itertools;

use crate::boardgame::Grid;
use crate::chess::{ChessMatch, ChessPosition, PieceView};

/// Connects a [`ChessMatch`] with the input and output streams.
pub struct Shell<'a, R: BufRead, W: Write> {
    chess_match: ChessMatch,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Creates a shell driving given match over provided I/O.
    #[must_use]
    pub fn new(chess_match: ChessMatch, input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            chess_match,
            input,
            output,
        }
    }

    /// Reads source and target squares and performs moves until the input is
    /// exhausted.
    ///
    /// Invalid squares and rejected moves are reported and the loop continues
    /// with the next move.
    ///
    /// # Errors
    ///
    /// Only I/O failures are propagated.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "{}", render(&self.chess_match.pieces(), None))?;
            let Some(source) = self.prompt("Source")? else {
                break;
            };
            let source = match source.parse::<ChessPosition>() {
                Ok(square) => square,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                },
            };
            let moves = match self.chess_match.possible_moves(source) {
                Ok(moves) => moves,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                },
            };
            writeln!(
                self.output,
                "{}",
                render(&self.chess_match.pieces(), Some(&moves))
            )?;
            let Some(target) = self.prompt("Target")? else {
                break;
            };
            let outcome = target
                .parse::<ChessPosition>()
                .and_then(|target| self.chess_match.perform_move(source, target));
            match outcome {
                Ok(Some(captured)) => writeln!(self.output, "Captured: {captured}")?,
                Ok(None) => {},
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
        Ok(())
    }

    /// Consumes the shell and returns the match in its current state.
    #[must_use]
    pub fn into_match(self) -> ChessMatch {
        self.chess_match
    }

    /// Prints the prompt and reads a line. Returns [`None`] at the end of
    /// input.
    fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "\n{label}: ")?;
        self.output.flush()?;
        let mut buffer = Vec::new();
        if self.input.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(None);
        }
        writeln!(self.output)?;
        // Bytes that are not UTF-8 end up in a coordinate that fails to parse.
        Ok(Some(String::from_utf8_lossy(&buffer).into_owned()))
    }
}

/// Renders the board with ranks on the left and files at the bottom. Empty
/// squares are `-`. Squares marked in `moves` are `*` when empty and wrap the
/// piece in brackets when it can be captured.
#[must_use]
pub fn render(pieces: &Grid<Option<PieceView>>, moves: Option<&Grid<bool>>) -> String {
    let rows = pieces.iter_rows().enumerate().map(|(index, cells)| {
        let marks = moves.map(|moves| moves.row(index));
        let squares = cells.iter().enumerate().map(|(column, cell)| {
            let marked = marks.is_some_and(|marks| marks[column]);
            match cell {
                Some(view) if marked => format!("[{view}]"),
                Some(view) => view.to_string(),
                None if marked => "*".to_string(),
                None => "-".to_string(),
            }
        });
        format!("{} {}", pieces.rows() - index, squares.format(" "))
    });
    format!(
        "{}\n  {}",
        rows.format("\n"),
        ('a'..).take(pieces.columns()).format(" ")
    )
}
