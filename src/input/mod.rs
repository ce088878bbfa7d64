//! Input parsing - turns raw prompt lines into typed values.
//!
//! The reference game died on malformed input; here every bad line maps to a
//! `ParseError` so the session can re-prompt instead.

use derive_more::{Display, Error};

use crate::types::Coord;

/// What went wrong with a line of input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    #[display("expected a number")]
    Empty,
    #[display("expected two numbers, got one")]
    MissingColumn,
    #[display("not a number: {text}")]
    InvalidNumber { text: String },
    #[display("board size must be at least 1")]
    SizeZero,
}

/// Parse the board size answer: one integer, at least 1.
pub fn parse_size(line: &str) -> Result<usize, ParseError> {
    let word = line.split_whitespace().next().ok_or(ParseError::Empty)?;
    let size = parse_number(word)?;
    if size == 0 {
        return Err(ParseError::SizeZero);
    }
    Ok(size)
}

/// Parse a move line: two whitespace-separated integers, row first.
///
/// Anything after the second number is ignored, matching the reference
/// prompt behavior. Bounds are checked by the game, not here.
pub fn parse_coord(line: &str) -> Result<Coord, ParseError> {
    let mut words = line.split_whitespace();
    // Parse tokens as they arrive: a lone bad word reports the bad number,
    // not a missing column.
    let row = parse_number(words.next().ok_or(ParseError::Empty)?)?;
    let col = parse_number(words.next().ok_or(ParseError::MissingColumn)?)?;
    Ok(Coord::new(row, col))
}

fn parse_number(word: &str) -> Result<usize, ParseError> {
    word.parse().map_err(|_| ParseError::InvalidNumber {
        text: word.to_string(),
    })
}
