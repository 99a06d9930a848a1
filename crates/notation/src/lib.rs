//! Move notation parser
//!
//! The notation is line oriented:
//!
//! - each non-empty line is one turn
//! - a line holds one or more clauses separated by `;`
//! - a clause is whitespace-separated tokens `<tag> <arg>...`
//!
//! The only tag is `m <from> <to>`, e.g. `m e2 e4`. Line order and clause
//! order are kept exactly since later moves in a turn see earlier ones.
//!
//! # Example
//!
//! ```
//! use chess_gif_notation::parse;
//!
//! let turns = parse("m d1 h1\nm d3 d4; m d4 c4\n").unwrap();
//! assert_eq!(turns.len(), 2);
//! assert_eq!(turns[1].len(), 2);
//! assert_eq!(turns[1].to_string(), "m d3 d4; m d4 c4");
//! ```

use thiserror::Error;

use chess_gif_types::{MoveCommand, Position, Turn};

pub use chess_gif_types as types;

/// Notation errors. Both are deterministic input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Bad clause shape or unrecognized tag
    #[error("malformed move on line {line}: `{clause}` ({reason})")]
    MalformedMove {
        line: usize,
        clause: String,
        reason: &'static str,
    },

    /// Coordinate outside `a1`..`h8`
    #[error("invalid position `{0}`")]
    InvalidPosition(String),
}

/// Parse a two-character coordinate (`a`-`h` case-insensitive, `1`-`8`).
pub fn parse_position(token: &str) -> Result<Position, ParseError> {
    Position::from_algebraic(token).ok_or_else(|| ParseError::InvalidPosition(token.to_string()))
}

/// Parse notation text into turns.
pub fn parse(text: &str) -> Result<Vec<Turn>, ParseError> {
    let mut turns = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let moves = line
            .split(';')
            .map(|clause| parse_clause(i + 1, clause))
            .collect::<Result<Vec<_>, _>>()?;

        // split(';') on a non-empty line yields at least one clause.
        if let Some(turn) = Turn::new(moves) {
            turns.push(turn);
        }
    }

    Ok(turns)
}

fn parse_clause(line: usize, clause: &str) -> Result<MoveCommand, ParseError> {
    let malformed = |reason| ParseError::MalformedMove {
        line,
        clause: clause.trim().to_string(),
        reason,
    };

    let mut tokens = clause.split_whitespace();
    let tag = tokens.next().ok_or_else(|| malformed("empty clause"))?;
    let args: Vec<&str> = tokens.collect();

    match tag {
        "m" => match args.as_slice() {
            [from, to] => Ok(MoveCommand::Move {
                from: parse_position(from)?,
                to: parse_position(to)?,
            }),
            _ => Err(malformed("`m` takes exactly two coordinates")),
        },
        _ => Err(malformed("unknown move tag")),
    }
}
