//! Board state engine
//!
//! `apply` maps one board and one move to the next board, `fold` runs a turn,
//! and `evaluate` walks a whole game. Each step reads the previous step's
//! output, so evaluation is strictly sequential.

use crate::board::Board;
use crate::types::{Cell, MoveCommand, Turn};

/// Standard starting position
pub fn initial_board() -> Board {
    Board::initial()
}

/// Apply one move, returning a new board.
///
/// No legality, ownership or occupancy check: moving from an empty square
/// carries the empty marker to the destination.
pub fn apply(board: &Board, mv: &MoveCommand) -> Board {
    match *mv {
        MoveCommand::Move { from, to } => board
            .with_cell(to, board.at(from))
            .with_cell(from, Cell::Empty),
    }
}

/// Apply every move of a turn in order; each move sees the previous result.
pub fn fold(board: &Board, turn: &Turn) -> Board {
    turn.iter().fold(*board, |b, mv| apply(&b, mv))
}

/// A parsed game: starting board plus turns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    initial: Board,
    turns: Vec<Turn>,
}

impl Game {
    /// Game starting from the standard position
    pub fn new(turns: Vec<Turn>) -> Self {
        Self::with_initial(initial_board(), turns)
    }

    pub fn with_initial(initial: Board, turns: Vec<Turn>) -> Self {
        Self { initial, turns }
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Lazily yields the initial board, then the board after each turn.
    pub fn snapshots(&self) -> Snapshots<'_> {
        Snapshots {
            current: Some(self.initial),
            turns: self.turns.iter(),
        }
    }
}

/// Iterator returned by [`Game::snapshots`]
pub struct Snapshots<'a> {
    current: Option<Board>,
    turns: std::slice::Iter<'a, Turn>,
}

impl Iterator for Snapshots<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        let out = self.current.take()?;
        if let Some(turn) = self.turns.next() {
            self.current = Some(fold(&out, turn));
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.current.is_some() {
            self.turns.len() + 1
        } else {
            0
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for Snapshots<'_> {}

/// All snapshots of a game: `turns.len() + 1` boards, initial board first.
pub fn evaluate(game: &Game) -> Vec<Board> {
    game.snapshots().collect()
}
