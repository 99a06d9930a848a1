//! Board state engine - pure, deterministic, and testable
//!
//! This crate turns parsed turns into board snapshots. It has **zero
//! dependencies** on rendering or I/O:
//!
//! - **Pure**: `apply` returns a new board and never touches its input
//! - **Sequential**: snapshot *k* is derived from snapshot *k - 1*
//! - **Permissive**: no legality, ownership or turn-order checks
//!
//! # Module Structure
//!
//! - [`board`]: 64-cell immutable board snapshot
//! - [`game`]: `apply` / `fold` / `evaluate` and the [`Game`] container
//!
//! # Example
//!
//! ```
//! use chess_gif_core::{evaluate, Game};
//! use chess_gif_types::{Cell, MoveCommand, Position, Turn};
//!
//! let d1 = Position::from_algebraic("d1").unwrap();
//! let h1 = Position::from_algebraic("h1").unwrap();
//! let turn = Turn::new(vec![MoveCommand::Move { from: d1, to: h1 }]).unwrap();
//!
//! let snapshots = evaluate(&Game::new(vec![turn]));
//! assert_eq!(snapshots.len(), 2);
//! assert_eq!(snapshots[1].at(d1), Cell::Empty);
//! ```

pub mod board;
pub mod game;

pub use chess_gif_types as types;

pub use board::Board;
pub use game::{apply, evaluate, fold, initial_board, Game, Snapshots};
