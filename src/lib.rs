//! chess-gif (workspace facade crate).
//!
//! Re-exports the stage crates under stable paths
//! (`chess_gif::{types, notation, core, render, anim, term}`) and hosts the
//! [`pipeline`] that wires them together.

pub mod pipeline;

pub use chess_gif_anim as anim;
pub use chess_gif_core as core;
pub use chess_gif_notation as notation;
pub use chess_gif_render as render;
pub use chess_gif_term as term;
pub use chess_gif_types as types;
