//! Terminal preview of a board snapshot.
//!
//! Diagnostics only: a snapshot is drawn into a small character framebuffer
//! and encoded as crossterm commands that the caller prints once. There is
//! no raw mode, no alternate screen and no input handling.
//!
//! - [`fb`]: styled character framebuffer
//! - [`board_view`]: maps a [`core::Board`] into a framebuffer
//! - [`renderer`]: encodes a framebuffer as ANSI bytes

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use chess_gif_core as core;
pub use chess_gif_types as types;

pub use board_view::{BoardView, GlyphSet};
pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use renderer::{encode_full_into, encode_plain};
