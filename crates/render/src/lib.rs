//! Frame renderer: board snapshot -> RGBA image.
//!
//! A frame is a square canvas split into an 8x8 checkerboard. Every occupied
//! cell gets its piece sprite composited, centered in the tile, with the
//! sprite's own transparency preserved.
//!
//! Sprites live in a [`SpriteSet`] that is decoded and resized once, then
//! borrowed by every render call. Nothing here mutates shared state, so
//! [`render_all`] fans the snapshots out over rayon's thread pool and
//! collects the frames back in snapshot order.
//!
//! # Example
//!
//! ```
//! use chess_gif_render::{render, BoardStyle, SpriteSet};
//! use chess_gif_core::Board;
//!
//! let style = BoardStyle { frame_size: 160, sprite_size: 20, ..BoardStyle::default() };
//! let frame = render(&Board::empty(), &SpriteSet::new(20), &style).unwrap();
//! assert_eq!(frame.dimensions(), (160, 160));
//! ```

pub mod assets;
pub mod error;
pub mod frame;
pub mod renderer;

pub use chess_gif_core as core;
pub use chess_gif_types as types;

pub use assets::{SpriteKey, SpriteSet, SPRITE_COUNT};
pub use error::RenderError;
pub use frame::{BoardStyle, Frame};
pub use renderer::{render, render_all, render_indexed};
