//! Rasterized frames and the board style they are drawn with.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use crate::error::RenderError;
use crate::types::{BOARD_FILES, DARK_TILE_RGB, FRAME_SIZE, LIGHT_TILE_RGB, SPRITE_SIZE};

/// Colors and geometry of a rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStyle {
    /// Tile color where `x + y` is even
    pub light: Rgba<u8>,
    /// Tile color where `x + y` is odd
    pub dark: Rgba<u8>,
    /// Square canvas edge in pixels
    pub frame_size: u32,
    /// Edge of the sprites this style expects
    pub sprite_size: u32,
}

impl Default for BoardStyle {
    fn default() -> Self {
        let [lr, lg, lb] = LIGHT_TILE_RGB;
        let [dr, dg, db] = DARK_TILE_RGB;
        Self {
            light: Rgba([lr, lg, lb, 255]),
            dark: Rgba([dr, dg, db, 255]),
            frame_size: FRAME_SIZE,
            sprite_size: SPRITE_SIZE,
        }
    }
}

impl BoardStyle {
    pub fn tile_size(&self) -> u32 {
        self.frame_size / BOARD_FILES as u32
    }

    /// Checkerboard color of tile (x, y)
    #[inline(always)]
    pub fn tile_color(&self, x: u32, y: u32) -> Rgba<u8> {
        if (x + y) % 2 == 0 {
            self.light
        } else {
            self.dark
        }
    }
}

/// One rendered snapshot plus its position in the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    index: usize,
    image: RgbaImage,
}

impl Frame {
    pub fn new(index: usize, image: RgbaImage) -> Self {
        Self { index, image }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Dump file name, numbered from 0 in snapshot order
    pub fn file_name(&self) -> String {
        format!("image_{}.png", self.index)
    }

    /// Write this frame as `image_{index}.png` into `dir`.
    pub fn save_png(&self, dir: impl AsRef<Path>) -> Result<PathBuf, RenderError> {
        let path = dir.as_ref().join(self.file_name());
        self.image.save_with_format(&path, image::ImageFormat::Png)?;
        Ok(path)
    }
}
