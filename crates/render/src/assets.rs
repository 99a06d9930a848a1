//! Sprite assets: one decoded RGBA image per (kind, color).
//!
//! Sprites are normalized to a fixed square size once, when the set is built,
//! and then shared read-only by every render call.

use std::fmt;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::RenderError;
use crate::types::{Color, Piece, PieceKind, SPRITE_SIZE};

/// Number of distinct sprite keys (6 kinds x 2 colors)
pub const SPRITE_COUNT: usize = 12;

/// Key of a sprite: piece kind plus color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteKey {
    pub kind: PieceKind,
    pub color: Color,
}

impl SpriteKey {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Every key, white first
    pub fn all() -> impl Iterator<Item = SpriteKey> {
        Color::ALL
            .into_iter()
            .flat_map(|color| PieceKind::ALL.into_iter().map(move |kind| Self::new(kind, color)))
    }

    #[inline(always)]
    fn slot(&self) -> usize {
        let color = match self.color {
            Color::White => 0,
            Color::Black => 1,
        };
        color * PieceKind::ALL.len() + self.kind as usize
    }

    /// File name in a sprite directory, e.g. `Chess_qlt60.png` for the white queen.
    ///
    /// `l` is the light (white) set, `d` the dark (black) set.
    pub fn file_name(&self) -> String {
        let shade = match self.color {
            Color::White => 'l',
            Color::Black => 'd',
        };
        format!("Chess_{}{}t60.png", self.kind.letter(), shade)
    }
}

impl From<Piece> for SpriteKey {
    fn from(piece: Piece) -> Self {
        Self::new(piece.kind, piece.color)
    }
}

impl fmt::Display for SpriteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color.as_str(), self.kind.as_str())
    }
}

/// Decoded, size-normalized sprites.
#[derive(Debug, Clone)]
pub struct SpriteSet {
    sprite_size: u32,
    sprites: [Option<RgbaImage>; SPRITE_COUNT],
}

impl SpriteSet {
    /// An empty set; every lookup misses.
    pub fn new(sprite_size: u32) -> Self {
        Self {
            sprite_size,
            sprites: std::array::from_fn(|_| None),
        }
    }

    /// Build from in-memory images, resizing each to `sprite_size`.
    ///
    /// Keys not supplied stay missing; a repeated key keeps the last image.
    pub fn from_images<I>(images: I, sprite_size: u32) -> Self
    where
        I: IntoIterator<Item = (SpriteKey, RgbaImage)>,
    {
        let mut set = Self::new(sprite_size);
        for (key, image) in images {
            set.insert(key, image);
        }
        set
    }

    /// Load all 12 sprites from `dir` using [`SpriteKey::file_name`].
    pub fn load_dir(dir: impl AsRef<Path>, sprite_size: u32) -> Result<Self, RenderError> {
        let dir = dir.as_ref();
        let mut set = Self::new(sprite_size);
        for key in SpriteKey::all() {
            let path = dir.join(key.file_name());
            if !path.is_file() {
                return Err(RenderError::MissingAsset(key));
            }
            let image = image::open(&path)?.to_rgba8();
            set.insert(key, image);
        }
        Ok(set)
    }

    /// Load from `dir` with the default sprite size.
    pub fn load_default(dir: impl AsRef<Path>) -> Result<Self, RenderError> {
        Self::load_dir(dir, SPRITE_SIZE)
    }

    fn insert(&mut self, key: SpriteKey, image: RgbaImage) {
        let image = if image.dimensions() == (self.sprite_size, self.sprite_size) {
            image
        } else {
            imageops::resize(
                &image,
                self.sprite_size,
                self.sprite_size,
                FilterType::CatmullRom,
            )
        };
        self.sprites[key.slot()] = Some(image);
    }

    pub fn get(&self, key: SpriteKey) -> Option<&RgbaImage> {
        self.sprites[key.slot()].as_ref()
    }

    pub fn sprite_size(&self) -> u32 {
        self.sprite_size
    }

    /// Number of keys that have a sprite
    pub fn len(&self) -> usize {
        self.sprites.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.len() == SPRITE_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_sprite_keys_are_distinct() {
        let keys: Vec<_> = SpriteKey::all().collect();
        assert_eq!(keys.len(), SPRITE_COUNT);
        let mut slots: Vec<_> = keys.iter().map(|k| k.slot()).collect();
        slots.sort_unstable();
        assert_eq!(slots, (0..SPRITE_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_file_names_follow_sprite_pack() {
        assert_eq!(
            SpriteKey::new(PieceKind::Queen, Color::White).file_name(),
            "Chess_qlt60.png"
        );
        assert_eq!(
            SpriteKey::new(PieceKind::Knight, Color::Black).file_name(),
            "Chess_ndt60.png"
        );
    }

    #[test]
    fn test_from_images_normalizes_size() {
        let key = SpriteKey::new(PieceKind::Rook, Color::Black);
        let set = SpriteSet::from_images(
            [(key, RgbaImage::from_pixel(60, 60, Rgba([1, 2, 3, 255])))],
            90,
        );
        assert_eq!(set.len(), 1);
        assert!(!set.is_complete());
        assert_eq!(set.get(key).map(|s| s.dimensions()), Some((90, 90)));
        assert!(set.get(SpriteKey::new(PieceKind::Rook, Color::White)).is_none());
    }

    #[test]
    fn test_load_dir_reports_missing_file() {
        let dir = std::env::temp_dir().join("chess-gif-missing-sprites");
        let _ = std::fs::create_dir_all(&dir);
        match SpriteSet::load_dir(&dir, 90) {
            Err(RenderError::MissingAsset(key)) => {
                assert_eq!(key, SpriteKey::new(PieceKind::Pawn, Color::White))
            }
            other => panic!("expected MissingAsset, got {:?}", other.map(|s| s.len())),
        }
    }
}
