use thiserror::Error;

use crate::assets::SpriteKey;

/// Renderer errors. None are retried.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A board cell needs a sprite the set does not have
    #[error("missing sprite for {0}")]
    MissingAsset(SpriteKey),

    /// The sprite set was normalized to a different edge than the style asks for
    #[error("sprites are {found}px, style expects {expected}px")]
    SpriteSizeMismatch { expected: u32, found: u32 },

    /// Sprite decoding or frame encoding failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
