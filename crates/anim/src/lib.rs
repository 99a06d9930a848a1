//! Animation assembler: ordered frames -> one looping GIF.
//!
//! The assembler is the barrier after the parallel render fan-out. It takes
//! every frame at once, checks the preconditions, and encodes the frames in
//! exactly the order given. It never re-sorts.
//!
//! # Defaults
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `frame_delay_ms` | 500 | Display time of every frame |
//! | `loop_count` | `Infinite` | How often the animation repeats |
//! | `quantize_speed` | 10 | GIF palette quantizer speed (1 best .. 30 fastest) |

use std::fs;
use std::path::Path;
use std::str::FromStr;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame as GifFrame};
use thiserror::Error;

use chess_gif_render::Frame;

pub use chess_gif_render as render;
pub use chess_gif_types as types;

use crate::types::DEFAULT_FRAME_DELAY_MS;

/// Default GIF quantizer speed
pub const DEFAULT_QUANTIZE_SPEED: i32 = 10;

/// Assembler errors
#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("cannot assemble an animation from zero frames")]
    EmptyFrameSequence,

    /// Frame `index` (position in the input) differs from frame 0
    #[error("frame {index} is {found:?}, expected {expected:?}")]
    DimensionMismatch {
        index: usize,
        expected: (u32, u32),
        found: (u32, u32),
    },

    #[error("gif encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// How often the animation plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopCount {
    #[default]
    Infinite,
    Finite(u16),
}

/// A loop count that is neither `infinite` nor a `u16`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid loop count: {0}")]
pub struct ParseLoopCountError(String);

/// Parse `infinite` / `0` or a repeat count
///
/// # Examples
///
/// ```
/// use chess_gif_anim::LoopCount;
///
/// assert_eq!("infinite".parse(), Ok(LoopCount::Infinite));
/// assert_eq!("0".parse(), Ok(LoopCount::Infinite));
/// assert_eq!("3".parse(), Ok(LoopCount::Finite(3)));
/// assert!("forever?".parse::<LoopCount>().is_err());
/// ```
impl FromStr for LoopCount {
    type Err = ParseLoopCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "infinite" | "inf" | "0" => Ok(LoopCount::Infinite),
            other => other
                .parse::<u16>()
                .map(LoopCount::Finite)
                .map_err(|_| ParseLoopCountError(s.to_string())),
        }
    }
}

impl LoopCount {
    fn to_repeat(self) -> Repeat {
        match self {
            LoopCount::Infinite => Repeat::Infinite,
            LoopCount::Finite(n) => Repeat::Finite(n),
        }
    }
}

/// Timing and encoding options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationOptions {
    pub frame_delay_ms: u32,
    pub loop_count: LoopCount,
    pub quantize_speed: i32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            loop_count: LoopCount::Infinite,
            quantize_speed: DEFAULT_QUANTIZE_SPEED,
        }
    }
}

/// An encoded animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    bytes: Vec<u8>,
    frame_count: usize,
    dimensions: (u32, u32),
    options: AnimationOptions,
}

impl Animation {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    pub fn options(&self) -> &AnimationOptions {
        &self.options
    }

    /// Write the GIF to `path`. The parent directory must exist.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), AssembleError> {
        fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// Encode `frames`, in the given order, as one GIF.
pub fn assemble(frames: Vec<Frame>, options: &AnimationOptions) -> Result<Animation, AssembleError> {
    let expected = frames
        .first()
        .map(Frame::dimensions)
        .ok_or(AssembleError::EmptyFrameSequence)?;

    if let Some((index, frame)) = frames
        .iter()
        .enumerate()
        .find(|(_, f)| f.dimensions() != expected)
    {
        return Err(AssembleError::DimensionMismatch {
            index,
            expected,
            found: frame.dimensions(),
        });
    }

    let frame_count = frames.len();
    let delay = Delay::from_numer_denom_ms(options.frame_delay_ms, 1);
    let mut bytes = Vec::new();
    {
        // The trailer is written when the encoder drops.
        let mut encoder = GifEncoder::new_with_speed(&mut bytes, options.quantize_speed.clamp(1, 30));
        encoder.set_repeat(options.loop_count.to_repeat())?;
        for frame in frames {
            encoder.encode_frame(GifFrame::from_parts(frame.into_image(), 0, 0, delay))?;
        }
    }

    Ok(Animation {
        bytes,
        frame_count,
        dimensions: expected,
        options: *options,
    })
}
