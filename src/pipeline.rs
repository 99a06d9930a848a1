//! End-to-end pipeline: notation -> snapshots -> frames -> GIF.
//!
//! Stages run in order and the first error aborts the run:
//!
//! 1. parse the notation into turns
//! 2. fold the turns into board snapshots (sequential)
//! 3. render every snapshot (parallel, order-preserving)
//! 4. optionally dump each frame as `image_{i}.png`
//! 5. assemble the frames into one GIF and write it
//!
//! # Environment Variables
//!
//! - `CHESS_GIF_SPRITES_DIR`: sprite directory (default: "./sprites")
//! - `CHESS_GIF_OUTPUT`: GIF path (default: "./output/output.gif")
//! - `CHESS_GIF_FRAMES_DIR`: dump frames here when set
//! - `CHESS_GIF_FRAME_SIZE`: frame edge in pixels (default: 720)
//! - `CHESS_GIF_DELAY_MS`: per-frame delay (default: 500)
//! - `CHESS_GIF_LOOP`: `infinite` or a repeat count (default: infinite)
//!
//! Command-line flags override the environment.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::anim::{assemble, Animation, AnimationOptions, LoopCount, DEFAULT_QUANTIZE_SPEED};
use crate::core::{evaluate, Board, Game};
use crate::notation::parse;
use crate::render::{render_all, BoardStyle, SpriteSet};
use crate::types::{BOARD_FILES, DEFAULT_FRAME_DELAY_MS, FRAME_SIZE};

/// Game rendered when no notation is supplied.
pub const DEMO_NOTATION: &str = "m d1 h1
m e2 e3
m e3 d3
m d3 d4; m d4 c4
";

/// Everything a run needs besides the notation text and the sprites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub sprites_dir: PathBuf,
    pub output: PathBuf,
    pub frames_dir: Option<PathBuf>,
    /// Notation file; None reads stdin
    pub moves_file: Option<PathBuf>,
    pub frame_size: u32,
    pub frame_delay_ms: u32,
    pub loop_count: LoopCount,
    pub preview: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sprites_dir: PathBuf::from("./sprites"),
            output: PathBuf::from("./output/output.gif"),
            frames_dir: None,
            moves_file: None,
            frame_size: FRAME_SIZE,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            loop_count: LoopCount::Infinite,
            preview: false,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset, empty or unparsable
    /// values fall back to the defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };
        let defaults = Self::default();

        Self {
            sprites_dir: var("CHESS_GIF_SPRITES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.sprites_dir),
            output: var("CHESS_GIF_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output),
            frames_dir: var("CHESS_GIF_FRAMES_DIR").map(PathBuf::from),
            moves_file: None,
            frame_size: var("CHESS_GIF_FRAME_SIZE")
                .and_then(|s| s.parse().ok())
                .filter(|&n: &u32| n >= BOARD_FILES as u32)
                .unwrap_or(defaults.frame_size),
            frame_delay_ms: var("CHESS_GIF_DELAY_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.frame_delay_ms),
            loop_count: var("CHESS_GIF_LOOP")
                .and_then(|s| s.parse::<LoopCount>().ok())
                .unwrap_or(defaults.loop_count),
            preview: false,
        }
    }

    /// Apply command-line flags on top of this config.
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            let mut value = || {
                i += 1;
                args.get(i)
                    .cloned()
                    .ok_or_else(|| anyhow!("missing value for {}", flag))
            };
            match flag {
                "--sprites" => self.sprites_dir = PathBuf::from(value()?),
                "--output" | "-o" => self.output = PathBuf::from(value()?),
                "--frames-dir" => self.frames_dir = Some(PathBuf::from(value()?)),
                "--size" => {
                    let v = value()?;
                    self.frame_size = v
                        .parse::<u32>()
                        .ok()
                        .filter(|&n| n >= BOARD_FILES as u32)
                        .ok_or_else(|| anyhow!("invalid --size value: {}", v))?;
                }
                "--delay" => {
                    let v = value()?;
                    self.frame_delay_ms = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --delay value: {}", v))?;
                }
                "--loop" => {
                    let v = value()?;
                    self.loop_count = v
                        .parse::<LoopCount>()
                        .map_err(|_| anyhow!("invalid --loop value: {}", v))?;
                }
                "--preview" => self.preview = true,
                other if other.starts_with('-') && other != "-" => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
                path => {
                    if self.moves_file.is_some() {
                        return Err(anyhow!("unexpected extra argument: {}", path));
                    }
                    if path != "-" {
                        self.moves_file = Some(PathBuf::from(path));
                    }
                }
            }
            i += 1;
        }
        Ok(self)
    }

    pub fn style(&self) -> BoardStyle {
        BoardStyle {
            frame_size: self.frame_size,
            sprite_size: self.frame_size / BOARD_FILES as u32,
            ..BoardStyle::default()
        }
    }

    pub fn animation_options(&self) -> AnimationOptions {
        AnimationOptions {
            frame_delay_ms: self.frame_delay_ms,
            loop_count: self.loop_count,
            quantize_speed: DEFAULT_QUANTIZE_SPEED,
        }
    }
}

/// In-memory result of a run.
#[derive(Debug)]
pub struct Rendered {
    pub snapshots: Vec<Board>,
    pub animation: Animation,
}

impl Rendered {
    pub fn final_board(&self) -> Option<&Board> {
        self.snapshots.last()
    }
}

/// Run every stage in memory. Frames are dumped to `frames_dir` when given.
pub fn animate(
    notation: &str,
    assets: &SpriteSet,
    style: &BoardStyle,
    options: &AnimationOptions,
    frames_dir: Option<&Path>,
) -> Result<Rendered> {
    let turns = parse(notation).context("parse notation")?;
    eprintln!("[Parse] {} turns", turns.len());

    let snapshots = evaluate(&Game::new(turns));

    let frames = render_all(&snapshots, assets, style).context("render frames")?;
    eprintln!("[Render] {} frames at {}px", frames.len(), style.frame_size);

    if let Some(dir) = frames_dir {
        prepare_frames_dir(dir)?;
        for frame in &frames {
            frame
                .save_png(dir)
                .with_context(|| format!("write frame {}", frame.index()))?;
        }
        eprintln!("[Render] frames written to {}", dir.display());
    }

    let animation = assemble(frames, options).context("assemble animation")?;
    eprintln!(
        "[Assemble] {} frames, {} bytes",
        animation.frame_count(),
        animation.bytes().len()
    );

    Ok(Rendered {
        snapshots,
        animation,
    })
}

/// Run the pipeline and write the GIF to `config.output`.
pub fn run(notation: &str, assets: &SpriteSet, config: &RunConfig) -> Result<Rendered> {
    let rendered = animate(
        notation,
        assets,
        &config.style(),
        &config.animation_options(),
        config.frames_dir.as_deref(),
    )?;

    if let Some(parent) = config.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    rendered
        .animation
        .write_to(&config.output)
        .with_context(|| format!("write {}", config.output.display()))?;
    eprintln!("[Assemble] wrote {}", config.output.display());

    Ok(rendered)
}

/// Create `dir` and remove frame dumps left by an earlier run.
pub fn prepare_frames_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_dump = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with("image_") && n.ends_with(".png"))
            .unwrap_or(false);
        if is_dump && path.is_file() {
            fs::remove_file(&path).with_context(|| format!("remove {}", path.display()))?;
        }
    }
    Ok(())
}
