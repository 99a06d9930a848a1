//! Renderer + assembler + pipeline integration tests
//!
//! Sprites are generated in memory and frames kept small so the GIF encoder
//! stays fast in debug builds.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, Rgba, RgbaImage};

use chess_gif::anim::{assemble, AnimationOptions, AssembleError, LoopCount};
use chess_gif::core::initial_board;
use chess_gif::pipeline::{animate, prepare_frames_dir, run, RunConfig, DEMO_NOTATION};
use chess_gif::render::{render, render_all, BoardStyle, RenderError, SpriteKey, SpriteSet};
use chess_gif::types::Color;

const SIZE: u32 = 64;

fn style() -> BoardStyle {
    BoardStyle {
        frame_size: SIZE,
        sprite_size: SIZE / 8,
        ..BoardStyle::default()
    }
}

/// White pieces draw as a white disc, black pieces as a black disc.
fn sprites() -> SpriteSet {
    let edge = SIZE / 8;
    let images = SpriteKey::all().map(|key| {
        let fill = match key.color {
            Color::White => Rgba([255, 255, 255, 255]),
            Color::Black => Rgba([0, 0, 0, 255]),
        };
        let r = edge as i32 / 2;
        let img = RgbaImage::from_fn(edge, edge, |x, y| {
            let (dx, dy) = (x as i32 - r, y as i32 - r);
            if dx * dx + dy * dy <= (r - 1) * (r - 1) {
                fill
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        (key, img)
    });
    SpriteSet::from_images(images, edge)
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chess-gif-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn decode_frame_count(bytes: &[u8]) -> usize {
    GifDecoder::new(Cursor::new(bytes))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap()
        .len()
}

#[test]
fn test_rendering_same_board_is_byte_identical() {
    let assets = sprites();
    let a = render(&initial_board(), &assets, &style()).unwrap();
    let b = render(&initial_board(), &assets, &style()).unwrap();
    assert_eq!(a.image().as_raw(), b.image().as_raw());
}

#[test]
fn test_piece_pixels_follow_board() {
    let assets = sprites();
    let frame = render(&initial_board(), &assets, &style()).unwrap();
    let img = frame.image();
    let tile = SIZE / 8;
    let center = |file: u32, row: u32| *img.get_pixel(file * tile + tile / 2, row * tile + tile / 2);

    assert_eq!(center(0, 0), Rgba([0, 0, 0, 255]));
    assert_eq!(center(4, 7), Rgba([255, 255, 255, 255]));
    // Empty middle square keeps its tile color (e4: file 4, row 4 -> light).
    assert_eq!(center(4, 4), style().light);
    assert_eq!(center(3, 4), style().dark);
}

#[test]
fn test_missing_asset_aborts_render_all() {
    let boards = vec![initial_board(); 3];
    let err = render_all(&boards, &SpriteSet::new(SIZE / 8), &style()).unwrap_err();
    assert!(matches!(err, RenderError::MissingAsset(_)));
}

#[test]
fn test_assemble_rejects_empty_and_mismatched() {
    assert!(matches!(
        assemble(Vec::new(), &AnimationOptions::default()),
        Err(AssembleError::EmptyFrameSequence)
    ));

    let assets = sprites();
    let small = render(&initial_board(), &assets, &style()).unwrap();
    let big_style = BoardStyle {
        frame_size: SIZE * 2,
        ..style()
    };
    let big = chess_gif::render::render_indexed(1, &initial_board(), &assets, &big_style).unwrap();
    assert!(matches!(
        assemble(vec![small, big], &AnimationOptions::default()),
        Err(AssembleError::DimensionMismatch { index: 1, .. })
    ));
}

#[test]
fn test_animate_demo_game() {
    let rendered = animate(
        DEMO_NOTATION,
        &sprites(),
        &style(),
        &AnimationOptions::default(),
        None,
    )
    .unwrap();

    assert_eq!(rendered.snapshots.len(), 5);
    assert_eq!(rendered.animation.frame_count(), 5);
    assert_eq!(rendered.animation.dimensions(), (SIZE, SIZE));
    assert_eq!(decode_frame_count(rendered.animation.bytes()), 5);
}

#[test]
fn test_animate_parse_error_aborts() {
    let err = animate("m e2 e4\nq e7 e5", &sprites(), &style(), &AnimationOptions::default(), None)
        .unwrap_err();
    assert!(err
        .chain()
        .any(|e| e.to_string().contains("malformed move on line 2")));
}

#[test]
fn test_frames_dir_dump_and_cleanup() {
    let dir = scratch_dir("frames");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("image_99.png"), b"stale").unwrap();
    fs::write(dir.join("notes.txt"), b"keep me").unwrap();

    animate(
        "m e2 e4\nm e7 e5\n",
        &sprites(),
        &style(),
        &AnimationOptions::default(),
        Some(&dir),
    )
    .unwrap();

    let mut names: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["image_0.png", "image_1.png", "image_2.png", "notes.txt"]);

    let first = image::open(dir.join("image_0.png")).unwrap().to_rgba8();
    assert_eq!(first.dimensions(), (SIZE, SIZE));

    prepare_frames_dir(&dir).unwrap();
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_run_writes_gif_and_creates_parent() {
    let dir = scratch_dir("run");
    let config = RunConfig {
        output: dir.join("nested").join("game.gif"),
        frame_size: SIZE,
        frame_delay_ms: 200,
        loop_count: LoopCount::Finite(1),
        ..RunConfig::default()
    };

    let rendered = run("m d1 h1\nm e2 e3\n", &sprites(), &config).unwrap();
    assert_eq!(rendered.snapshots.len(), 3);

    let bytes = fs::read(&config.output).unwrap();
    assert_eq!(bytes, rendered.animation.bytes());
    assert_eq!(decode_frame_count(&bytes), 3);
    let _ = fs::remove_dir_all(&dir);
}
