//! Board rasterizer.
//!
//! `render` is a pure function of (board, sprites, style): the same inputs
//! always produce the same pixels, so snapshots can be rendered on any thread.

use image::imageops;
use image::{Rgba, RgbaImage};
use rayon::prelude::*;

use crate::assets::{SpriteKey, SpriteSet};
use crate::core::Board;
use crate::error::RenderError;
use crate::frame::{BoardStyle, Frame};
use crate::types::BOARD_FILES;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Render one board as frame 0.
pub fn render(board: &Board, assets: &SpriteSet, style: &BoardStyle) -> Result<Frame, RenderError> {
    render_indexed(0, board, assets, style)
}

/// Render one board, tagging the frame with its snapshot index.
pub fn render_indexed(
    index: usize,
    board: &Board,
    assets: &SpriteSet,
    style: &BoardStyle,
) -> Result<Frame, RenderError> {
    if assets.sprite_size() != style.sprite_size {
        return Err(RenderError::SpriteSizeMismatch {
            expected: style.sprite_size,
            found: assets.sprite_size(),
        });
    }

    let tile = style.tile_size();
    let files = BOARD_FILES as u32;
    let board_px = tile * files;

    // 1. Tiles. Any remainder when frame_size is not a multiple of 8 stays black.
    let mut canvas = RgbaImage::from_fn(style.frame_size, style.frame_size, |px, py| {
        if tile == 0 || px >= board_px || py >= board_px {
            BACKGROUND
        } else {
            style.tile_color(px / tile, py / tile)
        }
    });

    // 2. Pieces, centered in their tile, alpha-blended over it.
    for (idx, cell) in board.cells().iter().enumerate() {
        let Some(piece) = cell.as_piece() else {
            continue;
        };
        let key = SpriteKey::from(piece);
        let sprite = assets.get(key).ok_or(RenderError::MissingAsset(key))?;

        let x = (idx as u32 % files) * tile;
        let y = (idx as u32 / files) * tile;
        let ox = x as i64 + (tile as i64 - sprite.width() as i64) / 2;
        let oy = y as i64 + (tile as i64 - sprite.height() as i64) / 2;
        imageops::overlay(&mut canvas, sprite, ox, oy);
    }

    Ok(Frame::new(index, canvas))
}

/// Render every snapshot in parallel. Frames come back in snapshot order;
/// the first failure aborts the batch.
pub fn render_all(
    boards: &[Board],
    assets: &SpriteSet,
    style: &BoardStyle,
) -> Result<Vec<Frame>, RenderError> {
    boards
        .par_iter()
        .enumerate()
        .map(|(i, board)| render_indexed(i, board, assets, style))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{apply, initial_board};
    use crate::types::{Cell, Color, MoveCommand, PieceKind, Position};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    /// Small style so tests stay fast: 10px tiles, 6px sprites.
    fn small_style() -> BoardStyle {
        BoardStyle {
            frame_size: 80,
            sprite_size: 6,
            ..BoardStyle::default()
        }
    }

    /// Left half opaque red, right half fully transparent.
    fn half_sprite(size: u32) -> RgbaImage {
        RgbaImage::from_fn(size, size, |x, _| {
            if x < size / 2 {
                RED
            } else {
                Rgba([0, 0, 255, 0])
            }
        })
    }

    fn full_set(size: u32) -> SpriteSet {
        SpriteSet::from_images(SpriteKey::all().map(|k| (k, half_sprite(size))), size)
    }

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn test_render_checkerboard_on_empty_board() {
        let style = small_style();
        let frame = render(&Board::empty(), &SpriteSet::new(6), &style).unwrap();
        assert_eq!(frame.dimensions(), (80, 80));
        assert_eq!(frame.index(), 0);

        for ty in 0..8 {
            for tx in 0..8 {
                let expected = style.tile_color(tx, ty);
                assert_eq!(*frame.image().get_pixel(tx * 10, ty * 10), expected);
                assert_eq!(*frame.image().get_pixel(tx * 10 + 9, ty * 10 + 9), expected);
            }
        }
        assert_eq!(*frame.image().get_pixel(0, 0), style.light);
        assert_eq!(*frame.image().get_pixel(10, 0), style.dark);
    }

    #[test]
    fn test_default_style_colors() {
        let style = BoardStyle::default();
        assert_eq!(style.tile_size(), 90);
        assert_eq!(style.light, Rgba([238, 216, 182, 255]));
        assert_eq!(style.dark, Rgba([179, 135, 101, 255]));
    }

    #[test]
    fn test_sprite_centered_with_alpha() {
        let style = small_style();
        let board = Board::empty().with_cell(pos("a8"), Cell::piece(PieceKind::King, Color::White));
        let frame = render(&board, &full_set(6), &style).unwrap();
        let img = frame.image();

        // Sprite spans pixels 2..8 of tile (0, 0).
        assert_eq!(*img.get_pixel(2, 2), RED);
        assert_eq!(*img.get_pixel(4, 7), RED);
        // Transparent half keeps the tile color.
        assert_eq!(*img.get_pixel(6, 4), style.light);
        // Margin around the sprite keeps the tile color.
        assert_eq!(*img.get_pixel(1, 4), style.light);
        assert_eq!(*img.get_pixel(4, 9), style.light);
        // Neighbour tile untouched.
        assert_eq!(*img.get_pixel(12, 4), style.dark);
    }

    #[test]
    fn test_missing_sprite_is_fatal() {
        let style = small_style();
        let only_white_pawn = SpriteSet::from_images(
            [(SpriteKey::new(PieceKind::Pawn, Color::White), half_sprite(6))],
            6,
        );
        match render(&initial_board(), &only_white_pawn, &style) {
            Err(RenderError::MissingAsset(key)) => assert_ne!(key.kind, PieceKind::Pawn),
            other => panic!("expected MissingAsset, got {:?}", other.map(|f| f.index())),
        }
    }

    #[test]
    fn test_sprite_size_must_match_style() {
        let style = small_style();
        match render(&Board::empty(), &full_set(8), &style) {
            Err(RenderError::SpriteSizeMismatch { expected, found }) => {
                assert_eq!(expected, 6);
                assert_eq!(found, 8);
            }
            other => panic!("expected SpriteSizeMismatch, got {:?}", other.map(|f| f.index())),
        }
        assert!(render(&Board::empty(), &full_set(6), &style).is_ok());
    }

    #[test]
    fn test_render_is_deterministic() {
        let style = small_style();
        let assets = full_set(6);
        let a = render(&initial_board(), &assets, &style).unwrap();
        let b = render(&initial_board(), &assets, &style).unwrap();
        assert_eq!(a.image().as_raw(), b.image().as_raw());
    }

    #[test]
    fn test_render_all_preserves_order() {
        let style = small_style();
        let assets = full_set(6);
        let mut boards = vec![initial_board()];
        for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3")] {
            let last = *boards.last().unwrap();
            boards.push(apply(
                &last,
                &MoveCommand::Move {
                    from: pos(from),
                    to: pos(to),
                },
            ));
        }

        let frames = render_all(&boards, &assets, &style).unwrap();
        assert_eq!(frames.len(), boards.len());
        for (i, (frame, board)) in frames.iter().zip(&boards).enumerate() {
            assert_eq!(frame.index(), i);
            let single = render_indexed(i, board, &assets, &style).unwrap();
            assert_eq!(frame, &single);
        }
    }
}
