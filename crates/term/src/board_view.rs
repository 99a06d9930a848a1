//! BoardView: maps a board snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). Layout, for the default 2-column tiles:
//!
//! ```text
//! 8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜
//! ...
//! 1 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜
//!   a b c d e f g h
//! ```

use crate::core::Board;
use crate::fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
use crate::types::{
    Color, Piece, PieceKind, BOARD_FILES, BOARD_RANKS, DARK_TILE_RGB, LIGHT_TILE_RGB,
};

/// Width of the rank label column
const LABEL_W: u16 = 2;

/// How pieces are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphSet {
    /// Filled chess symbols, side given by foreground color
    Unicode,
    /// Layout letters (uppercase white, lowercase black)
    Ascii,
}

pub struct BoardView {
    /// Tile width in terminal columns
    cell_w: u16,
    glyphs: GlyphSet,
    labels: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            glyphs: GlyphSet::Unicode,
            labels: true,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, glyphs: GlyphSet) -> Self {
        Self {
            cell_w: cell_w.max(1),
            glyphs,
            labels: true,
        }
    }

    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    fn origin(&self) -> u16 {
        if self.labels {
            LABEL_W
        } else {
            0
        }
    }

    /// Framebuffer size this view draws into
    pub fn size(&self) -> (u16, u16) {
        let w = self.origin() + BOARD_FILES as u16 * self.cell_w;
        let h = BOARD_RANKS as u16 + u16::from(self.labels);
        (w, h)
    }

    pub fn render(&self, board: &Board) -> FrameBuffer {
        let (w, h) = self.size();
        let mut fb = FrameBuffer::new(w, h);
        self.render_into(board, &mut fb);
        fb
    }

    pub fn render_into(&self, board: &Board, fb: &mut FrameBuffer) {
        let x0 = self.origin();
        let label = GlyphStyle::default();

        for row in 0..BOARD_RANKS {
            let y = row as u16;
            if self.labels {
                let rank = (b'0' + BOARD_RANKS - row) as char;
                fb.put_str(0, y, &format!("{rank} "), label);
            }

            for file in 0..BOARD_FILES {
                let bg = if (file + row) % 2 == 0 {
                    Rgb::from_array(LIGHT_TILE_RGB)
                } else {
                    Rgb::from_array(DARK_TILE_RGB)
                };
                let tile = GlyphStyle {
                    bg,
                    ..GlyphStyle::default()
                };
                let tx = x0 + file as u16 * self.cell_w;
                fb.fill_rect(tx, y, self.cell_w, 1, ' ', tile);

                if let Some(piece) = board.get(file, row).and_then(|c| c.as_piece()) {
                    let style = GlyphStyle {
                        fg: piece_fg(piece.color),
                        bg,
                        bold: true,
                    };
                    fb.set(
                        tx,
                        y,
                        Glyph {
                            ch: self.piece_char(piece),
                            style,
                        },
                    );
                }
            }
        }

        if self.labels {
            let y = BOARD_RANKS as u16;
            for (file, letter) in ('a'..='h').enumerate() {
                fb.set(
                    x0 + file as u16 * self.cell_w,
                    y,
                    Glyph {
                        ch: letter,
                        style: label,
                    },
                );
            }
        }
    }

    fn piece_char(&self, piece: Piece) -> char {
        match self.glyphs {
            GlyphSet::Ascii => piece.to_char(),
            GlyphSet::Unicode => match piece.kind {
                PieceKind::King => '♚',
                PieceKind::Queen => '♛',
                PieceKind::Rook => '♜',
                PieceKind::Bishop => '♝',
                PieceKind::Knight => '♞',
                PieceKind::Pawn => '♟',
            },
        }
    }
}

fn piece_fg(color: Color) -> Rgb {
    match color {
        Color::White => Rgb::new(255, 255, 255),
        Color::Black => Rgb::new(0, 0, 0),
    }
}
