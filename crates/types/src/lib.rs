//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so the parser, the
//! board engine, the renderers and the assembler can share them freely.
//!
//! # Board Geometry
//!
//! The board is stored as 64 cells, row-major from rank 8 down to rank 1,
//! file a to h:
//!
//! - **index** = `file_offset + 8 * row_offset`
//! - **file_offset**: 0..=7 maps `a`..=`h`
//! - **row_offset**: `8 - rank`, so rank 8 is row 0 and rank 1 is row 7
//!
//! So `a8` is index 0, `h1` is index 63, `e4` is index 36 and `e5` is index 28.
//!
//! # Rendering Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_SIZE` | 720 | Square frame edge in pixels |
//! | `TILE_SIZE` | 90 | Edge of one board tile (`FRAME_SIZE / 8`) |
//! | `SPRITE_SIZE` | 90 | Edge sprites are normalized to before compositing |
//! | `DEFAULT_FRAME_DELAY_MS` | 500 | Display time of each animation frame |
//!
//! # Examples
//!
//! ```
//! use chess_gif_types::{Cell, Color, MoveCommand, PieceKind, Position};
//!
//! let e2 = Position::from_algebraic("e2").unwrap();
//! let e4 = Position::from_algebraic("E4").unwrap();
//! assert_eq!(e4.index(), 36);
//!
//! let mv = MoveCommand::Move { from: e2, to: e4 };
//! assert_eq!(mv.to_string(), "m e2 e4");
//!
//! assert_eq!(Cell::from_char('N'), Some(Cell::piece(PieceKind::Knight, Color::White)));
//! ```

use std::fmt;

/// Number of files (columns) on the board
pub const BOARD_FILES: u8 = 8;

/// Number of ranks (rows) on the board
pub const BOARD_RANKS: u8 = 8;

/// Total number of cells on the board
pub const BOARD_SIZE: usize = (BOARD_FILES as usize) * (BOARD_RANKS as usize);

/// Square frame edge in pixels
pub const FRAME_SIZE: u32 = 720;

/// Edge of a single tile in pixels
pub const TILE_SIZE: u32 = FRAME_SIZE / BOARD_FILES as u32;

/// Edge sprites are normalized to before compositing
pub const SPRITE_SIZE: u32 = 90;

/// Per-frame display time of the animation in milliseconds
pub const DEFAULT_FRAME_DELAY_MS: u32 = 500;

/// Light tile color (even `x + y`)
pub const LIGHT_TILE_RGB: [u8; 3] = [238, 216, 182];

/// Dark tile color (odd `x + y`)
pub const DARK_TILE_RGB: [u8; 3] = [179, 135, 101];

/// Standard starting arrangement, one char per cell in board index order.
///
/// Uppercase is white, lowercase is black, `.` is empty.
pub const INITIAL_LAYOUT: &str =
    "rnbqkbnrpppppppp................................PPPPPPPPRNBQKBNR";

const FILE_LETTERS: &[u8; 8] = b"abcdefgh";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_constants() {
        assert_eq!(BOARD_SIZE, 64);
        assert_eq!(TILE_SIZE, 90);
        assert_eq!(TILE_SIZE * BOARD_FILES as u32, FRAME_SIZE);
        assert_eq!(INITIAL_LAYOUT.len(), BOARD_SIZE);
    }

    #[test]
    fn position_index_corners() {
        assert_eq!(Position::from_algebraic("a8").map(|p| p.index()), Some(0));
        assert_eq!(Position::from_algebraic("h8").map(|p| p.index()), Some(7));
        assert_eq!(Position::from_algebraic("a1").map(|p| p.index()), Some(56));
        assert_eq!(Position::from_algebraic("h1").map(|p| p.index()), Some(63));
        assert_eq!(Position::from_algebraic("e4").map(|p| p.index()), Some(36));
        assert_eq!(Position::from_algebraic("e5").map(|p| p.index()), Some(28));
    }

    #[test]
    fn position_rejects_bad_tokens() {
        for bad in ["", "e", "e44", "i1", "z9", "a0", "a9", "ee", "4e", "é4"] {
            assert_eq!(Position::from_algebraic(bad), None, "{bad:?} should be rejected");
        }
    }

    #[test]
    fn position_index_roundtrip() {
        for idx in 0..BOARD_SIZE {
            let pos = Position::from_index(idx).unwrap();
            assert_eq!(pos.index(), idx);
            assert_eq!(Position::from_algebraic(&pos.to_string()), Some(pos));
        }
        assert_eq!(Position::from_index(BOARD_SIZE), None);
    }

    #[test]
    fn cell_char_mapping() {
        for ch in "pnbrqkPNBRQK".chars() {
            let cell = Cell::from_char(ch).unwrap();
            assert_eq!(cell.to_char(), ch);
        }
        assert_eq!(Cell::from_char('.'), Some(Cell::Empty));
        assert_eq!(Cell::from_char('x'), None);
        assert_eq!(
            Cell::from_char('q'),
            Some(Cell::piece(PieceKind::Queen, Color::Black))
        );
    }

    #[test]
    fn turn_requires_a_move() {
        assert!(Turn::new(Vec::new()).is_none());
        let a = Position::new(0, 0).unwrap();
        let b = Position::new(1, 0).unwrap();
        let turn = Turn::new(vec![MoveCommand::Move { from: a, to: b }]).unwrap();
        assert_eq!(turn.len(), 1);
        assert_eq!(turn.to_string(), "m a8 b8");
    }
}

/// The six chess piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All kinds, in sprite-key order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse piece kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_gif_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_letter('n'), Some(PieceKind::Knight));
    /// assert_eq!(PieceKind::from_letter('Q'), Some(PieceKind::Queen));
    /// assert_eq!(PieceKind::from_letter('x'), None);
    /// ```
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter of this kind
    pub fn letter(&self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// Side a piece belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// A colored piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Letter of the piece: uppercase for white, lowercase for black
    pub fn to_char(&self) -> char {
        let ch = self.kind.letter();
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }
}

/// A cell on the board
///
/// - `Empty`: nothing there
/// - `Piece(piece)`: occupied by the given piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Piece),
}

impl Cell {
    pub const fn piece(kind: PieceKind, color: Color) -> Self {
        Cell::Piece(Piece::new(kind, color))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_piece(&self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Piece(piece) => Some(*piece),
        }
    }

    /// Parse a layout character (`.` empty, uppercase white, lowercase black)
    pub fn from_char(ch: char) -> Option<Self> {
        if ch == '.' {
            return Some(Cell::Empty);
        }
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Cell::piece(kind, color))
    }

    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Piece(piece) => piece.to_char(),
        }
    }
}

/// A validated square on the board
///
/// `file` is 0..=7 for `a`..=`h`, `row` is `8 - rank` (0 is rank 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    file: u8,
    row: u8,
}

impl Position {
    pub fn new(file: u8, row: u8) -> Option<Self> {
        if file >= BOARD_FILES || row >= BOARD_RANKS {
            return None;
        }
        Some(Self { file, row })
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= BOARD_SIZE {
            return None;
        }
        let files = BOARD_FILES as usize;
        Some(Self {
            file: (index % files) as u8,
            row: (index / files) as u8,
        })
    }

    /// Parse a two-character coordinate such as `e4` (file letter is case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_gif_types::Position;
    ///
    /// let pos = Position::from_algebraic("a8").unwrap();
    /// assert_eq!((pos.file(), pos.row(), pos.index()), (0, 0, 0));
    /// assert_eq!(Position::from_algebraic("h1").unwrap().index(), 63);
    /// assert_eq!(Position::from_algebraic("z9"), None);
    /// ```
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = FILE_LETTERS
            .iter()
            .position(|&c| c == bytes[0].to_ascii_lowercase())?;
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'0',
            _ => return None,
        };
        Self::new(file as u8, BOARD_RANKS - rank)
    }

    pub fn file(&self) -> u8 {
        self.file
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    /// Rank number (1..=8)
    pub fn rank(&self) -> u8 {
        BOARD_RANKS - self.row
    }

    /// Flat board index
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.file as usize + (BOARD_FILES as usize) * self.row as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILE_LETTERS[self.file as usize] as char, self.rank())
    }
}

/// A single instruction of the move notation
///
/// Only one variant exists; new move kinds are added here rather than by
/// matching strings in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveCommand {
    /// Relocate whatever occupies `from` to `to`, leaving `from` empty.
    ///
    /// No check on piece identity, ownership or legality; whatever sat on
    /// `to` is overwritten.
    Move { from: Position, to: Position },
}

impl MoveCommand {
    /// Notation tag that selects this variant
    pub fn tag(&self) -> &'static str {
        match self {
            MoveCommand::Move { .. } => "m",
        }
    }
}

impl fmt::Display for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveCommand::Move { from, to } => write!(f, "{} {} {}", self.tag(), from, to),
        }
    }
}

/// One line of notation: a non-empty list of moves applied in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    moves: Vec<MoveCommand>,
}

impl Turn {
    /// Returns None for an empty move list
    pub fn new(moves: Vec<MoveCommand>) -> Option<Self> {
        if moves.is_empty() {
            return None;
        }
        Some(Self { moves })
    }

    pub fn moves(&self) -> &[MoveCommand] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveCommand> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a Turn {
    type Item = &'a MoveCommand;
    type IntoIter = std::slice::Iter<'a, MoveCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", mv)?;
        }
        Ok(())
    }
}
