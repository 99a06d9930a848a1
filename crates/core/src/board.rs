//! Board module - an immutable 8x8 snapshot
//!
//! The board is a flat array of 64 cells, row-major from rank 8 down to rank 1.
//! Coordinates: (file, row) where file 0..7 is a..h and row 0..7 is rank 8..1.
//! A `Board` is `Copy`; the engine derives every new snapshot from a copy and
//! never mutates one that has been handed out.

use crate::types::{Cell, Position, BOARD_FILES, BOARD_RANKS, BOARD_SIZE, INITIAL_LAYOUT};

/// One board snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * 8 + file)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// A board with no pieces
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Standard starting arrangement
    pub fn initial() -> Self {
        // INITIAL_LAYOUT is a constant with exactly 64 valid layout chars.
        Self::from_layout(INITIAL_LAYOUT).unwrap_or_else(Self::empty)
    }

    /// Build from 64 layout chars (`.` empty, uppercase white, lowercase black).
    ///
    /// Whitespace is ignored so layouts can be written one rank per line.
    /// Returns None on an unknown char or a wrong cell count.
    pub fn from_layout(layout: &str) -> Option<Self> {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        let mut n = 0usize;
        for ch in layout.chars().filter(|c| !c.is_whitespace()) {
            if n >= BOARD_SIZE {
                return None;
            }
            cells[n] = Cell::from_char(ch)?;
            n += 1;
        }
        if n != BOARD_SIZE {
            return None;
        }
        Some(Self { cells })
    }

    /// Calculate flat index from (file, row) coordinates
    #[inline(always)]
    fn index(file: u8, row: u8) -> Option<usize> {
        if file >= BOARD_FILES || row >= BOARD_RANKS {
            return None;
        }
        Some((row as usize) * (BOARD_FILES as usize) + (file as usize))
    }

    /// Get cell at (file, row); None if out of bounds
    pub fn get(&self, file: u8, row: u8) -> Option<Cell> {
        Self::index(file, row).map(|idx| self.cells[idx])
    }

    /// Get cell at a validated position
    pub fn at(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Copy of this board with one cell replaced
    pub fn with_cell(&self, pos: Position, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[pos.index()] = cell;
        next
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Layout string, one rank per line, rank 8 first
    pub fn to_layout(&self) -> String {
        let files = BOARD_FILES as usize;
        let mut out = String::with_capacity(BOARD_SIZE + BOARD_RANKS as usize);
        for (i, cell) in self.cells.iter().enumerate() {
            out.push(cell.to_char());
            if i % files == files - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}
