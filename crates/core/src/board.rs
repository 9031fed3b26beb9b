//! Board module - the fixed 10x20 grid of locked cells
//!
//! Uses a flat row-major array (`y * WIDTH + x`) with no allocation.
//! Coordinates: x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! Every operation the engine performs on a board (`place`, `clear`) returns a
//! new board and leaves the receiver untouched.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices, top to bottom. A board can hold at most `BOARD_HEIGHT` of them.
pub type RowList = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and empty
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True iff every cell in row `y` is filled. Out-of-range rows are never complete.
    pub fn is_row_complete(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Indices of all complete rows, top to bottom.
    pub fn completed_rows(&self) -> RowList {
        (0..HEIGHT).filter(|&y| self.is_row_complete(y)).collect()
    }

    /// Return a copy of this board with every block of `piece` written in its color.
    ///
    /// Blocks outside the grid are skipped. Collision checks keep locked pieces
    /// inside in practice; this only matters for blocks above row 0.
    pub fn place(&self, piece: &Piece) -> Board {
        let mut next = self.clone();
        let cell = Some(piece.kind);
        for (x, y) in piece.blocks() {
            next.set(x, y, cell);
        }
        next
    }

    /// Return a copy of this board with `rows` removed and as many empty rows
    /// inserted at the top.
    ///
    /// Surviving rows keep their relative order. `rows` may be in any order and
    /// may contain duplicates; indices outside the board are ignored.
    pub fn clear(&self, rows: &[usize]) -> Board {
        let mut removed = [false; HEIGHT];
        for &y in rows {
            if y < HEIGHT {
                removed[y] = true;
            }
        }

        // Two-pointer compaction, bottom to top.
        let mut next = Board::new();
        let mut write_y = HEIGHT;
        for read_y in (0..HEIGHT).rev() {
            if removed[read_y] {
                continue;
            }
            write_y -= 1;
            let src = read_y * WIDTH;
            let dst = write_y * WIDTH;
            next.cells[dst..dst + WIDTH].copy_from_slice(&self.cells[src..src + WIDTH]);
        }
        next
    }

    /// Cells of row `y` (panics if `y` is out of range).
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Export cell tags (0 = empty, 1-7 = piece color).
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (dst_row, src_row) in out.iter_mut().zip(self.rows()) {
            for (dst, src) in dst_row.iter_mut().zip(src_row) {
                *dst = src.map_or(0, |kind| kind.tag());
            }
        }
    }

    /// Build a board from a tag grid. Unknown tags become empty cells.
    pub fn from_u8_grid(grid: &[[u8; WIDTH]; HEIGHT]) -> Self {
        let mut board = Board::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, &tag) in row.iter().enumerate() {
                board.cells[y * WIDTH + x] = crate::types::PieceKind::from_tag(tag);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
