//! Pieces module - shape matrices, naive rotation and spawn placement
//!
//! Each kind has a square bounding matrix: 4x4 for I, 2x2 for O and 3x3 for
//! the rest. Rotation is a plain 90° clockwise matrix turn with no wall kicks;
//! whether the rotated piece fits is decided by the caller.

use crate::rng::RandomSource;
use crate::types::{Direction, PieceKind, BOARD_WIDTH};

/// Largest matrix side (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square occupancy matrix of side `size` (2, 3 or 4), stored in a fixed 4x4 array.
///
/// Only the top-left `size x size` region is meaningful; the rest stays clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    filled: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from rows of `0`/non-zero values.
    ///
    /// # Panics
    ///
    /// If the rows do not form a square of side 1..=4.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        assert!(
            (1..=MAX_SHAPE_SIZE).contains(&size),
            "shape side must be 1..=4"
        );
        let mut filled = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "shape must be square");
            for (x, &v) in row.iter().enumerate() {
                filled[y][x] = v != 0;
            }
        }
        Self {
            size: size as u8,
            filled,
        }
    }

    /// Unrotated spawn shape for a kind
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[
                &[0, 0, 0, 0],
                &[1, 1, 1, 1],
                &[0, 0, 0, 0],
                &[0, 0, 0, 0],
            ]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
        }
    }

    /// Side length of the bounding matrix
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Offsets `(dx, dy)` of the filled cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |dy| {
            (0..n)
                .filter(move |&dx| self.filled[dy][dx])
                .map(move |dx| (dx as i8, dy as i8))
        })
    }

    /// 90° clockwise turn: transpose, then reverse each row.
    pub fn rotated(&self) -> Self {
        let n = self.size as usize;
        let mut filled = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in filled.iter_mut().enumerate().take(n) {
            for (c, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.filled[n - 1 - c][r];
            }
        }
        Self {
            size: self.size,
            filled,
        }
    }
}

/// Board coordinates of a shape's top-left corner. `y` may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A falling piece: current rotation, color and placement.
///
/// Pieces are values; every change produces a new piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
}

impl Piece {
    /// Unrotated piece of `kind` at its spawn position: horizontally centred
    /// (`floor(10/2) - floor(size/2)`), top row 0.
    pub fn new(kind: PieceKind) -> Self {
        let shape = Shape::of(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (shape.size() / 2) as i8;
        Self {
            kind,
            shape,
            position: Position::new(x, 0),
        }
    }

    /// Draw a kind uniformly at random. Repeats are allowed.
    pub fn spawn(rng: &mut impl RandomSource) -> Self {
        let idx = rng.next_range(PieceKind::ALL.len() as u32) as usize;
        Self::new(PieceKind::ALL[idx])
    }

    /// Board color tag (1-7)
    pub fn color(&self) -> u8 {
        self.kind.tag()
    }

    pub fn at(self, position: Position) -> Self {
        Self { position, ..self }
    }

    pub fn translated(self, dx: i8, dy: i8) -> Self {
        self.at(self.position.offset(dx, dy))
    }

    pub fn moved(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        self.translated(dx, dy)
    }

    /// Same position, shape turned 90° clockwise.
    pub fn rotated(self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..self
        }
    }

    /// Absolute board coordinates of the filled cells.
    pub fn blocks(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let Position { x, y } = self.position;
        self.shape.cells().map(move |(dx, dy)| (x + dx, y + dy))
    }
}
