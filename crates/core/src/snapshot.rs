//! Snapshot module - plain-data copy of a session for renderers and logs
//!
//! Board cells are exported as color tags (0 = empty, 1-7 = piece kind) and
//! hashed with FNV-1a so hosts can skip redraws when nothing changed.

use crate::piece::{Piece, MAX_SHAPE_SIZE};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

pub type TagGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Read-only copy of a piece for renderers and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub size: u8,
    /// Matrix cells: 0 or the piece's color tag
    pub cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl PieceSnapshot {
    /// Absolute board coordinates of the filled cells.
    pub fn blocks(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |dy| {
            (0..n)
                .filter(move |&dx| self.cells[dy][dx] != 0)
                .map(move |dx| (self.x + dx as i8, self.y + dy as i8))
        })
    }
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        let tag = value.color();
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (dx, dy) in value.shape.cells() {
            cells[dy as usize][dx as usize] = tag;
        }
        Self {
            kind: value.kind,
            x: value.position.x,
            y: value.position.y,
            size: value.shape.size(),
            cells,
        }
    }
}

/// Everything a frame needs: board tags, pieces, counters and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: TagGrid,
    /// FNV-1a over `board`, row-major
    pub board_hash: u64,
    pub current: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub ghost: Option<PieceSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
    pub paused: bool,
    pub drop_time_ms: u32,
}

impl GameSnapshot {
    /// Cheap change detector for render throttling.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new();
        h.write_u64(self.board_hash);
        for piece in [self.current, self.next, self.ghost] {
            match piece {
                Some(p) => h.write(&[p.kind.tag(), p.x as u8, p.y as u8, p.size]),
                None => h.write(&[0]),
            }
        }
        h.write_u64(u64::from(self.score));
        h.write_u64(u64::from(self.level) << 32 | u64::from(self.lines));
        h.write(&[self.game_over as u8, self.paused as u8]);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        Self {
            board,
            board_hash: board_hash(&board),
            current: None,
            next: None,
            ghost: None,
            score: 0,
            level: 0,
            lines: 0,
            game_over: false,
            paused: false,
            drop_time_ms: crate::types::INITIAL_DROP_MS,
        }
    }
}

pub fn board_hash(board: &TagGrid) -> u64 {
    let mut h = Fnv1a64::new();
    for row in board {
        h.write(row);
    }
    h.finish()
}

struct Fnv1a64 {
    state: u64,
}

impl Fnv1a64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x00000100000001B3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET,
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }

    fn write_u64(&mut self, v: u64) {
        self.write(&v.to_le_bytes());
    }

    fn finish(&self) -> u64 {
        self.state
    }
}
