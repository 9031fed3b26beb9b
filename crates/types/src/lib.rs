//! Shared data types and constants
//!
//! Everything here is plain data with no dependencies, so the same definitions
//! can be used by the engine, the terminal front end and the automated player.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Timing
//!
//! Automatic descent starts at `INITIAL_DROP_MS` and gets `DROP_STEP_MS`
//! faster per level, never dropping below `MIN_DROP_MS`:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 800ms |
//! | 1 | 750ms |
//! | 5 | 550ms |
//! | 15+ | 50ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.tag(), 3);
//!
//! assert_eq!(Direction::Down.offset(), (0, 1));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Drop interval for a fresh session (level 0)
pub const INITIAL_DROP_MS: u32 = 800;

/// Drop interval reduction per level
pub const DROP_STEP_MS: u32 = 50;

/// Fastest automatic descent
pub const MIN_DROP_MS: u32 = 50;

/// Cleared rows needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Default host frame interval (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Line clear scoring table
///
/// Base points for clearing N rows at once at level 0:
/// - 1 row: 40
/// - 2 rows: 100
/// - 3 rows: 300
/// - 4 rows: 1200
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points per cell for a player-initiated soft drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row travelled by a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// The seven piece kinds
///
/// The tag of each kind (1-7) doubles as its color id on the board:
/// - **I** (1): cyan, 4x4 matrix
/// - **O** (2): yellow, 2x2 matrix
/// - **T** (3): purple
/// - **S** (4): green
/// - **Z** (5): red
/// - **J** (6): blue
/// - **L** (7): orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in tag order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Board tag / color id (1-7).
    pub fn tag(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::tag`]. `0` and anything above `7` map to `None`.
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_tag(2), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_tag(0), None);
    /// assert_eq!(PieceKind::from_tag(8), None);
    /// ```
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1..=7 => Some(Self::ALL[(tag - 1) as usize]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty (tag 0)
/// - `Some(kind)`: filled with the color of `kind` (tags 1-7)
pub type Cell = Option<PieceKind>;

/// Unit movement directions for the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// `(dx, dy)` for one step in this direction.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Inputs accepted by a game session
///
/// Player input, the drop scheduler and automated players all speak this
/// alphabet. None of them take arguments beyond the session itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise, in place
    Rotate,
    /// Move piece one cell down (+1 point), never locks
    SoftDrop,
    /// Drop piece to its ghost position and lock it
    HardDrop,
    /// Automatic descent; locks the piece when it cannot descend
    Tick,
    /// Toggle pause state
    Pause,
    /// Start a new session
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "tick" => Some(GameAction::Tick),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Tick => "tick",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(INITIAL_DROP_MS, 800);
        assert_eq!(DROP_STEP_MS, 50);
        assert_eq!(MIN_DROP_MS, 50);
        assert_eq!(LINES_PER_LEVEL, 10);
    }

    #[test]
    fn tags_round_trip_through_all_kinds() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.tag() as usize, i + 1);
            assert_eq!(PieceKind::from_tag(kind.tag()), Some(*kind));
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn action_names_parse_back() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::Rotate,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::Tick,
            GameAction::Pause,
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn direction_offsets_are_unit_steps() {
        assert_eq!(Direction::Left.offset(), (-1, 0));
        assert_eq!(Direction::Right.offset(), (1, 0));
        assert_eq!(Direction::Down.offset(), (0, 1));
    }
}
