//! Collision and placement rules
//!
//! [`is_valid`] is the single predicate behind movement, rotation, ghost
//! projection and game-over detection, so edge and overlap semantics are the
//! same everywhere.

use crate::board::Board;
use crate::piece::{Piece, Position};
use crate::types::{Direction, BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `piece`'s shape fits at `position`.
///
/// Every filled cell must be inside the side walls and above the floor.
/// Cells above the top edge (`y < 0`) are allowed; cells on the board must
/// land on empty squares.
pub fn is_valid(board: &Board, piece: &Piece, position: Position) -> bool {
    piece.shape.cells().all(|(dx, dy)| {
        let x = position.x + dx;
        let y = position.y + dy;
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        y < 0 || board.is_empty_at(x, y)
    })
}

/// Whether one step in `direction` keeps the piece valid.
pub fn can_move(board: &Board, piece: &Piece, direction: Direction) -> bool {
    let (dx, dy) = direction.offset();
    is_valid(board, piece, piece.position.offset(dx, dy))
}

/// Where the piece comes to rest if dropped straight down.
///
/// Pure projection: nothing is placed. A piece that already cannot descend is
/// its own ghost.
pub fn ghost(board: &Board, piece: &Piece) -> Piece {
    let mut resting = *piece;
    while can_move(board, &resting, Direction::Down) {
        resting = resting.moved(Direction::Down);
    }
    resting
}

/// Rows between a piece and its ghost.
pub fn drop_distance(board: &Board, piece: &Piece) -> u32 {
    (ghost(board, piece).position.y - piece.position.y) as u32
}

/// A piece that does not fit where it stands cannot enter play.
pub fn is_game_over(board: &Board, piece: &Piece) -> bool {
    !is_valid(board, piece, piece.position)
}
