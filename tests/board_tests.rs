//! Board tests

use blockfall::core::{Board, Piece, Position};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, except: &[i8]) {
    for x in 0..BOARD_WIDTH as i8 {
        if !except.contains(&x) {
            board.set(x, y, Some(PieceKind::J));
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.cells().iter().all(|c| c.is_none()));
    assert!(board.completed_rows().is_empty());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(!board.is_occupied(-1, 0));
    assert!(!board.is_empty_at(0, BOARD_HEIGHT as i8));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();
    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));
    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
    assert!(!board.set(10, 0, Some(PieceKind::T)));
}

#[test]
fn test_place_returns_new_board() {
    let board = Board::new();
    let piece = Piece::new(PieceKind::O).at(Position::new(0, 18));
    let placed = board.place(&piece);

    assert_eq!(board, Board::new());
    for (x, y) in [(0, 18), (1, 18), (0, 19), (1, 19)] {
        assert_eq!(placed.get(x, y), Some(Some(PieceKind::O)));
    }
    assert_eq!(placed.cells().iter().filter(|c| c.is_some()).count(), 4);
}

#[test]
fn test_completed_rows_top_to_bottom() {
    let mut board = Board::new();
    fill_row(&mut board, 19, &[]);
    fill_row(&mut board, 17, &[]);
    fill_row(&mut board, 18, &[4]);
    assert_eq!(board.completed_rows().as_slice(), &[17, 19]);
}

#[test]
fn test_clear_shifts_rows_down() {
    let mut board = Board::new();
    fill_row(&mut board, 19, &[]);
    fill_row(&mut board, 18, &[0]);
    board.set(3, 17, Some(PieceKind::S));

    let cleared = board.clear(&board.completed_rows());

    // Row 18 moved to 19, row 17 to 18, and a fresh empty row on top.
    assert_eq!(cleared.get(0, 19), Some(None));
    assert_eq!(cleared.get(1, 19), Some(Some(PieceKind::J)));
    assert_eq!(cleared.get(3, 18), Some(Some(PieceKind::S)));
    assert!(cleared.row(0).iter().all(|c| c.is_none()));
    assert!(board.is_row_complete(19), "input board untouched");
}

#[test]
fn test_clear_ignores_order_duplicates_and_out_of_range() {
    let mut board = Board::new();
    fill_row(&mut board, 19, &[]);
    fill_row(&mut board, 16, &[]);
    board.set(0, 17, Some(PieceKind::L));

    let a = board.clear(&[16, 19]);
    let b = board.clear(&[19, 16, 19, 42]);
    assert_eq!(a, b);
    assert_eq!(a.get(0, 18), Some(Some(PieceKind::L)));
}

#[test]
fn test_clear_is_idempotent_on_resolved_board() {
    let mut board = Board::new();
    for y in 12..20i8 {
        let hole = [y % 10];
        let holes: &[i8] = if y % 3 == 0 { &[] } else { &hole };
        fill_row(&mut board, y, holes);
    }
    let resolved = board.clear(&board.completed_rows());

    assert!(resolved.completed_rows().is_empty());
    assert_eq!(resolved.clear(&resolved.completed_rows()), resolved);
    assert_eq!(resolved.width(), BOARD_WIDTH);
    assert_eq!(resolved.height(), BOARD_HEIGHT);
}

#[test]
fn test_u8_grid_roundtrip_keeps_tags() {
    let mut board = Board::new();
    for (i, kind) in PieceKind::ALL.iter().enumerate() {
        board.set(i as i8, 19, Some(*kind));
    }
    let mut grid = [[0u8; 10]; 20];
    board.write_u8_grid(&mut grid);
    assert_eq!(&grid[19][..8], &[1, 2, 3, 4, 5, 6, 7, 0]);
    assert_eq!(Board::from_u8_grid(&grid), board);
}
