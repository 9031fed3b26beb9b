//! Session scenarios driven through the public reducer API

use blockfall::core::{Board, GameSession, ScriptedRng, SimpleRng};
use blockfall::types::{GameAction, PieceKind, BOARD_WIDTH, INITIAL_DROP_MS};

fn session_of(kind: PieceKind) -> GameSession<ScriptedRng> {
    GameSession::new(ScriptedRng::repeat(kind))
}

fn board_with_rows(rows: std::ops::Range<i8>, holes: &[i8]) -> Board {
    let mut board = Board::new();
    for y in rows {
        for x in 0..BOARD_WIDTH as i8 {
            if !holes.contains(&x) {
                board.set(x, y, Some(PieceKind::Z));
            }
        }
    }
    board
}

#[test]
fn test_new_session() {
    let s = session_of(PieceKind::T);
    assert_eq!(s.score(), 0);
    assert_eq!(s.level(), 0);
    assert_eq!(s.lines(), 0);
    assert_eq!(s.drop_time_ms(), INITIAL_DROP_MS);
    assert!(!s.is_game_over());
    assert!(!s.is_paused());
    assert!(s.current_piece().is_some());
    assert!(s.next_piece().is_some());
    assert!(s.last_event().is_none());
}

#[test]
fn test_o_hard_drop_on_empty_board() {
    let s = session_of(PieceKind::O);
    assert_eq!(s.current_piece().unwrap().position.x, 4);

    let s = s.hard_drop();

    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(s.board().get(x, y), Some(Some(PieceKind::O)));
    }
    assert_eq!(s.score(), 36);
    assert_eq!(s.lines(), 0);

    let ev = s.last_event().unwrap();
    assert_eq!(ev.kind, PieceKind::O);
    assert_eq!(ev.drop_score, 36);
    assert!(ev.rows_cleared.is_empty());
    assert!(!ev.game_over);
}

#[test]
fn test_vertical_i_clears_row_in_column_zero() {
    let board = board_with_rows(19..20, &[0]);
    let s = GameSession::with_board(board, ScriptedRng::repeat(PieceKind::I)).rotate();

    // Vertical I sits in matrix column 2, so x = -2 puts it in board column 0.
    let s = (0..5).fold(s, |s, _| s.move_left());
    assert_eq!(s.current_piece().unwrap().position.x, -2);
    assert_eq!(s.ghost_piece().unwrap().position.y, 16);

    let s = s.hard_drop();

    assert_eq!(s.lines(), 1);
    assert_eq!(s.level(), 0);
    assert_eq!(s.score(), 2 * 16 + 40);
    assert_eq!(s.last_event().unwrap().rows_cleared.as_slice(), &[19]);
    // The rest of the I slid down one row into column 0.
    assert_eq!(s.board().get(0, 19), Some(Some(PieceKind::I)));
    assert!((1..10).all(|x| s.board().get(x, 19) == Some(None)));
    assert_eq!(s.board().get(0, 16), Some(None));
}

#[test]
fn test_horizontal_i_clears_bottom_row() {
    let board = board_with_rows(19..20, &[3, 4, 5, 6]);
    let s = GameSession::with_board(board, ScriptedRng::repeat(PieceKind::I)).hard_drop();

    assert_eq!(s.lines(), 1);
    assert_eq!(s.score(), 2 * 18 + 40);
    assert!(s.board().row(19).iter().all(|c| c.is_none()));
    assert!(s.board().cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_crossing_ten_lines_raises_level() {
    // Ten rows missing columns 4 and 5: each O drop clears two of them.
    let board = board_with_rows(10..20, &[4, 5]);
    let mut s = GameSession::with_board(board, ScriptedRng::repeat(PieceKind::O));

    for _ in 0..4 {
        s = s.hard_drop();
    }
    assert_eq!(s.lines(), 8);
    assert_eq!(s.level(), 0);
    assert_eq!(s.drop_time_ms(), 800);

    let before = s.score();
    s = s.hard_drop();
    let ev = s.last_event().unwrap().clone();

    assert_eq!(s.lines(), 10);
    assert_eq!(s.level(), 1);
    assert_eq!(s.drop_time_ms(), 750);
    assert!(ev.level_up);
    // The clear that levels up is scored at the old level.
    assert_eq!(ev.line_clear_score, 100);
    assert_eq!(s.score() - before, ev.drop_score + 100);
}

#[test]
fn test_blocked_spawn_is_immediate_game_over() {
    let mut board = Board::new();
    for y in 0..20 {
        for x in 3..7 {
            board.set(x, y, Some(PieceKind::L));
        }
    }

    for kind in PieceKind::ALL {
        let s = GameSession::with_board(board.clone(), ScriptedRng::repeat(kind));
        assert!(s.is_game_over(), "{:?}", kind);
        assert_eq!(s.score(), 0);
        assert!(s.ghost_piece().is_none());
    }
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut s = session_of(PieceKind::O);
    for i in 0..9 {
        s = s.hard_drop();
        assert!(!s.is_game_over(), "drop {}", i);
    }
    s = s.hard_drop();

    assert!(s.is_game_over());
    assert!(s.last_event().unwrap().game_over);
    assert_eq!(s.score(), 2 * (18 + 16 + 14 + 12 + 10 + 8 + 6 + 4 + 2));

    // Nothing but restart changes a finished game.
    let board = s.board().clone();
    let s = s
        .apply(GameAction::MoveLeft)
        .apply(GameAction::HardDrop)
        .apply(GameAction::Tick)
        .apply(GameAction::Pause);
    assert_eq!(s.board(), &board);
    assert!(!s.is_paused());
    assert!(s.last_event().is_none());

    let s = s.apply(GameAction::Restart);
    assert!(!s.is_game_over());
    assert_eq!(s.score(), 0);
    assert!(s.board().cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_soft_drop_scores_and_never_locks() {
    let mut s = session_of(PieceKind::O);
    for _ in 0..25 {
        s = s.soft_drop();
    }
    assert_eq!(s.current_piece().unwrap().position.y, 18);
    assert_eq!(s.score(), 18);
    assert!(s.board().cells().iter().all(|c| c.is_none()));

    // Gravity locks the resting piece.
    let s = s.drop_tick();
    assert!(s.last_event().is_some());
    assert_eq!(s.board().get(4, 19), Some(Some(PieceKind::O)));
    assert_eq!(s.score(), 18);
}

#[test]
fn test_paused_session_ignores_moves() {
    let s = session_of(PieceKind::T).apply(GameAction::Pause);
    let piece = s.current_piece();
    let s = s
        .apply(GameAction::MoveRight)
        .apply(GameAction::SoftDrop)
        .apply(GameAction::HardDrop)
        .apply(GameAction::Tick);
    assert!(s.is_paused());
    assert_eq!(s.current_piece(), piece);
    assert_eq!(s.score(), 0);

    let s = s.apply(GameAction::Pause).apply(GameAction::MoveRight);
    assert!(!s.is_paused());
    assert_eq!(s.current_piece().unwrap().position.x, piece.unwrap().position.x + 1);
}

#[test]
fn test_last_event_only_describes_latest_transition() {
    let s = session_of(PieceKind::O).hard_drop();
    assert!(s.last_event().is_some());
    let s = s.move_left();
    assert!(s.last_event().is_none());
}

#[test]
fn test_same_seed_same_pieces() {
    let a = GameSession::new(SimpleRng::new(2024));
    let b = GameSession::new(SimpleRng::new(2024));
    let seq = |mut s: GameSession| {
        let mut kinds = Vec::new();
        for _ in 0..20 {
            kinds.push(s.current_piece().unwrap().kind);
            s = s.hard_drop();
            if s.is_game_over() {
                break;
            }
        }
        kinds
    };
    assert_eq!(seq(a), seq(b));
}

#[test]
fn test_snapshot_reflects_session() {
    let s = session_of(PieceKind::O).hard_drop();
    let snap = s.snapshot();

    assert_eq!(snap.score, 36);
    assert_eq!(snap.board[19][4], PieceKind::O.tag());
    assert_eq!(snap.current.unwrap().kind, PieceKind::O);
    assert_eq!(snap.ghost.unwrap().y, 16);
    assert_eq!(snap.board_hash, blockfall::core::snapshot::board_hash(&snap.board));
    assert_ne!(snap.board_hash, GameSession::default().snapshot().board_hash);
}

#[test]
fn test_clear_is_credited_when_the_same_lock_ends_the_game() {
    // Row 1 has a two-wide gap under the O spawn; (4, 2) and (5, 2) hold the
    // O at y = 0, so it locks in place, clears row 1 and its top half slides
    // into the spawn cells.
    let mut board = board_with_rows(1..2, &[4, 5]);
    board.set(4, 2, Some(PieceKind::T));
    board.set(5, 2, Some(PieceKind::T));

    let s = GameSession::with_board(board, ScriptedRng::repeat(PieceKind::O));
    assert!(!s.is_game_over());
    let s = s.hard_drop();

    assert!(s.is_game_over());
    assert_eq!(s.score(), 40);
    assert_eq!(s.lines(), 1);
    let ev = s.last_event().unwrap();
    assert_eq!(ev.rows_cleared.as_slice(), &[1]);
    assert_eq!(ev.line_clear_score, 40);
    assert_eq!(ev.drop_score, 0);
    assert!(ev.game_over);
}
