//! Game session - the state machine tying board, pieces, rules and scoring together
//!
//! A session is a value. Every transition consumes the current session and
//! returns the next one, so a host keeps exactly one live copy and replaces it
//! after each call (`session = session.apply(action)`). Transitions never read
//! a clock; automatic descent is requested from outside via
//! [`GameSession::drop_tick`], usually through a
//! [`DropScheduler`](crate::scheduler::DropScheduler).
//!
//! While paused or after game over, every transition except
//! [`GameSession::toggle_pause`] (when paused) and [`GameSession::restart`] is a
//! no-op.

use crate::board::{Board, RowList};
use crate::piece::Piece;
use crate::rng::{RandomSource, SimpleRng};
use crate::rules;
use crate::scoring::{drop_score, drop_time_for_level, level_for_lines, score_for_clear, DropKind};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Direction, GameAction, PieceKind, INITIAL_DROP_MS};

/// What happened when the last piece locked.
///
/// Audio, particle and overlay collaborators react to this instead of
/// diffing snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Cleared row indices (top to bottom) as they were before the clear
    pub rows_cleared: RowList,
    pub line_clear_score: u32,
    /// Hard drop bonus credited by the same transition (0 for gravity locks)
    pub drop_score: u32,
    pub level_up: bool,
    /// The next piece could not enter play
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
    paused: bool,
    drop_time_ms: u32,
    last_event: Option<LockEvent>,
    rng: R,
}

impl<R: RandomSource> GameSession<R> {
    /// Start a session on an empty board.
    pub fn new(rng: R) -> Self {
        Self::with_board(Board::new(), rng)
    }

    /// Start a session on a prepared board.
    ///
    /// Draws the current and next pieces. If the current piece does not fit at
    /// its spawn position the session begins in game over.
    pub fn with_board(board: Board, mut rng: R) -> Self {
        let current = Piece::spawn(&mut rng);
        let next = Piece::spawn(&mut rng);
        let game_over = rules::is_game_over(&board, &current);

        Self {
            board,
            current: Some(current),
            next: Some(next),
            score: 0,
            level: 0,
            lines: 0,
            game_over,
            paused: false,
            drop_time_ms: INITIAL_DROP_MS,
            last_event: None,
            rng,
        }
    }

    /// Fresh session on an empty board, continuing the same random stream.
    pub fn init_game(self) -> Self {
        Self::new(self.rng)
    }

    /// Alias of [`GameSession::init_game`]; allowed in every state.
    pub fn restart(self) -> Self {
        self.init_game()
    }

    /// Apply a game action
    pub fn apply(self, action: GameAction) -> Self {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Tick => self.drop_tick(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
        }
    }

    pub fn move_left(self) -> Self {
        self.shift(Direction::Left)
    }

    pub fn move_right(self) -> Self {
        self.shift(Direction::Right)
    }

    /// Turn the piece clockwise in place; discarded if it would not fit.
    pub fn rotate(mut self) -> Self {
        self.last_event = None;
        let Some(piece) = self.in_play() else {
            return self;
        };

        let rotated = piece.rotated();
        if rules::is_valid(&self.board, &rotated, rotated.position) {
            self.current = Some(rotated);
        }
        self
    }

    /// One row down for +1 point. A blocked piece stays put and does not lock.
    pub fn soft_drop(mut self) -> Self {
        self.last_event = None;
        let Some(piece) = self.in_play() else {
            return self;
        };

        if rules::can_move(&self.board, &piece, Direction::Down) {
            self.current = Some(piece.moved(Direction::Down));
            self.score = self.score.saturating_add(drop_score(1, DropKind::Soft));
        }
        self
    }

    /// Drop to the ghost position, credit 2 points per row, then lock.
    pub fn hard_drop(mut self) -> Self {
        self.last_event = None;
        let Some(piece) = self.in_play() else {
            return self;
        };

        let resting = rules::ghost(&self.board, &piece);
        let distance = (resting.position.y - piece.position.y) as u32;
        let bonus = drop_score(distance, DropKind::Hard);
        self.score = self.score.saturating_add(bonus);
        self.lock_and_resolve(resting, bonus)
    }

    /// Automatic descent: one row down, or lock where the piece stands.
    pub fn drop_tick(mut self) -> Self {
        self.last_event = None;
        let Some(piece) = self.in_play() else {
            return self;
        };

        if rules::can_move(&self.board, &piece, Direction::Down) {
            self.current = Some(piece.moved(Direction::Down));
            self
        } else {
            self.lock_and_resolve(piece, 0)
        }
    }

    /// Flip the pause flag. Ignored once the game is over.
    pub fn toggle_pause(mut self) -> Self {
        self.last_event = None;
        if !self.game_over {
            self.paused = !self.paused;
        }
        self
    }

    fn shift(mut self, direction: Direction) -> Self {
        self.last_event = None;
        let Some(piece) = self.in_play() else {
            return self;
        };

        if rules::can_move(&self.board, &piece, direction) {
            self.current = Some(piece.moved(direction));
        }
        self
    }

    /// The active piece, if actions may touch it.
    fn in_play(&self) -> Option<Piece> {
        if self.paused || self.game_over {
            return None;
        }
        self.current
    }

    /// Lock `piece`, clear rows, credit score, then promote the next piece.
    ///
    /// Score, lines and level are committed before the spawn check, so a clear
    /// that precedes a game over is always credited.
    fn lock_and_resolve(mut self, piece: Piece, drop_bonus: u32) -> Self {
        let placed = self.board.place(&piece);
        let rows = placed.completed_rows();

        let previous_level = self.level;
        let mut line_clear_score = 0;
        if rows.is_empty() {
            self.board = placed;
        } else {
            line_clear_score = score_for_clear(rows.len(), self.level);
            self.score = self.score.saturating_add(line_clear_score);
            self.lines = self.lines.saturating_add(rows.len() as u32);
            // Level and drop time only ever move toward harder.
            self.level = self.level.max(level_for_lines(self.lines));
            self.drop_time_ms = self.drop_time_ms.min(drop_time_for_level(self.level));
            self.board = placed.clear(&rows);
        }

        let promoted = match self.next.take() {
            Some(next) => next,
            None => Piece::spawn(&mut self.rng),
        };
        self.next = Some(Piece::spawn(&mut self.rng));
        self.current = Some(promoted);
        self.game_over = rules::is_game_over(&self.board, &promoted);

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            rows_cleared: rows,
            line_clear_score,
            drop_score: drop_bonus,
            level_up: self.level > previous_level,
            game_over: self.game_over,
        });
        self
    }
}

impl<R> GameSession<R> {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<Piece> {
        self.current
    }

    pub fn next_piece(&self) -> Option<Piece> {
        self.next
    }

    /// Landing projection of the current piece; `None` once the game is over.
    pub fn ghost_piece(&self) -> Option<Piece> {
        if self.game_over {
            return None;
        }
        self.current.map(|piece| rules::ghost(&self.board, &piece))
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Automatic descent interval for the current level
    pub fn drop_time_ms(&self) -> u32 {
        self.drop_time_ms
    }

    /// Lock produced by the most recent transition, if it locked a piece.
    pub fn last_event(&self) -> Option<&LockEvent> {
        self.last_event.as_ref()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.board_hash = crate::snapshot::board_hash(&out.board);
        out.current = self.current.map(PieceSnapshot::from);
        out.next = self.next.map(PieceSnapshot::from);
        out.ghost = self.ghost_piece().map(PieceSnapshot::from);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.game_over;
        out.paused = self.paused;
        out.drop_time_ms = self.drop_time_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession<SimpleRng> {
    fn default() -> Self {
        Self::new(SimpleRng::default())
    }
}

#[cfg(test)]
impl<R> GameSession<R> {
    pub(crate) fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    pub(crate) fn set_current(&mut self, piece: Piece) {
        self.current = Some(piece);
    }

    pub(crate) fn set_lines(&mut self, lines: u32) {
        self.lines = lines;
    }
}
