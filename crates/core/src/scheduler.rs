//! Drop scheduler - turns host frames into automatic-descent ticks
//!
//! The host calls [`DropScheduler::drive`] (or [`DropScheduler::on_frame`])
//! once per frame with a monotonic timestamp in milliseconds. A tick fires
//! when at least `drop_time_ms` has elapsed since the previous one, and the
//! baseline is then reset to the frame time: a long stall produces one tick,
//! never a burst of catch-up ticks.
//!
//! While the session is paused or over the scheduler suspends itself. The
//! first frame after it becomes playable again only re-arms the baseline.

use crate::rng::RandomSource;
use crate::session::GameSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    /// Not started, or stopped by the host
    #[default]
    Stopped,
    /// Counting toward the next tick
    Running { last_drop_ms: u64 },
    /// Started, but the session is paused or over
    Suspended,
}

#[derive(Debug, Clone, Default)]
pub struct DropScheduler {
    state: SchedulerState,
}

impl DropScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin counting from `now_ms`. No-op if already started.
    pub fn start(&mut self, now_ms: u64) {
        if self.state == SchedulerState::Stopped {
            self.state = SchedulerState::Running {
                last_drop_ms: now_ms,
            };
        }
    }

    pub fn stop(&mut self) {
        self.state = SchedulerState::Stopped;
    }

    /// Drop any pending interval and count from `now_ms`, as for a new game.
    pub fn restart(&mut self, now_ms: u64) {
        self.stop();
        self.start(now_ms);
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SchedulerState::Running { .. })
    }

    /// Advance to `now_ms`; returns true when an automatic drop is due.
    ///
    /// `halted` suspends the scheduler for this and following frames until a
    /// frame arrives with `halted == false`.
    pub fn on_frame(&mut self, now_ms: u64, halted: bool, drop_time_ms: u32) -> bool {
        match self.state {
            SchedulerState::Stopped => false,
            _ if halted => {
                self.state = SchedulerState::Suspended;
                false
            }
            SchedulerState::Suspended => {
                self.state = SchedulerState::Running {
                    last_drop_ms: now_ms,
                };
                false
            }
            SchedulerState::Running { last_drop_ms } => {
                if now_ms.saturating_sub(last_drop_ms) >= u64::from(drop_time_ms) {
                    self.state = SchedulerState::Running {
                        last_drop_ms: now_ms,
                    };
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Run one frame against a session, applying a drop tick when due.
    pub fn drive<R: RandomSource>(&mut self, now_ms: u64, session: GameSession<R>) -> GameSession<R> {
        let halted = session.is_paused() || session.is_game_over();
        if self.on_frame(now_ms, halted, session.drop_time_ms()) {
            session.drop_tick()
        } else {
            session
        }
    }
}
