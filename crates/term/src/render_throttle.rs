/// Decides when the host loop should repaint.
///
/// A frame is drawn whenever the snapshot fingerprint changes. While nothing
/// changes (paused, game over, or simply idle) a repaint still happens at most
/// once per `idle_interval_ms`, which keeps the screen correct after the
/// terminal has been scribbled on.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Forget the last frame so the next call renders.
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let idle_due = now_ms.saturating_sub(self.last_render_ms) >= self.idle_interval_ms;
        if changed || idle_due {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_renders() {
        let mut t = RenderThrottle::new(1000);
        assert!(t.should_render(0, 42));
        assert!(!t.should_render(1, 42));
    }

    #[test]
    fn invalidate_forces_render() {
        let mut t = RenderThrottle::new(1000);
        assert!(t.should_render(0, 7));
        t.invalidate();
        assert!(t.should_render(5, 7));
    }
}
