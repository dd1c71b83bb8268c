//! Redraw gating for a screen that only changes on input.
//!
//! Every screen of the game is static between key presses, so a frame is drawn
//! when the view fingerprint changes and otherwise at most once per refresh
//! interval (to repaint after other programs scribble on the terminal).

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Decide whether to draw at `now_ms` for a view with `fingerprint`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.refresh_interval_ms;
        if changed || stale {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }
        false
    }

    /// Force the next call to draw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }
}
