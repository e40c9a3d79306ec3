//! Frame clock
//!
//! The host hands us a monotonic timestamp per frame. We turn consecutive
//! timestamps into a delta normalized to the reference frame, clamped so a
//! stalled or backgrounded tab cannot produce a huge simulation jump.

/// Converts frame timestamps (ms) into normalized deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_ms: f64,
    max_delta: f32,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(frame_ms: f32, max_delta: f32) -> Self {
        Self {
            frame_ms: f64::from(frame_ms),
            max_delta,
            last_ms: None,
        }
    }

    /// Forget the baseline; the next timestamp re-anchors and yields no delta
    pub fn reanchor(&mut self) {
        self.last_ms = None;
    }

    /// Delta since the previous timestamp, or `None` when this frame only anchors
    pub fn advance(&mut self, now_ms: f64) -> Option<f32> {
        let last = self.last_ms.replace(now_ms)?;
        let delta = ((now_ms - last) / self.frame_ms) as f32;
        // NaN collapses to 0; a negative bound yields 0
        Some(delta.max(0.0).min(self.max_delta.max(0.0)))
    }
}
