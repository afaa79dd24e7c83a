use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag for a per-frame loop. The owner keeps one handle and the
/// loop body checks a clone before rescheduling itself.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

const MAX_FRAME_DT_MS: f64 = 100.0; // clamp after tab suspension

/// Frame-to-frame delta from a monotonically increasing clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    frames: u64,
}

impl FrameClock {
    /// Returns the elapsed milliseconds since the previous tick (zero on the
    /// first tick), clamped to `[0, 100]`.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_DT_MS),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.frames += 1;
        dt
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
