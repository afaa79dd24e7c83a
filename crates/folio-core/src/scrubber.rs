use crate::constants::{SCRUB_MAX_WRITES_PER_SEC, SCRUB_MIN_DELTA_SEC};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MediaState {
    /// Metadata not loaded yet; the duration is unknown.
    Pending,
    Ready { duration: f64 },
    /// Load or decode failed; the poster image replaces the video.
    Failed,
}

#[derive(Clone, Copy, Debug)]
pub struct ScrubberConfig {
    pub min_delta_sec: f64,
    /// `None` disables rate limiting.
    pub max_writes_per_sec: Option<f64>,
}

impl Default for ScrubberConfig {
    fn default() -> Self {
        Self {
            min_delta_sec: SCRUB_MIN_DELTA_SEC,
            max_writes_per_sec: Some(SCRUB_MAX_WRITES_PER_SEC),
        }
    }
}

/// Maps a playback-position signal onto a media element's playback head.
///
/// The scrubber never plays media. It only decides whether, and to what time,
/// the caller should seek given the latest signal value.
#[derive(Clone, Debug)]
pub struct MediaScrubber {
    state: MediaState,
    config: ScrubberConfig,
    last_write_ms: Option<f64>,
}

impl MediaScrubber {
    pub fn new(config: ScrubberConfig) -> Self {
        Self {
            state: MediaState::Pending,
            config,
            last_write_ms: None,
        }
    }

    pub fn state(&self) -> MediaState {
        self.state
    }

    pub fn on_metadata(&mut self, duration: f64) {
        if self.state == MediaState::Failed {
            return;
        }
        if duration.is_finite() && duration > 0.0 {
            self.state = MediaState::Ready { duration };
        } else {
            log::warn!("[scrub] ignoring unusable duration {}", duration);
        }
    }

    pub fn on_error(&mut self) {
        if self.state != MediaState::Failed {
            log::warn!("[scrub] media failed to load; falling back to poster");
        }
        self.state = MediaState::Failed;
    }

    #[inline]
    pub fn shows_poster(&self) -> bool {
        self.state == MediaState::Failed
    }

    /// Target playback time for a signal value, if the duration is known.
    pub fn target_time(&self, signal: f32) -> Option<f64> {
        match self.state {
            MediaState::Ready { duration } => {
                let s = if signal.is_finite() {
                    signal.clamp(0.0, 1.0)
                } else {
                    0.0
                };
                Some(s as f64 * duration)
            }
            _ => None,
        }
    }

    /// Returns the time to seek to, or `None` when the write should be skipped
    /// (not ready, too close to the current time, or rate limited). A skipped
    /// write is expected to be re-offered with the latest signal next frame.
    pub fn scrub(&mut self, signal: f32, current_time: f64, now_ms: f64) -> Option<f64> {
        let target = self.target_time(signal)?;
        if (current_time - target).abs() <= self.config.min_delta_sec {
            return None;
        }
        if let (Some(rate), Some(last)) = (self.config.max_writes_per_sec, self.last_write_ms) {
            let min_gap_ms = 1000.0 / rate;
            if now_ms - last < min_gap_ms {
                return None;
            }
        }
        self.last_write_ms = Some(now_ms);
        Some(target)
    }
}

impl Default for MediaScrubber {
    fn default() -> Self {
        Self::new(ScrubberConfig::default())
    }
}
