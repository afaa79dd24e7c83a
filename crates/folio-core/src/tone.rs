//! Two-axis tone selection and the cross-fade used when the selection changes.

use crate::constants::{TONE_DEFAULT, TONE_FADE_MS, TONE_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToneVariant {
    ConciseCasual,
    ConciseTechnical,
    DetailedCasual,
    DetailedTechnical,
}

/// Pure 2x2 selection over the two sliders. Inputs are clamped first.
pub fn select(verbosity: f32, technical_level: f32) -> ToneVariant {
    let verbose = clamp_unit(verbosity, TONE_DEFAULT) >= TONE_THRESHOLD;
    let technical = clamp_unit(technical_level, TONE_DEFAULT) >= TONE_THRESHOLD;
    match (verbose, technical) {
        (false, false) => ToneVariant::ConciseCasual,
        (false, true) => ToneVariant::ConciseTechnical,
        (true, false) => ToneVariant::DetailedCasual,
        (true, true) => ToneVariant::DetailedTechnical,
    }
}

#[inline]
fn clamp_unit(v: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

/// Four pre-authored renditions of the same text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToneVariants<'a> {
    pub concise_casual: &'a str,
    pub concise_technical: &'a str,
    pub detailed_casual: &'a str,
    pub detailed_technical: &'a str,
}

impl<'a> ToneVariants<'a> {
    pub fn pick(&self, variant: ToneVariant) -> &'a str {
        match variant {
            ToneVariant::ConciseCasual => self.concise_casual,
            ToneVariant::ConciseTechnical => self.concise_technical,
            ToneVariant::DetailedCasual => self.detailed_casual,
            ToneVariant::DetailedTechnical => self.detailed_technical,
        }
    }

    pub fn select(&self, verbosity: f32, technical_level: f32) -> &'a str {
        self.pick(select(verbosity, technical_level))
    }
}

/// Page-global slider pair. Every write is clamped to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSelector {
    verbosity: f32,
    technical_level: f32,
}

impl Default for ToneSelector {
    fn default() -> Self {
        Self {
            verbosity: TONE_DEFAULT,
            technical_level: TONE_DEFAULT,
        }
    }
}

impl ToneSelector {
    pub fn verbosity(&self) -> f32 {
        self.verbosity
    }

    pub fn technical_level(&self) -> f32 {
        self.technical_level
    }

    pub fn set_verbosity(&mut self, value: f32) {
        if value.is_finite() {
            self.verbosity = value.clamp(0.0, 1.0);
        }
    }

    pub fn set_technical_level(&mut self, value: f32) {
        if value.is_finite() {
            self.technical_level = value.clamp(0.0, 1.0);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn variant(&self) -> ToneVariant {
        select(self.verbosity, self.technical_level)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    FadingOut { since_ms: f64, from_opacity: f32 },
    FadingIn { since_ms: f64, from_opacity: f32 },
}

/// Presentation state for one morphing text block: keeps the old text on
/// screen while it fades out, swaps, then fades the new text in.
#[derive(Clone, Debug)]
pub struct ToneMorph {
    displayed: ToneVariant,
    target: ToneVariant,
    phase: Phase,
    fade_ms: f64,
}

impl ToneMorph {
    pub fn new(initial: ToneVariant) -> Self {
        Self {
            displayed: initial,
            target: initial,
            phase: Phase::Idle,
            fade_ms: TONE_FADE_MS,
        }
    }

    pub fn displayed(&self) -> ToneVariant {
        self.displayed
    }

    pub fn target(&self) -> ToneVariant {
        self.target
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn retarget(&mut self, target: ToneVariant, reduced_motion: bool, now_ms: f64) {
        if reduced_motion {
            self.displayed = target;
            self.target = target;
            self.phase = Phase::Idle;
            return;
        }
        if target == self.target {
            return;
        }
        self.target = target;
        // every transition starts from whatever opacity is on screen now
        let from_opacity = self.opacity(now_ms);
        match self.phase {
            Phase::FadingOut { .. } if target == self.displayed => {
                self.phase = Phase::FadingIn {
                    since_ms: now_ms,
                    from_opacity,
                };
            }
            _ if target == self.displayed => {}
            // debounce: every change during the fade-out restarts it
            _ => {
                self.phase = Phase::FadingOut {
                    since_ms: now_ms,
                    from_opacity,
                }
            }
        }
    }

    /// Advance phases. Returns `true` when the displayed text was swapped.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.phase {
            Phase::FadingOut { since_ms, .. } if now_ms - since_ms >= self.fade_ms => {
                self.displayed = self.target;
                self.phase = Phase::FadingIn {
                    since_ms: now_ms,
                    from_opacity: 0.0,
                };
                true
            }
            Phase::FadingIn { since_ms, .. } if now_ms - since_ms >= self.fade_ms => {
                self.phase = Phase::Idle;
                false
            }
            _ => false,
        }
    }

    pub fn opacity(&self, now_ms: f64) -> f32 {
        let frac = |since_ms: f64| {
            if self.fade_ms <= 0.0 {
                1.0
            } else {
                ((now_ms - since_ms) / self.fade_ms).clamp(0.0, 1.0) as f32
            }
        };
        match self.phase {
            Phase::Idle => 1.0,
            Phase::FadingOut {
                since_ms,
                from_opacity,
            } => from_opacity * (1.0 - frac(since_ms)),
            Phase::FadingIn {
                since_ms,
                from_opacity,
            } => from_opacity + (1.0 - from_opacity) * frac(since_ms),
        }
    }
}
