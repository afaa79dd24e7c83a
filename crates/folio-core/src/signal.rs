//! Scroll progress and the signals derived from it.
//!
//! A single [`ScrollProgress`] value fans out to any number of
//! [`Breakpoints`] tables. Consumers never sample the tables directly from
//! event handlers; they take one [`SignalFrame`] snapshot per frame so every
//! derived value is computed from the same progress.

use crate::error::SignalError;
use smallvec::SmallVec;

/// Normalized scroll position of a container through its own scrollable range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    /// Progress for a `start start -> end end` range: 0 when the container's top
    /// meets the viewport top, 1 when its bottom meets the viewport bottom.
    pub fn from_rect(container_top: f32, container_height: f32, viewport_height: f32) -> Self {
        let range = container_height - viewport_height;
        if range <= 0.0 {
            return Self(0.0);
        }
        Self::new(-container_top / range)
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

/// Ordered `(breakpoint, value)` pairs sampled by piecewise-linear interpolation.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoints {
    points: SmallVec<[(f32, f32); 6]>,
}

impl Breakpoints {
    pub fn new(points: &[(f32, f32)]) -> Result<Self, SignalError> {
        if points.is_empty() {
            return Err(SignalError::Empty);
        }
        for (i, &(b, v)) in points.iter().enumerate() {
            if !b.is_finite() || !v.is_finite() {
                return Err(SignalError::NotFinite { index: i });
            }
            if i > 0 && b <= points[i - 1].0 {
                return Err(SignalError::NotIncreasing { index: i, value: b });
            }
        }
        Ok(Self {
            points: points.iter().copied().collect(),
        })
    }

    /// Build from parallel input/output slices, the way animation tables are
    /// usually written down.
    pub fn from_slices(inputs: &[f32], outputs: &[f32]) -> Result<Self, SignalError> {
        if inputs.len() != outputs.len() {
            return Err(SignalError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        let pairs: SmallVec<[(f32, f32); 6]> =
            inputs.iter().copied().zip(outputs.iter().copied()).collect();
        Self::new(&pairs)
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    /// Interpolated value at `p`. Clamps to the end values outside the table
    /// and returns a breakpoint's own value exactly when `p` lands on it.
    pub fn sample(&self, p: f32) -> f32 {
        let pts = &self.points;
        let first = pts[0];
        if !p.is_finite() {
            return first.1;
        }
        // index of the first breakpoint strictly greater than p
        let hi = pts.partition_point(|&(b, _)| b <= p);
        if hi == 0 {
            return first.1;
        }
        if hi == pts.len() {
            return pts[hi - 1].1;
        }
        let (b0, v0) = pts[hi - 1];
        if p == b0 {
            return v0;
        }
        let (b1, v1) = pts[hi];
        let t = (p - b0) / (b1 - b0);
        v0 + (v1 - v0) * t
    }
}

/// The derived signals that drive the scroll-coupled background.
#[derive(Clone, Debug)]
pub struct ScrollSignals {
    pub particle_opacity: Breakpoints,
    pub video_opacity: Breakpoints,
    pub video_progress: Breakpoints,
    pub overlay_opacity: Breakpoints,
}

/// One frame's worth of derived values, all from the same progress sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SignalFrame {
    pub progress: f32,
    pub particle_opacity: f32,
    pub video_opacity: f32,
    pub video_progress: f32,
    pub overlay_opacity: f32,
}

impl ScrollSignals {
    /// Particles fade out as the video fades in; the video scrubs through the
    /// middle of the page with a readability overlay on top.
    pub fn rocket() -> Result<Self, SignalError> {
        Ok(Self {
            particle_opacity: Breakpoints::from_slices(&[0.0, 0.1, 0.2], &[1.0, 1.0, 0.0])?,
            video_opacity: Breakpoints::from_slices(&[0.1, 0.2], &[0.0, 1.0])?,
            video_progress: Breakpoints::from_slices(&[0.2, 0.7], &[0.0, 1.0])?,
            overlay_opacity: Breakpoints::from_slices(
                &[0.15, 0.25, 0.65, 0.75],
                &[0.0, 0.4, 0.4, 0.0],
            )?,
        })
    }

    pub fn publish(&self, progress: ScrollProgress) -> SignalFrame {
        let p = progress.get();
        SignalFrame {
            progress: p,
            particle_opacity: self.particle_opacity.sample(p),
            video_opacity: self.video_opacity.sample(p),
            video_progress: self.video_progress.sample(p),
            overlay_opacity: self.overlay_opacity.sample(p),
        }
    }
}
