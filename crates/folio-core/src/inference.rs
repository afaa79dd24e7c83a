//! Short "forward pass" shown when a navigation node is clicked.

use crate::constants::{
    INFERENCE_DURATION_MS, INFERENCE_LAYERS, INFERENCE_LAYER_MS, INFERENCE_METRICS_MS,
    INFERENCE_REDUCED_DURATION_MS,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub target: f32,
    pub unit: &'static str,
    pub decimals: usize,
}

impl Metric {
    pub fn format(&self, value: f32) -> String {
        format!("{:.*}{}", self.decimals, value, self.unit)
    }
}

pub const METRICS: [Metric; 4] = [
    Metric { label: "Weights", target: 127.4, unit: "M", decimals: 1 },
    Metric { label: "FLOPs", target: 2.3, unit: "G", decimals: 1 },
    Metric { label: "Latency", target: 42.0, unit: "ms", decimals: 0 },
    Metric { label: "Memory", target: 512.0, unit: "MB", decimals: 0 },
];

pub const INFERENCE_STATUS: &str = "Running inference...";

#[inline]
pub fn ease_out_cubic(x: f32) -> f32 {
    1.0 - (1.0 - x.clamp(0.0, 1.0)).powi(3)
}

#[derive(Clone, Debug, PartialEq)]
pub struct InferenceRun {
    target: String,
    started_ms: f64,
    reduced_motion: bool,
}

impl InferenceRun {
    pub fn start(target: impl Into<String>, reduced_motion: bool, now_ms: f64) -> Self {
        let target = target.into();
        log::debug!("[inference] run -> {}", target);
        Self {
            target,
            started_ms: now_ms,
            reduced_motion,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn duration_ms(&self) -> f64 {
        if self.reduced_motion {
            INFERENCE_REDUCED_DURATION_MS
        } else {
            INFERENCE_DURATION_MS
        }
    }

    pub fn elapsed(&self, now_ms: f64) -> f64 {
        (now_ms - self.started_ms).max(0.0)
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        self.elapsed(now_ms) >= self.duration_ms()
    }

    /// Completed layers in `0..=INFERENCE_LAYERS`. Stays at zero under
    /// reduced motion.
    pub fn layer(&self, now_ms: f64) -> u32 {
        if self.reduced_motion {
            return 0;
        }
        ((self.elapsed(now_ms) / INFERENCE_LAYER_MS).floor() as u32).min(INFERENCE_LAYERS)
    }

    /// Current value of each entry in [`METRICS`].
    pub fn metric_values(&self, now_ms: f64) -> [f32; 4] {
        let eased = ease_out_cubic((self.elapsed(now_ms) / INFERENCE_METRICS_MS) as f32);
        METRICS.map(|m| m.target * eased)
    }
}
