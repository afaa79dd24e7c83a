//! Page-lifetime state shared by the interactive components.

use crate::constants::{
    NAV_ACTIVE_TOP_PX, NAV_SCROLL_DELAY_MS, NAV_VISIBLE_SCROLL_FRACTION, SECTION_ORDER,
};
use crate::inference::InferenceRun;
use crate::reveal::RevealCoordinator;
use crate::tone::ToneSelector;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Option<String>,
    pub hovered: Option<String>,
}

/// Created when the page mounts and dropped on navigation away. Components
/// receive it by reference; nothing here is a global.
#[derive(Default)]
pub struct PageSession {
    pub tone: ToneSelector,
    pub reveal: RevealCoordinator,
    pub nav: NavState,
    inference: Option<InferenceRun>,
    reduced_motion: bool,
}

impl PageSession {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            reduced_motion,
            ..Self::default()
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if reduced != self.reduced_motion {
            log::info!("[motion] reduced motion {}", if reduced { "on" } else { "off" });
        }
        self.reduced_motion = reduced;
    }

    /// Starts an inference run, replacing any run in progress. Returns the
    /// delay before the page should scroll to the target section.
    pub fn start_inference(&mut self, target: &str, now_ms: f64) -> f64 {
        self.inference = Some(InferenceRun::start(target, self.reduced_motion, now_ms));
        if self.reduced_motion {
            0.0
        } else {
            NAV_SCROLL_DELAY_MS
        }
    }

    pub fn inference(&self) -> Option<&InferenceRun> {
        self.inference.as_ref()
    }

    /// Drops a finished run. Returns `true` if one ended on this call.
    pub fn tick_inference(&mut self, now_ms: f64) -> bool {
        match &self.inference {
            Some(run) if run.is_done(now_ms) => {
                self.inference = None;
                true
            }
            _ => false,
        }
    }

    pub fn stop_inference(&mut self) {
        self.inference = None;
    }

    pub fn update_active_section(&mut self, section_tops: &[(&str, f32)]) {
        if let Some(id) = active_section(section_tops, NAV_ACTIVE_TOP_PX) {
            if self.nav.active.as_deref() != Some(id) {
                self.nav.active = Some(id.to_string());
            }
        }
    }

    pub fn set_hovered(&mut self, node: Option<&str>) {
        self.nav.hovered = node.map(str::to_string);
    }
}

/// Last section, in page order, whose top edge has scrolled to within
/// `threshold_px` of the viewport top. Missing sections are simply absent
/// from `section_tops`.
pub fn active_section<'a>(section_tops: &[(&'a str, f32)], threshold_px: f32) -> Option<&'a str> {
    section_tops
        .iter()
        .rev()
        .find(|(_, top)| *top <= threshold_px)
        .map(|(id, _)| *id)
}

#[inline]
pub fn nav_visible(scroll_y: f32, viewport_height: f32) -> bool {
    scroll_y > viewport_height * NAV_VISIBLE_SCROLL_FRACTION
}

/// Section ids in canonical order.
pub fn section_ids() -> impl Iterator<Item = &'static str> {
    SECTION_ORDER.iter().copied()
}
