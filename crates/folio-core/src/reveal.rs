//! Section reveal ("epoch") state machine.
//!
//! Sections go `Unseen -> Loading -> Loaded`, with `Loaded` permanent for the
//! page session. A single global lock means at most one section is loading at
//! a time; sections that come into view while the lock is held wait in a FIFO
//! queue and start the moment it frees.

use crate::constants::{
    REVEAL_DURATION_MS, REVEAL_STATUS_LINES, REVEAL_VISIBILITY_THRESHOLD, SECTION_ORDER,
};
use fnv::FnvHashMap;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealState {
    Unseen,
    Loading { started_ms: f64 },
    Loaded,
}

/// What a visibility report or a tick changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    /// The section took the loading lock.
    Started(String),
    /// The section is waiting for another section to finish.
    Queued(String),
    Loaded(String),
}

/// Everything the loader overlay needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct LoaderView<'a> {
    pub section: &'a str,
    pub title: String,
    pub epoch: usize,
    pub total_epochs: usize,
    pub percent: f32,
    pub status_lines: &'static [&'static str],
}

pub struct RevealCoordinator {
    order: Vec<String>,
    states: FnvHashMap<String, RevealState>,
    loading: Option<String>,
    waiting: VecDeque<String>,
    duration_ms: f64,
    threshold: f32,
}

impl Default for RevealCoordinator {
    fn default() -> Self {
        Self::new(SECTION_ORDER.iter().map(|s| s.to_string()).collect())
    }
}

impl RevealCoordinator {
    pub fn new(order: Vec<String>) -> Self {
        Self {
            order,
            states: FnvHashMap::default(),
            loading: None,
            waiting: VecDeque::new(),
            duration_ms: REVEAL_DURATION_MS,
            threshold: REVEAL_VISIBILITY_THRESHOLD,
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// 1-based position in the canonical order; unknown ids report epoch 1.
    /// Ids match exactly, the same way every other lookup here does.
    pub fn epoch_number(&self, id: &str) -> usize {
        self.order
            .iter()
            .position(|s| *s == id)
            .map(|i| i + 1)
            .unwrap_or(1)
    }

    pub fn total_epochs(&self) -> usize {
        self.order.len()
    }

    pub fn state(&self, id: &str) -> RevealState {
        self.states.get(id).copied().unwrap_or(RevealState::Unseen)
    }

    #[inline]
    pub fn is_loaded(&self, id: &str) -> bool {
        self.state(id) == RevealState::Loaded
    }

    pub fn loading_section(&self) -> Option<&str> {
        self.loading.as_deref()
    }

    pub fn is_waiting(&self, id: &str) -> bool {
        self.waiting.iter().any(|w| w == id)
    }

    /// Report that `id` is `ratio` visible. Only crossing the visibility
    /// threshold matters; repeated reports are no-ops.
    pub fn on_visible(
        &mut self,
        id: &str,
        ratio: f32,
        reduced_motion: bool,
        now_ms: f64,
    ) -> Option<RevealEvent> {
        // NaN ratios never count as visible
        if !(ratio >= self.threshold) {
            return None;
        }
        if self.state(id) != RevealState::Unseen {
            return None;
        }
        if reduced_motion {
            self.waiting.retain(|w| w != id);
            self.states.insert(id.to_string(), RevealState::Loaded);
            log::info!("[reveal] {} loaded (reduced motion)", id);
            return Some(RevealEvent::Loaded(id.to_string()));
        }
        if self.loading.is_some() {
            if self.is_waiting(id) {
                return None;
            }
            self.waiting.push_back(id.to_string());
            return Some(RevealEvent::Queued(id.to_string()));
        }
        self.begin(id.to_string(), now_ms);
        Some(RevealEvent::Started(id.to_string()))
    }

    fn begin(&mut self, id: String, now_ms: f64) {
        log::info!(
            "[reveal] epoch {}/{} loading {}",
            self.epoch_number(&id),
            self.total_epochs(),
            id
        );
        self.states
            .insert(id.clone(), RevealState::Loading { started_ms: now_ms });
        self.loading = Some(id);
    }

    /// Advance time. Completes the loading section once its fixed duration has
    /// elapsed and hands the lock to the next waiting section.
    pub fn tick(&mut self, now_ms: f64) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        let Some(id) = self.loading.clone() else {
            return events;
        };
        let RevealState::Loading { started_ms } = self.state(&id) else {
            return events;
        };
        if now_ms - started_ms < self.duration_ms {
            return events;
        }
        self.states.insert(id.clone(), RevealState::Loaded);
        self.loading = None;
        events.push(RevealEvent::Loaded(id));

        while let Some(next) = self.waiting.pop_front() {
            if self.state(&next) == RevealState::Unseen {
                self.begin(next.clone(), now_ms);
                events.push(RevealEvent::Started(next));
                break;
            }
        }
        events
    }

    /// Loader overlay contents while a section is loading.
    pub fn loader_view(&self, now_ms: f64) -> Option<LoaderView<'_>> {
        let id = self.loading.as_deref()?;
        let RevealState::Loading { started_ms } = self.state(id) else {
            return None;
        };
        let percent = if self.duration_ms > 0.0 {
            (((now_ms - started_ms) / self.duration_ms) * 100.0).clamp(0.0, 100.0) as f32
        } else {
            100.0
        };
        let shown = if percent > 66.0 {
            3
        } else if percent > 33.0 {
            2
        } else {
            1
        };
        Some(LoaderView {
            section: id,
            title: section_title(id),
            epoch: self.epoch_number(id),
            total_epochs: self.total_epochs(),
            percent,
            status_lines: &REVEAL_STATUS_LINES[..shown],
        })
    }
}

/// `"experience"` -> `"Experience"`.
pub fn section_title(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
