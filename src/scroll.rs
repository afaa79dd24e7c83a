use folio_core::ScrollProgress;
use web_sys as web;

/// Samples how far the page has scrolled through one tall container.
pub struct ScrollTracker {
    container: web::Element,
}

impl ScrollTracker {
    pub fn new(container: web::Element) -> Self {
        Self { container }
    }

    pub fn sample(&self) -> ScrollProgress {
        let rect = self.container.get_bounding_client_rect();
        ScrollProgress::from_rect(rect.top() as f32, rect.height() as f32, viewport_height())
    }
}

pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}
