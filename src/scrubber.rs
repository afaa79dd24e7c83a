use crate::dom::Listener;
use folio_core::MediaScrubber;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Binds a `<video>` element to a [`MediaScrubber`]. The video never plays;
/// its playback head follows the scroll signal.
pub struct VideoScrub {
    video: web::HtmlVideoElement,
    scrubber: Rc<RefCell<MediaScrubber>>,
    _listeners: Vec<Listener>,
}

impl VideoScrub {
    pub fn new(video: web::HtmlVideoElement, poster: Option<web::Element>) -> Self {
        let scrubber = Rc::new(RefCell::new(MediaScrubber::default()));
        video.set_muted(true);
        _ = video.pause();

        let mut listeners = Vec::new();
        {
            let scrubber = scrubber.clone();
            let v = video.clone();
            listeners.extend(Listener::new(&video, "loadedmetadata", move |_| {
                scrubber.borrow_mut().on_metadata(v.duration());
                log::info!("[scrub] metadata loaded, duration {:.2}s", v.duration());
            }));
        }
        {
            let scrubber = scrubber.clone();
            let v = video.clone();
            listeners.extend(Listener::new(&video, "error", move |_| {
                scrubber.borrow_mut().on_error();
                crate::dom::set_hidden(&v, true);
                if let Some(p) = &poster {
                    crate::dom::set_hidden(p, false);
                }
            }));
        }

        // Metadata may already be available when the module loads late.
        if video.ready_state() >= web::HtmlMediaElement::HAVE_METADATA {
            scrubber.borrow_mut().on_metadata(video.duration());
        }

        Self {
            video,
            scrubber,
            _listeners: listeners,
        }
    }

    /// Offer the latest playback signal; writes `currentTime` only when the
    /// scrubber decides a seek is due.
    pub fn update(&self, signal: f32, now_ms: f64) {
        let mut scrubber = self.scrubber.borrow_mut();
        if scrubber.shows_poster() {
            return;
        }
        if let Some(t) = scrubber.scrub(signal, self.video.current_time(), now_ms) {
            self.video.set_current_time(t);
        }
    }
}
