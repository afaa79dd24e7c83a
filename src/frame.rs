use crate::dom;
use crate::hero::HeroTerminal;
use crate::input::PointerState;
use crate::nav::NavGraph;
use crate::overlay::{InferenceOverlay, LoaderOverlay};
use crate::render::{self, Canvas2d};
use crate::reveal;
use crate::scroll::{self, ScrollTracker};
use crate::scrubber::VideoScrub;
use crate::tone::ToneBlocks;
use folio_core::{CancelToken, FrameClock, PageSession, ParticleField, ScrollSignals, Starfield};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A requestAnimationFrame loop with a single owner. Dropping the handle (or
/// calling [`RafLoop::cancel`]) stops the loop and releases the callback.
pub struct RafLoop {
    token: CancelToken,
    pending: Rc<Cell<Option<i32>>>,
    _tick: TickSlot,
}

impl RafLoop {
    /// `frame` receives the frame timestamp and the clamped delta since the
    /// previous frame, both in milliseconds.
    pub fn start(mut frame: impl FnMut(f64, f64) + 'static) -> Self {
        let token = CancelToken::new();
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let token_tick = token.clone();
        let pending_tick = pending.clone();
        let tick_self = Rc::downgrade(&tick);
        let mut clock = FrameClock::default();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            pending_tick.set(None);
            if token_tick.is_cancelled() {
                return;
            }
            let dt = clock.tick(now_ms);
            frame(now_ms, dt);
            if token_tick.is_cancelled() {
                return;
            }
            if let Some(slot) = tick_self.upgrade() {
                pending_tick.set(request(&slot));
            }
        }) as Box<dyn FnMut(f64)>));

        pending.set(request(&tick));
        Self {
            token,
            pending,
            _tick: tick,
        }
    }

    pub fn cancel(&self) {
        if self.token.is_cancelled() {
            return;
        }
        self.token.cancel();
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::debug!("[frame] loop cancelled");
    }
}

impl Drop for RafLoop {
    // The closure only holds a weak handle to itself, so releasing `tick`
    // here frees it. Must not be dropped from inside its own frame callback.
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request(slot: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let borrowed = slot.borrow();
    let cb = borrowed.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

/// One animated canvas and the simulation drawn into it.
pub struct CanvasLayer<S> {
    pub canvas: Canvas2d,
    pub sim: S,
    static_drawn: bool,
}

impl<S> CanvasLayer<S> {
    pub fn new(canvas: Canvas2d, sim: S) -> Self {
        Self {
            canvas,
            sim,
            static_drawn: false,
        }
    }

    /// Under reduced motion only one frame is drawn per size change.
    fn should_draw(&mut self, resized: bool, reduced_motion: bool) -> bool {
        if !reduced_motion {
            self.static_drawn = false;
            return true;
        }
        let draw = resized || !self.static_drawn;
        self.static_drawn = true;
        draw
    }
}

/// Everything the page animates per frame. Components whose elements are
/// missing from the page are `None` and skipped.
pub struct FrameContext {
    pub session: Rc<RefCell<PageSession>>,
    pub document: web::Document,
    pub scroll: Option<ScrollTracker>,
    pub signals: ScrollSignals,
    pub particles: Option<CanvasLayer<ParticleField>>,
    pub starfield: Option<CanvasLayer<Starfield>>,
    pub pointer: Rc<Cell<PointerState>>,
    pub video: Option<VideoScrub>,
    pub video_layer: Option<web::HtmlElement>,
    pub overlay_layer: Option<web::HtmlElement>,
    pub loader: Option<LoaderOverlay>,
    pub inference: Option<InferenceOverlay>,
    pub tone: ToneBlocks,
    pub nav: Option<NavGraph>,
    pub hero: Option<HeroTerminal>,
}

impl FrameContext {
    pub fn frame(&mut self, now_ms: f64) {
        let reduced = self.session.borrow().reduced_motion();
        self.scroll_layers(now_ms);
        self.draw_particles(reduced);
        self.draw_starfield(now_ms, reduced);
        self.sections(now_ms);

        {
            let mut s = self.session.borrow_mut();
            if s.tick_inference(now_ms) {
                log::debug!("[inference] run finished");
            }
            if let Some(o) = &mut self.inference {
                o.update(s.inference(), reduced, now_ms);
            }
        }

        let variant = self.session.borrow().tone.variant();
        self.tone.update(variant, reduced, now_ms);

        if let Some(nav) = &mut self.nav {
            nav.update();
        }
        if let Some(hero) = &mut self.hero {
            hero.update(now_ms);
        }
    }

    fn scroll_layers(&mut self, now_ms: f64) {
        let Some(tracker) = &self.scroll else {
            return;
        };
        let signals = self.signals.publish(tracker.sample());
        if let Some(layer) = &self.particles {
            dom::set_opacity(&layer.canvas.canvas, signals.particle_opacity);
        }
        if let Some(el) = &self.video_layer {
            dom::set_opacity(el, signals.video_opacity);
        }
        if let Some(el) = &self.overlay_layer {
            dom::set_opacity(el, signals.overlay_opacity);
        }
        if let Some(video) = &self.video {
            video.update(signals.video_progress, now_ms);
        }
    }

    fn draw_particles(&mut self, reduced: bool) {
        let Some(layer) = &mut self.particles else {
            return;
        };
        let resized = layer.canvas.sync_size();
        if resized {
            let size = layer.canvas.size();
            layer.sim.resize(size.x, size.y);
        }
        if !layer.should_draw(resized, reduced) {
            return;
        }
        if !reduced {
            layer.sim.set_pointer(self.pointer.get().pos);
            layer.sim.step();
        }
        render::draw_particles(&layer.canvas, &layer.sim);
    }

    fn draw_starfield(&mut self, now_ms: f64, reduced: bool) {
        let Some(layer) = &mut self.starfield else {
            return;
        };
        let resized = layer.canvas.sync_size();
        if resized {
            let size = layer.canvas.size();
            layer.sim.resize(size.x, size.y);
        }
        if !layer.should_draw(resized, reduced) {
            return;
        }
        let time = if reduced { 0.0 } else { now_ms };
        render::draw_starfield(&layer.canvas, &layer.sim, time, scroll::scroll_y(), !reduced);
    }

    fn sections(&mut self, now_ms: f64) {
        let mut s = self.session.borrow_mut();
        for ev in s.reveal.tick(now_ms) {
            reveal::apply(&self.document, &ev);
        }
        if let Some(loader) = &mut self.loader {
            loader.update(s.reveal.loader_view(now_ms));
        }
    }
}
