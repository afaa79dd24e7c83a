#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use folio_core::{FieldParams, PageSession, ParticleField, ScrollSignals, Starfield};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod hero;
mod input;
mod motion;
mod nav;
mod overlay;
mod render;
mod resume;
mod reveal;
mod scroll;
mod scrubber;
mod tone;

use constants::*;
use dom::Listener;
use frame::{CanvasLayer, FrameContext, RafLoop};

/// Everything the page owns while mounted. Dropping it cancels the frame
/// loop, disconnects the observer and removes every listener.
struct App {
    _raf: RafLoop,
    _observer: Option<reveal::SectionObserver>,
    _listeners: Vec<Listener>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear the page down, e.g. before a client-side navigation replaces it.
#[wasm_bindgen]
pub fn stop() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        log::info!("folio-web stopped");
    }
}

fn canvas_layer<S>(
    document: &web::Document,
    id: &str,
    build: impl FnOnce(f32, f32) -> S,
) -> Option<CanvasLayer<S>> {
    let canvas = dom::element::<web::HtmlCanvasElement>(document, id)?;
    let canvas = render::Canvas2d::new(canvas)?;
    let size = canvas.size();
    let sim = build(size.x, size.y);
    Some(CanvasLayer::new(canvas, sim))
}

fn wire_pointer(
    window: &web::Window,
    document: &web::Document,
    pointer: &Rc<Cell<input::PointerState>>,
) -> Vec<Listener> {
    let mut listeners = Vec::new();
    let Some(canvas) = dom::element::<web::HtmlCanvasElement>(document, PARTICLE_CANVAS_ID) else {
        return listeners;
    };
    let p = pointer.clone();
    listeners.extend(Listener::new(window, "pointermove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            p.set(input::PointerState {
                pos: Some(input::pointer_canvas_css(ev, &canvas)),
            });
        }
    }));
    if let Some(root) = document.document_element() {
        let p = pointer.clone();
        listeners.extend(Listener::new(&root, "pointerleave", move |_| {
            p.set(input::PointerState::default());
        }));
    }
    listeners
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    let reduced = motion::prefers_reduced_motion();
    let session = Rc::new(RefCell::new(PageSession::new(reduced)));
    log::info!("[motion] reduced motion {}", if reduced { "on" } else { "off" });

    let mut listeners = Vec::new();
    listeners.extend(motion::watch(&session));
    listeners.extend(tone::wire_controls(&document, &session));
    listeners.extend(resume::wire_download(&document));

    let pointer = Rc::new(Cell::new(input::PointerState::default()));
    listeners.extend(wire_pointer(&window, &document, &pointer));

    let seed: u64 = rand::random();
    let particles = canvas_layer(&document, PARTICLE_CANVAS_ID, |w, h| {
        ParticleField::new(w, h, FieldParams::default(), seed)
    });
    let starfield = canvas_layer(&document, STARFIELD_CANVAS_ID, |w, h| {
        Starfield::new(w, h, seed.rotate_left(17))
    });

    let video = dom::element::<web::HtmlVideoElement>(&document, VIDEO_ID).map(|v| {
        scrubber::VideoScrub::new(v, document.get_element_by_id(POSTER_ID))
    });

    let observer = reveal::SectionObserver::new(&document, &session);
    let initial_variant = session.borrow().tone.variant();

    let mut ctx = FrameContext {
        session: session.clone(),
        document: document.clone(),
        scroll: document
            .get_element_by_id(SCROLL_CONTAINER_ID)
            .map(scroll::ScrollTracker::new),
        signals: ScrollSignals::rocket()?,
        particles,
        starfield,
        pointer,
        video,
        video_layer: dom::element(&document, VIDEO_LAYER_ID),
        overlay_layer: dom::element(&document, OVERLAY_LAYER_ID),
        loader: overlay::LoaderOverlay::find(&document),
        inference: overlay::InferenceOverlay::find(&document, reduced),
        tone: tone::ToneBlocks::find(&document, initial_variant),
        nav: nav::NavGraph::new(&document, &session),
        hero: hero::HeroTerminal::find(&document, reduced),
    };
    let raf = RafLoop::start(move |now_ms, _dt| ctx.frame(now_ms));

    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            _raf: raf,
            _observer: observer,
            _listeners: listeners,
        })
    });
    log::info!("folio-web mounted");
    Ok(())
}
