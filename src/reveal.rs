use crate::constants::{SECTION_CONTENT_CLASS, SECTION_LOADED_CLASS};
use crate::dom;
use folio_core::constants::REVEAL_VISIBILITY_THRESHOLD;
use folio_core::{section_ids, PageSession, RevealEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Feeds section visibility into the session's reveal coordinator. The
/// observer disconnects when dropped.
pub struct SectionObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl SectionObserver {
    pub fn new(document: &web::Document, session: &Rc<RefCell<PageSession>>) -> Option<Self> {
        let doc = document.clone();
        let session = session.clone();
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            let now = dom::now_ms();
            let mut s = session.borrow_mut();
            let reduced = s.reduced_motion();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let id = entry.target().id();
                let ratio = entry.intersection_ratio() as f32;
                if let Some(ev) = s.reveal.on_visible(&id, ratio, reduced, now) {
                    apply(&doc, &ev);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_VISIBILITY_THRESHOLD as f64));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .ok()?;

        let mut observed = 0;
        for id in section_ids() {
            if let Some(el) = document.get_element_by_id(id) {
                observer.observe(&el);
                observed += 1;
            }
        }
        log::info!("[reveal] observing {} sections", observed);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reflect a coordinator event in the DOM. Only `Loaded` changes markup; the
/// loader overlay follows the coordinator every frame.
pub fn apply(document: &web::Document, event: &RevealEvent) {
    let RevealEvent::Loaded(id) = event else {
        return;
    };
    let Some(section) = document.get_element_by_id(id) else {
        return;
    };
    _ = section.class_list().add_1(SECTION_LOADED_CLASS);
    let selector = format!(".{}", SECTION_CONTENT_CLASS);
    if let Ok(list) = section.query_selector_all(&selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                _ = el.class_list().add_1(SECTION_LOADED_CLASS);
            }
        }
    }
}
