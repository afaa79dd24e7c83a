use crate::dom::Listener;
use folio_core::PageSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn query() -> Option<web::MediaQueryList> {
    web::window()?.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

/// Current OS-level reduced-motion preference; `false` when unsupported.
pub fn prefers_reduced_motion() -> bool {
    query().map(|q| q.matches()).unwrap_or(false)
}

/// Track later preference changes into the session.
pub fn watch(session: &Rc<RefCell<PageSession>>) -> Option<Listener> {
    let mql = query()?;
    let session = session.clone();
    Listener::new(&mql, "change", move |ev| {
        let reduced = ev
            .dyn_ref::<web::MediaQueryListEvent>()
            .map(|e| e.matches())
            .unwrap_or_else(prefers_reduced_motion);
        session.borrow_mut().set_reduced_motion(reduced);
    })
}
