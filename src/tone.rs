use crate::constants::*;
use crate::dom::{self, Listener};
use crate::input::{format_slider, parse_slider};
use folio_core::content::tone_block;
use folio_core::{PageSession, ToneMorph, ToneVariant, ToneVariants};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy)]
enum Axis {
    Verbosity,
    Technical,
}

fn value_label_id(slider_id: &str) -> String {
    format!("{}-value", slider_id)
}

fn sync_slider(document: &web::Document, id: &str, value: f32) {
    if let Some(input) = dom::element::<web::HtmlInputElement>(document, id) {
        input.set_value(&format_slider(value));
    }
    dom::set_text(document, &value_label_id(id), &format_slider(value));
}

/// Wire the two tone sliders and the reset button into the session.
pub fn wire_controls(document: &web::Document, session: &Rc<RefCell<PageSession>>) -> Vec<Listener> {
    let mut listeners = Vec::new();
    for (id, axis) in [
        (VERBOSITY_SLIDER_ID, Axis::Verbosity),
        (TECHNICAL_SLIDER_ID, Axis::Technical),
    ] {
        let Some(input) = dom::element::<web::HtmlInputElement>(document, id) else {
            log::warn!("[tone] missing #{}", id);
            continue;
        };
        {
            let s = session.borrow();
            let value = match axis {
                Axis::Verbosity => s.tone.verbosity(),
                Axis::Technical => s.tone.technical_level(),
            };
            sync_slider(document, id, value);
        }
        let session = session.clone();
        let doc = document.clone();
        let slider = input.clone();
        listeners.extend(Listener::new(&input, "input", move |_| {
            let Some(v) = parse_slider(&slider.value()) else {
                return;
            };
            let mut s = session.borrow_mut();
            let stored = match axis {
                Axis::Verbosity => {
                    s.tone.set_verbosity(v);
                    s.tone.verbosity()
                }
                Axis::Technical => {
                    s.tone.set_technical_level(v);
                    s.tone.technical_level()
                }
            };
            dom::set_text(&doc, &value_label_id(id), &format_slider(stored));
        }));
    }

    let session = session.clone();
    let doc = document.clone();
    listeners.extend(dom::on_click(document, TONE_RESET_ID, move || {
        let mut s = session.borrow_mut();
        s.tone.reset();
        sync_slider(&doc, VERBOSITY_SLIDER_ID, s.tone.verbosity());
        sync_slider(&doc, TECHNICAL_SLIDER_ID, s.tone.technical_level());
        log::debug!("[tone] reset");
    }));
    listeners
}

struct Block {
    el: web::HtmlElement,
    variants: ToneVariants<'static>,
    morph: ToneMorph,
}

/// Every `[data-tone]` element on the page, each cross-fading on its own.
pub struct ToneBlocks {
    blocks: Vec<Block>,
}

impl ToneBlocks {
    pub fn find(document: &web::Document, initial: ToneVariant) -> Self {
        let mut blocks = Vec::new();
        let selector = format!("[{}]", TONE_TARGET_ATTR);
        if let Ok(list) = document.query_selector_all(&selector) {
            for i in 0..list.length() {
                let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
                else {
                    continue;
                };
                let key = el.get_attribute(TONE_TARGET_ATTR).unwrap_or_default();
                let Some(variants) = tone_block(&key) else {
                    log::warn!("[tone] unknown block {:?}", key);
                    continue;
                };
                el.set_text_content(Some(variants.pick(initial)));
                blocks.push(Block {
                    el,
                    variants,
                    morph: ToneMorph::new(initial),
                });
            }
        }
        log::info!("[tone] {} morphing blocks", blocks.len());
        Self { blocks }
    }

    pub fn update(&mut self, target: ToneVariant, reduced_motion: bool, now_ms: f64) {
        for b in &mut self.blocks {
            let before = b.morph.displayed();
            let was_moving = b.morph.is_transitioning();
            b.morph.retarget(target, reduced_motion, now_ms);
            let swapped = b.morph.tick(now_ms);
            if swapped || b.morph.displayed() != before {
                b.el.set_text_content(Some(b.variants.pick(b.morph.displayed())));
            }
            if was_moving || b.morph.is_transitioning() {
                dom::set_opacity(&b.el, b.morph.opacity(now_ms));
            }
        }
    }
}
