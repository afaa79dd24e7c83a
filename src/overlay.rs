use crate::constants::*;
use crate::dom;
use folio_core::constants::INFERENCE_LAYERS;
use folio_core::{section_title, InferenceRun, LoaderView, Typewriter, INFERENCE_STATUS, METRICS};
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    dom::set_hidden(el, false);
}

#[inline]
pub fn hide(el: &web::Element) {
    dom::set_hidden(el, true);
}

pub fn loader_title(view: &LoaderView) -> String {
    format!(
        "Epoch {}/{}: {}",
        view.epoch, view.total_epochs, view.title
    )
}

/// The "epoch" loader shown while a section reveal runs.
pub struct LoaderOverlay {
    root: web::Element,
    document: web::Document,
    shown_section: Option<String>,
    shown_lines: usize,
}

impl LoaderOverlay {
    pub fn find(document: &web::Document) -> Option<Self> {
        let root = document.get_element_by_id(LOADER_ID)?;
        hide(&root);
        Some(Self {
            root,
            document: document.clone(),
            shown_section: None,
            shown_lines: 0,
        })
    }

    pub fn update(&mut self, view: Option<LoaderView>) {
        let Some(view) = view else {
            if self.shown_section.take().is_some() {
                hide(&self.root);
            }
            return;
        };
        if self.shown_section.as_deref() != Some(view.section) {
            dom::set_text(&self.document, LOADER_TITLE_ID, &loader_title(&view));
            self.shown_section = Some(view.section.to_string());
            self.shown_lines = 0;
            show(&self.root);
        }
        if let Some(bar) = dom::element::<web::HtmlElement>(&self.document, LOADER_BAR_ID) {
            _ = bar
                .style()
                .set_property("width", &format!("{:.1}%", view.percent));
        }
        dom::set_text(
            &self.document,
            LOADER_PERCENT_ID,
            &format!("{:.0}%", view.percent),
        );
        if view.status_lines.len() != self.shown_lines {
            self.shown_lines = view.status_lines.len();
            dom::set_text(&self.document, LOADER_STATUS_ID, &view.status_lines.join("\n"));
        }
    }
}

/// The forward-pass overlay shown between a nav click and the scroll.
pub struct InferenceOverlay {
    root: web::Element,
    document: web::Document,
    layers: Vec<web::Element>,
    shown_target: Option<String>,
    status: Typewriter,
    reduced_motion: bool,
    lit_layers: u32,
}

impl InferenceOverlay {
    pub fn find(document: &web::Document, reduced_motion: bool) -> Option<Self> {
        let root = document.get_element_by_id(INFERENCE_ID)?;
        hide(&root);
        let layers = build_layers(document);
        Some(Self {
            root,
            document: document.clone(),
            layers,
            shown_target: None,
            status: status_typewriter(reduced_motion),
            reduced_motion,
            lit_layers: 0,
        })
    }

    pub fn update(&mut self, run: Option<&InferenceRun>, reduced_motion: bool, now_ms: f64) {
        if reduced_motion != self.reduced_motion {
            self.reduced_motion = reduced_motion;
            self.status = status_typewriter(reduced_motion);
        }
        let Some(run) = run else {
            if self.shown_target.take().is_some() {
                hide(&self.root);
            }
            return;
        };
        if self.shown_target.as_deref() != Some(run.target()) {
            dom::set_text(
                &self.document,
                INFERENCE_TARGET_ID,
                &format!("-> {}", section_title(run.target())),
            );
            self.shown_target = Some(run.target().to_string());
            show(&self.root);
        }
        dom::set_text(
            &self.document,
            INFERENCE_STATUS_ID,
            self.status.visible(run.elapsed(now_ms)),
        );

        let layer = run.layer(now_ms);
        if layer != self.lit_layers {
            for (i, el) in self.layers.iter().enumerate() {
                let cl = el.class_list();
                if (i as u32) < layer {
                    _ = cl.add_1("active");
                } else {
                    _ = cl.remove_1("active");
                }
            }
            self.lit_layers = layer;
        }

        let values = run.metric_values(now_ms);
        let text: Vec<String> = METRICS
            .iter()
            .zip(values)
            .map(|(m, v)| format!("{}: {}", m.label, m.format(v)))
            .collect();
        dom::set_text(&self.document, INFERENCE_METRICS_ID, &text.join("\n"));
    }
}

fn status_typewriter(reduced_motion: bool) -> Typewriter {
    Typewriter::new(INFERENCE_STATUS, INFERENCE_TYPE_MS, 0.0).enabled(!reduced_motion)
}

fn build_layers(document: &web::Document) -> Vec<web::Element> {
    let Some(container) = document.get_element_by_id(INFERENCE_LAYERS_ID) else {
        return Vec::new();
    };
    container.set_inner_html("");
    (0..INFERENCE_LAYERS)
        .filter_map(|_| {
            let el = document.create_element("div").ok()?;
            el.set_class_name("inference-layer");
            container.append_child(&el).ok()?;
            Some(el)
        })
        .collect()
}
