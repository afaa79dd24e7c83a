use crate::constants::*;
use crate::dom::{self, Listener, Timeout};
use crate::scroll;
use folio_core::content::NAV_ITEMS;
use folio_core::{
    connected_to_hovered, edge_active, layout_for, nav_visible, section_ids, LayoutParams,
    NavState, NodeLayout, PageSession, ViewportClass,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

type PendingScroll = Rc<RefCell<Option<Timeout>>>;

fn svg(document: &web::Document, tag: &str) -> Option<web::Element> {
    document.create_element_ns(Some(SVG_NS), tag).ok()
}

fn set_attrs(el: &web::Element, attrs: &[(&str, String)]) {
    for (k, v) in attrs {
        _ = el.set_attribute(k, v);
    }
}

fn toggle_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

pub fn viewport_width() -> f32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

/// Scroll the section into view, instantly under reduced motion.
pub fn scroll_to_section(document: &web::Document, id: &str, reduced_motion: bool) {
    let Some(el) = document.get_element_by_id(id) else {
        log::warn!("[nav] no section #{}", id);
        return;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(if reduced_motion {
        web::ScrollBehavior::Auto
    } else {
        web::ScrollBehavior::Smooth
    });
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

struct NodeEl {
    id: &'static str,
    el: web::Element,
}

/// The SVG navigation graph. Rebuilt whenever the viewport crosses the
/// mobile breakpoint.
pub struct NavGraph {
    document: web::Document,
    root: web::Element,
    svg: web::Element,
    session: Rc<RefCell<PageSession>>,
    class: ViewportClass,
    layout: NodeLayout,
    nodes: Vec<NodeEl>,
    edges: Vec<web::Element>,
    listeners: Vec<Listener>,
    pending_scroll: PendingScroll,
    shown: Option<(bool, NavState)>,
}

impl NavGraph {
    pub fn new(document: &web::Document, session: &Rc<RefCell<PageSession>>) -> Option<Self> {
        let root = document.get_element_by_id(NAV_ID)?;
        let svg = document.get_element_by_id(NAV_SVG_ID)?;
        let mut graph = Self {
            document: document.clone(),
            root,
            svg,
            session: session.clone(),
            class: ViewportClass::for_width(viewport_width()),
            layout: NodeLayout::default(),
            nodes: Vec::new(),
            edges: Vec::new(),
            listeners: Vec::new(),
            pending_scroll: Rc::new(RefCell::new(None)),
            shown: None,
        };
        graph.build();
        Some(graph)
    }

    fn build(&mut self) {
        self.listeners.clear();
        self.nodes.clear();
        self.edges.clear();
        self.svg.set_inner_html("");
        self.shown = None;

        let (params, layout) = layout_for(&NAV_ITEMS, self.class);
        set_attrs(
            &self.svg,
            &[
                ("viewBox", format!("0 0 {} {}", params.width, params.height)),
                ("width", params.width.to_string()),
                ("height", params.height.to_string()),
                ("overflow", "visible".to_string()),
            ],
        );

        for edge in &layout.edges {
            let Some(line) = svg(&self.document, "line") else {
                continue;
            };
            set_attrs(
                &line,
                &[
                    ("x1", format!("{:.2}", edge.start.x)),
                    ("y1", format!("{:.2}", edge.start.y)),
                    ("x2", format!("{:.2}", edge.end.x)),
                    ("y2", format!("{:.2}", edge.end.y)),
                    ("class", "nav-edge".to_string()),
                ],
            );
            _ = self.svg.append_child(&line);
            self.edges.push(line);
        }

        for node in &layout.nodes {
            let Some(el) = self.node_element(node, &params) else {
                continue;
            };
            self.wire_node(&el, node.id);
            self.nodes.push(NodeEl { id: node.id, el });
        }
        log::info!(
            "[nav] {:?} layout with {} nodes, {} edges",
            self.class,
            layout.nodes.len(),
            layout.edges.len()
        );
        self.layout = layout;
    }

    fn node_element(
        &self,
        node: &folio_core::NodePosition,
        params: &LayoutParams,
    ) -> Option<web::Element> {
        let g = svg(&self.document, "g")?;
        set_attrs(
            &g,
            &[
                ("class", "nav-node".to_string()),
                ("data-id", node.id.to_string()),
                ("role", "link".to_string()),
                ("tabindex", "0".to_string()),
                ("aria-label", node.label.to_string()),
            ],
        );
        let circle = svg(&self.document, "circle")?;
        set_attrs(
            &circle,
            &[
                ("cx", format!("{:.2}", node.pos.x)),
                ("cy", format!("{:.2}", node.pos.y)),
                ("r", params.node_radius.to_string()),
            ],
        );
        let text = svg(&self.document, "text")?;
        set_attrs(
            &text,
            &[
                ("x", format!("{:.2}", node.pos.x)),
                ("y", format!("{:.2}", node.pos.y + params.node_radius + 14.0)),
                ("text-anchor", "middle".to_string()),
            ],
        );
        text.set_text_content(Some(node.label));
        _ = g.append_child(&circle);
        _ = g.append_child(&text);
        _ = self.svg.append_child(&g);
        Some(g)
    }

    fn wire_node(&mut self, el: &web::Element, id: &'static str) {
        let session = self.session.clone();
        self.listeners
            .extend(Listener::new(el, "mouseenter", move |_| {
                session.borrow_mut().set_hovered(Some(id));
            }));
        let session = self.session.clone();
        self.listeners
            .extend(Listener::new(el, "mouseleave", move |_| {
                session.borrow_mut().set_hovered(None);
            }));

        let session = self.session.clone();
        let document = self.document.clone();
        let pending = self.pending_scroll.clone();
        self.listeners.extend(Listener::new(el, "click", move |ev| {
            ev.prevent_default();
            let (delay, reduced) = {
                let mut s = session.borrow_mut();
                (s.start_inference(id, dom::now_ms()), s.reduced_motion())
            };
            let doc = document.clone();
            // replacing the slot cancels a scroll still waiting from an earlier click
            *pending.borrow_mut() = Timeout::new(delay, move || {
                scroll_to_section(&doc, id, reduced);
            });
        }));
    }

    /// Per-frame: visibility, active section and hover highlighting.
    pub fn update(&mut self) {
        let class = ViewportClass::for_width(viewport_width());
        if class != self.class {
            self.class = class;
            self.build();
        }

        let tops: Vec<(&str, f32)> = section_ids()
            .filter_map(|id| {
                let el = self.document.get_element_by_id(id)?;
                Some((id, el.get_bounding_client_rect().top() as f32))
            })
            .collect();
        let visible = nav_visible(scroll::scroll_y(), scroll::viewport_height());
        let nav = {
            let mut s = self.session.borrow_mut();
            s.update_active_section(&tops);
            s.nav.clone()
        };

        if self.shown.as_ref() == Some(&(visible, nav.clone())) {
            return;
        }
        toggle_class(&self.root, NAV_HIDDEN_CLASS, !visible);
        let (active, hovered) = (nav.active.as_deref(), nav.hovered.as_deref());
        for n in &self.nodes {
            toggle_class(&n.el, "active", active == Some(n.id));
            toggle_class(&n.el, "hovered", hovered == Some(n.id));
            toggle_class(
                &n.el,
                "connected",
                connected_to_hovered(&self.layout, n.id, hovered),
            );
        }
        for (edge, el) in self.layout.edges.iter().zip(&self.edges) {
            toggle_class(el, "active", edge_active(edge, active, hovered));
        }
        self.shown = Some((visible, nav));
    }
}
