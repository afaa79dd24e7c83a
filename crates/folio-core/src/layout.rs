//! Node geometry for the navigation graph.
//!
//! Layouts are pure functions of the node list and the drawing area. Nodes sit
//! on an arc (desktop) or a single row (mobile); edges join consecutive nodes
//! only and stop at node boundaries rather than centres.

use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// In-page anchor such as `"#about"`.
    pub href: &'static str,
}

impl NavItem {
    /// Section id the anchor points at.
    pub fn section_id(&self) -> &'static str {
        self.href.strip_prefix('#').unwrap_or(self.href)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodePosition {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub pos: Vec2,
    pub angle_deg: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub from: &'static str,
    pub to: &'static str,
    pub start: Vec2,
    pub end: Vec2,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeLayout {
    pub nodes: SmallVec<[NodePosition; 8]>,
    pub edges: SmallVec<[Edge; 8]>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

impl ViewportClass {
    pub fn for_width(viewport_width: f32) -> Self {
        if viewport_width < NAV_MOBILE_BREAKPOINT_PX {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Drawing area and node size for one viewport class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    pub width: f32,
    pub height: f32,
    pub node_radius: f32,
    pub arc_angle_deg: f32,
    /// `None` derives the radius from the width.
    pub arc_radius: Option<f32>,
}

impl LayoutParams {
    pub fn preset(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Desktop => Self {
                width: 500.0,
                height: 120.0,
                node_radius: 20.0,
                arc_angle_deg: NAV_ARC_ANGLE_DEG,
                arc_radius: None,
            },
            ViewportClass::Mobile => Self {
                width: 320.0,
                height: 70.0,
                node_radius: 16.0,
                arc_angle_deg: 0.0,
                arc_radius: None,
            },
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * NAV_ARC_CENTER_HEIGHT_FRACTION)
    }

    pub fn radius(&self) -> f32 {
        self.arc_radius
            .unwrap_or_else(|| (self.width * NAV_ARC_RADIUS_WIDTH_FRACTION).min(NAV_ARC_RADIUS_MAX))
    }
}

/// Segment between two node centres, trimmed by `node_radius` at both ends.
pub fn edge_between(from: &NodePosition, to: &NodePosition, node_radius: f32) -> Edge {
    let dir = (to.pos - from.pos).normalize_or_zero();
    Edge {
        from: from.id,
        to: to.id,
        start: from.pos + dir * node_radius,
        end: to.pos - dir * node_radius,
    }
}

fn path_edges(nodes: &[NodePosition], node_radius: f32) -> SmallVec<[Edge; 8]> {
    nodes
        .windows(2)
        .map(|pair| edge_between(&pair[0], &pair[1], node_radius))
        .collect()
}

fn node(item: &NavItem, pos: Vec2, angle_deg: f32) -> NodePosition {
    NodePosition {
        id: item.section_id(),
        label: item.label,
        href: item.href,
        pos,
        angle_deg,
    }
}

/// Nodes at equal angular steps over the arc, symmetric about the vertical.
/// Angles grow counter-clockwise from +x; screen y points down.
pub fn arc_layout(items: &[NavItem], params: &LayoutParams) -> NodeLayout {
    let center = params.center();
    let radius = params.radius();
    let start = (180.0 - params.arc_angle_deg) * 0.5;
    let step = if items.len() > 1 {
        params.arc_angle_deg / (items.len() - 1) as f32
    } else {
        0.0
    };

    let nodes: SmallVec<[NodePosition; 8]> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let angle_deg = if items.len() == 1 {
                90.0
            } else {
                start + i as f32 * step
            };
            let rad = angle_deg.to_radians();
            let pos = center + Vec2::new(radius * rad.cos(), -radius * rad.sin());
            node(item, pos, angle_deg)
        })
        .collect();
    let edges = path_edges(&nodes, params.node_radius);
    NodeLayout { nodes, edges }
}

/// Nodes at equal spacing along one row inside the padding.
pub fn horizontal_layout(items: &[NavItem], params: &LayoutParams) -> NodeLayout {
    let available = params.width - NAV_ROW_PADDING * 2.0;
    let nodes: SmallVec<[NodePosition; 8]> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let x = if items.len() == 1 {
                params.width * 0.5
            } else {
                NAV_ROW_PADDING + i as f32 * available / (items.len() - 1) as f32
            };
            node(item, Vec2::new(x, NAV_ROW_Y), 0.0)
        })
        .collect();
    let edges = path_edges(&nodes, params.node_radius);
    NodeLayout { nodes, edges }
}

pub fn layout_for(items: &[NavItem], class: ViewportClass) -> (LayoutParams, NodeLayout) {
    let params = LayoutParams::preset(class);
    let layout = match class {
        ViewportClass::Desktop => arc_layout(items, &params),
        ViewportClass::Mobile => horizontal_layout(items, &params),
    };
    (params, layout)
}

/// An edge lights up when either end is the active section or the hovered node.
pub fn edge_active(edge: &Edge, active: Option<&str>, hovered: Option<&str>) -> bool {
    [active, hovered]
        .into_iter()
        .flatten()
        .any(|id| edge.from == id || edge.to == id)
}

pub fn connected_to_hovered(layout: &NodeLayout, node_id: &str, hovered: Option<&str>) -> bool {
    let Some(hovered) = hovered else {
        return false;
    };
    layout.edges.iter().any(|e| {
        (e.from == hovered && e.to == node_id) || (e.to == hovered && e.from == node_id)
    })
}
