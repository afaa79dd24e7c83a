// Host-side tests for navigation graph geometry.

use folio_core::content::NAV_ITEMS;
use folio_core::{
    arc_layout, connected_to_hovered, edge_active, horizontal_layout, layout_for, LayoutParams,
    NavItem, ViewportClass,
};
use glam::Vec2;

fn close(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < 1e-3
}

#[test]
fn desktop_arc_places_every_node_on_the_circle() {
    let (params, layout) = layout_for(&NAV_ITEMS, ViewportClass::Desktop);
    assert_eq!(params.center(), Vec2::new(250.0, 72.0));
    assert_eq!(params.radius(), 200.0);
    assert_eq!(layout.nodes.len(), 5);
    assert_eq!(layout.edges.len(), 4);

    let angles: Vec<f32> = layout.nodes.iter().map(|n| n.angle_deg).collect();
    assert_eq!(angles, vec![20.0, 55.0, 90.0, 125.0, 160.0]);
    for n in &layout.nodes {
        assert!((n.pos.distance(params.center()) - 200.0).abs() < 1e-3);
    }
    // the middle node is the apex; the arc is symmetric about it
    assert!(close(layout.nodes[2].pos, Vec2::new(250.0, -128.0)));
    let (first, last) = (layout.nodes[0].pos, layout.nodes[4].pos);
    assert!((first.y - last.y).abs() < 1e-3);
    assert!(((first.x - 250.0) + (last.x - 250.0)).abs() < 1e-3);
    assert_eq!(layout.nodes[0].id, "about");
    assert_eq!(layout.nodes[4].href, "#contact");
}

#[test]
fn edges_join_neighbours_and_stop_at_node_boundaries() {
    let (params, layout) = layout_for(&NAV_ITEMS, ViewportClass::Desktop);
    for (edge, pair) in layout.edges.iter().zip(layout.nodes.windows(2)) {
        assert_eq!((edge.from, edge.to), (pair[0].id, pair[1].id));
        assert!((edge.start.distance(pair[0].pos) - params.node_radius).abs() < 1e-3);
        assert!((edge.end.distance(pair[1].pos) - params.node_radius).abs() < 1e-3);
    }
}

#[test]
fn single_node_sits_at_the_apex() {
    let params = LayoutParams::preset(ViewportClass::Desktop);
    let layout = arc_layout(&NAV_ITEMS[..1], &params);
    assert_eq!(layout.nodes.len(), 1);
    assert!(layout.edges.is_empty());
    assert_eq!(layout.nodes[0].angle_deg, 90.0);
    assert!(close(layout.nodes[0].pos, Vec2::new(250.0, -128.0)));
}

#[test]
fn empty_input_gives_empty_layouts() {
    let items: [NavItem; 0] = [];
    let params = LayoutParams::preset(ViewportClass::Desktop);
    assert!(arc_layout(&items, &params).nodes.is_empty());
    let params = LayoutParams::preset(ViewportClass::Mobile);
    let layout = horizontal_layout(&items, &params);
    assert!(layout.nodes.is_empty() && layout.edges.is_empty());
}

#[test]
fn mobile_row_is_evenly_spaced_inside_the_padding() {
    let (params, layout) = layout_for(&NAV_ITEMS, ViewportClass::Mobile);
    let xs: Vec<f32> = layout.nodes.iter().map(|n| n.pos.x).collect();
    assert_eq!(xs, vec![20.0, 90.0, 160.0, 230.0, 300.0]);
    assert!(layout.nodes.iter().all(|n| n.pos.y == 30.0));
    assert_eq!(layout.edges[0].start, Vec2::new(20.0 + params.node_radius, 30.0));
    assert_eq!(layout.edges[0].end, Vec2::new(90.0 - params.node_radius, 30.0));
}

#[test]
fn viewport_class_breakpoint() {
    assert_eq!(ViewportClass::for_width(639.0), ViewportClass::Mobile);
    assert_eq!(ViewportClass::for_width(640.0), ViewportClass::Desktop);
    assert_eq!(ViewportClass::for_width(1920.0), ViewportClass::Desktop);
}

#[test]
fn radius_shrinks_with_narrow_areas() {
    let params = LayoutParams {
        width: 300.0,
        ..LayoutParams::preset(ViewportClass::Desktop)
    };
    assert_eq!(params.radius(), 120.0);
    let fixed = LayoutParams {
        arc_radius: Some(50.0),
        ..params
    };
    assert_eq!(fixed.radius(), 50.0);
}

#[test]
fn highlighting_follows_active_and_hovered_nodes() {
    let (_, layout) = layout_for(&NAV_ITEMS, ViewportClass::Desktop);
    let lit = |active, hovered| -> Vec<bool> {
        layout
            .edges
            .iter()
            .map(|e| edge_active(e, active, hovered))
            .collect()
    };
    assert_eq!(lit(None, None), vec![false; 4]);
    assert_eq!(lit(Some("about"), None), vec![true, false, false, false]);
    assert_eq!(
        lit(Some("about"), Some("skills")),
        vec![true, false, true, true]
    );

    assert!(connected_to_hovered(&layout, "experience", Some("projects")));
    assert!(connected_to_hovered(&layout, "skills", Some("projects")));
    assert!(!connected_to_hovered(&layout, "about", Some("projects")));
    assert!(!connected_to_hovered(&layout, "projects", Some("projects")));
    assert!(!connected_to_hovered(&layout, "about", None));
}
