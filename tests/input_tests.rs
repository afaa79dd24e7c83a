// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_points_map_into_canvas_space() {
    let origin = Vec2::new(100.0, 50.0);
    let size = Vec2::new(400.0, 300.0);
    // same CSS size as backing store
    assert_eq!(
        client_to_canvas(Vec2::new(300.0, 200.0), origin, size, size),
        Vec2::new(200.0, 150.0)
    );
    // backing store at twice the resolution
    assert_eq!(
        client_to_canvas(Vec2::new(300.0, 200.0), origin, size, size * 2.0),
        Vec2::new(400.0, 300.0)
    );
    // points outside the element are not clamped
    assert_eq!(
        client_to_canvas(Vec2::new(50.0, 0.0), origin, size, size),
        Vec2::new(-50.0, -50.0)
    );
}

#[test]
fn degenerate_rects_map_to_the_origin() {
    let p = Vec2::new(10.0, 10.0);
    assert_eq!(client_to_canvas(p, Vec2::ZERO, Vec2::new(0.0, 100.0), Vec2::ONE), Vec2::ZERO);
    assert_eq!(client_to_canvas(p, Vec2::ZERO, Vec2::new(100.0, -1.0), Vec2::ONE), Vec2::ZERO);
}

#[test]
fn slider_values_parse_leniently() {
    assert_eq!(parse_slider("0.25"), Some(0.25));
    assert_eq!(parse_slider(" 1 "), Some(1.0));
    // out of range values are clamped by the store, not here
    assert_eq!(parse_slider("1.5"), Some(1.5));
    assert_eq!(parse_slider(""), None);
    assert_eq!(parse_slider("abc"), None);
    assert_eq!(parse_slider("NaN"), None);
    assert_eq!(parse_slider("inf"), None);
}

#[test]
fn slider_labels_show_two_decimals() {
    assert_eq!(format_slider(0.5), "0.50");
    assert_eq!(format_slider(1.0), "1.00");
    assert_eq!(format_slider(0.3), "0.30");
    assert_eq!(PointerState::default().pos, None);
}
