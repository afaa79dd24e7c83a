// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants as shared;

#[test]
fn element_ids_are_distinct() {
    let ids = [
        PARTICLE_CANVAS_ID,
        STARFIELD_CANVAS_ID,
        SCROLL_CONTAINER_ID,
        VIDEO_ID,
        POSTER_ID,
        VIDEO_LAYER_ID,
        OVERLAY_LAYER_ID,
        LOADER_ID,
        LOADER_TITLE_ID,
        LOADER_BAR_ID,
        LOADER_PERCENT_ID,
        LOADER_STATUS_ID,
        VERBOSITY_SLIDER_ID,
        TECHNICAL_SLIDER_ID,
        TONE_RESET_ID,
        NAV_ID,
        NAV_SVG_ID,
        INFERENCE_ID,
        INFERENCE_STATUS_ID,
        INFERENCE_LAYERS_ID,
        INFERENCE_METRICS_ID,
        INFERENCE_TARGET_ID,
        HERO_TERMINAL_ID,
        RESUME_BUTTON_ID,
        RESUME_ERROR_ID,
    ];
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        assert!(!id.is_empty() && !id.contains(' '), "bad id {:?}", id);
        assert!(seen.insert(id), "duplicate id {:?}", id);
    }
    // section ids are looked up in the same document
    for id in shared::SECTION_ORDER {
        assert!(!seen.contains(id));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn browser_tuning_is_sane() {
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(INFERENCE_TYPE_MS > 0.0 && HERO_TYPE_MS > 0.0);
    assert!(HERO_LINE_DELAY_MS >= 0.0 && HERO_START_DELAY_MS >= 0.0);
    assert!(RESUME_ENDPOINT.starts_with("/api/"));
    assert!(SVG_NS.starts_with("http://www.w3.org/"));
    // the status line has to finish typing within a full run
    let status_ms = folio_core::INFERENCE_STATUS.len() as f64 * INFERENCE_TYPE_MS;
    assert!(status_ms <= shared::INFERENCE_DURATION_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_constants_have_logical_relationships() {
    // particles
    assert!(shared::PARTICLE_MAX_COUNT > 0);
    assert!(shared::VELOCITY_DAMPING > 0.0 && shared::VELOCITY_DAMPING < 1.0);
    assert!(shared::LINK_DISTANCE < shared::REPULSION_RADIUS);
    assert!(shared::PARTICLE_OPACITY_MIN + shared::PARTICLE_OPACITY_SPAN <= 1.0);

    // parallax layers move faster the nearer they are
    let p = shared::PARALLAX_MULTIPLIERS;
    assert!(p[0] < p[1] && p[1] < p[2]);
    assert!(shared::NEBULA_SCROLL_FACTOR < p[0]);
    assert!(shared::SHOOTING_STAR_VISIBLE_FRACTION > 0.0 && shared::SHOOTING_STAR_VISIBLE_FRACTION < 1.0);

    // reveal and tone
    assert!((0.0..=1.0).contains(&shared::REVEAL_VISIBILITY_THRESHOLD));
    assert!(shared::REVEAL_DURATION_MS > 0.0);
    assert_eq!(shared::TONE_DEFAULT, shared::TONE_THRESHOLD);

    // inference: all layers light before the run ends
    let layers_ms = shared::INFERENCE_LAYERS as f64 * shared::INFERENCE_LAYER_MS;
    assert!(layers_ms <= shared::INFERENCE_DURATION_MS);
    assert!(shared::INFERENCE_METRICS_MS <= shared::INFERENCE_DURATION_MS);
    assert!(shared::INFERENCE_REDUCED_DURATION_MS < shared::INFERENCE_DURATION_MS);
    assert!(shared::NAV_SCROLL_DELAY_MS < shared::INFERENCE_DURATION_MS);

    // the arc stays in the upper half-plane
    assert!(shared::NAV_ARC_ANGLE_DEG > 0.0 && shared::NAV_ARC_ANGLE_DEG < 180.0);
}
