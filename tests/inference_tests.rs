// Host-side tests for the navigation "forward pass" animation.

use folio_core::{ease_out_cubic, InferenceRun, INFERENCE_STATUS, METRICS};

#[test]
fn layers_light_up_every_40ms_and_cap_at_twelve() {
    let run = InferenceRun::start("projects", false, 1000.0);
    assert_eq!(run.duration_ms(), 600.0);
    assert_eq!(run.layer(1000.0), 0);
    assert_eq!(run.layer(1039.0), 0);
    assert_eq!(run.layer(1040.0), 1);
    assert_eq!(run.layer(1400.0), 10);
    assert_eq!(run.layer(1480.0), 12);
    assert_eq!(run.layer(1590.0), 12);
    // clocks that run backwards never underflow
    assert_eq!(run.layer(900.0), 0);
    assert_eq!(run.elapsed(900.0), 0.0);
}

#[test]
fn reduced_motion_is_brief_and_static() {
    let run = InferenceRun::start("contact", true, 0.0);
    assert_eq!(run.duration_ms(), 100.0);
    assert_eq!(run.layer(80.0), 0);
    assert!(!run.is_done(99.0));
    assert!(run.is_done(100.0));
}

#[test]
fn metrics_ease_towards_their_targets() {
    let run = InferenceRun::start("about", false, 0.0);
    assert_eq!(run.metric_values(0.0), [0.0; 4]);

    let half = run.metric_values(200.0);
    for (value, metric) in half.iter().zip(METRICS.iter()) {
        // ease-out is past linear at the midpoint
        assert!((value - metric.target * 0.875).abs() < 1e-3);
    }

    let end = run.metric_values(400.0);
    let later = run.metric_values(550.0);
    for ((a, b), metric) in end.iter().zip(later.iter()).zip(METRICS.iter()) {
        assert_eq!(*a, metric.target);
        assert_eq!(a, b);
    }
}

#[test]
fn easing_is_clamped() {
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(3.0), 1.0);
}

#[test]
fn metrics_format_with_units() {
    assert_eq!(METRICS[0].format(127.4), "127.4M");
    assert_eq!(METRICS[1].format(1.0), "1.0G");
    assert_eq!(METRICS[2].format(41.6), "42ms");
    assert_eq!(METRICS[3].format(0.0), "0MB");
    assert!(INFERENCE_STATUS.ends_with("..."));
}
