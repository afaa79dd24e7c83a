// Host-side tests for the scroll-driven media scrubber.

use folio_core::{MediaScrubber, MediaState, ScrubberConfig};

fn unlimited() -> MediaScrubber {
    MediaScrubber::new(ScrubberConfig {
        min_delta_sec: 0.01,
        max_writes_per_sec: None,
    })
}

#[test]
fn no_writes_before_metadata() {
    let mut s = MediaScrubber::default();
    assert_eq!(s.state(), MediaState::Pending);
    assert_eq!(s.target_time(0.5), None);
    assert_eq!(s.scrub(0.5, 0.0, 0.0), None);
}

#[test]
fn unusable_durations_leave_it_pending() {
    let mut s = MediaScrubber::default();
    s.on_metadata(f64::NAN);
    assert_eq!(s.state(), MediaState::Pending);
    s.on_metadata(0.0);
    assert_eq!(s.state(), MediaState::Pending);
    s.on_metadata(-4.0);
    assert_eq!(s.state(), MediaState::Pending);
    s.on_metadata(f64::INFINITY);
    assert_eq!(s.state(), MediaState::Pending);
}

#[test]
fn target_is_signal_times_duration() {
    let mut s = unlimited();
    s.on_metadata(8.0);
    assert_eq!(s.state(), MediaState::Ready { duration: 8.0 });
    assert_eq!(s.target_time(0.0), Some(0.0));
    assert_eq!(s.target_time(0.25), Some(2.0));
    assert_eq!(s.target_time(1.0), Some(8.0));
    // clamped
    assert_eq!(s.target_time(1.5), Some(8.0));
    assert_eq!(s.target_time(-1.0), Some(0.0));
    assert_eq!(s.target_time(f32::NAN), Some(0.0));
}

#[test]
fn redundant_writes_are_suppressed() {
    let mut s = unlimited();
    s.on_metadata(10.0);
    // already within 0.01s of the target
    assert_eq!(s.scrub(0.5, 5.005, 0.0), None);
    assert_eq!(s.scrub(0.5, 4.0, 1.0), Some(5.0));
}

#[test]
fn writes_are_rate_limited_and_latest_value_wins() {
    let mut s = MediaScrubber::default();
    s.on_metadata(10.0);
    assert_eq!(s.scrub(0.125, 0.0, 1000.0), Some(1.25));
    // 30 writes/s leaves ~33ms between writes
    assert_eq!(s.scrub(0.25, 1.25, 1010.0), None);
    assert_eq!(s.scrub(0.375, 1.25, 1020.0), None);
    // the deferred value is re-offered and lands once the gap has passed
    assert_eq!(s.scrub(0.375, 1.25, 1034.0), Some(3.75));
}

#[test]
fn rate_never_exceeds_limit_under_rapid_scroll() {
    let mut s = MediaScrubber::default();
    s.on_metadata(10.0);
    let mut current = 0.0;
    let mut writes = 0;
    // one second of 240Hz scroll events sweeping the whole range
    for i in 0..240 {
        let now = i as f64 * (1000.0 / 240.0);
        let signal = i as f32 / 239.0;
        if let Some(t) = s.scrub(signal, current, now) {
            current = t;
            writes += 1;
        }
    }
    assert!(writes <= 31, "{} writes", writes);
    // the last offered value is reached on the next permitted frame
    let last = s.scrub(1.0, current, 2000.0).unwrap_or(current);
    assert_eq!(last, 10.0);
}

#[test]
fn failure_is_terminal_and_selects_poster() {
    let mut s = unlimited();
    s.on_metadata(5.0);
    s.on_error();
    assert_eq!(s.state(), MediaState::Failed);
    assert!(s.shows_poster());
    assert_eq!(s.scrub(0.5, 0.0, 0.0), None);
    s.on_metadata(5.0);
    assert_eq!(s.state(), MediaState::Failed);
}
