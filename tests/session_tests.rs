// Host-side tests for page session state: active section, nav visibility and
// inference runs.

use folio_core::{active_section, nav_visible, section_ids, PageSession};

#[test]
fn active_section_is_the_last_one_past_the_threshold() {
    let tops = [
        ("about", -900.0),
        ("experience", -200.0),
        ("projects", 140.0),
        ("skills", 700.0),
        ("contact", 1500.0),
    ];
    assert_eq!(active_section(&tops, 150.0), Some("projects"));
    assert_eq!(active_section(&tops, 100.0), Some("experience"));
    // nothing has reached the threshold yet
    assert_eq!(active_section(&tops[3..], 150.0), None);
    assert_eq!(active_section(&[], 150.0), None);
}

#[test]
fn active_section_sticks_when_nothing_qualifies() {
    let mut s = PageSession::new(false);
    s.update_active_section(&[("about", 0.0), ("experience", 600.0)]);
    assert_eq!(s.nav.active.as_deref(), Some("about"));
    s.update_active_section(&[("about", 400.0), ("experience", 900.0)]);
    assert_eq!(s.nav.active.as_deref(), Some("about"));
    // a missing section is skipped rather than treated as an error
    s.update_active_section(&[("about", -800.0), ("skills", 20.0)]);
    assert_eq!(s.nav.active.as_deref(), Some("skills"));
}

#[test]
fn nav_appears_past_most_of_the_first_screen() {
    assert!(!nav_visible(0.0, 1000.0));
    assert!(!nav_visible(800.0, 1000.0));
    assert!(nav_visible(801.0, 1000.0));
}

#[test]
fn hover_is_tracked_by_id() {
    let mut s = PageSession::default();
    s.set_hovered(Some("skills"));
    assert_eq!(s.nav.hovered.as_deref(), Some("skills"));
    s.set_hovered(None);
    assert_eq!(s.nav.hovered, None);
}

#[test]
fn inference_delays_the_scroll_unless_motion_is_reduced() {
    let mut s = PageSession::new(false);
    assert_eq!(s.start_inference("projects", 1000.0), 400.0);
    assert_eq!(s.inference().map(|r| r.target()), Some("projects"));

    s.set_reduced_motion(true);
    assert!(s.reduced_motion());
    assert_eq!(s.start_inference("contact", 1000.0), 0.0);
    assert_eq!(s.inference().map(|r| r.target()), Some("contact"));
}

#[test]
fn finished_runs_are_dropped_once() {
    let mut s = PageSession::new(false);
    s.start_inference("about", 0.0);
    assert!(!s.tick_inference(599.0));
    assert!(s.inference().is_some());
    assert!(s.tick_inference(600.0));
    assert!(s.inference().is_none());
    assert!(!s.tick_inference(700.0));
}

#[test]
fn a_new_click_replaces_the_run_in_progress() {
    let mut s = PageSession::new(false);
    s.start_inference("about", 0.0);
    s.start_inference("skills", 500.0);
    // the replacement started later so it is not done yet
    assert!(!s.tick_inference(700.0));
    assert_eq!(s.inference().map(|r| r.target()), Some("skills"));
    s.stop_inference();
    assert!(s.inference().is_none());
}

#[test]
fn sections_come_in_page_order() {
    let ids: Vec<_> = section_ids().collect();
    assert_eq!(ids, ["about", "experience", "projects", "skills", "contact"]);
}
