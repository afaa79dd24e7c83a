// Host-side tests for the pointer-reactive particle field.

use folio_core::{particle_count_for, FieldParams, Particle, ParticleField};
use glam::Vec2;

fn still(pos: Vec2) -> Particle {
    Particle {
        pos,
        vel: Vec2::ZERO,
        radius: 2.0,
        opacity: 0.5,
    }
}

fn quiet_params() -> FieldParams {
    FieldParams {
        jitter: 0.0,
        ..FieldParams::default()
    }
}

#[test]
fn count_scales_with_area_and_is_capped() {
    let p = FieldParams::default();
    assert_eq!(particle_count_for(800.0, 600.0, &p), 24);
    assert_eq!(particle_count_for(4000.0, 3000.0, &p), 60);
    assert_eq!(particle_count_for(0.0, 600.0, &p), 0);
    assert_eq!(particle_count_for(100.0, 100.0, &p), 0);
}

#[test]
fn initial_particles_respect_ranges() {
    let field = ParticleField::new(800.0, 600.0, FieldParams::default(), 7);
    assert_eq!(field.particles().len(), 24);
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 600.0);
        assert!(p.vel.x.abs() <= 0.4 && p.vel.y.abs() <= 0.4);
        assert!(p.radius >= 1.0 && p.radius < 3.0);
        assert!(p.opacity >= 0.3 && p.opacity < 0.8);
    }
}

#[test]
fn same_seed_same_simulation() {
    let mut a = ParticleField::new(1024.0, 768.0, FieldParams::default(), 99);
    let mut b = ParticleField::new(1024.0, 768.0, FieldParams::default(), 99);
    for _ in 0..50 {
        a.step();
        b.step();
    }
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn pointer_pushes_nearby_particles_away() {
    let mut field = ParticleField::with_particles(
        800.0,
        600.0,
        quiet_params(),
        1,
        vec![still(Vec2::new(110.0, 100.0))],
    );
    field.set_pointer(Some(Vec2::new(100.0, 100.0)));
    field.step();
    let p = field.particles()[0];
    // impulse 0.5 * (150 - 10) / 150 along +x
    let impulse = 0.5 * 140.0 / 150.0;
    assert!((p.pos.x - (110.0 + impulse)).abs() < 1e-4);
    assert!((p.pos.y - 100.0).abs() < 1e-6);
    assert!((p.vel.x - impulse * 0.98).abs() < 1e-4);
}

#[test]
fn pointer_outside_radius_or_absent_has_no_effect() {
    let start = Vec2::new(400.0, 300.0);
    let mut field =
        ParticleField::with_particles(800.0, 600.0, quiet_params(), 1, vec![still(start)]);
    field.set_pointer(Some(Vec2::new(400.0, 460.0)));
    field.step();
    assert_eq!(field.particles()[0].pos, start);

    field.set_pointer(None);
    field.step();
    assert_eq!(field.particles()[0].pos, start);
}

#[test]
fn speed_is_clamped() {
    let mut p = still(Vec2::new(400.0, 300.0));
    p.vel = Vec2::new(40.0, -30.0);
    let mut field = ParticleField::with_particles(800.0, 600.0, quiet_params(), 1, vec![p]);
    field.step();
    let v = field.particles()[0].vel;
    assert!((v.length() - 3.0).abs() < 1e-4);
    // direction preserved
    assert!(v.x > 0.0 && v.y < 0.0);
}

#[test]
fn positions_wrap_toroidally() {
    let mut right = still(Vec2::new(799.5, 300.0));
    right.vel = Vec2::new(1.0, 0.0);
    let mut top = still(Vec2::new(200.0, 0.5));
    top.vel = Vec2::new(0.0, -1.0);
    let mut field =
        ParticleField::with_particles(800.0, 600.0, quiet_params(), 1, vec![right, top]);
    field.step();
    assert_eq!(field.particles()[0].pos.x, 0.0);
    assert_eq!(field.particles()[1].pos.y, 600.0);
}

#[test]
fn particles_stay_in_bounds_over_time() {
    let mut field = ParticleField::new(640.0, 480.0, FieldParams::default(), 3);
    field.set_pointer(Some(Vec2::new(320.0, 240.0)));
    for _ in 0..500 {
        field.step();
    }
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 640.0, "{:?}", p.pos);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 480.0, "{:?}", p.pos);
        assert!(p.vel.length() <= 3.0 + 1e-4);
    }
}

#[test]
fn without_jitter_motion_decays_to_rest() {
    let mut field = ParticleField::new(800.0, 600.0, quiet_params(), 11);
    for _ in 0..1000 {
        field.step();
    }
    for p in field.particles() {
        assert!(p.vel.length() < 1e-6);
    }
}

#[test]
fn links_fade_with_distance() {
    let field = ParticleField::with_particles(
        800.0,
        600.0,
        FieldParams::default(),
        1,
        vec![
            still(Vec2::new(100.0, 100.0)),
            still(Vec2::new(160.0, 100.0)),
            still(Vec2::new(400.0, 400.0)),
        ],
    );
    let links = field.links();
    assert_eq!(links.len(), 1);
    assert_eq!((links[0].a, links[0].b), (0, 1));
    assert!((links[0].opacity - 0.1).abs() < 1e-6);
}

#[test]
fn resize_regenerates_particles() {
    let mut field = ParticleField::new(800.0, 600.0, FieldParams::default(), 5);
    field.resize(400.0, 500.0);
    assert_eq!(field.size(), Vec2::new(400.0, 500.0));
    assert_eq!(field.particles().len(), 10);
    field.resize(0.0, 0.0);
    assert!(field.particles().is_empty());
    assert!(field.links().is_empty());
}

#[test]
fn still_pointer_flings_a_particle_out_to_full_speed() {
    let pointer = Vec2::new(100.0, 300.0);
    let mut field = ParticleField::with_particles(
        800.0,
        600.0,
        quiet_params(),
        1,
        vec![still(Vec2::new(105.0, 300.0))],
    );
    field.set_pointer(Some(pointer));

    let mut top_speed: f32 = 0.0;
    let mut last_dist = 5.0;
    let mut left_radius = false;
    for _ in 0..400 {
        field.step();
        let p = field.particles()[0];
        // stays on this side of the canvas, so no wrap is involved
        assert!(p.pos.x > pointer.x && p.pos.x < 800.0, "{:?}", p.pos);
        top_speed = top_speed.max(p.vel.length());

        let dist = p.pos.distance(pointer);
        if left_radius {
            assert!(dist >= last_dist, "{} after {}", dist, last_dist);
        }
        left_radius |= dist >= 150.0;
        last_dist = dist;
    }
    assert!(left_radius);
    assert!((top_speed - 3.0).abs() < 1e-4, "top speed {}", top_speed);
}
