// Shared animation, layout and timing constants used by the web frontend and
// the core state machines.

// Particle field
pub const PARTICLE_MAX_COUNT: usize = 60; // hard cap regardless of canvas size
pub const PARTICLE_AREA_PER_PARTICLE: f32 = 20_000.0; // px² of canvas per particle
pub const PARTICLE_INITIAL_SPEED: f32 = 0.8; // full width of the initial velocity range
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.3;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;

// Particle physics (per frame)
pub const REPULSION_RADIUS: f32 = 150.0; // px
pub const REPULSION_STRENGTH: f32 = 0.5; // impulse at zero distance
pub const VELOCITY_DAMPING: f32 = 0.98;
pub const BROWNIAN_JITTER: f32 = 0.1; // full width of the per-axis random impulse
pub const MAX_PARTICLE_SPEED: f32 = 3.0;

// Particle links
pub const LINK_DISTANCE: f32 = 120.0;
pub const LINK_MAX_OPACITY: f32 = 0.2;

// Deep-space starfield
pub const STAR_AREA_PER_STAR: f32 = 3_000.0;
pub const STAR_FIELD_HEIGHT_SCREENS: f32 = 3.0; // stars are spread over three viewport heights
pub const PARALLAX_MULTIPLIERS: [f32; 3] = [0.05, 0.15, 0.3]; // far, mid, near
pub const NEBULA_COUNT: usize = 4;
pub const NEBULA_SCROLL_FACTOR: f32 = 0.03;
pub const SHOOTING_STAR_VISIBLE_FRACTION: f64 = 0.12;
pub const SHOOTING_STAR_TAIL_PX: f32 = 120.0;

// Media scrubbing
pub const SCRUB_MIN_DELTA_SEC: f64 = 0.01;
pub const SCRUB_MAX_WRITES_PER_SEC: f64 = 30.0;

// Section reveal ("epochs")
pub const SECTION_ORDER: [&str; 5] = ["about", "experience", "projects", "skills", "contact"];
pub const REVEAL_VISIBILITY_THRESHOLD: f32 = 0.15;
pub const REVEAL_DURATION_MS: f64 = 250.0;
pub const REVEAL_STATUS_LINES: [&str; 3] = [
    "> Initializing weights...",
    "> Loading parameters...",
    "> Running forward pass...",
];

// Tone morphing
pub const TONE_DEFAULT: f32 = 0.5;
pub const TONE_THRESHOLD: f32 = 0.5;
pub const TONE_FADE_MS: f64 = 80.0; // each half of the cross-fade

// Navigation
pub const NAV_ARC_ANGLE_DEG: f32 = 140.0;
pub const NAV_ARC_RADIUS_MAX: f32 = 200.0;
pub const NAV_ARC_RADIUS_WIDTH_FRACTION: f32 = 0.4;
pub const NAV_ARC_CENTER_HEIGHT_FRACTION: f32 = 0.6;
pub const NAV_ROW_PADDING: f32 = 20.0;
pub const NAV_ROW_Y: f32 = 30.0;
pub const NAV_MOBILE_BREAKPOINT_PX: f32 = 640.0;
pub const NAV_VISIBLE_SCROLL_FRACTION: f32 = 0.8; // of innerHeight
pub const NAV_ACTIVE_TOP_PX: f32 = 150.0;
pub const NAV_SCROLL_DELAY_MS: f64 = 400.0;

// Inference overlay
pub const INFERENCE_LAYERS: u32 = 12;
pub const INFERENCE_LAYER_MS: f64 = 40.0;
pub const INFERENCE_DURATION_MS: f64 = 600.0;
pub const INFERENCE_REDUCED_DURATION_MS: f64 = 100.0;
pub const INFERENCE_METRICS_MS: f64 = 400.0;
