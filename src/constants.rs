// DOM contract and browser-side tuning for the portfolio page.
//
// Element ids are looked up once at start; a missing element disables the
// component that needs it and is never an error.

// Background layers
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const STARFIELD_CANVAS_ID: &str = "starfield-canvas";
pub const SCROLL_CONTAINER_ID: &str = "rocket-scroll";
pub const VIDEO_ID: &str = "rocket-video";
pub const POSTER_ID: &str = "rocket-poster";
pub const VIDEO_LAYER_ID: &str = "rocket-video-layer";
pub const OVERLAY_LAYER_ID: &str = "rocket-overlay";

// Section reveal
pub const SECTION_CONTENT_CLASS: &str = "epoch-content";
pub const SECTION_LOADED_CLASS: &str = "epoch-loaded";
pub const LOADER_ID: &str = "epoch-loader";
pub const LOADER_TITLE_ID: &str = "epoch-loader-title";
pub const LOADER_BAR_ID: &str = "epoch-loader-bar";
pub const LOADER_PERCENT_ID: &str = "epoch-loader-percent";
pub const LOADER_STATUS_ID: &str = "epoch-loader-status";

// Tone sliders
pub const VERBOSITY_SLIDER_ID: &str = "slider-verbosity";
pub const TECHNICAL_SLIDER_ID: &str = "slider-technical";
pub const TONE_RESET_ID: &str = "slider-reset";
pub const TONE_TARGET_ATTR: &str = "data-tone"; // value is a key for `content::tone_block`

// Navigation
pub const NAV_ID: &str = "neural-nav";
pub const NAV_SVG_ID: &str = "neural-nav-svg";
pub const NAV_HIDDEN_CLASS: &str = "nav-hidden";
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Inference overlay
pub const INFERENCE_ID: &str = "inference-overlay";
pub const INFERENCE_STATUS_ID: &str = "inference-status";
pub const INFERENCE_LAYERS_ID: &str = "inference-layers";
pub const INFERENCE_METRICS_ID: &str = "inference-metrics";
pub const INFERENCE_TARGET_ID: &str = "inference-target";
pub const INFERENCE_TYPE_MS: f64 = 20.0; // per status character

// Hero terminal
pub const HERO_TERMINAL_ID: &str = "hero-terminal";
pub const HERO_TYPE_MS: f64 = 45.0;
pub const HERO_LINE_DELAY_MS: f64 = 350.0;
pub const HERO_START_DELAY_MS: f64 = 300.0;

// Resume download
pub const RESUME_BUTTON_ID: &str = "resume-download";
pub const RESUME_ERROR_ID: &str = "resume-error";
pub const RESUME_ENDPOINT: &str = "/api/generate-resume";
pub const RESUME_ERROR_TEXT: &str = "Failed to generate resume. Please try again.";

// Generic visibility toggle used by every overlay
pub const HIDDEN_CLASS: &str = "hidden";

// Canvas drawing
pub const PARTICLE_RGB: [u8; 3] = [148, 163, 184]; // slate-400, particles and links
pub const PARTICLE_BACKGROUND: &str = "#09090b";
pub const SPACE_BACKGROUND: &str = "#050510";
pub const LINK_WIDTH: f64 = 0.5;
pub const STREAK_WIDTH: f64 = 1.5;
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0; // backing store cap on dense screens
