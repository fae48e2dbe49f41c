// Shared tuning constants used by the headless engines and the web frontend.

// Cursor spring (critically damped). The main follower settles within
// ~240 ms of a step input; the trail ring is tuned noticeably slower so it
// visibly lags the main dot.
pub const CURSOR_OMEGA: f32 = 24.0; // natural frequency, rad/s
pub const TRAIL_OMEGA: f32 = 14.0;

// How many recent raw pointer samples the trail particle strip keeps.
pub const TRAIL_HISTORY_LEN: usize = 8;

// The tracker is disabled below this viewport width or on touch devices.
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// Scroll
pub const BACK_TO_TOP_THRESHOLD_PX: f32 = 300.0; // page offset before the button shows

// Hero parallax channel endpoints
pub const HERO_FADE_END: f32 = 0.8; // progress at which the hero is fully faded
pub const HERO_FG_SHIFT_PX: f32 = -200.0; // foreground translate at full progress
pub const HERO_BG_SHIFT_PX: f32 = -400.0; // background layer moves twice as far
pub const HERO_MIN_SCALE: f32 = 0.8;

// Section reveal
pub const REVEAL_THRESHOLD: f32 = 0.1; // visible-area ratio that trips the latch
pub const REVEAL_ROOT_MARGIN_PX: f32 = -100.0; // shrink the observed viewport

// Simulated contact submission
pub const SUBMIT_DELAY_SEC: f64 = 2.0;
pub const STATUS_DISPLAY_SEC: f64 = 5.0; // how long success/failure stays visible

// Decorative hero particles
pub const PARTICLES_DESKTOP: usize = 20;
pub const PARTICLES_MOBILE: usize = 10;
pub const PARTICLE_DRIFT_PX: f32 = 20.0; // max pointer-induced drift

// Single-page section anchors, in document order
pub const SECTION_IDS: [&str; 6] = ["hero", "about", "skills", "projects", "contact", "footer"];
