// Scene tuning constants

use motion_core::SpringConfig;

// Hero: slight 3D tilt and scroll-away drift
pub const HERO_TILT_DEG: f32 = 5.0;
pub const HERO_DRIFT_VIEWPORT_FRACTION: f32 = 0.30;
pub const HERO_FADE_END: f32 = 0.5;
pub const HERO_POINTER_SPRING: SpringConfig = SpringConfig::new(400.0, 50.0);

// Tilt card: stronger tilt, slower spring
pub const CARD_TILT_DEG: f32 = 25.0;
pub const CARD_SPRING: SpringConfig = SpringConfig::new(100.0, 20.0);

// Cursor follower: light, snappy
pub const CURSOR_SPRING: SpringConfig = SpringConfig::with_mass(150.0, 15.0, 0.1);

// Marquee: loose drift with a lead-in offset
pub const MARQUEE_SPRING: SpringConfig = SpringConfig::with_mass(50.0, 15.0, 0.5);
pub const MARQUEE_LEAD_PX: f32 = 400.0;

// Zoom tunnel: per-depth end scales, background to warp-speed foreground
pub const ZOOM_DEPTH_SCALES: [f32; 9] = [4.0, 6.0, 8.0, 12.0, 18.0, 26.0, 38.0, 55.0, 90.0];
pub const ZOOM_IMAGE_FADE_START: f32 = 0.95;
pub const ZOOM_TITLE_SCALE_MAX: f32 = 50.0;
pub const ZOOM_TITLE_BLUR_PX: f32 = 10.0;

// Zoom title hold/fade stops per layout variant; the compact layout lets
// the title go earlier so images get the small screen sooner
pub const ZOOM_TITLE_HOLD_FULL: f32 = 0.70;
pub const ZOOM_TITLE_FADE_END_FULL: f32 = 0.85;
pub const ZOOM_TITLE_HOLD_COMPACT: f32 = 0.55;
pub const ZOOM_TITLE_FADE_END_COMPACT: f32 = 0.75;
