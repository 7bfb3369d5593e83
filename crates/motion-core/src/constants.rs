// Integration and smoothing tuning constants

use std::time::Duration;

/// Longest frame delta the spring integrator will accept. Deltas above this
/// (backgrounded tab, debugger pause) are clamped before integration.
pub const MAX_STEP: Duration = Duration::from_millis(50);

/// Fixed substep for spring integration. Semi-implicit Euler needs
/// `damping/mass * dt < 1` to stay stable; 4 ms keeps stiff low-mass
/// configurations inside that bound at any frame rate.
pub const MAX_SUBSTEP: Duration = Duration::from_millis(4);

// Default spring tuning (pointer tilt feel)
pub const DEFAULT_STIFFNESS: f32 = 100.0;
pub const DEFAULT_DAMPING: f32 = 20.0;
pub const DEFAULT_MASS: f32 = 1.0;

/// Value/velocity window inside which a spring counts as settled.
pub const SETTLE_EPSILON: f32 = 1e-3;

/// Floor applied to mapped scale values so a layer never collapses to
/// zero area or flips through negative scale.
pub const MIN_SCALE: f32 = 1e-3;

/// Viewport width (CSS px) below which the compact layout variant applies.
pub const COMPACT_VIEWPORT_MAX_WIDTH: f32 = 768.0;
