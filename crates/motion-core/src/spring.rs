//! Second-order spring smoothing.
//!
//! Raw sampled signals (scroll progress, pointer offsets) are discontinuous
//! between events. A [`Spring`] pulls a continuous value toward the latest
//! target with a damped spring-mass model, integrated with semi-implicit
//! Euler in fixed substeps once per animation frame. Frame deltas are
//! clamped to [`MAX_STEP`](crate::constants::MAX_STEP) so a backgrounded tab
//! cannot inject a multi-second impulse.

use std::time::Duration;

use glam::Vec2;

use crate::constants::{
    DEFAULT_DAMPING, DEFAULT_MASS, DEFAULT_STIFFNESS, MAX_STEP, MAX_SUBSTEP, SETTLE_EPSILON,
};

/// Spring tuning. `damping >= critical_damping()` converges without
/// overshoot; lower values oscillate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            mass: DEFAULT_MASS,
        }
    }
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: DEFAULT_MASS,
        }
    }

    pub const fn with_mass(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Damping coefficient at which the spring is critically damped.
    #[inline]
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }
}

/// Scalar spring state: current value, velocity and the target it chases.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget without touching the current value or velocity. The output
    /// stays continuous across target steps; only acceleration reacts.
    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to `value` with zero velocity. Used for initial
    /// placement so the first frame does not animate in from 0.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.velocity = 0.0;
        self.target = value;
    }

    /// Advance the integration by `dt` (clamped to `MAX_STEP`) and return
    /// the new value. The clamped delta is consumed in fixed substeps so
    /// stiff, low-mass configurations stay stable at any frame rate.
    pub fn step(&mut self, dt: Duration) -> f32 {
        let mut remaining = dt.min(MAX_STEP).as_secs_f32();
        let substep = MAX_SUBSTEP.as_secs_f32();
        while remaining > 0.0 {
            let h = remaining.min(substep);
            remaining -= h;
            let accel = (self.config.stiffness * (self.target - self.value)
                - self.config.damping * self.velocity)
                / self.config.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }
        self.value
    }

    /// Whether the spring has converged onto its target.
    pub fn is_settled(&self) -> bool {
        (self.target - self.value).abs() < SETTLE_EPSILON
            && self.velocity.abs() < SETTLE_EPSILON
    }
}

/// Two-axis spring for pointer-driven state, integrating both axes with the
/// same scheme as [`Spring`].
#[derive(Clone, Debug)]
pub struct SpringVec2 {
    config: SpringConfig,
    value: Vec2,
    velocity: Vec2,
    target: Vec2,
}

impl SpringVec2 {
    pub fn new(config: SpringConfig, initial: Vec2) -> Self {
        Self {
            config,
            value: initial,
            velocity: Vec2::ZERO,
            target: initial,
        }
    }

    #[inline]
    pub fn value(&self) -> Vec2 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn snap_to(&mut self, value: Vec2) {
        self.value = value;
        self.velocity = Vec2::ZERO;
        self.target = value;
    }

    pub fn step(&mut self, dt: Duration) -> Vec2 {
        let mut remaining = dt.min(MAX_STEP).as_secs_f32();
        let substep = MAX_SUBSTEP.as_secs_f32();
        while remaining > 0.0 {
            let h = remaining.min(substep);
            remaining -= h;
            let accel = (self.target - self.value) * self.config.stiffness / self.config.mass
                - self.velocity * self.config.damping / self.config.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }
        self.value
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.value).abs().max_element() < SETTLE_EPSILON
            && self.velocity.abs().max_element() < SETTLE_EPSILON
    }
}
