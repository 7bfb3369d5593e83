use std::time::Duration;

use glam::Vec2;
use motion_core::{Spring, SpringConfig, SpringVec2};

const FRAME: Duration = Duration::from_millis(16);

#[test]
fn converges_to_constant_target() {
    let mut s = Spring::new(SpringConfig::default(), 0.0);
    s.set_target(100.0);
    // ~5 seconds of fixed-dt frames
    for _ in 0..312 {
        s.step(FRAME);
    }
    assert!(
        (s.value() - 100.0).abs() < 0.1,
        "value {} not within 0.1% of target",
        s.value()
    );
    assert!(s.is_settled());
}

#[test]
fn critically_damped_spring_does_not_overshoot() {
    let undamped = SpringConfig::new(100.0, 0.0);
    let config = SpringConfig::new(100.0, undamped.critical_damping());
    let mut s = Spring::new(config, 0.0);
    s.set_target(1.0);
    for _ in 0..600 {
        s.step(FRAME);
        assert!(
            s.value() <= 1.0 + 1e-3,
            "overshoot to {} at critical damping",
            s.value()
        );
    }
    assert!((s.value() - 1.0).abs() < 1e-2);
}

#[test]
fn output_is_continuous_across_target_steps() {
    let mut s = Spring::new(SpringConfig::default(), 0.0);
    s.set_target(1.0);
    for _ in 0..30 {
        s.step(FRAME);
    }
    let before = s.value();
    // Step change in target must not jump the value itself
    s.set_target(-50.0);
    assert_eq!(s.value(), before);
    let after = s.step(Duration::from_millis(1));
    assert!((after - before).abs() < 0.5, "discontinuity: {before} -> {after}");
}

#[test]
fn large_frame_gaps_are_clamped_and_stay_stable() {
    // Stiff spring plus multi-second gaps (backgrounded tab)
    let mut s = Spring::new(SpringConfig::new(400.0, 50.0), 0.0);
    s.set_target(1.0);
    for _ in 0..100 {
        let v = s.step(Duration::from_secs(5));
        assert!(v.is_finite());
        assert!(s.velocity().is_finite());
    }
    assert!((s.value() - 1.0).abs() < 0.05);
}

#[test]
fn stays_finite_for_any_clamped_dt_sequence() {
    let dts = [0, 1, 4, 8, 16, 33, 50, 50, 7, 25, 50, 2];
    let mut s = Spring::new(SpringConfig::new(400.0, 50.0), 0.0);
    let mut target = 1.0;
    for _ in 0..50 {
        for ms in dts {
            s.set_target(target);
            let v = s.step(Duration::from_millis(ms));
            assert!(v.is_finite() && s.velocity().is_finite());
            target = -target;
        }
    }
}

#[test]
fn zero_dt_is_a_no_op() {
    let mut s = Spring::new(SpringConfig::default(), 3.0);
    s.set_target(10.0);
    let v = s.step(Duration::ZERO);
    assert_eq!(v, 3.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn snap_to_places_without_transient() {
    let mut s = Spring::new(SpringConfig::default(), 0.0);
    s.set_target(5.0);
    s.step(FRAME);
    s.snap_to(42.0);
    assert_eq!(s.value(), 42.0);
    assert_eq!(s.velocity(), 0.0);
    // no residual pull toward the old target
    s.step(FRAME);
    assert_eq!(s.value(), 42.0);
}

#[test]
fn critical_damping_formula() {
    let config = SpringConfig::with_mass(100.0, 0.0, 1.0);
    assert!((config.critical_damping() - 20.0).abs() < 1e-5);
    let heavy = SpringConfig::with_mass(100.0, 0.0, 4.0);
    assert!((heavy.critical_damping() - 40.0).abs() < 1e-4);
}

#[test]
fn vec2_spring_converges_on_both_axes() {
    let mut s = SpringVec2::new(SpringConfig::default(), Vec2::ZERO);
    s.set_target(Vec2::new(0.4, -0.3));
    for _ in 0..312 {
        s.step(FRAME);
    }
    assert!((s.value() - Vec2::new(0.4, -0.3)).length() < 1e-3);
    assert!(s.is_settled());
}

#[test]
fn vec2_spring_returns_to_neutral_after_reset() {
    // Pointer leaves the tracked region: target resets to the origin and
    // the value follows within the convergence time
    let mut s = SpringVec2::new(SpringConfig::default(), Vec2::ZERO);
    s.set_target(Vec2::new(120.0, 80.0));
    for _ in 0..60 {
        s.step(FRAME);
    }
    s.set_target(Vec2::ZERO);
    for _ in 0..312 {
        s.step(FRAME);
    }
    assert!(s.value().length() < 0.2, "did not return: {:?}", s.value());
}
