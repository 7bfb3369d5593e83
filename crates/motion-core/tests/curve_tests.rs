use motion_core::{Curve, CurveError};

#[test]
fn clamps_below_first_keyframe() {
    let c = Curve::new([(0.2, 10.0), (0.8, 50.0)]).unwrap();
    assert_eq!(c.sample(0.0), 10.0);
    assert_eq!(c.sample(-100.0), 10.0);
    assert_eq!(c.sample(0.2), 10.0);
}

#[test]
fn clamps_above_last_keyframe() {
    let c = Curve::new([(0.2, 10.0), (0.8, 50.0)]).unwrap();
    assert_eq!(c.sample(0.8), 50.0);
    assert_eq!(c.sample(1.0), 50.0);
    assert_eq!(c.sample(1e6), 50.0);
}

#[test]
fn interpolates_linearly_between_keyframes() {
    let c = Curve::new([(0.0, 0.0), (1.0, 100.0)]).unwrap();
    assert!((c.sample(0.25) - 25.0).abs() < 1e-5);
    assert!((c.sample(0.5) - 50.0).abs() < 1e-5);
    assert!((c.sample(0.75) - 75.0).abs() < 1e-5);
}

#[test]
fn plateau_table_holds_and_ramps() {
    // Hold at 0.2 in the middle, ramp back up at the edges
    let c = Curve::new([(0.0, 1.0), (0.5, 0.2), (1.0, 1.0)]).unwrap();
    assert_eq!(c.sample(0.5), 0.2);

    let left = c.sample(0.3);
    assert!(left > 0.2 && left < 1.0, "got {left}");
    let right = c.sample(0.7);
    assert!(right > 0.2 && right < 1.0, "got {right}");
}

#[test]
fn flat_plateau_segment_does_not_change_output() {
    // Gallery-style dwell: output frozen across the plateau span
    let c = Curve::new([(-700.0, 45.0), (-50.0, 0.0), (50.0, 0.0), (700.0, -45.0)]).unwrap();
    assert_eq!(c.sample(-50.0), 0.0);
    assert_eq!(c.sample(0.0), 0.0);
    assert_eq!(c.sample(50.0), 0.0);
    assert!(c.sample(-400.0) > 0.0);
    assert!(c.sample(400.0) < 0.0);
}

#[test]
fn monotonic_table_preserves_monotonicity() {
    let c = Curve::new([(0.0, 0.0), (0.3, 10.0), (0.6, 10.0), (1.0, 40.0)]).unwrap();
    let mut prev = f32::NEG_INFINITY;
    for i in 0..=100 {
        let x = i as f32 / 100.0;
        let y = c.sample(x);
        assert!(y >= prev, "not monotone at x={x}: {y} < {prev}");
        prev = y;
    }
}

#[test]
fn sampling_is_pure() {
    let c = Curve::new([(0.0, 1.0), (0.5, 0.2), (1.0, 1.0)]).unwrap();
    for x in [-1.0, 0.0, 0.31, 0.5, 0.77, 1.0, 2.0] {
        assert_eq!(c.sample(x), c.sample(x));
    }
}

#[test]
fn sampling_stays_finite() {
    let c = Curve::new([(0.0, 0.0), (1e-6, 1.0), (1.0, -1.0)]).unwrap();
    for i in -10..=20 {
        let x = i as f32 * 0.1;
        assert!(c.sample(x).is_finite());
    }
}

#[test]
fn rejects_single_keyframe() {
    assert_eq!(
        Curve::new([(0.0, 1.0)]).unwrap_err(),
        CurveError::TooFewKeyframes(1)
    );
    assert_eq!(
        Curve::new(std::iter::empty()).unwrap_err(),
        CurveError::TooFewKeyframes(0)
    );
}

#[test]
fn rejects_duplicate_x() {
    let err = Curve::new([(0.0, 1.0), (0.5, 2.0), (0.5, 3.0)]).unwrap_err();
    assert_eq!(err, CurveError::NonIncreasingInput { index: 2, x: 0.5 });
}

#[test]
fn rejects_decreasing_x() {
    let err = Curve::new([(0.0, 1.0), (0.5, 2.0), (0.2, 3.0)]).unwrap_err();
    assert!(matches!(err, CurveError::NonIncreasingInput { index: 2, .. }));
}

#[test]
fn rejects_non_finite_coordinates() {
    assert_eq!(
        Curve::new([(0.0, 1.0), (f32::NAN, 2.0)]).unwrap_err(),
        CurveError::NonFinite(1)
    );
    assert_eq!(
        Curve::new([(0.0, f32::INFINITY), (1.0, 2.0)]).unwrap_err(),
        CurveError::NonFinite(0)
    );
}

#[test]
fn linear_constructor_matches_two_point_table() {
    let a = Curve::linear(0.0, 1.0, 1.0, 4.0).unwrap();
    let b = Curve::new([(0.0, 1.0), (1.0, 4.0)]).unwrap();
    assert_eq!(a.sample(0.5), b.sample(0.5));
    assert_eq!(a.first(), b.first());
    assert_eq!(a.last(), b.last());
}
