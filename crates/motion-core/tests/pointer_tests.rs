use glam::Vec2;
use motion_core::{
    normalized_offset, pointer_offset, PointerSample, Rect, SharedSignal, ViewportClass,
};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 720.0);

#[test]
fn offset_is_measured_from_the_reference_centre() {
    let at_centre = pointer_offset(Vec2::new(640.0, 360.0), &VIEWPORT);
    assert_eq!(at_centre, Vec2::ZERO);

    let corner = pointer_offset(Vec2::new(0.0, 0.0), &VIEWPORT);
    assert_eq!(corner, Vec2::new(-640.0, -360.0));
}

#[test]
fn normalized_offset_spans_half_unit_each_way() {
    assert_eq!(
        normalized_offset(Vec2::new(1280.0, 720.0), &VIEWPORT),
        Vec2::new(0.5, 0.5)
    );
    assert_eq!(
        normalized_offset(Vec2::new(0.0, 0.0), &VIEWPORT),
        Vec2::new(-0.5, -0.5)
    );
    assert_eq!(
        normalized_offset(Vec2::new(640.0, 360.0), &VIEWPORT),
        Vec2::ZERO
    );
}

#[test]
fn normalized_offset_clamps_outside_the_box() {
    let n = normalized_offset(Vec2::new(5000.0, -5000.0), &VIEWPORT);
    assert_eq!(n, Vec2::new(0.5, -0.5));
}

#[test]
fn degenerate_reference_box_yields_neutral() {
    let flat = Rect::new(10.0, 10.0, 0.0, 50.0);
    assert_eq!(normalized_offset(Vec2::new(99.0, 99.0), &flat), Vec2::ZERO);
}

#[test]
fn sample_tracks_inside_state() {
    let inside = PointerSample::from_client(Vec2::new(100.0, 100.0), &VIEWPORT);
    assert!(inside.inside);
    let outside = PointerSample::from_client(Vec2::new(-1.0, 100.0), &VIEWPORT);
    assert!(!outside.inside);
}

#[test]
fn neutral_sample_is_the_origin() {
    assert_eq!(PointerSample::NEUTRAL.offset, Vec2::ZERO);
    assert!(!PointerSample::NEUTRAL.inside);
}

#[test]
fn writer_updates_are_visible_to_every_reader() {
    let (writer, reader) = SharedSignal::new(0.0_f32);
    let second = reader.clone();
    let third = writer.reader();
    writer.set(0.75);
    assert_eq!(reader.get(), 0.75);
    assert_eq!(second.get(), 0.75);
    assert_eq!(third.get(), 0.75);
    assert_eq!(writer.get(), 0.75);
}

#[test]
fn viewport_classification_threshold() {
    assert_eq!(ViewportClass::classify(320.0), ViewportClass::Compact);
    assert_eq!(ViewportClass::classify(767.9), ViewportClass::Compact);
    assert_eq!(ViewportClass::classify(768.0), ViewportClass::Full);
    assert_eq!(ViewportClass::classify(1920.0), ViewportClass::Full);
    assert!(ViewportClass::classify(500.0).is_compact());
}
