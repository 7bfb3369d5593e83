//! Pointer offset sampling relative to a reference box.

use glam::Vec2;

use crate::rect::Rect;

/// Latest pointer reading: signed pixel offset from the centre of the
/// reference box, plus whether the pointer is inside it. Resets to
/// [`PointerSample::NEUTRAL`] when the pointer leaves the tracked region.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub offset: Vec2,
    pub inside: bool,
}

impl PointerSample {
    pub const NEUTRAL: Self = Self {
        offset: Vec2::ZERO,
        inside: false,
    };

    pub fn from_client(client: Vec2, reference: &Rect) -> Self {
        Self {
            offset: client - reference.center(),
            inside: reference.contains(client),
        }
    }
}

/// Signed offset of a client-space point from the centre of `reference`,
/// in CSS pixels.
#[inline]
pub fn pointer_offset(client: Vec2, reference: &Rect) -> Vec2 {
    client - reference.center()
}

/// Centre-relative offset normalized by the reference size, clamped to
/// [-0.5, 0.5] per axis. A degenerate box yields the neutral origin.
#[inline]
pub fn normalized_offset(client: Vec2, reference: &Rect) -> Vec2 {
    if reference.width <= 0.0 || reference.height <= 0.0 {
        return Vec2::ZERO;
    }
    let offset = pointer_offset(client, reference);
    Vec2::new(
        (offset.x / reference.width).clamp(-0.5, 0.5),
        (offset.y / reference.height).clamp(-0.5, 0.5),
    )
}
