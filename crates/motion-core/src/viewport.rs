use crate::constants::COMPACT_VIEWPORT_MAX_WIDTH;

/// Layout variant selected once at mount from the measured viewport width.
/// Scenes pick per-variant tuning (plateau widths, travel distances) here
/// instead of branching inline per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Compact,
    Full,
}

impl ViewportClass {
    #[inline]
    pub fn classify(viewport_width: f32) -> Self {
        if viewport_width < COMPACT_VIEWPORT_MAX_WIDTH {
            ViewportClass::Compact
        } else {
            ViewportClass::Full
        }
    }

    #[inline]
    pub fn is_compact(&self) -> bool {
        matches!(self, ViewportClass::Compact)
    }
}
