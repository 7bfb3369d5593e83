//! Per-frame visual output values and their CSS encodings.

use crate::constants::MIN_SCALE;

/// Computed style values for one layer for one frame. Fields default to
/// identity so a timeline that only drives some channels never hides or
/// distorts the rest of the element.
///
/// Units: translate in CSS px, rotate in degrees, blur in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualOutput {
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub rotate_z: f32,
    pub scale: f32,
    pub opacity: f32,
    pub blur: f32,
}

impl VisualOutput {
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        rotate_z: 0.0,
        scale: 1.0,
        opacity: 1.0,
        blur: 0.0,
    };

    /// Clamp fields to their legal ranges: opacity in [0, 1], scale above
    /// zero, blur non-negative.
    pub fn sanitized(mut self) -> Self {
        self.opacity = self.opacity.clamp(0.0, 1.0);
        self.scale = self.scale.max(MIN_SCALE);
        self.blur = self.blur.max(0.0);
        self
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// `transform` property value. Compositor-friendly only: translate,
    /// rotate and scale, applied in that order. Identity collapses to
    /// `none`.
    pub fn transform_css(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(5);
        if self.translate_x != 0.0 || self.translate_y != 0.0 {
            parts.push(format!(
                "translate3d({:.3}px, {:.3}px, 0)",
                self.translate_x, self.translate_y
            ));
        }
        if self.rotate_x != 0.0 {
            parts.push(format!("rotateX({:.3}deg)", self.rotate_x));
        }
        if self.rotate_y != 0.0 {
            parts.push(format!("rotateY({:.3}deg)", self.rotate_y));
        }
        if self.rotate_z != 0.0 {
            parts.push(format!("rotateZ({:.3}deg)", self.rotate_z));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({:.4})", self.scale));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    /// `filter` property value; `none` when no blur is active.
    pub fn filter_css(&self) -> String {
        if self.blur > 0.0 {
            format!("blur({:.2}px)", self.blur)
        } else {
            "none".to_string()
        }
    }
}

impl Default for VisualOutput {
    fn default() -> Self {
        Self::IDENTITY
    }
}
