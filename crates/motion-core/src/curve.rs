//! Piecewise-linear breakpoint tables.
//!
//! A [`Curve`] maps an input scalar to an output scalar through an ordered
//! list of keyframes. Inputs outside the table clamp to the end keyframes;
//! there is no extrapolation and no wraparound. Tables are validated once at
//! construction so sampling stays branch-light and cannot divide by zero.

use smallvec::SmallVec;
use thiserror::Error;

/// One (input, output) pair in a breakpoint table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CurveError {
    #[error("curve needs at least 2 keyframes, got {0}")]
    TooFewKeyframes(usize),
    #[error("keyframe inputs must be strictly increasing (x[{index}] = {x})")]
    NonIncreasingInput { index: usize, x: f32 },
    #[error("keyframe {0} has a non-finite coordinate")]
    NonFinite(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    points: SmallVec<[Keyframe; 4]>,
}

impl Curve {
    /// Build a curve from (x, y) pairs, validating the table invariants:
    /// at least two keyframes, finite coordinates, strictly increasing x.
    pub fn new(points: impl IntoIterator<Item = (f32, f32)>) -> Result<Self, CurveError> {
        let points: SmallVec<[Keyframe; 4]> = points
            .into_iter()
            .map(|(x, y)| Keyframe { x, y })
            .collect();
        if points.len() < 2 {
            return Err(CurveError::TooFewKeyframes(points.len()));
        }
        for (i, p) in points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(CurveError::NonFinite(i));
            }
        }
        for i in 1..points.len() {
            if points[i].x <= points[i - 1].x {
                return Err(CurveError::NonIncreasingInput {
                    index: i,
                    x: points[i].x,
                });
            }
        }
        Ok(Self { points })
    }

    /// Two-point convenience table mapping [x0, x1] to [y0, y1].
    pub fn linear(x0: f32, y0: f32, x1: f32, y1: f32) -> Result<Self, CurveError> {
        Self::new([(x0, y0), (x1, y1)])
    }

    /// Sample the table at `x`. Clamps to the first/last keyframe outside
    /// the table domain, interpolates linearly inside it.
    #[inline]
    pub fn sample(&self, x: f32) -> f32 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if x <= first.x {
            return first.y;
        }
        if x >= last.x {
            return last.y;
        }
        for pair in self.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if x <= b.x {
                let t = (x - a.x) / (b.x - a.x);
                return a.y + (b.y - a.y) * t;
            }
        }
        // x < last.x guarantees a segment matched above
        last.y
    }

    #[inline]
    pub fn first(&self) -> Keyframe {
        self.points[0]
    }

    #[inline]
    pub fn last(&self) -> Keyframe {
        self.points[self.points.len() - 1]
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.points
    }
}
