//! Channel timelines: one breakpoint curve per animated style channel, all
//! sampled with the same input signal.

use fnv::FnvHashMap;

use crate::curve::Curve;
use crate::output::VisualOutput;

/// Style channels a timeline can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    TranslateX,
    TranslateY,
    RotateX,
    RotateY,
    RotateZ,
    Scale,
    Opacity,
    Blur,
}

/// A layer's mapping from one input signal to its style channels. Channels
/// without a track keep their identity values.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    tracks: FnvHashMap<Channel, Curve>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, channel: Channel, curve: Curve) -> Self {
        self.set(channel, curve);
        self
    }

    pub fn set(&mut self, channel: Channel, curve: Curve) {
        if self.tracks.insert(channel, curve).is_some() {
            log::debug!("[timeline] replaced track for {channel:?}");
        }
    }

    pub fn track(&self, channel: Channel) -> Option<&Curve> {
        self.tracks.get(&channel)
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Sample every track at `x` into `out`, leaving untracked channels
    /// untouched. Lets several timelines (e.g. a scroll binding and a
    /// pointer binding) compose onto one output.
    pub fn evaluate_into(&self, x: f32, out: &mut VisualOutput) {
        for (channel, curve) in &self.tracks {
            let v = curve.sample(x);
            match channel {
                Channel::TranslateX => out.translate_x = v,
                Channel::TranslateY => out.translate_y = v,
                Channel::RotateX => out.rotate_x = v,
                Channel::RotateY => out.rotate_y = v,
                Channel::RotateZ => out.rotate_z = v,
                Channel::Scale => out.scale = v,
                Channel::Opacity => out.opacity = v,
                Channel::Blur => out.blur = v,
            }
        }
    }

    /// Evaluate against a fresh identity output and sanitize the result.
    pub fn evaluate(&self, x: f32) -> VisualOutput {
        let mut out = VisualOutput::IDENTITY;
        self.evaluate_into(x, &mut out);
        out.sanitized()
    }
}
