//! Animated visual properties of a single element

/// Scale, opacity and translation of one element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Uniform scale factor
    pub scale: f32,
    /// Opacity (0.0 to 1.0)
    pub opacity: f32,
    /// Translation X in pixels
    pub translate_x: f32,
    /// Translation Y in pixels (positive is down)
    pub translate_y: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// Unscaled, opaque, untranslated
    pub const IDENTITY: Pose = Pose {
        scale: 1.0,
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Builder: set scale
    pub fn with_scale(mut self, value: f32) -> Self {
        self.scale = value;
        self
    }

    /// Builder: set opacity
    pub fn with_opacity(mut self, value: f32) -> Self {
        self.opacity = value;
        self
    }

    /// Builder: set translation
    pub fn with_translate(mut self, x: f32, y: f32) -> Self {
        self.translate_x = x;
        self.translate_y = y;
        self
    }

    /// Interpolate toward `other`. `t` is not clamped, so spring curves
    /// that overshoot carry the pose past `other`.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            scale: lerp(self.scale, other.scale, t),
            opacity: lerp(self.opacity, other.opacity, t),
            translate_x: lerp(self.translate_x, other.translate_x, t),
            translate_y: lerp(self.translate_y, other.translate_y, t),
        }
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    // Exact at both endpoints
    a * (1.0 - t) + b * t
}
