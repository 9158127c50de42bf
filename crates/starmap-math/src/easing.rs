//! Easing curves and the interpolation trait used by camera animations.

use glam::Vec2;

/// Smoothstep ease-in-out: `t² · (3 − 2t)`, with `t` clamped to `0.0..=1.0`.
///
/// Starts and ends with zero velocity. Exact at both ends, so a finished
/// animation lands precisely on its target.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Easing curves for camera animations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EasingFunction {
    /// Constant speed, no acceleration.
    Linear,
    /// Slow start, fast end.
    EaseIn,
    /// Fast start, slow end.
    EaseOut,
    /// Smoothstep: slow start, fast middle, slow end.
    #[default]
    EaseInOut,
}

impl EasingFunction {
    /// Map a linear progress value (0.0..=1.0) to an eased value.
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            EasingFunction::EaseInOut => ease_in_out(t),
        }
    }
}

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    /// Interpolate from `self` toward `to` by `t` (0 = self, 1 = to).
    fn lerp_to(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec2 {
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}
