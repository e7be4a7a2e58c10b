//! Easing curves used by tweens, scroll catch-up and scrubbed bindings.

/// Named easing curve. `PowerN` follows the common "powerN" naming where the
/// exponent is `N + 1` (power2 is cubic, power4 is quintic).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    Power2In,
    Power2Out,
    Power2InOut,
    Power4Out,
    Power4InOut,
    /// Exponential catch-up used by smooth scroll: fast start, long continuous tail.
    ExpoCatchUp,
}

impl Easing {
    /// Map linear progress `t` in \[0, 1\] to eased progress. Input is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2In => t.powi(3),
            Easing::Power2Out => ease_out(t, 3),
            Easing::Power2InOut => ease_in_out(t, 3),
            Easing::Power4Out => ease_out(t, 5),
            Easing::Power4InOut => ease_in_out(t, 5),
            Easing::ExpoCatchUp => expo_catch_up(t),
        }
    }
}

#[inline]
fn ease_out(t: f32, power: i32) -> f32 {
    1.0 - (1.0 - t).powi(power)
}

#[inline]
fn ease_in_out(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        0.5 * (2.0 * t).powi(power)
    } else {
        1.0 - 0.5 * (2.0 * (1.0 - t)).powi(power)
    }
}

#[inline]
fn expo_catch_up(t: f32) -> f32 {
    (1.001 - 2.0_f32.powf(-10.0 * t)).min(1.0)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Frame-rate independent smoothing factor: the share of the remaining gap
/// to close this frame, given the fraction `decay_base` left after one second.
#[inline]
pub fn smoothing_factor(decay_base: f32, dt_sec: f32) -> f32 {
    1.0 - decay_base.powf(dt_sec.max(0.0))
}
