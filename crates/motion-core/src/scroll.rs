//! Virtual smooth scroll.
//!
//! Raw input accumulates into `raw_offset`; each frame `smoothed_offset`
//! follows it along a timed exponential catch-up curve. Every feed restarts
//! the curve from where the smoothed value currently is, so motion after the
//! last input is monotone and lands exactly on the target.

use crate::config::ScrollConfig;
use crate::easing::{lerp, Easing};
use crate::event::InputSource;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub raw_offset: f32,
    pub smoothed_offset: f32,
    pub velocity: f32,
    pub locked: bool,
}

#[derive(Clone, Copy, Debug)]
struct Segment {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

impl Segment {
    fn sample(&self) -> f32 {
        if self.duration <= f32::EPSILON {
            return self.to;
        }
        let t = (self.elapsed / self.duration).min(1.0);
        if t >= 1.0 {
            self.to
        } else {
            lerp(self.from, self.to, self.easing.apply(t))
        }
    }

    fn done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Clone, Copy, Debug)]
enum Motion {
    Idle,
    CatchUp(Segment),
    /// Programmatic `scroll_to`; any user feed cancels it.
    Programmatic(Segment),
}

#[derive(Debug)]
pub struct ScrollVirtualizer {
    state: ScrollState,
    limit: f32,
    motion: Motion,
    config: ScrollConfig,
}

impl ScrollVirtualizer {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            state: ScrollState::default(),
            limit: 0.0,
            motion: Motion::Idle,
            config,
        }
    }

    #[inline]
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.state.smoothed_offset
    }

    #[inline]
    pub fn limit(&self) -> f32 {
        self.limit
    }

    /// Update the scrollable range; both offsets are re-clamped.
    pub fn set_bounds(&mut self, content_height: f32, viewport_height: f32) {
        self.limit = (content_height - viewport_height).max(0.0);
        self.state.raw_offset = self.state.raw_offset.clamp(0.0, self.limit);
        self.state.smoothed_offset = self.state.smoothed_offset.clamp(0.0, self.limit);
        self.motion = match self.motion {
            Motion::Idle => Motion::Idle,
            Motion::CatchUp(_) | Motion::Programmatic(_) => self.catch_up_segment(),
        };
    }

    pub fn feed_input(&mut self, source: InputSource, delta: f32) {
        let multiplier = match source {
            InputSource::Wheel => self.config.wheel_multiplier,
            InputSource::Touch => self.config.touch_multiplier,
            InputSource::Keyboard => self.config.keyboard_multiplier,
        };
        self.feed(delta * multiplier);
    }

    /// Accumulate raw input. Accepted while locked; only the smoothed value is frozen.
    pub fn feed(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        if let Motion::Programmatic(_) = self.motion {
            log::debug!("[scroll] user input cancels programmatic scroll");
            self.state.raw_offset = self.state.smoothed_offset;
        }
        self.state.raw_offset = (self.state.raw_offset + delta).clamp(0.0, self.limit);
        self.motion = self.catch_up_segment();
    }

    pub fn lock(&mut self) {
        self.state.locked = true;
    }

    pub fn unlock(&mut self) {
        if self.state.locked {
            self.state.locked = false;
            if self.state.raw_offset != self.state.smoothed_offset {
                self.motion = self.catch_up_segment();
            }
        }
    }

    pub fn set_locked(&mut self, locked: bool) {
        if locked {
            self.lock();
        } else {
            self.unlock();
        }
    }

    /// Animate to `target` over `duration_sec`, replacing any scroll in flight.
    pub fn scroll_to(&mut self, target: f32, duration_sec: f32, easing: Easing) {
        let to = target.clamp(0.0, self.limit);
        self.state.raw_offset = to;
        self.motion = Motion::Programmatic(Segment {
            from: self.state.smoothed_offset,
            to,
            elapsed: 0.0,
            duration: duration_sec.max(0.0),
            easing,
        });
    }

    /// Jump without animation, e.g. restoring position on load.
    pub fn scroll_to_immediate(&mut self, target: f32) {
        let to = target.clamp(0.0, self.limit);
        self.state.raw_offset = to;
        self.state.smoothed_offset = to;
        self.state.velocity = 0.0;
        self.motion = Motion::Idle;
    }

    pub fn is_animating(&self) -> bool {
        !matches!(self.motion, Motion::Idle)
    }

    /// Advance the smoothed offset by `dt` seconds and return it.
    pub fn tick(&mut self, dt: f32) -> f32 {
        let before = self.state.smoothed_offset;
        if !self.state.locked {
            self.motion = match self.motion {
                Motion::Idle => Motion::Idle,
                Motion::CatchUp(mut seg) => {
                    seg.elapsed += dt;
                    self.state.smoothed_offset = seg.sample();
                    if seg.done() {
                        Motion::Idle
                    } else {
                        Motion::CatchUp(seg)
                    }
                }
                Motion::Programmatic(mut seg) => {
                    seg.elapsed += dt;
                    self.state.smoothed_offset = seg.sample();
                    if seg.done() {
                        Motion::Idle
                    } else {
                        Motion::Programmatic(seg)
                    }
                }
            };
            self.state.smoothed_offset = self.state.smoothed_offset.clamp(0.0, self.limit);
        }
        self.state.velocity = if dt > 0.0 {
            (self.state.smoothed_offset - before) / dt
        } else {
            0.0
        };
        self.state.smoothed_offset
    }

    fn catch_up_segment(&self) -> Motion {
        Motion::CatchUp(Segment {
            from: self.state.smoothed_offset,
            to: self.state.raw_offset,
            elapsed: 0.0,
            duration: self.config.duration_sec,
            easing: self.config.easing,
        })
    }
}
