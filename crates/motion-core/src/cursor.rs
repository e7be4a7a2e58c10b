//! Custom cursor: an inner dot pinned to the pointer and an outer ring that
//! trails it, plus magnetic elements that lean toward the pointer.

use crate::config::CursorConfig;
use crate::easing::smoothing_factor;
use crate::layout::{ElementId, Rect};
use fnv::FnvHashMap;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFollowerState {
    pub pointer: Vec2,
    pub inner: Vec2,
    pub outer: Vec2,
}

#[derive(Debug)]
pub struct CursorFollower {
    state: CursorFollowerState,
    magnets: FnvHashMap<ElementId, f32>,
    config: CursorConfig,
    seen_pointer: bool,
}

impl CursorFollower {
    pub fn new(config: CursorConfig) -> Self {
        Self {
            state: CursorFollowerState::default(),
            magnets: FnvHashMap::default(),
            config,
            seen_pointer: false,
        }
    }

    #[inline]
    pub fn state(&self) -> &CursorFollowerState {
        &self.state
    }

    /// Record the pointer and move the inner dot immediately. The first
    /// sample also places the ring, so it does not sweep in from the corner.
    pub fn on_pointer_move(&mut self, pos: Vec2) {
        self.state.pointer = pos;
        self.state.inner = pos;
        if !self.seen_pointer {
            self.state.outer = pos;
            self.seen_pointer = true;
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.state.inner = self.state.pointer;
        let alpha = smoothing_factor(self.config.outer_decay_base, dt);
        self.state.outer += (self.state.pointer - self.state.outer) * alpha;
    }

    pub fn set_magnetic(&mut self, element: ElementId, strength: f32) {
        self.magnets.insert(element, strength);
    }

    pub fn clear_magnetic(&mut self, element: ElementId) {
        self.magnets.remove(&element);
    }

    pub fn is_magnetic(&self, element: ElementId) -> bool {
        self.magnets.contains_key(&element)
    }

    /// Offset a magnetic element should lean by for the current pointer:
    /// pointer distance from the element's resting center scaled by its
    /// strength. `bounds` is the element's viewport rect as painted, which
    /// already includes the current `lean`.
    pub fn magnetic_offset(&self, element: ElementId, bounds: &Rect, lean: Vec2) -> Option<Vec2> {
        let strength = self.magnets.get(&element)?;
        let center = bounds.center() - lean;
        Some((self.state.pointer - center) * *strength)
    }
}
