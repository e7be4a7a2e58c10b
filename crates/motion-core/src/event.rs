//! Typed messages flowing into and through the engine.
//!
//! Input handlers never touch engine state directly: they enqueue an
//! `InputEvent`, and the scheduler drains the queue once at the start of
//! each frame. Tween completions and trigger enters raise `Cue`s, which the
//! scheduler routes in the same frame.

use crate::form::SubmitError;
use crate::layout::{ElementId, Layout, Rect};
use glam::Vec2;

/// Where a scroll delta came from; each source has its own multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Wheel,
    Touch,
    Keyboard,
}

#[derive(Clone, Debug)]
pub enum InputEvent {
    PointerMove(Vec2),
    Scroll {
        source: InputSource,
        delta: f32,
    },
    /// Viewport changed size; carries a fresh measurement of the page.
    Resize(Layout),
    HoverEnter {
        element: ElementId,
        magnetic: bool,
    },
    HoverLeave {
        element: ElementId,
    },
    /// Pointer over a magnetic element; `bounds` is its on-screen rect in
    /// viewport coordinates, read when the move happened.
    MagnetMove {
        element: ElementId,
        bounds: Rect,
    },
    MenuToggle,
    /// Close the menu if open; never reopens it.
    MenuClose,
    /// In-page link; `target` is `None` when the anchor names nothing on the page.
    AnchorClick {
        target: Option<ElementId>,
    },
    FormSubmit,
    FormResolved(Result<u16, SubmitError>),
}

/// Side effects requested by finished tweens or entered triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    LoaderFinished,
    Reveal(ElementId),
}

/// Scroll delta for a navigation key, or `None` for keys that do not scroll.
/// `Home` and `End` overshoot on purpose; the virtualizer clamps them.
pub fn key_scroll_delta(key: &str, shift: bool, viewport_height: f32) -> Option<f32> {
    use crate::constants::{KEY_LINE_STEP_PX, KEY_PAGE_FRACTION};
    let page = viewport_height * KEY_PAGE_FRACTION;
    match key {
        "ArrowDown" => Some(KEY_LINE_STEP_PX),
        "ArrowUp" => Some(-KEY_LINE_STEP_PX),
        "PageDown" => Some(page),
        "PageUp" => Some(-page),
        " " | "Spacebar" if shift => Some(-page),
        " " | "Spacebar" => Some(page),
        "End" => Some(f32::MAX / 4.0),
        "Home" => Some(-f32::MAX / 4.0),
        _ => None,
    }
}
