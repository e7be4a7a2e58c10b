//! DOM listeners. Every handler only enqueues an `InputEvent`; the frame loop
//! is the single place that advances the engine.

mod keyboard;
mod menu;
mod pointer;
mod scroll;

use crate::dom::{AnchorLink, CursorTarget, Dom};
use motion_core::MotionEngine;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct Wiring {
    pub engine: Rc<RefCell<MotionEngine>>,
    pub dom: Rc<RefCell<Dom>>,
}

pub fn wire_all(w: &Wiring, cursor_targets: Vec<CursorTarget>, anchors: Vec<AnchorLink>) {
    pointer::wire_pointermove(w);
    pointer::wire_cursor_targets(w, cursor_targets);
    scroll::wire_wheel(w);
    scroll::wire_touch(w);
    scroll::wire_resize(w);
    keyboard::wire_keydown(w);
    menu::wire_burger(w);
    menu::wire_anchor_links(w, anchors);
    menu::wire_form_submit(w);
}
