use super::Wiring;
use crate::dom;
use motion_core::{key_scroll_delta, InputEvent, InputSource};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys typed into form fields belong to the field.
fn is_editing(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .is_some_and(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
}

pub fn handle_keydown(ev: &web::KeyboardEvent, w: &Wiring) {
    if is_editing(ev) || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    if key == "Escape" {
        w.engine.borrow_mut().push(InputEvent::MenuClose);
        return;
    }
    let viewport_height = w
        .engine
        .borrow()
        .triggers()
        .layout()
        .viewport
        .y;
    if let Some(delta) = key_scroll_delta(&key, ev.shift_key(), viewport_height) {
        ev.prevent_default();
        w.engine.borrow_mut().push(InputEvent::Scroll {
            source: InputSource::Keyboard,
            delta,
        });
    }
}

pub fn wire_keydown(w: &Wiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    dom::listen(&window, "keydown", move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &w);
    });
}
