use super::Wiring;
use crate::constants::WHEEL_LINE_PX;
use crate::dom;
use motion_core::{InputEvent, InputSource};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Wheel delta in pixels whatever unit the browser reports.
#[inline]
fn wheel_pixels(ev: &web::WheelEvent, viewport_height: f64) -> f64 {
    match ev.delta_mode() {
        web::WheelEvent::DOM_DELTA_LINE => ev.delta_y() * WHEEL_LINE_PX,
        web::WheelEvent::DOM_DELTA_PAGE => ev.delta_y() * viewport_height,
        _ => ev.delta_y(),
    }
}

pub fn wire_wheel(w: &Wiring) {
    let Some(window) = web::window() else {
        return;
    };
    let engine = w.engine.clone();
    let win = window.clone();
    dom::listen_active(&window, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        let vh = win
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        engine.borrow_mut().push(InputEvent::Scroll {
            source: InputSource::Wheel,
            delta: wheel_pixels(&ev, vh) as f32,
        });
    });
}

pub fn wire_touch(w: &Wiring) {
    let Some(window) = web::window() else {
        return;
    };
    let last_y: Rc<Cell<Option<f32>>> = Rc::new(Cell::new(None));

    let last = last_y.clone();
    dom::listen_active(&window, "touchstart", move |ev: web::TouchEvent| {
        last.set(ev.touches().get(0).map(|t| t.client_y() as f32));
    });

    let last = last_y.clone();
    let engine = w.engine.clone();
    dom::listen_active(&window, "touchmove", move |ev: web::TouchEvent| {
        let Some(y) = ev.touches().get(0).map(|t| t.client_y() as f32) else {
            return;
        };
        ev.prevent_default();
        if let Some(prev) = last.replace(Some(y)) {
            // finger moving up scrolls the page down
            engine.borrow_mut().push(InputEvent::Scroll {
                source: InputSource::Touch,
                delta: prev - y,
            });
        }
    });

    let last = last_y;
    dom::listen(&window, "touchend", move |_: web::TouchEvent| last.set(None));
}

pub fn wire_resize(w: &Wiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        let layout = w.dom.borrow().measure();
        log::debug!(
            "[scroll] resize to {:.0}x{:.0}, content {:.0}",
            layout.viewport.x,
            layout.viewport.y,
            layout.content_height
        );
        w.engine.borrow_mut().push(InputEvent::Resize(layout));
    });
}
