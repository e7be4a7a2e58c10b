use super::Wiring;
use crate::dom::{self, CursorTarget};
use glam::Vec2;
use motion_core::InputEvent;
use web_sys as web;

pub fn wire_pointermove(w: &Wiring) {
    let Some(window) = web::window() else {
        return;
    };
    let engine = w.engine.clone();
    dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        engine.borrow_mut().push(InputEvent::PointerMove(pos));
    });
}

/// Hover state for `[data-cursor]` elements; `-magnetic` ones also lean toward the pointer.
pub fn wire_cursor_targets(w: &Wiring, targets: Vec<CursorTarget>) {
    log::info!("[cursor] {} hover targets", targets.len());
    for CursorTarget {
        id,
        element,
        magnetic,
    } in targets
    {
        let engine = w.engine.clone();
        let el = element.clone();
        dom::listen(&element, "mouseenter", move |_: web::MouseEvent| {
            let mut engine = engine.borrow_mut();
            engine.push(InputEvent::HoverEnter {
                element: id,
                magnetic,
            });
            if magnetic {
                engine.push(InputEvent::MagnetMove {
                    element: id,
                    bounds: dom::viewport_rect(&el),
                });
            }
        });
        if magnetic {
            let engine = w.engine.clone();
            let el = element.clone();
            dom::listen(&element, "mousemove", move |_: web::MouseEvent| {
                engine.borrow_mut().push(InputEvent::MagnetMove {
                    element: id,
                    bounds: dom::viewport_rect(&el),
                });
            });
        }
        let engine = w.engine.clone();
        dom::listen(&element, "mouseleave", move |_: web::MouseEvent| {
            engine
                .borrow_mut()
                .push(InputEvent::HoverLeave { element: id });
        });
    }
}
