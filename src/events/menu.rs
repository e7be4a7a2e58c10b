use super::Wiring;
use crate::constants::*;
use crate::dom::{self, AnchorLink};
use motion_core::InputEvent;
use web_sys as web;

pub fn wire_burger(w: &Wiring) {
    let Some(burger) = dom::query(&w.dom.borrow().document, SEL_BURGER) else {
        log::debug!("[menu] no {} on the page", SEL_BURGER);
        return;
    };
    let engine = w.engine.clone();
    dom::listen(&burger, "click", move |_: web::MouseEvent| {
        engine.borrow_mut().push(InputEvent::MenuToggle);
    });
}

/// Hash links scroll virtually instead of jumping; any menu link closes the menu.
pub fn wire_anchor_links(w: &Wiring, anchors: Vec<AnchorLink>) {
    for AnchorLink {
        link,
        target,
        is_hash,
    } in anchors
    {
        let engine = w.engine.clone();
        dom::listen(&link, "click", move |ev: web::MouseEvent| {
            if is_hash {
                ev.prevent_default();
                engine.borrow_mut().push(InputEvent::AnchorClick { target });
            } else {
                engine.borrow_mut().push(InputEvent::MenuClose);
            }
        });
    }
}

pub fn wire_form_submit(w: &Wiring) {
    let Some(form) = dom::query(&w.dom.borrow().document, SEL_FORM) else {
        return;
    };
    let engine = w.engine.clone();
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        engine.borrow_mut().push(InputEvent::FormSubmit);
    });
}
