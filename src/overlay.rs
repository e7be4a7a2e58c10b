use crate::constants::*;
use crate::dom;
use web_sys as web;

#[inline]
pub fn hide_loader(document: &web::Document) {
    if let Some(el) = dom::query(document, SEL_LOADER) {
        _ = el.class_list().add_1("hidden");
        // fallback for environments without the CSS class
        _ = el.style().set_property("display", "none");
    }
}

#[inline]
pub fn is_loader_hidden(document: &web::Document) -> bool {
    if let Some(el) = dom::query(document, SEL_LOADER) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .style()
            .get_property_value("display")
            .map(|s| s == "none")
            .unwrap_or(false);
    }
    true
}

/// Keep native scrolling off while the virtual scroll is in charge.
pub fn freeze_native_scroll(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("overflow", "hidden");
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

pub fn set_body_class(document: &web::Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        set_class(&body, class, on);
    }
}
