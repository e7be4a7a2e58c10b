use crate::constants::*;
use crate::dom::{self, Dom};
use crate::overlay;
use fnv::FnvHashMap;
use motion_core::{CursorMode, ElementId, FrameReport, Property};
use web_sys as web;

/// Composed style of one element; the engine reports single properties but
/// `transform` has to be written whole.
#[derive(Clone, Copy, Debug)]
struct Styled {
    x: f32,
    y: f32,
    y_percent: f32,
    scale: f32,
    pin_y: f32,
    opacity: Option<f32>,
    width_percent: Option<f32>,
}

impl Default for Styled {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            y_percent: 0.0,
            scale: 1.0,
            pin_y: 0.0,
            opacity: None,
            width_percent: None,
        }
    }
}

impl Styled {
    fn transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) translateY({:.3}%) scale({:.4})",
            self.x,
            self.y + self.pin_y,
            self.y_percent,
            self.scale
        )
    }
}

pub struct Painter {
    styled: FnvHashMap<ElementId, Styled>,
    pin_spacing: FnvHashMap<ElementId, f32>,
    cursor_inner: Option<web::HtmlElement>,
    cursor_outer: Option<web::HtmlElement>,
    header: Option<web::HtmlElement>,
    burger: Option<web::HtmlElement>,
    menu: Option<web::HtmlElement>,
    last_offset: f32,
    last_mode: CursorMode,
    last_menu_open: bool,
    last_scrolled: bool,
}

impl Painter {
    pub fn new(document: &web::Document) -> Self {
        Self {
            styled: FnvHashMap::default(),
            pin_spacing: FnvHashMap::default(),
            cursor_inner: dom::query(document, SEL_CURSOR_INNER),
            cursor_outer: dom::query(document, SEL_CURSOR_OUTER),
            header: dom::query(document, SEL_HEADER),
            burger: dom::query(document, SEL_BURGER),
            menu: dom::query(document, SEL_MOBILE_MENU),
            last_offset: f32::NAN,
            last_mode: CursorMode::Default,
            last_menu_open: false,
            last_scrolled: false,
        }
    }

    /// Write one frame to the DOM. Returns true when a pin's spacing changed
    /// and the page needs re-measuring.
    pub fn apply(&mut self, dom: &Dom, report: &FrameReport) -> bool {
        let mut touched: Vec<ElementId> = Vec::with_capacity(report.properties.len());
        for &(id, property, value) in &report.properties {
            let s = self.styled.entry(id).or_default();
            match property {
                Property::X => s.x = value,
                Property::Y => s.y = value,
                Property::YPercent => s.y_percent = value,
                Property::Scale => s.scale = value,
                Property::Opacity => s.opacity = Some(value),
                Property::WidthPercent => s.width_percent = Some(value),
            }
            touched.push(id);
        }

        let mut relayout = false;
        let mut pinned: Vec<ElementId> = Vec::with_capacity(report.pins.len());
        for pin in &report.pins {
            let s = self.styled.entry(pin.element).or_default();
            if s.pin_y != pin.translate_y {
                s.pin_y = pin.translate_y;
                touched.push(pin.element);
            }
            pinned.push(pin.element);
            if self.pin_spacing.get(&pin.element) != Some(&pin.spacing) {
                self.pin_spacing.insert(pin.element, pin.spacing);
                if let Some(el) = dom.get(pin.element) {
                    _ = el
                        .style()
                        .set_property("margin-bottom", &format!("{:.0}px", pin.spacing));
                }
                relayout = true;
            }
        }
        // Pins that went away (breakpoint) release their translation and spacing.
        let released: Vec<ElementId> = self
            .pin_spacing
            .keys()
            .copied()
            .filter(|id| !pinned.contains(id))
            .collect();
        for id in released {
            self.pin_spacing.remove(&id);
            if let Some(s) = self.styled.get_mut(&id) {
                s.pin_y = 0.0;
            }
            if let Some(el) = dom.get(id) {
                _ = el.style().remove_property("margin-bottom");
            }
            touched.push(id);
            relayout = true;
        }

        touched.sort();
        touched.dedup();
        for id in touched {
            let (Some(el), Some(s)) = (dom.get(id), self.styled.get(&id)) else {
                continue;
            };
            let style = el.style();
            _ = style.set_property("transform", &s.transform());
            if let Some(o) = s.opacity {
                _ = style.set_property("opacity", &format!("{:.3}", o));
            }
            if let Some(w) = s.width_percent {
                _ = style.set_property("width", &format!("{:.2}%", w));
            }
        }

        self.paint_scroll(dom, report.scroll.smoothed_offset);
        self.paint_cursor(dom, report);
        self.paint_chrome(report);
        relayout
    }

    fn paint_scroll(&mut self, dom: &Dom, offset: f32) {
        if offset == self.last_offset {
            return;
        }
        self.last_offset = offset;
        if let Some(content) = &dom.scroll_content {
            _ = content
                .style()
                .set_property("transform", &format!("translate3d(0, {:.2}px, 0)", -offset));
        }
    }

    fn paint_cursor(&mut self, dom: &Dom, report: &FrameReport) {
        let place = |el: &Option<web::HtmlElement>, p: glam::Vec2| {
            if let Some(el) = el {
                _ = el
                    .style()
                    .set_property("transform", &format!("translate3d({:.1}px, {:.1}px, 0)", p.x, p.y));
            }
        };
        place(&self.cursor_inner, report.cursor.inner);
        place(&self.cursor_outer, report.cursor.outer);

        if report.cursor_mode != self.last_mode {
            self.last_mode = report.cursor_mode;
            let (hover, magnetic) = match report.cursor_mode {
                CursorMode::Default => (false, false),
                CursorMode::HoverActive => (true, false),
                CursorMode::Magnetic => (true, true),
            };
            overlay::set_body_class(&dom.document, CLASS_HOVER_ACTIVE, hover);
            overlay::set_body_class(&dom.document, CLASS_HOVER_MAGNETIC, magnetic);
        }
    }

    fn paint_chrome(&mut self, report: &FrameReport) {
        if report.header_scrolled != self.last_scrolled {
            self.last_scrolled = report.header_scrolled;
            if let Some(header) = &self.header {
                overlay::set_class(header, CLASS_SCROLLED, report.header_scrolled);
            }
        }
        if report.menu_open != self.last_menu_open {
            self.last_menu_open = report.menu_open;
            for el in [&self.burger, &self.menu].into_iter().flatten() {
                overlay::set_class(el, CLASS_ACTIVE, report.menu_open);
            }
        }
    }
}
