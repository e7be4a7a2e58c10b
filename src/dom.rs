use crate::constants::*;
use motion_core::{ElementId, HorizontalSection, Layout, ParallaxImage, Rect, Stage};
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn query(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Attach `handler` for `event` on `target` for the page's lifetime.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like `listen`, but non-passive so the handler may call `prevent_default`
/// on wheel and touch events.
pub fn listen_active<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// Hoverable element found in markup.
pub struct CursorTarget {
    pub id: ElementId,
    pub element: web::HtmlElement,
    pub magnetic: bool,
}

/// In-page link and the element its hash names, when there is one.
pub struct AnchorLink {
    pub link: web::HtmlElement,
    pub target: Option<ElementId>,
    pub is_hash: bool,
}

/// Registered page nodes. `ElementId(i)` indexes `elements`.
pub struct Dom {
    pub document: web::Document,
    elements: Vec<web::HtmlElement>,
    pub scroll_content: Option<web::HtmlElement>,
}

impl Dom {
    pub fn new(document: web::Document) -> Self {
        let scroll_content = query(&document, SEL_SCROLL_CONTENT);
        if scroll_content.is_none() {
            log::warn!("[dom] no {} container; virtual scroll is not painted", SEL_SCROLL_CONTENT);
        }
        Self {
            document,
            elements: Vec::new(),
            scroll_content,
        }
    }

    pub fn register(&mut self, element: web::HtmlElement) -> ElementId {
        if let Some(i) = self.elements.iter().position(|e| e == &element) {
            return ElementId(i as u32);
        }
        self.elements.push(element);
        ElementId((self.elements.len() - 1) as u32)
    }

    #[inline]
    pub fn get(&self, id: ElementId) -> Option<&web::HtmlElement> {
        self.elements.get(id.0 as usize)
    }

    fn register_query(&mut self, selector: &str) -> Option<ElementId> {
        let el = query(&self.document, selector);
        if el.is_none() {
            log::warn!("[dom] missing {}", selector);
        }
        el.map(|el| self.register(el))
    }

    /// Register the page's animated parts.
    pub fn collect_stage(&mut self) -> Stage {
        let hero_lines = query_all(&self.document, SEL_HERO_LINES)
            .into_iter()
            .map(|el| self.register(el))
            .collect();
        let hero_fades = SEL_HERO_FADES.map(|sel| self.register_query(sel));
        let parallax = query_all(&self.document, SEL_PARALLAX_IMAGES)
            .into_iter()
            .filter_map(|img| {
                let frame = img.parent_element()?.dyn_into::<web::HtmlElement>().ok()?;
                Some(ParallaxImage {
                    image: self.register(img),
                    frame: self.register(frame),
                })
            })
            .collect();
        let reveals = query_all(&self.document, SEL_REVEALS)
            .into_iter()
            .map(|el| self.register(el))
            .collect();
        let horizontal = match (
            self.register_query(SEL_HORIZONTAL_SECTION),
            self.register_query(SEL_HORIZONTAL_TRACK),
        ) {
            (Some(section), Some(track)) => Some(HorizontalSection { section, track }),
            _ => None,
        };
        Stage {
            loader_progress: self.register_query(SEL_LOADER_PROGRESS),
            loader_text: self.register_query(SEL_LOADER_TEXT),
            loader_curtain: self.register_query(SEL_LOADER_CURTAIN),
            hero_lines,
            hero_fades,
            parallax,
            reveals,
            horizontal,
        }
    }

    pub fn collect_cursor_targets(&mut self) -> Vec<CursorTarget> {
        query_all(&self.document, SEL_CURSOR_TARGETS)
            .into_iter()
            .map(|element| {
                let magnetic = element.get_attribute(CURSOR_ATTR).as_deref() == Some(CURSOR_MAGNETIC_VALUE);
                CursorTarget {
                    id: self.register(element.clone()),
                    element,
                    magnetic,
                }
            })
            .collect()
    }

    /// Menu links and hash links, each listed once.
    pub fn collect_anchor_links(&mut self) -> Vec<AnchorLink> {
        let selector = format!("{}, {}", SEL_MENU_LINKS, SEL_ANCHORS);
        query_all(&self.document, &selector)
            .into_iter()
            .map(|link| {
                let hash = link
                    .get_attribute("href")
                    .filter(|href| href.starts_with('#'));
                let target = hash
                    .as_deref()
                    .map(|h| h.trim_start_matches('#'))
                    .filter(|id| !id.is_empty())
                    .and_then(|id| self.document.get_element_by_id(id))
                    .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
                    .map(|el| self.register(el));
                AnchorLink {
                    link,
                    target,
                    is_hash: hash.is_some(),
                }
            })
            .collect()
    }

    /// Measure every registered element in document coordinates. Offsets are
    /// read through the offset-parent chain, so engine transforms never leak
    /// into the geometry.
    pub fn measure(&self) -> Layout {
        let (vw, vh) = web::window()
            .map(|w| {
                let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                    v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
                };
                (px(w.inner_width()), px(w.inner_height()))
            })
            .unwrap_or((0.0, 0.0));
        let content_height = match &self.scroll_content {
            Some(content) => content.offset_height() as f32,
            None => self
                .document
                .document_element()
                .map(|el| el.scroll_height() as f32)
                .unwrap_or(vh),
        };
        let mut layout = Layout::new(glam::Vec2::new(vw, vh), content_height);
        for (i, el) in self.elements.iter().enumerate() {
            layout.insert(ElementId(i as u32), document_rect(el));
        }
        layout
    }
}

fn document_rect(el: &web::HtmlElement) -> Rect {
    let (mut top, mut left) = (0.0_f32, 0.0_f32);
    let mut node = Some(el.clone());
    while let Some(n) = node {
        top += n.offset_top() as f32;
        left += n.offset_left() as f32;
        node = n
            .offset_parent()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok());
    }
    Rect::new(top, left, el.offset_width() as f32, el.offset_height() as f32)
        .with_scroll_width(el.scroll_width() as f32)
}

/// On-screen rect in viewport coordinates, transforms included.
pub fn viewport_rect(el: &web::HtmlElement) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.top() as f32, r.left() as f32, r.width() as f32, r.height() as f32)
}
