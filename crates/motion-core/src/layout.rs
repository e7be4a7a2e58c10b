//! Page geometry as the engine sees it.
//!
//! The host measures elements once at start-up and again on every resize;
//! the engine never caches derived geometry beyond one `Layout` snapshot.

use fnv::FnvHashMap;
use glam::Vec2;

/// Opaque handle for a page element. The host owns the mapping to real nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Element bounds in document coordinates (unscrolled).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    /// Full scrollable width of the element's content; equals `width` when
    /// nothing overflows.
    pub scroll_width: f32,
}

impl Rect {
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
            scroll_width: width,
        }
    }

    pub fn with_scroll_width(mut self, scroll_width: f32) -> Self {
        self.scroll_width = scroll_width;
        self
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Center in document coordinates.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Layout {
    pub viewport: Vec2,
    pub content_height: f32,
    rects: FnvHashMap<ElementId, Rect>,
}

impl Layout {
    pub fn new(viewport: Vec2, content_height: f32) -> Self {
        Self {
            viewport,
            content_height,
            rects: FnvHashMap::default(),
        }
    }

    pub fn insert(&mut self, id: ElementId, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn with(mut self, id: ElementId, rect: Rect) -> Self {
        self.insert(id, rect);
        self
    }

    #[inline]
    pub fn rect(&self, id: ElementId) -> Option<&Rect> {
        self.rects.get(&id)
    }

    /// Largest scroll offset the document allows.
    #[inline]
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport.y).max(0.0)
    }

    /// How far an element's content overflows the viewport horizontally.
    pub fn horizontal_overflow(&self, id: ElementId) -> Option<f32> {
        self.rect(id)
            .map(|r| (r.scroll_width - self.viewport.x).max(0.0))
    }
}
