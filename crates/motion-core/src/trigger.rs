//! Scroll-position triggers: one-shot reveals, scrubbed bindings and pins.
//!
//! Geometry is resolved from the registry's `Layout` snapshot whenever a
//! trigger is registered or the layout is invalidated; nothing is patched
//! incrementally. A trigger whose element is missing from the layout stays
//! dormant: it never fires and never drives its binding.

use crate::easing::{lerp, Easing};
use crate::error::MotionError;
use crate::event::Cue;
use crate::layout::{ElementId, Layout};
use crate::tween::{Property, PropertyStore};
use fnv::FnvHashMap;

/// A scroll offset expressed against page geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollPoint {
    /// Offset at which the point `element` (0 = top, 1 = bottom of the
    /// element) meets the point `viewport` (0 = top, 1 = bottom of the viewport).
    Edges { element: f32, viewport: f32 },
    /// A distance past the trigger's start; only meaningful as an end point.
    AfterStart(Extent),
}

impl ScrollPoint {
    pub const TOP_TOP: Self = Self::Edges {
        element: 0.0,
        viewport: 0.0,
    };
    pub const TOP_BOTTOM: Self = Self::Edges {
        element: 0.0,
        viewport: 1.0,
    };
    pub const BOTTOM_TOP: Self = Self::Edges {
        element: 1.0,
        viewport: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Extent {
    Px(f32),
    /// Horizontal overflow of an element's content past the viewport width.
    Overflow(ElementId),
}

impl Extent {
    fn resolve(self, layout: &Layout) -> Option<f32> {
        match self {
            Extent::Px(px) => Some(px),
            Extent::Overflow(id) => layout.horizontal_overflow(id),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BindingEnd {
    Value(f32),
    /// Slide left by the element's horizontal overflow (`-overflow`).
    LeftByOverflow(ElementId),
}

/// Property driven proportionally to a trigger's progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Binding {
    pub target: ElementId,
    pub property: Property,
    pub from: f32,
    pub to: BindingEnd,
    pub easing: Easing,
}

impl Binding {
    pub fn new(target: ElementId, property: Property, from: f32, to: f32) -> Self {
        Self {
            target,
            property,
            from,
            to: BindingEnd::Value(to),
            easing: Easing::Linear,
        }
    }

    /// Horizontal track slide: `X` from 0 to minus the track's overflow.
    pub fn track_slide(track: ElementId) -> Self {
        Self {
            target: track,
            property: Property::X,
            from: 0.0,
            to: BindingEnd::LeftByOverflow(track),
            easing: Easing::Linear,
        }
    }

    fn resolve_end(&self, layout: &Layout) -> Option<f32> {
        match self.to {
            BindingEnd::Value(v) => Some(v),
            BindingEnd::LeftByOverflow(id) => layout.horizontal_overflow(id).map(|o| -o),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerMode {
    OneShot,
    Scrubbed,
    Pinned,
}

#[derive(Clone, Debug)]
pub struct Trigger {
    element: ElementId,
    start: ScrollPoint,
    end: Option<ScrollPoint>,
    mode: TriggerMode,
    binding: Option<Binding>,
    lag_sec: f32,
    min_viewport_width: Option<f32>,
    cue: Option<Cue>,
}

impl Trigger {
    /// Fires its cue the first time `start` is reached, then retires.
    pub fn one_shot(element: ElementId, start: ScrollPoint, cue: Cue) -> Self {
        Self {
            element,
            start,
            end: None,
            mode: TriggerMode::OneShot,
            binding: None,
            lag_sec: 0.0,
            min_viewport_width: None,
            cue: Some(cue),
        }
    }

    pub fn scrubbed(element: ElementId, start: ScrollPoint, end: ScrollPoint, binding: Binding) -> Self {
        Self {
            element,
            start,
            end: Some(end),
            mode: TriggerMode::Scrubbed,
            binding: Some(binding),
            lag_sec: 0.0,
            min_viewport_width: None,
            cue: None,
        }
    }

    pub fn pinned(element: ElementId, start: ScrollPoint, end: ScrollPoint, binding: Option<Binding>) -> Self {
        Self {
            element,
            start,
            end: Some(end),
            mode: TriggerMode::Pinned,
            binding,
            lag_sec: 0.0,
            min_viewport_width: None,
            cue: None,
        }
    }

    /// Seconds the applied progress takes to catch up with the scroll position.
    pub fn lag(mut self, lag_sec: f32) -> Self {
        self.lag_sec = lag_sec.max(0.0);
        self
    }

    /// Only active while the viewport is at least this wide.
    pub fn min_viewport_width(mut self, width: f32) -> Self {
        self.min_viewport_width = Some(width);
        self
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn mode(&self) -> TriggerMode {
        self.mode
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerEventKind {
    Enter,
    Leave,
    Progress(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerEvent {
    pub id: TriggerId,
    pub kind: TriggerEventKind,
}

/// Translation holding a pinned element in place, plus the extra document
/// length the pin consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinState {
    pub element: ElementId,
    pub translate_y: f32,
    pub spacing: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Span {
    start: f32,
    end: f32,
    binding_end: Option<f32>,
}

impl Span {
    fn progress(&self, offset: f32) -> f32 {
        let len = self.end - self.start;
        if len <= f32::EPSILON {
            return if offset >= self.start { 1.0 } else { 0.0 };
        }
        ((offset - self.start) / len).clamp(0.0, 1.0)
    }

    fn contains(&self, offset: f32) -> bool {
        offset >= self.start && offset <= self.end
    }
}

#[derive(Debug)]
struct Entry {
    id: TriggerId,
    trigger: Trigger,
    span: Option<Span>,
    active: bool,
    progress: f32,
    applied: f32,
    /// Snap applied progress on the next evaluation (new or re-measured).
    fresh: bool,
    retired: bool,
}

#[derive(Debug, Default)]
pub struct TriggerRegistry {
    entries: Vec<Entry>,
    pins: FnvHashMap<ElementId, TriggerId>,
    layout: Layout,
    next_id: u64,
}

impl TriggerRegistry {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn register(&mut self, trigger: Trigger) -> TriggerId {
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        if trigger.mode == TriggerMode::Pinned {
            if let Some(prior) = self.pins.insert(trigger.element, id) {
                log::info!(
                    "[trigger] pin on {:?} superseded: {:?} -> {:?}",
                    trigger.element,
                    prior,
                    id
                );
                self.entries.retain(|e| e.id != prior);
            }
        }
        let span = resolve_span(&trigger, &self.layout);
        if span.is_none() {
            log::warn!("[trigger] {:?} has no geometry for {:?}; dormant", id, trigger.element);
        }
        self.entries.push(Entry {
            id,
            trigger,
            span,
            active: false,
            progress: 0.0,
            applied: 0.0,
            fresh: true,
            retired: false,
        });
        id
    }

    pub fn unregister(&mut self, id: TriggerId) -> Result<(), MotionError> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(MotionError::UnknownTrigger(id))?;
        let entry = self.entries.remove(pos);
        if self.pins.get(&entry.trigger.element) == Some(&id) {
            self.pins.remove(&entry.trigger.element);
        }
        Ok(())
    }

    pub fn contains(&self, id: TriggerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Trigger currently holding the pin on `element`.
    pub fn pin_owner(&self, element: ElementId) -> Option<TriggerId> {
        self.pins.get(&element).copied()
    }

    /// Exact linear progress at the last evaluation.
    pub fn progress(&self, id: TriggerId) -> Option<f32> {
        self.entry(id).map(|e| e.progress)
    }

    /// Progress after lag smoothing, as applied to the binding.
    pub fn applied_progress(&self, id: TriggerId) -> Option<f32> {
        self.entry(id).map(|e| e.applied)
    }

    pub fn is_active(&self, id: TriggerId) -> bool {
        self.entry(id).map(|e| e.active).unwrap_or(false)
    }

    /// Replace the layout snapshot and recompute every trigger's geometry.
    pub fn invalidate(&mut self, layout: Layout) {
        self.layout = layout;
        for entry in &mut self.entries {
            entry.span = resolve_span(&entry.trigger, &self.layout);
            entry.fresh = true;
        }
        log::debug!("[trigger] geometry recomputed for {} triggers", self.entries.len());
    }

    /// Re-evaluate all triggers against the current smoothed offset.
    pub fn evaluate(
        &mut self,
        offset: f32,
        dt: f32,
        store: &mut PropertyStore,
        cues: &mut Vec<Cue>,
    ) -> Vec<TriggerEvent> {
        let mut events = Vec::new();
        let viewport_width = self.layout.viewport.x;
        for entry in &mut self.entries {
            let dormant = entry.span.is_none()
                || entry
                    .trigger
                    .min_viewport_width
                    .is_some_and(|min| viewport_width < min);
            if dormant {
                entry.go_dormant(store, &mut events);
                continue;
            }
            let Some(span) = entry.span else { continue };

            let active = span.contains(offset);
            if active && !entry.active {
                events.push(TriggerEvent {
                    id: entry.id,
                    kind: TriggerEventKind::Enter,
                });
                if let Some(cue) = entry.trigger.cue {
                    cues.push(cue);
                }
                if entry.trigger.mode == TriggerMode::OneShot {
                    entry.retired = true;
                }
            } else if !active && entry.active {
                events.push(TriggerEvent {
                    id: entry.id,
                    kind: TriggerEventKind::Leave,
                });
            }
            entry.active = active;

            if entry.trigger.mode == TriggerMode::OneShot {
                continue;
            }
            let progress = span.progress(offset);
            if progress != entry.progress || entry.fresh {
                events.push(TriggerEvent {
                    id: entry.id,
                    kind: TriggerEventKind::Progress(progress),
                });
            }
            entry.progress = progress;
            entry.applied = if entry.fresh || entry.trigger.lag_sec <= 0.0 {
                progress
            } else {
                follow(entry.applied, progress, dt, entry.trigger.lag_sec)
            };
            entry.fresh = false;
            if let (Some(binding), Some(to)) = (entry.trigger.binding, span.binding_end) {
                let value = lerp(binding.from, to, binding.easing.apply(entry.applied));
                store.set(binding.target, binding.property, value);
            }
        }
        self.entries.retain(|e| !e.retired);
        events
    }

    /// Pin translations for every live pinned trigger, in registration order.
    pub fn pins(&self, offset: f32) -> Vec<PinState> {
        let viewport_width = self.layout.viewport.x;
        self.entries
            .iter()
            .filter(|e| e.trigger.mode == TriggerMode::Pinned)
            .filter(|e| {
                e.trigger
                    .min_viewport_width
                    .map_or(true, |min| viewport_width >= min)
            })
            .filter_map(|e| {
                let span = e.span?;
                let spacing = (span.end - span.start).max(0.0);
                Some(PinState {
                    element: e.trigger.element,
                    translate_y: (offset.clamp(span.start, span.start + spacing) - span.start),
                    spacing,
                })
            })
            .collect()
    }

    fn entry(&self, id: TriggerId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

impl Entry {
    fn go_dormant(&mut self, store: &mut PropertyStore, events: &mut Vec<TriggerEvent>) {
        if self.active {
            events.push(TriggerEvent {
                id: self.id,
                kind: TriggerEventKind::Leave,
            });
            self.active = false;
        }
        if self.progress != 0.0 || self.applied != 0.0 {
            if let Some(binding) = self.trigger.binding {
                store.set(binding.target, binding.property, binding.from);
            }
        }
        self.progress = 0.0;
        self.applied = 0.0;
        self.fresh = true;
    }
}

fn resolve_span(trigger: &Trigger, layout: &Layout) -> Option<Span> {
    let rect = layout.rect(trigger.element)?;
    let viewport_h = layout.viewport.y;
    let at_edges = |element: f32, viewport: f32| rect.top + rect.height * element - viewport_h * viewport;
    let start = match trigger.start {
        ScrollPoint::Edges { element, viewport } => at_edges(element, viewport),
        ScrollPoint::AfterStart(_) => return None,
    };
    let end = match trigger.end {
        None => f32::INFINITY,
        Some(ScrollPoint::Edges { element, viewport }) => at_edges(element, viewport),
        Some(ScrollPoint::AfterStart(extent)) => start + extent.resolve(layout)?,
    };
    let binding_end = match trigger.binding {
        Some(binding) => Some(binding.resolve_end(layout)?),
        None => None,
    };
    Some(Span {
        start,
        end,
        binding_end,
    })
}

/// Close 99% of the gap to `target` over `lag_sec`, independent of frame rate.
#[inline]
fn follow(current: f32, target: f32, dt: f32, lag_sec: f32) -> f32 {
    let next = current + (target - current) * (1.0 - 0.01_f32.powf(dt / lag_sec));
    if (target - next).abs() < 1.0e-4 {
        target
    } else {
        next
    }
}
