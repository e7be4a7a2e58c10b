//! The page's animated parts and the animations built from them.
//!
//! Every role is optional: markup drifts between page revisions, and a
//! missing part simply drops its step instead of failing the sequence.

use crate::constants::*;
use crate::easing::Easing;
use crate::event::Cue;
use crate::layout::ElementId;
use crate::trigger::{Binding, Extent, ScrollPoint, Trigger};
use crate::tween::{Property, Timeline, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HorizontalSection {
    pub section: ElementId,
    pub track: ElementId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallaxImage {
    pub image: ElementId,
    pub frame: ElementId,
}

#[derive(Clone, Debug, Default)]
pub struct Stage {
    pub loader_progress: Option<ElementId>,
    pub loader_text: Option<ElementId>,
    pub loader_curtain: Option<ElementId>,
    pub hero_lines: Vec<ElementId>,
    /// Label, description and call to action, faded in one after another.
    pub hero_fades: [Option<ElementId>; 3],
    pub parallax: Vec<ParallaxImage>,
    pub reveals: Vec<ElementId>,
    pub horizontal: Option<HorizontalSection>,
}

impl Stage {
    /// Progress bar fill, then the caption lifts away, then the curtain rises.
    pub fn loader_timeline(&self) -> Timeline {
        let mut tl = Timeline::new();
        if let Some(bar) = self.loader_progress {
            tl = tl.then(
                Tween::to(bar, LOADER_PROGRESS_SEC)
                    .prop_from(Property::WidthPercent, 0.0, 100.0)
                    .ease(Easing::Power2InOut),
            );
        }
        if let Some(text) = self.loader_text {
            tl = tl.then(
                Tween::to(text, LOADER_TEXT_SEC)
                    .prop(Property::Y, LOADER_TEXT_LIFT_PX)
                    .prop(Property::Opacity, 0.0)
                    .ease(Easing::Power2In),
            );
        }
        if let Some(curtain) = self.loader_curtain {
            tl = tl.then(
                Tween::to(curtain, LOADER_CURTAIN_SEC)
                    .prop(Property::YPercent, -100.0)
                    .ease(Easing::Power4InOut),
            );
        }
        tl
    }

    /// Hero entrance played once the page is shown.
    pub fn main_animations(&self) -> Vec<Tween> {
        let lines = self.hero_lines.iter().enumerate().map(|(i, &line)| {
            Tween::to(line, HERO_LINE_SEC)
                .prop_from(Property::YPercent, 100.0, 0.0)
                .ease(Easing::Power4Out)
                .delay(i as f32 * HERO_LINE_STAGGER_SEC)
        });
        let fades = self
            .hero_fades
            .iter()
            .zip(HERO_FADE_DELAYS_SEC)
            .filter_map(|(el, delay)| {
                el.map(|el| {
                    Tween::to(el, HERO_FADE_SEC)
                        .prop_from(Property::Opacity, 0.0, 1.0)
                        .delay(delay)
                })
            });
        lines.chain(fades).collect()
    }

    /// Reveals start hidden and lowered; their tween animates from there.
    pub fn initial_values(&self) -> Vec<(ElementId, Property, f32)> {
        self.reveals
            .iter()
            .flat_map(|&el| [(el, Property::Opacity, 0.0), (el, Property::Y, REVEAL_LIFT_PX)])
            .collect()
    }

    pub fn reveal_tween(element: ElementId) -> Tween {
        Tween::to(element, REVEAL_SEC)
            .prop(Property::Opacity, 1.0)
            .prop(Property::Y, 0.0)
            .ease(Easing::Power2Out)
    }

    /// Scroll-linked triggers: parallax scrubs, one-shot reveals and the
    /// pinned horizontal section (desktop widths only).
    pub fn scroll_triggers(&self) -> Vec<Trigger> {
        let mut triggers: Vec<Trigger> = self
            .parallax
            .iter()
            .map(|p| {
                Trigger::scrubbed(
                    p.frame,
                    ScrollPoint::TOP_BOTTOM,
                    ScrollPoint::BOTTOM_TOP,
                    Binding::new(p.image, Property::Scale, PARALLAX_START_SCALE, 1.0),
                )
                .lag(PARALLAX_SCRUB_LAG_SEC)
            })
            .collect();
        triggers.extend(self.reveals.iter().map(|&el| {
            Trigger::one_shot(
                el,
                ScrollPoint::Edges {
                    element: 0.0,
                    viewport: REVEAL_VIEWPORT_LINE,
                },
                Cue::Reveal(el),
            )
        }));
        if let Some(h) = self.horizontal {
            triggers.push(
                Trigger::pinned(
                    h.section,
                    ScrollPoint::TOP_TOP,
                    ScrollPoint::AfterStart(Extent::Overflow(h.track)),
                    Some(Binding::track_slide(h.track)),
                )
                .lag(HORIZONTAL_SCRUB_LAG_SEC)
                .min_viewport_width(HORIZONTAL_MIN_VIEWPORT_PX),
            );
        }
        triggers
    }
}
