//! Time-bounded property interpolation with last-writer-wins conflict handling.

use crate::easing::{lerp, Easing};
use crate::event::Cue;
use crate::layout::ElementId;
use fnv::{FnvHashMap, FnvHashSet};
use smallvec::SmallVec;

/// Animatable element properties. Units are whatever the host writes
/// (pixels for `X`/`Y`, percent for `YPercent`/`WidthPercent`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    X,
    Y,
    YPercent,
    Opacity,
    Scale,
    WidthPercent,
}

impl Property {
    /// Value an untouched element has for this property.
    pub fn rest_value(self) -> f32 {
        match self {
            Property::Opacity | Property::Scale => 1.0,
            _ => 0.0,
        }
    }
}

/// Current value of every animated (element, property) pair, plus the set
/// of pairs written since the host last drained it.
#[derive(Debug, Default)]
pub struct PropertyStore {
    values: FnvHashMap<(ElementId, Property), f32>,
    dirty: FnvHashSet<(ElementId, Property)>,
}

impl PropertyStore {
    pub fn get(&self, element: ElementId, property: Property) -> f32 {
        self.values
            .get(&(element, property))
            .copied()
            .unwrap_or_else(|| property.rest_value())
    }

    pub fn set(&mut self, element: ElementId, property: Property, value: f32) {
        let key = (element, property);
        if self.values.get(&key) != Some(&value) {
            self.values.insert(key, value);
            self.dirty.insert(key);
        }
    }

    /// Changed values since the last call, sorted for deterministic output.
    pub fn drain_dirty(&mut self) -> Vec<(ElementId, Property, f32)> {
        let mut out: Vec<_> = self
            .dirty
            .drain()
            .map(|(e, p)| (e, p, self.values.get(&(e, p)).copied().unwrap_or(p.rest_value())))
            .collect();
        out.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Track {
    property: Property,
    /// `None` until the tween goes live, then captured from the store.
    from: Option<f32>,
    to: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(u64);

#[derive(Clone, Debug)]
pub struct Tween {
    target: ElementId,
    tracks: SmallVec<[Track; 2]>,
    duration: f32,
    delay: f32,
    easing: Easing,
    elapsed: f32,
    on_complete: Option<Cue>,
}

impl Tween {
    /// Tween `target` toward the given values, starting from whatever each
    /// property holds when the tween goes live.
    pub fn to(target: ElementId, duration_sec: f32) -> Self {
        Self {
            target,
            tracks: SmallVec::new(),
            duration: duration_sec.max(0.0),
            delay: 0.0,
            easing: Easing::Linear,
            elapsed: 0.0,
            on_complete: None,
        }
    }

    pub fn prop(mut self, property: Property, to: f32) -> Self {
        self.push_track(Track {
            property,
            from: None,
            to,
        });
        self
    }

    pub fn prop_from(mut self, property: Property, from: f32, to: f32) -> Self {
        self.push_track(Track {
            property,
            from: Some(from),
            to,
        });
        self
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay(mut self, delay_sec: f32) -> Self {
        self.delay = delay_sec.max(0.0);
        self
    }

    pub fn on_complete(mut self, cue: Cue) -> Self {
        self.on_complete = Some(cue);
        self
    }

    pub fn target(&self) -> ElementId {
        self.target
    }

    pub fn total_duration(&self) -> f32 {
        self.delay + self.duration
    }

    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.tracks.iter().map(|t| t.property)
    }

    fn push_track(&mut self, track: Track) {
        self.tracks.retain(|t| t.property != track.property);
        self.tracks.push(track);
    }

    /// Advance by `dt` and write the sampled values. Returns true once finished.
    fn advance(&mut self, dt: f32, store: &mut PropertyStore) -> bool {
        self.elapsed += dt;
        let active = self.elapsed - self.delay;
        if active < 0.0 {
            return false;
        }
        for track in &mut self.tracks {
            if track.from.is_none() {
                track.from = Some(store.get(self.target, track.property));
            }
        }
        let t = if self.duration <= f32::EPSILON {
            1.0
        } else {
            (active / self.duration).min(1.0)
        };
        let eased = self.easing.apply(t);
        for track in &self.tracks {
            let from = track.from.unwrap_or(track.to);
            let value = if t >= 1.0 { track.to } else { lerp(from, track.to, eased) };
            store.set(self.target, track.property, value);
        }
        t >= 1.0
    }
}

/// Sequential builder: each step starts when the previous one ends, with an
/// optional offset. Produces plain delayed tweens.
#[derive(Debug, Default)]
pub struct Timeline {
    steps: Vec<Tween>,
    cursor: f32,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `tween` after everything queued so far, shifted by its own delay.
    pub fn then(mut self, tween: Tween) -> Self {
        let start = self.cursor + tween.delay;
        let tween = tween.delay(start);
        self.cursor = tween.total_duration();
        self.steps.push(tween);
        self
    }

    pub fn duration(&self) -> f32 {
        self.cursor
    }

    /// Finish the timeline; `cue` fires when its last step completes.
    pub fn on_complete(mut self, cue: Cue) -> Vec<Tween> {
        let last = self
            .steps
            .iter_mut()
            .max_by(|a, b| a.total_duration().total_cmp(&b.total_duration()));
        if let Some(last) = last {
            last.on_complete = Some(cue);
        }
        self.steps
    }

    pub fn into_tweens(self) -> Vec<Tween> {
        self.steps
    }
}

/// Active tweens. At most one live track per (element, property).
#[derive(Debug, Default)]
pub struct TweenSet {
    active: Vec<(TweenId, Tween)>,
    next_id: u64,
}

impl TweenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `tween`, removing the overlapping tracks of earlier tweens on the
    /// same target. Earlier tweens left with no tracks are dropped silently.
    pub fn start(&mut self, tween: Tween) -> TweenId {
        let target = tween.target;
        let props: SmallVec<[Property; 4]> = tween.properties().collect();
        self.active.retain_mut(|(id, prior)| {
            if prior.target != target {
                return true;
            }
            let before = prior.tracks.len();
            prior.tracks.retain(|t| !props.contains(&t.property));
            if prior.tracks.is_empty() && before > 0 {
                log::trace!("[tween] {:?} overwritten on {:?}", id, target);
                return false;
            }
            true
        });
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.active.push((id, tween));
        id
    }

    pub fn start_all(&mut self, tweens: impl IntoIterator<Item = Tween>) {
        for tween in tweens {
            self.start(tween);
        }
    }

    pub fn cancel(&mut self, id: TweenId) -> bool {
        let before = self.active.len();
        self.active.retain(|(tid, _)| *tid != id);
        self.active.len() != before
    }

    pub fn is_active(&self, id: TweenId) -> bool {
        self.active.iter().any(|(tid, _)| *tid == id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Advance every tween; finished ones are removed and their cues appended to `cues`.
    pub fn advance(&mut self, dt: f32, store: &mut PropertyStore, cues: &mut Vec<Cue>) {
        self.active.retain_mut(|(_, tween)| {
            if !tween.advance(dt, store) {
                return true;
            }
            if let Some(cue) = tween.on_complete {
                cues.push(cue);
            }
            false
        });
    }
}
