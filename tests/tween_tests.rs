// Host-side tests for tweens, timelines and last-writer-wins.

use motion_core::{Cue, Easing, ElementId, Property, PropertyStore, Timeline, Tween, TweenSet};

const FRAME: f32 = 1.0 / 60.0;
const EL: ElementId = ElementId(7);

fn run(set: &mut TweenSet, store: &mut PropertyStore, seconds: f32) -> Vec<Cue> {
    let mut cues = Vec::new();
    let frames = (seconds / FRAME).round() as usize;
    for _ in 0..frames {
        set.advance(FRAME, store, &mut cues);
    }
    cues
}

#[test]
fn later_tween_on_same_property_wins() {
    let mut set = TweenSet::new();
    let mut store = PropertyStore::default();

    let first = set.start(
        Tween::to(EL, 1.0)
            .prop_from(Property::X, 0.0, 100.0)
            .on_complete(Cue::Reveal(EL)),
    );
    let cues = run(&mut set, &mut store, 0.5);
    assert!(cues.is_empty());
    let halfway = store.get(EL, Property::X);
    assert!(halfway > 40.0 && halfway < 60.0, "x at 0.5s = {}", halfway);

    let second = set.start(Tween::to(EL, 0.5).prop(Property::X, 0.0));
    assert!(!set.is_active(first), "overwritten tween should be dropped");
    assert!(set.is_active(second));

    let cues = run(&mut set, &mut store, 1.0);
    assert_eq!(store.get(EL, Property::X), 0.0);
    assert!(cues.is_empty(), "dropped tween must not fire its cue");
    assert!(set.is_empty());
}

#[test]
fn partial_overlap_keeps_the_other_properties_running() {
    let mut set = TweenSet::new();
    let mut store = PropertyStore::default();
    let first = set.start(
        Tween::to(EL, 1.0)
            .prop_from(Property::X, 0.0, 100.0)
            .prop_from(Property::Opacity, 0.0, 1.0)
            .on_complete(Cue::LoaderFinished),
    );
    run(&mut set, &mut store, 0.25);
    set.start(Tween::to(EL, 0.25).prop(Property::X, -20.0));
    assert!(set.is_active(first));

    let cues = run(&mut set, &mut store, 1.0);
    assert_eq!(store.get(EL, Property::X), -20.0);
    assert_eq!(store.get(EL, Property::Opacity), 1.0);
    assert_eq!(cues, vec![Cue::LoaderFinished]);
}

#[test]
fn other_elements_are_not_affected() {
    let mut set = TweenSet::new();
    let mut store = PropertyStore::default();
    let a = set.start(Tween::to(ElementId(1), 1.0).prop(Property::Y, 10.0));
    let b = set.start(Tween::to(ElementId(2), 1.0).prop(Property::Y, 20.0));
    assert!(set.is_active(a) && set.is_active(b));
    run(&mut set, &mut store, 1.1);
    assert_eq!(store.get(ElementId(1), Property::Y), 10.0);
    assert_eq!(store.get(ElementId(2), Property::Y), 20.0);
}

#[test]
fn delayed_tween_holds_and_captures_start_value_when_live() {
    let mut set = TweenSet::new();
    let mut store = PropertyStore::default();
    store.set(EL, Property::Y, 30.0);
    set.start(Tween::to(EL, 0.5).prop(Property::Y, 0.0).delay(0.5));

    // someone else moves the value while the tween waits
    run(&mut set, &mut store, 0.25);
    store.set(EL, Property::Y, 80.0);
    run(&mut set, &mut store, 0.2);
    assert_eq!(store.get(EL, Property::Y), 80.0);

    run(&mut set, &mut store, 0.1);
    let y = store.get(EL, Property::Y);
    assert!(y < 80.0 && y > 0.0, "y = {}", y);
    run(&mut set, &mut store, 0.5);
    assert_eq!(store.get(EL, Property::Y), 0.0);
}

#[test]
fn cancel_stops_a_tween_without_its_cue() {
    let mut set = TweenSet::new();
    let mut store = PropertyStore::default();
    let id = set.start(Tween::to(EL, 1.0).prop(Property::Scale, 2.0).on_complete(Cue::LoaderFinished));
    assert!(set.cancel(id));
    assert!(!set.cancel(id));
    assert!(run(&mut set, &mut store, 1.5).is_empty());
    assert_eq!(store.get(EL, Property::Scale), 1.0);
}

#[test]
fn timeline_runs_steps_in_sequence_and_cues_once_at_the_end() {
    let bar = ElementId(1);
    let text = ElementId(2);
    let tweens = Timeline::new()
        .then(Tween::to(bar, 1.0).prop_from(Property::WidthPercent, 0.0, 100.0))
        .then(Tween::to(text, 0.5).prop(Property::Opacity, 0.0).ease(Easing::Power2In))
        .on_complete(Cue::LoaderFinished);
    assert_eq!(tweens.len(), 2);

    let mut set = TweenSet::new();
    let mut store = PropertyStore::default();
    set.start_all(tweens);

    let cues = run(&mut set, &mut store, 0.9);
    assert!(cues.is_empty());
    assert_eq!(store.get(text, Property::Opacity), 1.0, "second step waits for the first");

    let cues = run(&mut set, &mut store, 0.7);
    assert_eq!(cues, vec![Cue::LoaderFinished]);
    assert_eq!(store.get(bar, Property::WidthPercent), 100.0);
    assert_eq!(store.get(text, Property::Opacity), 0.0);
}

#[test]
fn timeline_duration_sums_steps_and_offsets() {
    let tl = Timeline::new()
        .then(Tween::to(EL, 1.5).prop(Property::X, 1.0))
        .then(Tween::to(EL, 0.5).prop(Property::Y, 1.0).delay(0.25));
    assert!((tl.duration() - 2.25).abs() < 1e-6);
    assert!(Timeline::new().duration() == 0.0);
}

#[test]
fn store_reports_only_changed_values() {
    let mut store = PropertyStore::default();
    store.set(EL, Property::Opacity, 0.5);
    store.set(EL, Property::X, 3.0);
    let dirty = store.drain_dirty();
    assert_eq!(dirty, vec![(EL, Property::X, 3.0), (EL, Property::Opacity, 0.5)]);

    store.set(EL, Property::X, 3.0);
    assert!(store.drain_dirty().is_empty());
    assert_eq!(store.get(ElementId(99), Property::Scale), 1.0);
}

#[test]
fn reverse_tween_after_50ms_cancels_the_first() {
    let mut set = TweenSet::new();
    let mut store = PropertyStore::default();
    let mut cues = Vec::new();
    let t1 = set.start(
        Tween::to(EL, 0.4)
            .prop_from(Property::X, 0.0, 100.0)
            .on_complete(Cue::LoaderFinished),
    );
    set.advance(0.05, &mut store, &mut cues);
    let t2 = set.start(
        Tween::to(EL, 0.3)
            .prop_from(Property::X, 100.0, 0.0)
            .on_complete(Cue::Reveal(EL)),
    );
    assert!(!set.is_active(t1));
    for _ in 0..30 {
        set.advance(0.0125, &mut store, &mut cues);
    }
    assert!(!set.is_active(t2));
    assert_eq!(cues, vec![Cue::Reveal(EL)]);
    assert_eq!(store.get(EL, Property::X), 0.0);
}
