// Host-side tests for the virtual smooth scroll.
// The main crate is wasm-only, so these go through the pure core crate.

use motion_core::{Easing, InputSource, ScrollConfig, ScrollVirtualizer};

const FRAME: f32 = 1.0 / 60.0;

fn make_scroll(limit: f32) -> ScrollVirtualizer {
    let mut s = ScrollVirtualizer::new(ScrollConfig::default());
    s.set_bounds(limit + 800.0, 800.0);
    s
}

fn run(s: &mut ScrollVirtualizer, seconds: f32) {
    let frames = (seconds / FRAME).ceil() as usize;
    for _ in 0..frames {
        s.tick(FRAME);
    }
}

#[test]
fn smoothed_offset_converges_monotonically_onto_raw() {
    let mut s = make_scroll(5000.0);
    s.feed(1000.0);
    assert_eq!(s.state().raw_offset, 1000.0);

    let mut prev = s.offset();
    for _ in 0..90 {
        let now = s.tick(FRAME);
        assert!(now >= prev, "smoothed moved backwards: {} -> {}", prev, now);
        assert!(now <= 1000.0);
        prev = now;
    }
    assert_eq!(s.offset(), 1000.0);
    assert!(!s.is_animating());
}

#[test]
fn later_input_restarts_catch_up_from_current_position() {
    let mut s = make_scroll(5000.0);
    s.feed(500.0);
    run(&mut s, 0.2);
    let mid = s.offset();
    assert!(mid > 0.0 && mid < 500.0);

    s.feed(500.0);
    assert_eq!(s.state().raw_offset, 1000.0);
    let next = s.tick(FRAME);
    assert!(next >= mid);
    run(&mut s, 1.3);
    assert_eq!(s.offset(), 1000.0);
}

#[test]
fn raw_offset_is_clamped_to_document_range() {
    let mut s = make_scroll(2000.0);
    s.feed(-300.0);
    assert_eq!(s.state().raw_offset, 0.0);
    s.feed(99_999.0);
    assert_eq!(s.state().raw_offset, 2000.0);
    run(&mut s, 1.5);
    assert_eq!(s.offset(), 2000.0);
}

#[test]
fn non_finite_input_is_ignored() {
    let mut s = make_scroll(2000.0);
    s.feed(f32::NAN);
    s.feed(f32::INFINITY);
    assert_eq!(s.state().raw_offset, 0.0);
    assert!(!s.is_animating());
}

#[test]
fn source_multipliers_scale_raw_input() {
    let mut s = make_scroll(2000.0);
    s.feed_input(InputSource::Touch, 10.0);
    assert_eq!(s.state().raw_offset, 20.0);
    s.feed_input(InputSource::Wheel, 10.0);
    assert_eq!(s.state().raw_offset, 30.0);
    s.feed_input(InputSource::Keyboard, 10.0);
    assert_eq!(s.state().raw_offset, 40.0);
}

#[test]
fn lock_freezes_smoothed_but_keeps_accumulating() {
    let mut s = make_scroll(5000.0);
    s.feed(400.0);
    run(&mut s, 0.1);
    let frozen = s.offset();

    s.lock();
    assert!(s.state().locked);
    s.feed(300.0);
    run(&mut s, 2.0);
    assert_eq!(s.offset(), frozen);
    assert_eq!(s.state().raw_offset, 700.0);
    assert_eq!(s.state().velocity, 0.0);

    s.unlock();
    run(&mut s, 1.3);
    assert_eq!(s.offset(), 700.0);
}

#[test]
fn shrinking_bounds_reclamps_both_offsets() {
    let mut s = make_scroll(3000.0);
    s.scroll_to_immediate(2500.0);
    s.set_bounds(1800.0, 800.0);
    assert_eq!(s.limit(), 1000.0);
    assert_eq!(s.state().raw_offset, 1000.0);
    assert_eq!(s.offset(), 1000.0);
}

#[test]
fn scroll_to_lands_on_target_and_user_input_cancels_it() {
    let mut s = make_scroll(5000.0);
    s.scroll_to(1200.0, 1.2, Easing::ExpoCatchUp);
    run(&mut s, 1.3);
    assert_eq!(s.offset(), 1200.0);

    s.scroll_to(3000.0, 1.2, Easing::ExpoCatchUp);
    run(&mut s, 0.3);
    let here = s.offset();
    assert!(here > 1200.0 && here < 3000.0);
    s.feed(10.0);
    assert_eq!(s.state().raw_offset, here + 10.0);
    run(&mut s, 1.3);
    assert_eq!(s.offset(), here + 10.0);
}

#[test]
fn velocity_tracks_direction_of_motion() {
    let mut s = make_scroll(5000.0);
    s.feed(1000.0);
    s.tick(FRAME);
    assert!(s.state().velocity > 0.0);
    run(&mut s, 1.3);
    s.feed(-500.0);
    s.tick(FRAME);
    assert!(s.state().velocity < 0.0);
}
