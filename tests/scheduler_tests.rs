// Host-side tests for the per-frame engine: ordering, locks and routing.

use glam::Vec2;
use motion_core::{
    BootPlan, CursorMode, ElementId, FrameReport, HorizontalSection, InputEvent, InputSource,
    Layout, MemorySession, MotionConfig, MotionEngine, ParallaxImage, Property, Rect, Stage,
    SubmitError,
};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

const BAR: ElementId = ElementId(1);
const CAPTION: ElementId = ElementId(2);
const CURTAIN: ElementId = ElementId(3);
const LINE_A: ElementId = ElementId(10);
const LINE_B: ElementId = ElementId(11);
const FADE: ElementId = ElementId(12);
const IMAGE: ElementId = ElementId(20);
const FRAME_EL: ElementId = ElementId(21);
const REVEAL: ElementId = ElementId(30);
const SECTION: ElementId = ElementId(40);
const TRACK: ElementId = ElementId(41);
const BUTTON: ElementId = ElementId(50);

fn stage() -> Stage {
    Stage {
        loader_progress: Some(BAR),
        loader_text: Some(CAPTION),
        loader_curtain: Some(CURTAIN),
        hero_lines: vec![LINE_A, LINE_B],
        hero_fades: [Some(FADE), None, None],
        parallax: vec![ParallaxImage {
            image: IMAGE,
            frame: FRAME_EL,
        }],
        reveals: vec![REVEAL],
        horizontal: Some(HorizontalSection {
            section: SECTION,
            track: TRACK,
        }),
    }
}

fn layout(width: f32) -> Layout {
    Layout::new(Vec2::new(width, 800.0), 8000.0)
        .with(FRAME_EL, Rect::new(1200.0, 0.0, width, 600.0))
        .with(IMAGE, Rect::new(1200.0, 0.0, width, 600.0))
        .with(REVEAL, Rect::new(2500.0, 0.0, width, 300.0))
        .with(SECTION, Rect::new(4000.0, 0.0, width, 800.0))
        .with(TRACK, Rect::new(4000.0, 0.0, width, 800.0).with_scroll_width(3000.0))
        .with(BUTTON, Rect::new(100.0, 100.0, 200.0, 100.0))
}

fn engine(visited: bool) -> MotionEngine {
    let session = if visited {
        MemorySession::visited_already()
    } else {
        MemorySession::default()
    };
    MotionEngine::new(MotionConfig::default(), stage(), layout(1280.0), Box::new(session))
}

fn run(engine: &mut MotionEngine, seconds: f32) -> Vec<FrameReport> {
    let frames = (seconds / FRAME.as_secs_f32()).ceil() as usize;
    (0..frames).map(|_| engine.frame(FRAME)).collect()
}

fn wheel(delta: f32) -> InputEvent {
    InputEvent::Scroll {
        source: InputSource::Wheel,
        delta,
    }
}

#[test]
fn first_visit_locks_scroll_until_loader_finishes() {
    let mut e = engine(false);
    assert_eq!(e.boot(), BootPlan::RunLoader);
    assert!(e.orchestrator().loader_active);

    e.push(wheel(500.0));
    let r = e.frame(FRAME);
    assert!(r.scroll.locked);
    assert_eq!(r.scroll.raw_offset, 500.0);
    assert_eq!(r.scroll.smoothed_offset, 0.0);

    let reports = run(&mut e, 3.5);
    let hidden_at = reports.iter().position(|r| r.hide_loader);
    assert!(hidden_at.is_some(), "loader never finished");
    assert_eq!(reports.iter().filter(|r| r.hide_loader).count(), 1);
    // 1.5 + 0.5 + 1.0 seconds of loader
    let t = (hidden_at.unwrap_or(0) + 2) as f32 * FRAME.as_secs_f32();
    assert!((t - 3.0).abs() < 0.05, "loader finished at {}s", t);

    assert!(!e.orchestrator().loader_active);
    assert!(e.orchestrator().main_started);
    assert_eq!(e.value(CURTAIN, Property::YPercent), -100.0);

    run(&mut e, 1.5);
    assert_eq!(e.scroll().smoothed_offset, 500.0);
}

#[test]
fn returning_visitor_sees_hero_right_away() {
    let mut e = engine(true);
    assert_eq!(e.boot(), BootPlan::SkipLoader);
    let r = e.frame(FRAME);
    assert!(r.hide_loader);
    assert!(!r.scroll.locked);
    let line = r
        .properties
        .iter()
        .find(|(el, p, _)| *el == LINE_A && *p == Property::YPercent)
        .map(|&(_, _, v)| v);
    assert!(line.is_some_and(|v| v > 0.0 && v < 100.0));

    run(&mut e, 2.5);
    assert_eq!(e.value(LINE_A, Property::YPercent), 0.0);
    assert_eq!(e.value(LINE_B, Property::YPercent), 0.0);
    assert_eq!(e.value(FADE, Property::Opacity), 1.0);
    assert_eq!(e.value(BAR, Property::WidthPercent), 0.0, "loader never ran");
}

#[test]
fn page_without_loader_parts_completes_immediately() {
    let mut e = MotionEngine::new(
        MotionConfig::default(),
        Stage::default(),
        layout(1280.0),
        Box::new(MemorySession::default()),
    );
    assert_eq!(e.boot(), BootPlan::RunLoader);
    let r = e.frame(FRAME);
    assert!(r.hide_loader);
    assert!(!r.scroll.locked);
}

#[test]
fn long_frames_are_clamped_for_animation() {
    let mut e = engine(true);
    e.boot();
    let r = e.frame(Duration::from_secs(5));
    assert_eq!(r.dt, 1.0 / 30.0);
    let r = e.frame(Duration::from_millis(10));
    assert!((r.dt - 0.01).abs() < 1e-6);
    // hero still mid-animation after a 5 s stall
    assert!(e.value(LINE_A, Property::YPercent) > 0.0);
}

#[test]
fn open_menu_holds_scroll() {
    let mut e = engine(true);
    e.boot();
    e.push(InputEvent::MenuToggle);
    e.push(wheel(400.0));
    let reports = run(&mut e, 1.0);
    assert!(reports.iter().all(|r| r.menu_open && r.scroll.smoothed_offset == 0.0));

    e.push(InputEvent::MenuToggle);
    let reports = run(&mut e, 1.5);
    assert!(!reports[0].menu_open);
    assert_eq!(e.scroll().smoothed_offset, 400.0);
}

#[test]
fn close_requests_close_the_menu_and_never_reopen_it() {
    let mut e = engine(true);
    e.boot();
    e.push(InputEvent::MenuToggle);
    e.frame(FRAME);
    assert!(e.orchestrator().menu_open);

    // Escape and a menu link landing in the same frame
    e.push(InputEvent::MenuClose);
    e.push(InputEvent::MenuClose);
    let r = e.frame(FRAME);
    assert!(!r.menu_open);
    assert!(!r.scroll.locked);

    e.push(InputEvent::MenuClose);
    assert!(!e.frame(FRAME).menu_open);

    // burger and link together: open, then closed
    e.push(InputEvent::MenuToggle);
    e.push(InputEvent::MenuClose);
    let r = e.frame(FRAME);
    assert!(!r.menu_open);
    assert!(!r.scroll.locked);
}

#[test]
fn anchor_click_closes_menu_and_scrolls_to_target() {
    let mut e = engine(true);
    e.boot();
    e.push(InputEvent::MenuToggle);
    e.frame(FRAME);
    assert!(e.orchestrator().menu_open);

    e.push(InputEvent::AnchorClick {
        target: Some(REVEAL),
    });
    let r = e.frame(FRAME);
    assert!(!r.menu_open);
    assert!(r.scroll.smoothed_offset > 0.0);
    run(&mut e, 1.5);
    assert_eq!(e.scroll().smoothed_offset, 2500.0);
}

#[test]
fn anchor_to_missing_target_only_closes_menu() {
    let mut e = engine(true);
    e.boot();
    e.push(InputEvent::MenuToggle);
    e.push(InputEvent::AnchorClick { target: None });
    let r = e.frame(FRAME);
    assert!(!r.menu_open);
    assert_eq!(r.scroll.raw_offset, 0.0);
}

#[test]
fn reveals_start_hidden_before_their_trigger() {
    let mut e = engine(true);
    e.boot();
    let r = e.frame(FRAME);
    assert!(r.properties.contains(&(REVEAL, Property::Opacity, 0.0)));
    assert!(r.properties.contains(&(REVEAL, Property::Y, 40.0)));
    assert_eq!(e.value(REVEAL, Property::Opacity), 0.0);

    // no jump to full opacity on the way in
    e.push(wheel(2000.0));
    let reports = run(&mut e, 2.5);
    let mut last = 0.0;
    for r in &reports {
        for &(el, p, v) in &r.properties {
            if el == REVEAL && p == Property::Opacity {
                assert!(v >= last, "opacity went {} -> {}", last, v);
                last = v;
            }
        }
    }
    assert_eq!(last, 1.0);
}

#[test]
fn reveal_plays_once_when_scrolled_into_view() {
    let mut e = engine(true);
    e.boot();
    run(&mut e, 0.5);
    assert!(e.tweens().len() > 0);

    // reveal line = 2500 - 0.85 * 800 = 1820
    e.push(wheel(2000.0));
    let reports = run(&mut e, 2.5);
    let first = reports
        .iter()
        .find(|r| r.properties.iter().any(|(el, p, _)| *el == REVEAL && *p == Property::Y))
        .map(|r| r.scroll.smoothed_offset);
    assert!(first.is_some_and(|offset| offset >= 1820.0));
    assert_eq!(e.value(REVEAL, Property::Y), 0.0);
    assert_eq!(e.value(REVEAL, Property::Opacity), 1.0);

    // scrolling away and back does not replay it
    e.push(wheel(-2000.0));
    run(&mut e, 1.5);
    e.push(wheel(2000.0));
    let reports = run(&mut e, 1.5);
    assert!(reports
        .iter()
        .all(|r| !r.properties.iter().any(|(el, _, _)| *el == REVEAL)));
}

#[test]
fn triggers_see_the_offset_of_the_same_frame() {
    let mut e = engine(true);
    e.boot();
    e.push(wheel(5000.0));
    let reports = run(&mut e, 1.5);
    assert!(reports.iter().any(|r| r.pins.iter().any(|p| p.translate_y > 0.0)));
    for r in reports {
        for pin in &r.pins {
            let expected = (r.scroll.smoothed_offset.clamp(4000.0, 5720.0)) - 4000.0;
            assert_eq!(pin.translate_y, expected);
        }
    }
}

#[test]
fn resize_below_breakpoint_drops_the_pin() {
    let mut e = engine(true);
    e.boot();
    assert_eq!(e.frame(FRAME).pins.len(), 1);
    e.push(InputEvent::Resize(layout(800.0)));
    assert!(e.frame(FRAME).pins.is_empty());
    e.push(InputEvent::Resize(layout(1440.0)));
    let pins = e.frame(FRAME).pins;
    assert_eq!(pins.len(), 1);
    assert_eq!(pins[0].spacing, 3000.0 - 1440.0);
}

#[test]
fn header_turns_scrolled_past_threshold() {
    let mut e = engine(true);
    e.boot();
    assert!(!e.frame(FRAME).header_scrolled);
    e.push(wheel(200.0));
    let reports = run(&mut e, 1.5);
    assert!(reports.last().is_some_and(|r| r.header_scrolled));
}

#[test]
fn magnetic_hover_leans_and_springs_back() {
    let mut e = engine(true);
    e.boot();
    // button center on screen is (200, 150)
    let bounds = Rect::new(100.0, 100.0, 200.0, 100.0);
    e.push(InputEvent::PointerMove(Vec2::new(260.0, 150.0)));
    e.push(InputEvent::HoverEnter {
        element: BUTTON,
        magnetic: true,
    });
    e.push(InputEvent::MagnetMove {
        element: BUTTON,
        bounds,
    });
    let r = e.frame(FRAME);
    assert_eq!(r.cursor_mode, CursorMode::Magnetic);
    assert_eq!(r.cursor.inner, Vec2::new(260.0, 150.0));
    run(&mut e, 0.5);
    assert!((e.value(BUTTON, Property::X) - 18.0).abs() < 1e-3);
    assert_eq!(e.value(BUTTON, Property::Y), 0.0);

    e.push(InputEvent::HoverLeave { element: BUTTON });
    let r = e.frame(FRAME);
    assert_eq!(r.cursor_mode, CursorMode::Default);
    run(&mut e, 0.5);
    assert_eq!(e.value(BUTTON, Property::X), 0.0);
}

#[test]
fn magnetic_lean_uses_on_screen_bounds_whatever_the_scroll() {
    let mut e = engine(true);
    e.boot();
    e.push(wheel(2000.0));
    run(&mut e, 1.5);
    assert_eq!(e.scroll().smoothed_offset, 2000.0);

    // a fixed header button stays at top 20 on screen
    let bounds = Rect::new(20.0, 100.0, 200.0, 60.0);
    e.push(InputEvent::PointerMove(bounds.center()));
    e.push(InputEvent::HoverEnter {
        element: BUTTON,
        magnetic: true,
    });
    e.push(InputEvent::MagnetMove {
        element: BUTTON,
        bounds,
    });
    run(&mut e, 0.5);
    assert_eq!(e.value(BUTTON, Property::X), 0.0);
    assert_eq!(e.value(BUTTON, Property::Y), 0.0);
}

#[test]
fn magnet_move_without_magnetic_hover_does_nothing() {
    let mut e = engine(true);
    e.boot();
    e.frame(FRAME);
    e.push(InputEvent::PointerMove(Vec2::new(400.0, 400.0)));
    e.push(InputEvent::MagnetMove {
        element: BUTTON,
        bounds: Rect::new(100.0, 100.0, 200.0, 100.0),
    });
    let r = e.frame(FRAME);
    assert!(!r.properties.iter().any(|(el, _, _)| *el == BUTTON));
}

#[test]
fn plain_hover_sets_mode_without_moving_element() {
    let mut e = engine(true);
    e.boot();
    e.push(InputEvent::HoverEnter {
        element: BUTTON,
        magnetic: false,
    });
    let r = e.frame(FRAME);
    assert_eq!(r.cursor_mode, CursorMode::HoverActive);
    assert!(!r.properties.iter().any(|(el, _, _)| *el == BUTTON));
}

#[test]
fn form_submit_reports_labels_and_reverts_after_hold() {
    let mut e = engine(true);
    e.boot();
    e.push(InputEvent::FormSubmit);
    let r = e.frame(FRAME);
    assert!(r.submit_requested);
    assert_eq!(r.form_label.as_deref(), Some("Sending..."));

    e.push(InputEvent::FormSubmit);
    let r = e.frame(FRAME);
    assert!(!r.submit_requested, "double submit while sending");
    assert_eq!(r.form_label, None);

    e.push(InputEvent::FormResolved(Err(SubmitError::Status(500))));
    let half = Duration::from_millis(500);
    let r = e.frame(half);
    assert_eq!(r.form_label.as_deref(), Some("Something went wrong"));
    for _ in 0..5 {
        assert_eq!(e.frame(half).form_label, None);
    }
    assert_eq!(e.frame(half).form_label.as_deref(), Some("Submit"));
}
