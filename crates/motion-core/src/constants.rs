/// Scroll, cursor, loader and reveal tuning constants.
///
/// These express intended behavior (durations, smoothing bases, clamp
/// limits) and keep magic numbers out of the engine. Values follow the
/// page's latest revision; see DESIGN.md for the ones awaiting product
/// confirmation.

// Frame clamp: larger gaps (tab suspend, long GC) advance animations by this much only
pub const MAX_FRAME_DT_SEC: f32 = 1.0 / 30.0;

// Smooth scroll catch-up
pub const SCROLL_DURATION_SEC: f32 = 1.2;
pub const WHEEL_MULTIPLIER: f32 = 1.0;
pub const TOUCH_MULTIPLIER: f32 = 2.0;
pub const KEYBOARD_MULTIPLIER: f32 = 1.0;
pub const KEY_LINE_STEP_PX: f32 = 80.0; // arrow keys
pub const KEY_PAGE_FRACTION: f32 = 0.9; // page up/down and space, as a fraction of the viewport
pub const ANCHOR_SCROLL_DURATION_SEC: f32 = 1.2;

// Header gets its "scrolled" look past this offset
pub const HEADER_SCROLLED_OFFSET_PX: f32 = 50.0;

// Custom cursor
pub const CURSOR_OUTER_DECAY_BASE: f32 = 1.0e-6; // fraction of the gap left after one second
pub const MAGNETIC_STRENGTH: f32 = 0.3;
pub const MAGNETIC_TWEEN_SEC: f32 = 0.4;

// Loader timeline
pub const LOADER_PROGRESS_SEC: f32 = 1.5;
pub const LOADER_TEXT_SEC: f32 = 0.5;
pub const LOADER_TEXT_LIFT_PX: f32 = -50.0;
pub const LOADER_CURTAIN_SEC: f32 = 1.0;

// Hero reveal after the loader
pub const HERO_LINE_SEC: f32 = 1.2;
pub const HERO_LINE_STAGGER_SEC: f32 = 0.15;
pub const HERO_FADE_SEC: f32 = 1.0;
pub const HERO_FADE_DELAYS_SEC: [f32; 3] = [0.5, 0.8, 1.0]; // label, description, action

// Scroll-linked effects
pub const REVEAL_SEC: f32 = 0.9;
pub const REVEAL_LIFT_PX: f32 = 40.0;
pub const REVEAL_VIEWPORT_LINE: f32 = 0.85; // fires when the element top crosses 85% of the viewport
pub const PARALLAX_START_SCALE: f32 = 1.2;
pub const PARALLAX_SCRUB_LAG_SEC: f32 = 1.5;
pub const HORIZONTAL_SCRUB_LAG_SEC: f32 = 1.0;
pub const HORIZONTAL_MIN_VIEWPORT_PX: f32 = 1025.0;

// Form feedback
pub const FORM_STATUS_HOLD_SEC: f32 = 3.0;
