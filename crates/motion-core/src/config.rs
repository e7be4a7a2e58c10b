//! Engine parameters. `Default` reproduces the page's tuning from `constants`;
//! the host overrides individual fields (the form endpoint and labels come
//! from markup).

use crate::constants::*;
use crate::easing::Easing;

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    pub duration_sec: f32,
    pub easing: Easing,
    pub wheel_multiplier: f32,
    pub touch_multiplier: f32,
    pub keyboard_multiplier: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_sec: SCROLL_DURATION_SEC,
            easing: Easing::ExpoCatchUp,
            wheel_multiplier: WHEEL_MULTIPLIER,
            touch_multiplier: TOUCH_MULTIPLIER,
            keyboard_multiplier: KEYBOARD_MULTIPLIER,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    /// Fraction of the outer ring's lag left after one second.
    pub outer_decay_base: f32,
    pub magnetic_strength: f32,
    pub magnetic_tween_sec: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            outer_decay_base: CURSOR_OUTER_DECAY_BASE,
            magnetic_strength: MAGNETIC_STRENGTH,
            magnetic_tween_sec: MAGNETIC_TWEEN_SEC,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormConfig {
    pub endpoint: Option<String>,
    pub idle_label: String,
    pub sending_label: String,
    pub success_label: String,
    pub failure_label: String,
    pub hold_sec: f32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            idle_label: "Submit".to_string(),
            sending_label: "Sending...".to_string(),
            success_label: "Request received".to_string(),
            failure_label: "Something went wrong".to_string(),
            hold_sec: FORM_STATUS_HOLD_SEC,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub max_frame_dt_sec: f32,
    pub header_scrolled_offset: f32,
    /// Skip the loader for visitors who already saw it this session.
    pub skip_loader_when_visited: bool,
    pub scroll: ScrollConfig,
    pub cursor: CursorConfig,
    pub form: FormConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            max_frame_dt_sec: MAX_FRAME_DT_SEC,
            header_scrolled_offset: HEADER_SCROLLED_OFFSET_PX,
            skip_loader_when_visited: true,
            scroll: ScrollConfig::default(),
            cursor: CursorConfig::default(),
            form: FormConfig::default(),
        }
    }
}
