pub mod config;
pub mod constants;
pub mod cursor;
pub mod easing;
pub mod error;
pub mod event;
pub mod form;
pub mod layout;
pub mod orchestrator;
pub mod scheduler;
pub mod scroll;
pub mod stage;
pub mod trigger;
pub mod tween;

pub use config::*;
pub use cursor::*;
pub use easing::Easing;
pub use error::MotionError;
pub use event::*;
pub use form::*;
pub use layout::*;
pub use orchestrator::*;
pub use scheduler::*;
pub use scroll::*;
pub use stage::*;
pub use trigger::*;
pub use tween::*;
