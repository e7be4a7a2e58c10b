use crate::trigger::TriggerId;
use thiserror::Error;

/// Contract violations reported back to callers. None of these are fatal:
/// the scheduler logs them and carries on with the rest of the frame.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    #[error("trigger {0:?} is not registered")]
    UnknownTrigger(TriggerId),
}
