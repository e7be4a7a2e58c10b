//! Submit-button feedback for the booking form.
//!
//! The request itself belongs to the host; this only tracks which label the
//! button shows and when a result label reverts.

use crate::config::FormConfig;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server answered with status {0}")]
    Status(u16),
}

/// Map a finished request to success or a `SubmitError`.
pub fn classify(status: u16) -> Result<u16, SubmitError> {
    if (200..300).contains(&status) {
        Ok(status)
    } else {
        Err(SubmitError::Status(status))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FormStatus {
    Idle,
    Sending,
    /// `since`: seconds the result label has been shown.
    Succeeded { since: f32 },
    Failed { since: f32 },
}

#[derive(Debug)]
pub struct FormFlow {
    status: FormStatus,
    config: FormConfig,
}

impl FormFlow {
    pub fn new(config: FormConfig) -> Self {
        Self {
            status: FormStatus::Idle,
            config,
        }
    }

    #[inline]
    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Returns false when a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.status == FormStatus::Sending {
            return false;
        }
        self.status = FormStatus::Sending;
        true
    }

    pub fn resolve(&mut self, result: Result<u16, SubmitError>) {
        if self.status != FormStatus::Sending {
            log::warn!("[form] result arrived with no submission in flight");
            return;
        }
        self.status = match result.and_then(classify) {
            Ok(status) => {
                log::info!("[form] submitted (status {})", status);
                FormStatus::Succeeded { since: 0.0 }
            }
            Err(e) => {
                log::warn!("[form] submission failed: {}", e);
                FormStatus::Failed { since: 0.0 }
            }
        };
    }

    /// Advance wall-clock time. Returns true when the label reverted this call.
    pub fn tick(&mut self, elapsed_sec: f32) -> bool {
        let expired = match &mut self.status {
            FormStatus::Succeeded { since } | FormStatus::Failed { since } => {
                *since += elapsed_sec;
                *since >= self.config.hold_sec
            }
            FormStatus::Idle | FormStatus::Sending => false,
        };
        if expired {
            self.status = FormStatus::Idle;
        }
        expired
    }

    pub fn label(&self) -> &str {
        match self.status {
            FormStatus::Idle => &self.config.idle_label,
            FormStatus::Sending => &self.config.sending_label,
            FormStatus::Succeeded { .. } => &self.config.success_label,
            FormStatus::Failed { .. } => &self.config.failure_label,
        }
    }
}
