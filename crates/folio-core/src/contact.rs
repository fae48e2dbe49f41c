//! Contact form payload, validation and the simulated submission lifecycle.
//!
//! There is no network transmission: the driver (the web frontend) starts a
//! submission, waits an artificial delay and reports an outcome. The state
//! machine here only enforces the shape of that lifecycle so it can be
//! tested headlessly with explicit clocks.

use crate::constants::STATUS_DISPLAY_SEC;
use thiserror::Error;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("name is required")]
    EmptyName,
    #[error("email address is invalid")]
    InvalidEmail,
    #[error("subject is required")]
    EmptySubject,
    #[error("message is required")]
    EmptyMessage,
    #[error("a submission is already in flight")]
    AlreadySending,
}

impl ContactMessage {
    /// Minimal field validation before a submission may start.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::EmptyName);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.subject.trim().is_empty() {
            return Err(ContactError::EmptySubject);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        Ok(())
    }
}

// Not RFC-grade on purpose; the form only needs to catch obvious typos.
fn is_plausible_email(s: &str) -> bool {
    let Some(at) = s.find('@') else {
        return false;
    };
    let (local, domain) = s.split_at(at);
    let domain = &domain[1..];
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Outcome reported by the (simulated) transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Failure,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending {
        started_at: f64,
    },
    /// Terminal outcome being displayed; clears back to `Idle` after the
    /// display window elapses.
    Done {
        outcome: SubmitOutcome,
        shown_at: f64,
    },
}

/// Drives one contact form through Idle → Sending → Done → Idle.
#[derive(Clone, Debug, Default)]
pub struct SubmitFlow {
    state: SubmitState,
}

impl SubmitFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.state, SubmitState::Sending { .. })
    }

    /// Validate the payload and enter `Sending`. Rejects re-entry while a
    /// submission is in flight. A validation failure lands in the failure
    /// status so it expires through `tick` like any other outcome.
    pub fn begin(&mut self, message: &ContactMessage, now: f64) -> Result<(), ContactError> {
        if self.is_sending() {
            return Err(ContactError::AlreadySending);
        }
        if let Err(e) = message.validate() {
            self.state = SubmitState::Done {
                outcome: SubmitOutcome::Failure,
                shown_at: now,
            };
            return Err(e);
        }
        self.state = SubmitState::Sending { started_at: now };
        Ok(())
    }

    /// Report the transport outcome. Ignored unless a submission is in
    /// flight.
    pub fn finish(&mut self, outcome: SubmitOutcome, now: f64) {
        if self.is_sending() {
            self.state = SubmitState::Done {
                outcome,
                shown_at: now,
            };
        }
    }

    /// Clear an expired status display. Returns `true` when the state
    /// changed so the caller can re-render.
    pub fn tick(&mut self, now: f64) -> bool {
        if let SubmitState::Done { shown_at, .. } = self.state {
            if now - shown_at >= STATUS_DISPLAY_SEC {
                self.state = SubmitState::Idle;
                return true;
            }
        }
        false
    }

    /// Translation key for the status line, if one should be shown.
    pub fn status_key(&self) -> Option<&'static str> {
        match self.state {
            SubmitState::Idle => None,
            SubmitState::Sending { .. } => Some("contact.form.sending"),
            SubmitState::Done {
                outcome: SubmitOutcome::Success,
                ..
            } => Some("contact.form.success"),
            SubmitState::Done {
                outcome: SubmitOutcome::Failure,
                ..
            } => Some("contact.form.error"),
        }
    }
}
