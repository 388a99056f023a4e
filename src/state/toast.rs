//! Transient notification with debounced auto-dismiss

use super::timer::{TimerId, TimerSlot};
use std::time::{Duration, Instant};

/// Default time a toast stays up
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3500);

/// The single toast of the form
#[derive(Debug, Clone, Default)]
pub struct ToastScheduler {
    message: String,
    is_visible: bool,
    dismiss: TimerSlot,
}

impl ToastScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` for `duration`. Any pending dismissal is replaced, so the
    /// countdown always restarts from the latest call.
    pub fn show(&mut self, message: impl Into<String>, duration: Duration, now: Instant) -> TimerId {
        self.message = message.into();
        self.is_visible = true;
        if let Some(cancelled) = self.dismiss.cancel() {
            tracing::trace!(?cancelled, "toast dismissal rescheduled");
        }
        tracing::debug!(message = %self.message, "toast shown");
        self.dismiss.schedule(now, duration)
    }

    /// Hide immediately and cancel any pending dismissal
    pub fn hide(&mut self) {
        self.is_visible = false;
        self.dismiss.cancel();
    }

    /// Run the auto-dismiss if it is due. Returns the fired timer.
    pub fn tick(&mut self, now: Instant) -> Option<TimerId> {
        let fired = self.dismiss.fire(now)?;
        self.is_visible = false;
        tracing::debug!("toast dismissed");
        Some(fired)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn pending_dismiss(&self) -> Option<TimerId> {
        self.dismiss.pending_id()
    }
}
