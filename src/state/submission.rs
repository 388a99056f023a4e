//! Submission lifecycle and the (simulated) delivery backend

use super::timer::TimerSlot;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Simulated network round-trip
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(900);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Snapshot of what the applicant submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Application {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub cover_letter: String,
    pub skills: Vec<String>,
    pub resume: Option<String>,
}

/// Acknowledgement returned by a backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
}

/// Delivers a completed application
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionBackend {
    fn deliver(&mut self, application: &Application) -> SubmissionReceipt;
}

/// Stand-in backend that accepts everything
#[derive(Debug, Default)]
pub struct SimulatedBackend;

impl SubmissionBackend for SimulatedBackend {
    fn deliver(&mut self, application: &Application) -> SubmissionReceipt {
        let receipt = SubmissionReceipt {
            reference: Uuid::new_v4(),
            received_at: Utc::now(),
        };
        match serde_json::to_string(application) {
            Ok(payload) => tracing::debug!(%payload, "delivering application"),
            Err(err) => tracing::warn!(%err, "could not serialize application for logging"),
        }
        receipt
    }
}

/// Idle → Submitting → Idle state machine with a fixed delay
#[derive(Debug, Clone)]
pub struct SubmissionController {
    state: SubmissionState,
    delay: Duration,
    round_trip: TimerSlot,
    pending: Option<Application>,
}

impl SubmissionController {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: SubmissionState::Idle,
            delay,
            round_trip: TimerSlot::new(),
            pending: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// The submit action is disabled and shows progress while submitting
    pub fn is_in_progress(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Try to start a submission. Rejected when the gate is closed or a
    /// submission is already running.
    pub fn begin(&mut self, gate_open: bool, application: Application, now: Instant) -> bool {
        if !gate_open || self.state == SubmissionState::Submitting {
            tracing::debug!(gate_open, state = ?self.state, "submission rejected");
            return false;
        }
        tracing::info!(position = %application.position, "submitting application");
        self.state = SubmissionState::Submitting;
        self.pending = Some(application);
        self.round_trip.schedule(now, self.delay);
        true
    }

    /// Finish the round-trip once the delay is over, returning the snapshot
    /// taken when it began
    pub fn poll(&mut self, now: Instant) -> Option<Application> {
        self.round_trip.fire(now)?;
        self.state = SubmissionState::Idle;
        self.pending.take()
    }
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn application() -> Application {
        Application {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "5551234".to_string(),
            position: "Engineer".to_string(),
            cover_letter: String::new(),
            skills: vec!["Rust".to_string()],
            resume: Some("cv.pdf".to_string()),
        }
    }

    #[test]
    fn test_starts_idle() {
        let controller = SubmissionController::default();
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(!controller.is_in_progress());
    }

    #[test]
    fn test_closed_gate_rejects() {
        let mut controller = SubmissionController::default();
        assert!(!controller.begin(false, application(), Instant::now()));
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_round_trip() {
        let t0 = Instant::now();
        let mut controller = SubmissionController::default();
        assert!(controller.begin(true, application(), t0));
        assert!(controller.is_in_progress());

        assert!(controller.poll(t0 + Duration::from_millis(899)).is_none());
        assert!(controller.is_in_progress());

        let done = controller.poll(t0 + DEFAULT_SUBMIT_DELAY);
        assert_eq!(done, Some(application()));
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(controller.poll(t0 + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_second_begin_while_submitting_is_rejected() {
        let t0 = Instant::now();
        let mut controller = SubmissionController::default();
        controller.begin(true, application(), t0);
        let mut other = application();
        other.full_name = "Someone Else".to_string();
        assert!(!controller.begin(true, other, t0 + Duration::from_millis(100)));

        // Original deadline and snapshot are kept
        let done = controller.poll(t0 + DEFAULT_SUBMIT_DELAY);
        assert_eq!(done.map(|a| a.full_name), Some("Ada Lovelace".to_string()));
    }

    #[test]
    fn test_simulated_backend_issues_unique_receipts() {
        let mut backend = SimulatedBackend;
        let a = backend.deliver(&application());
        let b = backend.deliver(&application());
        assert_ne!(a.reference, b.reference);
    }
}
