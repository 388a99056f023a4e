//! The form controller: owns every component and wires them together
//!
//! All mutation goes through methods here. Each one that can affect readiness
//! recomputes the gate before returning, so [`ApplicationForm::is_ready`] is
//! always current when the presentation polls it.

use super::attachment::{AttachmentState, AttachmentValidator, SelectedFile};
use super::error::FieldError;
use super::field::FieldId;
use super::focus::{FocusSurface, KeyDisposition, NavKey};
use super::gate::ReadinessGate;
use super::modal::{ClickTarget, ModalController};
use super::skills::{AddOutcome, SkillCollection, SkillId};
use super::submission::{
    Application, SimulatedBackend, SubmissionBackend, SubmissionController, SubmissionReceipt,
    SubmissionState,
};
use super::toast::ToastScheduler;
use super::validation::FieldValidationEngine;
use crate::config::FormConfig;
use std::time::{Duration, Instant};

/// Shown in the form's message area after a successful submission
pub const SUCCESS_MESSAGE: &str =
    "Thanks! Your application has been received. We will be in touch.";

/// Toast text confirming a submission
pub const CONFIRMATION_TOAST: &str = "Application submitted — we will be in touch.";

pub struct ApplicationForm {
    fields: FieldValidationEngine,
    attachment: AttachmentValidator,
    skills: SkillCollection,
    skill_draft: String,
    gate: ReadinessGate,
    modal: ModalController,
    toast: ToastScheduler,
    toast_duration: Duration,
    submission: SubmissionController,
    backend: Box<dyn SubmissionBackend>,
    success_message: Option<String>,
    last_receipt: Option<SubmissionReceipt>,
}

impl ApplicationForm {
    pub fn new(config: &FormConfig) -> Self {
        Self::with_backend(config, Box::new(SimulatedBackend))
    }

    pub fn with_backend(config: &FormConfig, backend: Box<dyn SubmissionBackend>) -> Self {
        let mut form = Self {
            fields: FieldValidationEngine::new(config.positions()),
            attachment: AttachmentValidator::default(),
            skills: SkillCollection::with_presets(config.preset_skills()),
            skill_draft: String::new(),
            gate: ReadinessGate::default(),
            modal: ModalController::new(),
            toast: ToastScheduler::new(),
            toast_duration: config.toast_duration(),
            submission: SubmissionController::new(config.submit_delay()),
            backend,
            success_message: None,
            last_receipt: None,
        };
        form.refresh_gate();
        form
    }

    fn refresh_gate(&mut self) -> bool {
        self.gate.recompute(&self.fields, &self.attachment)
    }

    // Fields

    pub fn fields(&self) -> &FieldValidationEngine {
        &self.fields
    }

    pub fn set_value(&mut self, id: FieldId, value: &str) -> bool {
        self.fields.set_value(id, value);
        self.refresh_gate()
    }

    pub fn set_checked(&mut self, id: FieldId, checked: bool) -> bool {
        self.fields.set_checked(id, checked);
        self.refresh_gate()
    }

    pub fn cycle_option(&mut self, id: FieldId, forward: bool) -> bool {
        self.fields.cycle_option(id, forward);
        self.refresh_gate()
    }

    /// A field lost focus
    pub fn blur(&mut self, id: FieldId) -> Option<FieldError> {
        let error = self.fields.validate_on_blur(id);
        self.refresh_gate();
        error
    }

    // Attachment

    pub fn attachment(&self) -> &AttachmentState {
        self.attachment.state()
    }

    pub fn select_resume(&mut self, file: Option<SelectedFile>) -> &AttachmentState {
        self.attachment.evaluate(file);
        self.refresh_gate();
        self.attachment.state()
    }

    // Skills

    pub fn skills(&self) -> &SkillCollection {
        &self.skills
    }

    pub fn skill_draft(&self) -> &str {
        &self.skill_draft
    }

    pub fn set_skill_draft(&mut self, text: &str) {
        self.skill_draft = text.to_string();
    }

    /// Add the drafted skill; the draft is cleared unless it was blank
    pub fn add_skill(&mut self, now: Instant) -> AddOutcome {
        let outcome = self.skills.add(&self.skill_draft, now);
        if outcome != AddOutcome::Ignored {
            self.skill_draft.clear();
        }
        outcome
    }

    pub fn remove_skill(&mut self, id: &SkillId) -> bool {
        self.skills.remove(id).is_some()
    }

    pub fn toggle_skill(&mut self, id: &SkillId) -> Option<bool> {
        self.skills.toggle_selection(id)
    }

    pub fn activate_skill(&mut self, id: &SkillId, key: NavKey) -> Option<bool> {
        self.skills.activate(id, key)
    }

    // Readiness & submission

    pub fn is_ready(&self) -> bool {
        self.gate.is_enabled()
    }

    /// The submit action is usable: the gate is open and nothing is in flight
    pub fn can_submit(&self) -> bool {
        self.is_ready() && !self.submission.is_in_progress()
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submission.state()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn last_receipt(&self) -> Option<&SubmissionReceipt> {
        self.last_receipt.as_ref()
    }

    fn snapshot(&self) -> Application {
        let text = |id| self.fields.field(id).as_text().to_string();
        Application {
            full_name: text(FieldId::FullName),
            email: text(FieldId::Email),
            phone: text(FieldId::Phone),
            position: text(FieldId::Position),
            cover_letter: text(FieldId::CoverLetter),
            skills: self.skills.selected(),
            resume: self.attachment.state().file.as_ref().map(|f| f.name.clone()),
        }
    }

    /// Submit attempt. Readiness is re-read so stale requests are rejected.
    pub fn submit(&mut self, now: Instant) -> bool {
        let gate_open = self.refresh_gate();
        let application = self.snapshot();
        self.submission.begin(gate_open, application, now)
    }

    /// Advance every timer to `now`
    pub fn tick(&mut self, now: Instant, surface: &mut dyn FocusSurface) {
        self.skills.tick(now);
        self.toast.tick(now);
        if let Some(application) = self.submission.poll(now) {
            self.complete_submission(application, now, surface);
        }
    }

    fn complete_submission(
        &mut self,
        application: Application,
        now: Instant,
        surface: &mut dyn FocusSurface,
    ) {
        let receipt = self.backend.deliver(&application);
        tracing::info!(reference = %receipt.reference, "application received");
        self.last_receipt = Some(receipt);
        self.success_message = Some(SUCCESS_MESSAGE.to_string());

        self.fields.reset();
        self.attachment.reset();
        self.refresh_gate();

        self.modal.open(surface);
        self.toast.show(CONFIRMATION_TOAST, self.toast_duration, now);
    }

    // Modal & toast

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub fn close_modal(&mut self, surface: &mut dyn FocusSurface) -> bool {
        self.modal.close(surface)
    }

    pub fn modal_key(&mut self, key: NavKey, surface: &mut dyn FocusSurface) -> KeyDisposition {
        self.modal.handle_key(key, surface)
    }

    pub fn modal_click(&mut self, target: ClickTarget, surface: &mut dyn FocusSurface) -> bool {
        self.modal.handle_click(target, surface)
    }

    pub fn toast(&self) -> &ToastScheduler {
        &self.toast
    }

    pub fn hide_toast(&mut self) {
        self.toast.hide();
    }
}
