//! Derived "submit enabled" flag

use super::attachment::AttachmentValidator;
use super::validation::FieldValidationEngine;

/// Open iff every required field holds a value and the resume is valid.
/// Phone format errors are advisory and never close the gate.
pub fn is_ready(fields: &FieldValidationEngine, attachment: &AttachmentValidator) -> bool {
    fields.required_fields_present() && attachment.is_valid()
}

/// Caches the last computed readiness so the presentation can poll it
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadinessGate {
    enabled: bool,
}

impl ReadinessGate {
    pub fn recompute(
        &mut self,
        fields: &FieldValidationEngine,
        attachment: &AttachmentValidator,
    ) -> bool {
        let enabled = is_ready(fields, attachment);
        if enabled != self.enabled {
            tracing::debug!(enabled, "readiness changed");
        }
        self.enabled = enabled;
        enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
