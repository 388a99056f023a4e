//! Required-field and format validation for the application form

use super::error::FieldError;
use super::field::{FieldId, FieldState, FieldValue};
use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of the cover letter
pub const COVER_LETTER_MAX_LEN: usize = 1000;

/// Optional leading `+`, then 7-25 digits, hyphens, spaces or parentheses
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\-\s()]{7,25}$").expect("phone pattern compiles"));

/// Check a phone number against the accepted format (surrounding whitespace ignored)
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value.trim())
}

/// Owns every [`FieldState`] and applies the validation rules to them
#[derive(Debug, Clone)]
pub struct FieldValidationEngine {
    fields: Vec<FieldState>,
}

impl FieldValidationEngine {
    /// Create the form's fields; `positions` are the openings offered
    pub fn new(positions: Vec<String>) -> Self {
        let fields = FieldId::ALL
            .iter()
            .map(|&id| match id {
                FieldId::Position => FieldState::choice(id, positions.clone()),
                FieldId::Consent => FieldState::checkbox(id),
                FieldId::CoverLetter => FieldState::multiline(id, COVER_LETTER_MAX_LEN),
                _ => FieldState::text(id),
            })
            .collect();
        Self { fields }
    }

    fn slot(id: FieldId) -> usize {
        id as usize
    }

    pub fn field(&self, id: FieldId) -> &FieldState {
        &self.fields[Self::slot(id)]
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FieldState {
        &mut self.fields[Self::slot(id)]
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldState> {
        self.fields.iter()
    }

    /// Apply a value change. Only presence is re-evaluated here; format rules
    /// wait for blur and the displayed error is left untouched.
    pub fn set_value(&mut self, id: FieldId, value: &str) {
        let field = self.field_mut(id);
        match field.value {
            FieldValue::Text(_) => field.set_text(value),
            FieldValue::Choice { .. } => field.select_option(value),
            FieldValue::Checkbox(_) => field.set_checked(!value.is_empty()),
        }
        field.is_valid = field.has_required_value();
    }

    pub fn set_checked(&mut self, id: FieldId, checked: bool) {
        let field = self.field_mut(id);
        field.set_checked(checked);
        field.is_valid = field.has_required_value();
    }

    pub fn cycle_option(&mut self, id: FieldId, forward: bool) {
        let field = self.field_mut(id);
        field.cycle_option(forward);
        field.is_valid = field.has_required_value();
    }

    /// Run every rule for a field that just lost focus and surface the result
    pub fn validate_on_blur(&mut self, id: FieldId) -> Option<FieldError> {
        let field = self.field_mut(id);
        let error = if id == FieldId::Phone {
            // A blank phone still gates submission but shows no message
            let trimmed = field.as_text().trim();
            (!trimmed.is_empty() && !is_valid_phone(trimmed)).then_some(FieldError::InvalidPhone)
        } else if !field.has_required_value() {
            Some(FieldError::Required)
        } else {
            None
        };

        field.error = error;
        field.is_valid = error.is_none() && field.has_required_value();
        if let Some(err) = error {
            tracing::debug!(field = ?id, %err, "field failed validation");
        }
        error
    }

    #[allow(dead_code)] // the renderer reads `FieldState::error` directly
    pub fn is_field_valid(&self, id: FieldId) -> bool {
        self.field(id).is_valid
    }

    /// True when every required field holds a value. Format errors do not count.
    pub fn required_fields_present(&self) -> bool {
        FieldId::REQUIRED
            .iter()
            .all(|&id| self.field(id).has_required_value())
    }

    /// Reset every field to its initial blank state
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }
}

impl Default for FieldValidationEngine {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
