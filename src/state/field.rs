//! Form field value objects

use super::error::FieldError;
use serde::Serialize;

/// Identifies a field of the application form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    Position,
    Consent,
    CoverLetter,
}

impl FieldId {
    /// Every field, in form order
    pub const ALL: [FieldId; 6] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Position,
        FieldId::Consent,
        FieldId::CoverLetter,
    ];

    /// Fields that must hold a value before the form can be submitted
    pub const REQUIRED: [FieldId; 5] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Position,
        FieldId::Consent,
    ];

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FullName => "Full name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::Position => "Position",
            FieldId::Consent => "I agree to the processing of my data",
            FieldId::CoverLetter => "Cover letter",
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// One of a fixed set of options, or nothing chosen yet
    Choice {
        options: Vec<String>,
        selected: Option<usize>,
    },
    Checkbox(bool),
}

impl FieldValue {
    /// The value as the form would submit it; empty means "no value"
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => selected
                .and_then(|i| options.get(i))
                .map(String::as_str)
                .unwrap_or(""),
            FieldValue::Checkbox(true) => "on",
            FieldValue::Checkbox(false) => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_text().is_empty()
    }

    /// Blank value of the same kind (choices keep their options)
    fn blank(&self) -> Self {
        match self {
            FieldValue::Text(_) => FieldValue::Text(String::new()),
            FieldValue::Choice { options, .. } => FieldValue::Choice {
                options: options.clone(),
                selected: None,
            },
            FieldValue::Checkbox(_) => FieldValue::Checkbox(false),
        }
    }
}

/// Represents a single form field with its value and validation state
#[derive(Debug, Clone)]
pub struct FieldState {
    pub id: FieldId,
    pub value: FieldValue,
    pub is_required: bool,
    pub is_valid: bool,
    pub error: Option<FieldError>,
    pub is_multiline: bool,
    /// Maximum number of characters accepted by a text field
    pub max_len: Option<usize>,
}

impl FieldState {
    /// Create a new single-line text field
    pub fn text(id: FieldId) -> Self {
        Self::with_value(id, FieldValue::Text(String::new()))
    }

    /// Create a multi-line text field limited to `max_len` characters
    pub fn multiline(id: FieldId, max_len: usize) -> Self {
        Self {
            is_multiline: true,
            max_len: Some(max_len),
            ..Self::text(id)
        }
    }

    pub fn choice(id: FieldId, options: Vec<String>) -> Self {
        Self::with_value(
            id,
            FieldValue::Choice {
                options,
                selected: None,
            },
        )
    }

    pub fn checkbox(id: FieldId) -> Self {
        Self::with_value(id, FieldValue::Checkbox(false))
    }

    fn with_value(id: FieldId, value: FieldValue) -> Self {
        let is_required = id.is_required();
        Self {
            id,
            is_valid: !is_required || !value.is_empty(),
            value,
            is_required,
            error: None,
            is_multiline: false,
            max_len: None,
        }
    }

    pub fn as_text(&self) -> &str {
        self.value.as_text()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether the required-presence rule holds
    pub fn has_required_value(&self) -> bool {
        !self.is_required || !self.is_empty()
    }

    /// Replace a text value, truncating to `max_len` characters
    pub fn set_text(&mut self, value: &str) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = match self.max_len {
                Some(max) => value.chars().take(max).collect(),
                None => value.to_string(),
            };
        }
    }

    /// Select an option of a choice field by its text; unknown text clears it
    pub fn select_option(&mut self, option: &str) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = options.iter().position(|o| o == option);
        }
    }

    /// Move a choice field to the next (or previous) option, wrapping
    pub fn cycle_option(&mut self, forward: bool) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            let count = options.len();
            if count == 0 {
                return;
            }
            *selected = Some(match (*selected, forward) {
                (None, true) => 0,
                (None, false) => count - 1,
                (Some(i), true) => (i + 1) % count,
                (Some(0), false) => count - 1,
                (Some(i), false) => i - 1,
            });
        }
    }

    pub fn set_checked(&mut self, checked: bool) {
        if let FieldValue::Checkbox(c) = &mut self.value {
            *c = checked;
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(true))
    }

    /// Character count for fields with a length limit, e.g. "12 / 1000"
    pub fn counter(&self) -> Option<String> {
        self.max_len
            .map(|max| format!("{} / {}", self.as_text().chars().count(), max))
    }

    /// Back to the initial blank state
    pub fn reset(&mut self) {
        self.value = self.value.blank();
        self.error = None;
        self.is_valid = self.has_required_value();
    }
}
