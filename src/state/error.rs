//! Advisory validation errors
//!
//! The `Display` text of each variant is exactly what the form shows next to
//! the offending control.

use thiserror::Error;

/// Per-field validation failure surfaced on blur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Enter a valid phone number")]
    InvalidPhone,
}

/// Resume attachment policy violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("Please upload a PDF or Word document.")]
    UnsupportedType { media_type: String },
    #[error("File is too large (max 5MB).")]
    TooLarge { size_bytes: u64, max_bytes: u64 },
}
