//! Resume attachment policy

use super::error::AttachmentError;
use std::path::Path;

pub const MEDIA_TYPE_PDF: &str = "application/pdf";
pub const MEDIA_TYPE_DOC: &str = "application/msword";
pub const MEDIA_TYPE_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Media types accepted for the resume
pub const ALLOWED_MEDIA_TYPES: [&str; 3] = [MEDIA_TYPE_PDF, MEDIA_TYPE_DOC, MEDIA_TYPE_DOCX];

/// Largest accepted resume (5 MiB)
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

/// A file as reported by the file-selection surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
    pub media_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            media_type: media_type.into(),
        }
    }

    /// Declared media type for a path, derived from its extension
    pub fn media_type_for(path: &Path) -> &'static str {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("pdf") => MEDIA_TYPE_PDF,
            Some("doc") => MEDIA_TYPE_DOC,
            Some("docx") => MEDIA_TYPE_DOCX,
            Some("txt") => "text/plain",
            Some("png") => "image/png",
            Some("jpg" | "jpeg") => "image/jpeg",
            _ => "application/octet-stream",
        }
    }
}

/// Current verdict on the selected resume
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentState {
    pub file: Option<SelectedFile>,
    pub is_valid: bool,
    pub error: Option<AttachmentError>,
    /// Display text such as "resume.pdf — 2.00 MB"
    pub summary: Option<String>,
    /// The selection surface must drop its current file
    pub clear_selection: bool,
}

/// Evaluates selected files against the type/size policy
#[derive(Debug, Clone)]
pub struct AttachmentValidator {
    state: AttachmentState,
    max_bytes: u64,
}

impl AttachmentValidator {
    pub fn new(max_bytes: u64) -> Self {
        Self {
            state: AttachmentState::default(),
            max_bytes,
        }
    }

    /// Replace the current verdict with one for `file`. `None` means the
    /// picker was cleared, which is invalid but shows no error.
    pub fn evaluate(&mut self, file: Option<SelectedFile>) -> &AttachmentState {
        self.state = match file {
            None => AttachmentState::default(),
            Some(file) => match self.check(&file) {
                Ok(()) => {
                    tracing::info!(name = %file.name, size = file.size_bytes, "resume accepted");
                    AttachmentState {
                        summary: Some(format!(
                            "{} — {:.2} MB",
                            file.name,
                            file.size_bytes as f64 / 1024.0 / 1024.0
                        )),
                        file: Some(file),
                        is_valid: true,
                        error: None,
                        clear_selection: false,
                    }
                }
                Err(err) => {
                    tracing::info!(name = %file.name, %err, "resume rejected");
                    AttachmentState {
                        file: None,
                        is_valid: false,
                        error: Some(err),
                        summary: None,
                        clear_selection: true,
                    }
                }
            },
        };
        &self.state
    }

    fn check(&self, file: &SelectedFile) -> Result<(), AttachmentError> {
        if !ALLOWED_MEDIA_TYPES.contains(&file.media_type.as_str()) {
            return Err(AttachmentError::UnsupportedType {
                media_type: file.media_type.clone(),
            });
        }
        if file.size_bytes > self.max_bytes {
            return Err(AttachmentError::TooLarge {
                size_bytes: file.size_bytes,
                max_bytes: self.max_bytes,
            });
        }
        Ok(())
    }

    pub fn state(&self) -> &AttachmentState {
        &self.state
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_valid
    }

    /// Forget the current file and any error
    pub fn reset(&mut self) {
        self.state = AttachmentState::default();
    }
}

impl Default for AttachmentValidator {
    fn default() -> Self {
        Self::new(MAX_ATTACHMENT_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pdf(size_bytes: u64) -> SelectedFile {
        SelectedFile::new("resume.pdf", size_bytes, MEDIA_TYPE_PDF)
    }

    #[test]
    fn test_initial_state_is_invalid_and_silent() {
        let validator = AttachmentValidator::default();
        assert!(!validator.is_valid());
        assert!(validator.state().error.is_none());
    }

    #[test]
    fn test_accepts_exact_maximum_size() {
        let mut validator = AttachmentValidator::default();
        let state = validator.evaluate(Some(pdf(MAX_ATTACHMENT_BYTES)));
        assert!(state.is_valid);
        assert_eq!(state.summary.as_deref(), Some("resume.pdf — 5.00 MB"));
    }

    #[test]
    fn test_rejects_one_byte_over_maximum() {
        let mut validator = AttachmentValidator::default();
        let state = validator.evaluate(Some(pdf(MAX_ATTACHMENT_BYTES + 1)));
        assert!(!state.is_valid);
        assert_eq!(
            state.error.as_ref().map(ToString::to_string).as_deref(),
            Some("File is too large (max 5MB).")
        );
        assert!(state.clear_selection);
        assert!(state.summary.is_none());
    }

    #[test]
    fn test_accepts_every_allowed_type() {
        for media_type in ALLOWED_MEDIA_TYPES {
            let mut validator = AttachmentValidator::default();
            let state = validator.evaluate(Some(SelectedFile::new("cv", 10, media_type)));
            assert!(state.is_valid, "{media_type}");
        }
    }

    #[test]
    fn test_rejects_other_types_even_when_small() {
        for media_type in ["image/png", "text/plain", "application/zip", ""] {
            let mut validator = AttachmentValidator::default();
            let state = validator.evaluate(Some(SelectedFile::new("cv", 10, media_type)));
            assert!(!state.is_valid, "{media_type}");
            assert_eq!(
                state.error,
                Some(AttachmentError::UnsupportedType {
                    media_type: media_type.to_string()
                })
            );
        }
    }

    #[test]
    fn test_summary_uses_two_decimals() {
        let mut validator = AttachmentValidator::default();
        let state = validator.evaluate(Some(pdf(2 * 1024 * 1024)));
        assert_eq!(state.summary.as_deref(), Some("resume.pdf — 2.00 MB"));

        let state = validator.evaluate(Some(pdf(1_500_000)));
        assert_eq!(state.summary.as_deref(), Some("resume.pdf — 1.43 MB"));
    }

    #[test]
    fn test_cleared_picker_drops_previous_verdict() {
        let mut validator = AttachmentValidator::default();
        validator.evaluate(Some(pdf(100)));
        let state = validator.evaluate(None);
        assert_eq!(state, &AttachmentState::default());
    }

    #[test]
    fn test_valid_file_replaces_previous_error() {
        let mut validator = AttachmentValidator::default();
        validator.evaluate(Some(SelectedFile::new("a.png", 1, "image/png")));
        let state = validator.evaluate(Some(pdf(100)));
        assert!(state.is_valid);
        assert!(state.error.is_none());
        assert!(!state.clear_selection);
    }

    #[test]
    fn test_reset() {
        let mut validator = AttachmentValidator::default();
        validator.evaluate(Some(pdf(100)));
        validator.reset();
        assert!(!validator.is_valid());
        assert!(validator.state().summary.is_none());
    }

    #[test]
    fn test_media_type_for_extension() {
        assert_eq!(SelectedFile::media_type_for(Path::new("cv.PDF")), MEDIA_TYPE_PDF);
        assert_eq!(SelectedFile::media_type_for(Path::new("cv.doc")), MEDIA_TYPE_DOC);
        assert_eq!(SelectedFile::media_type_for(Path::new("cv.docx")), MEDIA_TYPE_DOCX);
        assert_eq!(
            SelectedFile::media_type_for(Path::new("cv")),
            "application/octet-stream"
        );
    }
}
