//! Form state: validation, attachment policy, skills, modal, toast and
//! submission, independent of how they are presented.

mod application_form;
mod attachment;
mod error;
mod field;
mod focus;
mod gate;
mod modal;
mod skills;
mod submission;
mod timer;
mod toast;
mod validation;

pub use application_form::{ApplicationForm, SUCCESS_MESSAGE};
pub use attachment::SelectedFile;
pub use field::{FieldId, FieldState, FieldValue};
pub use focus::{ElementId, FocusSurface, Focusable, KeyDisposition, NavKey};
pub use modal::ClickTarget;
pub use skills::{AddOutcome, PulseKind, Skill, SkillId};
pub use submission::SubmissionState;
