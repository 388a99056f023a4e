//! Focus primitives shared between the form core and its presentation

use super::field::FieldId;
use super::skills::SkillId;

/// Every focusable control the form can present
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementId {
    Field(FieldId),
    Resume,
    SkillInput,
    Skill(SkillId),
    Submit,
    ModalClose,
    ModalDone,
}

/// A candidate for keyboard focus, as listed by the presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Focusable {
    pub id: ElementId,
    /// Explicit tab index; `Some(-1)` takes the element out of keyboard order
    pub tab_index: Option<i32>,
    pub disabled: bool,
}

impl Focusable {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            tab_index: None,
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Whether keyboard navigation may land here
    pub fn is_tabbable(&self) -> bool {
        !self.disabled && self.tab_index != Some(-1)
    }
}

/// Keyboard input relevant to focus handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Tab,
    BackTab,
    Escape,
    Enter,
    Space,
    Other,
}

/// Whether a key was consumed or should get its default handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    Handled,
    PassThrough,
}

/// Focus capability provided by the presentation surface
#[cfg_attr(test, mockall::automock)]
pub trait FocusSurface {
    /// Focusable descendants of the modal dialog, in display order
    fn modal_focusables(&self) -> Vec<Focusable>;

    /// The element currently holding focus
    fn focused(&self) -> Option<ElementId>;

    /// Move focus to `id`. Returns false if the element cannot take focus.
    fn focus(&mut self, id: &ElementId) -> bool;
}
