//! Success dialog with focus containment

use super::focus::{ElementId, FocusSurface, Focusable, KeyDisposition, NavKey};

/// What a pointer click inside the modal layer landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed backdrop around the dialog box
    Overlay,
    /// An element flagged as closing the dialog
    CloseTarget,
    /// Anything else inside the dialog box
    Content,
}

/// The single modal dialog of the form
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    is_visible: bool,
    prior_focus: Option<ElementId>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// Keyboard navigation is intercepted exactly while the dialog is shown
    pub fn intercepts_keys(&self) -> bool {
        self.is_visible
    }

    #[allow(dead_code)] // the adapter tracks focus itself
    pub fn prior_focus(&self) -> Option<&ElementId> {
        self.prior_focus.as_ref()
    }

    fn tabbable(surface: &dyn FocusSurface) -> Vec<ElementId> {
        surface
            .modal_focusables()
            .into_iter()
            .filter(Focusable::is_tabbable)
            .map(|f| f.id)
            .collect()
    }

    /// Show the dialog and move focus into it. No-op if already open.
    pub fn open(&mut self, surface: &mut dyn FocusSurface) -> bool {
        if self.is_visible {
            return false;
        }
        self.prior_focus = surface.focused();
        self.is_visible = true;
        if let Some(first) = Self::tabbable(surface).into_iter().next() {
            surface.focus(&first);
        }
        tracing::debug!(prior = ?self.prior_focus, "modal opened");
        true
    }

    /// Hide the dialog and hand focus back to whatever held it before
    pub fn close(&mut self, surface: &mut dyn FocusSurface) -> bool {
        if !self.is_visible {
            return false;
        }
        self.is_visible = false;
        if let Some(prior) = self.prior_focus.take() {
            if !surface.focus(&prior) {
                tracing::debug!(?prior, "previously focused element can no longer take focus");
            }
        }
        tracing::debug!("modal closed");
        true
    }

    /// Route a key press while the dialog is open
    pub fn handle_key(&mut self, key: NavKey, surface: &mut dyn FocusSurface) -> KeyDisposition {
        if !self.is_visible {
            return KeyDisposition::PassThrough;
        }
        match key {
            NavKey::Escape => {
                self.close(surface);
                KeyDisposition::Handled
            }
            NavKey::Tab | NavKey::BackTab => Self::contain_focus(key, surface),
            _ => KeyDisposition::PassThrough,
        }
    }

    /// Wrap Tab at the last element and Shift+Tab at the first. The focusable
    /// set is re-read on every press since the dialog content may change.
    fn contain_focus(key: NavKey, surface: &mut dyn FocusSurface) -> KeyDisposition {
        let elements = Self::tabbable(surface);
        let (Some(first), Some(last)) = (elements.first(), elements.last()) else {
            return KeyDisposition::PassThrough;
        };
        let focused = surface.focused();

        let target = match key {
            NavKey::BackTab if focused.as_ref() == Some(first) => last,
            NavKey::Tab if focused.as_ref() == Some(last) => first,
            _ => return KeyDisposition::PassThrough,
        };
        surface.focus(target);
        KeyDisposition::Handled
    }

    /// Close when the backdrop or a close target is clicked
    pub fn handle_click(&mut self, target: ClickTarget, surface: &mut dyn FocusSurface) -> bool {
        match target {
            ClickTarget::Overlay | ClickTarget::CloseTarget => self.close(surface),
            ClickTarget::Content => false,
        }
    }
}
