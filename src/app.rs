//! Terminal adapter: turns key/mouse events into form operations

use crate::config::FormConfig;
use crate::state::{
    AddOutcome, ApplicationForm, ClickTarget, ElementId, FieldId, FieldValue, FocusSurface,
    Focusable, KeyDisposition, NavKey, SelectedFile, SkillId,
};
use crate::ui;
use anyhow::{bail, Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::path::Path;
use std::time::Instant;

/// Focus bookkeeping handed to the form as its [`FocusSurface`]
#[derive(Debug, Clone)]
pub struct FocusRing {
    focused: Option<ElementId>,
    form_order: Vec<Focusable>,
    modal_order: Vec<Focusable>,
}

impl Default for FocusRing {
    fn default() -> Self {
        Self {
            focused: Some(ElementId::Field(FieldId::FullName)),
            form_order: Vec::new(),
            modal_order: vec![
                Focusable::new(ElementId::ModalClose),
                Focusable::new(ElementId::ModalDone),
            ],
        }
    }
}

impl FocusRing {
    pub fn current(&self) -> Option<&ElementId> {
        self.focused.as_ref()
    }

    pub fn is_focused(&self, id: &ElementId) -> bool {
        self.focused.as_ref() == Some(id)
    }

    fn set_form_order(&mut self, order: Vec<Focusable>) {
        self.form_order = order;
    }

    fn in_form(&self) -> bool {
        self.focused
            .as_ref()
            .is_some_and(|id| self.form_order.iter().any(|f| &f.id == id && f.is_tabbable()))
    }

    /// Default Tab behaviour: next (or previous) tabbable element, wrapping
    fn step(&mut self, forward: bool, in_modal: bool) {
        let source = if in_modal {
            &self.modal_order
        } else {
            &self.form_order
        };
        let order: Vec<ElementId> = source
            .iter()
            .filter(|f| f.is_tabbable())
            .map(|f| f.id.clone())
            .collect();
        if order.is_empty() {
            return;
        }
        let count = order.len();
        let next = match self
            .focused
            .as_ref()
            .and_then(|id| order.iter().position(|o| o == id))
        {
            Some(i) if forward => (i + 1) % count,
            Some(0) => count - 1,
            Some(i) => i - 1,
            None if forward => 0,
            None => count - 1,
        };
        self.focused = Some(order[next].clone());
    }
}

impl FocusSurface for FocusRing {
    fn modal_focusables(&self) -> Vec<Focusable> {
        self.modal_order.clone()
    }

    fn focused(&self) -> Option<ElementId> {
        self.focused.clone()
    }

    fn focus(&mut self, id: &ElementId) -> bool {
        let focusable = self
            .form_order
            .iter()
            .chain(self.modal_order.iter())
            .any(|f| &f.id == id && !f.disabled);
        if focusable {
            self.focused = Some(id.clone());
        }
        focusable
    }
}

/// Main application struct
pub struct App {
    /// The form being filled in
    pub form: ApplicationForm,
    /// Keyboard focus
    pub focus: FocusRing,
    /// Path typed into the resume picker
    pub resume_path: String,
    /// Transient status-bar message
    pub status_message: Option<String>,
    /// Terminal size for hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Frames drawn so far, drives the submit spinner
    pub ticks: usize,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FormConfig) -> Self {
        let mut app = Self {
            form: ApplicationForm::new(config),
            focus: FocusRing::default(),
            resume_path: String::new(),
            status_message: None,
            terminal_size: None,
            ticks: 0,
            quit: false,
        };
        app.sync_focus();
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn screen(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    /// Rebuild the form's focus order from current state
    fn sync_focus(&mut self) {
        let mut order: Vec<Focusable> = FieldId::ALL
            .iter()
            .map(|&id| Focusable::new(ElementId::Field(id)))
            .collect();
        order.push(Focusable::new(ElementId::Resume));
        order.push(Focusable::new(ElementId::SkillInput));
        order.extend(
            self.form
                .skills()
                .iter()
                .map(|s| Focusable::new(ElementId::Skill(s.id.clone()))),
        );
        order.push(Focusable::new(ElementId::Submit).disabled(!self.form.can_submit()));
        self.focus.set_form_order(order);
    }

    /// Put focus back on the form if it was left somewhere unusable
    fn ensure_form_focus(&mut self) {
        self.sync_focus();
        if !self.form.modal().is_visible() && !self.focus.in_form() {
            self.focus.focus(&ElementId::Field(FieldId::FullName));
        }
    }

    /// Move focus with Tab semantics, running blur validation on the field left
    fn move_focus(&mut self, forward: bool) {
        let previous = self.focus.current().cloned();
        self.focus.step(forward, false);
        if let Some(ElementId::Field(id)) = previous {
            if self.focus.current() != Some(&ElementId::Field(id)) {
                self.form.blur(id);
            }
        }
    }

    /// Advance timers (pulses, submission round-trip, toast)
    pub fn tick(&mut self, now: Instant) {
        self.ticks = self.ticks.wrapping_add(1);
        self.sync_focus();
        self.form.tick(now, &mut self.focus);
        self.ensure_form_focus();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        self.sync_focus();
        let nav = nav_key(&key);

        if self.form.modal().intercepts_keys() {
            self.handle_modal_key(nav);
            self.ensure_form_focus();
            return;
        }

        // Clear any status messages on key press
        self.status_message = None;

        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit();
        } else if matches!(nav, NavKey::Tab | NavKey::BackTab) {
            self.move_focus(nav == NavKey::Tab);
        } else if nav == NavKey::Escape {
            self.form.hide_toast();
        } else if let Some(focused) = self.focus.current().cloned() {
            self.handle_element_key(focused, key, nav).await;
        }

        self.ensure_form_focus();
    }

    fn handle_modal_key(&mut self, nav: NavKey) {
        if self.form.modal_key(nav, &mut self.focus) == KeyDisposition::Handled {
            return;
        }
        match nav {
            NavKey::Tab => self.focus.step(true, true),
            NavKey::BackTab => self.focus.step(false, true),
            NavKey::Enter | NavKey::Space => {
                if matches!(
                    self.focus.current(),
                    Some(ElementId::ModalClose | ElementId::ModalDone)
                ) {
                    self.form.close_modal(&mut self.focus);
                }
            }
            _ => {}
        }
    }

    async fn handle_element_key(&mut self, focused: ElementId, key: KeyEvent, nav: NavKey) {
        match focused {
            ElementId::Field(id) => self.handle_field_key(id, key),
            ElementId::Resume => match key.code {
                KeyCode::Enter => self.select_resume().await,
                _ => edit_text(&mut self.resume_path, key, false),
            },
            ElementId::SkillInput => match key.code {
                KeyCode::Enter => self.add_skill(),
                _ => {
                    let mut draft = self.form.skill_draft().to_string();
                    edit_text(&mut draft, key, false);
                    self.form.set_skill_draft(&draft);
                }
            },
            ElementId::Skill(id) => match key.code {
                KeyCode::Delete | KeyCode::Backspace => self.remove_skill(&id),
                _ => {
                    self.form.activate_skill(&id, nav);
                }
            },
            ElementId::Submit => {
                if matches!(nav, NavKey::Enter | NavKey::Space) {
                    self.submit();
                }
            }
            ElementId::ModalClose | ElementId::ModalDone => {}
        }
    }

    fn handle_field_key(&mut self, id: FieldId, key: KeyEvent) {
        let field = self.form.fields().field(id);
        match &field.value {
            FieldValue::Text(current) => {
                let mut value = current.clone();
                edit_text(&mut value, key, field.is_multiline);
                if &value != current {
                    self.form.set_value(id, &value);
                }
            }
            FieldValue::Choice { .. } => match key.code {
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Down => {
                    self.form.cycle_option(id, true);
                }
                KeyCode::Left | KeyCode::Up => {
                    self.form.cycle_option(id, false);
                }
                _ => {}
            },
            FieldValue::Checkbox(checked) => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    let checked = !checked;
                    self.form.set_checked(id, checked);
                }
            }
        }
    }

    fn add_skill(&mut self) {
        if let AddOutcome::Duplicate(id) = self.form.add_skill(Instant::now()) {
            self.status_message = Some(format!("\"{id}\" is already listed"));
        }
    }

    fn remove_skill(&mut self, id: &SkillId) {
        if self.form.remove_skill(id) {
            self.sync_focus();
            self.focus.focus(&ElementId::SkillInput);
        }
    }

    fn submit(&mut self) {
        if !self.form.submit(Instant::now()) {
            self.status_message = Some("Complete the required fields first".to_string());
        }
    }

    /// Evaluate the typed resume path. A rejected file clears the picker.
    async fn select_resume(&mut self) {
        let path = self.resume_path.trim().to_string();
        let file = if path.is_empty() {
            None
        } else {
            match read_selected_file(Path::new(&path)).await {
                Ok(file) => Some(file),
                Err(err) => {
                    tracing::warn!("{err:#}");
                    self.status_message = Some(format!("{err:#}"));
                    None
                }
            }
        };
        if self.form.select_resume(file).clear_selection {
            self.resume_path.clear();
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        self.sync_focus();
        let screen = self.screen();
        let pos = Position::new(mouse.column, mouse.row);

        if self.form.modal().is_visible() {
            let dialog = ui::modal_area(screen);
            let target = if !dialog.contains(pos) {
                ClickTarget::Overlay
            } else if ui::modal_close_area(dialog).contains(pos)
                || ui::modal_done_area(dialog).contains(pos)
            {
                ClickTarget::CloseTarget
            } else {
                ClickTarget::Content
            };
            self.form.modal_click(target, &mut self.focus);
            self.ensure_form_focus();
            return;
        }

        if self.form.toast().is_visible() && ui::toast_area(screen).contains(pos) {
            self.form.hide_toast();
        }
    }
}

/// Map a terminal key to the navigation keys the form understands
fn nav_key(key: &KeyEvent) -> NavKey {
    match key.code {
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => NavKey::BackTab,
        KeyCode::Tab => NavKey::Tab,
        KeyCode::BackTab => NavKey::BackTab,
        KeyCode::Esc => NavKey::Escape,
        KeyCode::Enter => NavKey::Enter,
        KeyCode::Char(' ') => NavKey::Space,
        _ => NavKey::Other,
    }
}

/// Apply a typing key to a text buffer
fn edit_text(buffer: &mut String, key: KeyEvent, multiline: bool) {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return;
    }
    match key.code {
        KeyCode::Char(c) => buffer.push(c),
        KeyCode::Backspace => {
            buffer.pop();
        }
        KeyCode::Enter if multiline => buffer.push('\n'),
        _ => {}
    }
}

/// Describe a file on disk the way a file picker would
async fn read_selected_file(path: &Path) -> Result<SelectedFile> {
    let meta = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Cannot read {}", path.display()))?;
    if !meta.is_file() {
        bail!("{} is not a file", path.display());
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(SelectedFile::new(
        name,
        meta.len(),
        SelectedFile::media_type_for(path),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(c))
        }
    }

    fn test_app() -> App {
        App::new(&FormConfig {
            positions: Some(vec!["Backend Engineer".to_string()]),
            preset_skills: Some(vec!["Rust".to_string()]),
            ..Default::default()
        })
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await;
        }
    }

    async fn tab(app: &mut App) {
        app.handle_key(key(KeyCode::Tab)).await;
    }

    mod focus_ring {
        use super::*;

        #[test]
        fn test_starts_on_full_name() {
            let app = test_app();
            assert!(app.focus.is_focused(&ElementId::Field(FieldId::FullName)));
        }

        #[test]
        fn test_disabled_submit_is_skipped_and_cannot_take_focus() {
            let mut app = test_app();
            assert!(!app.focus.focus(&ElementId::Submit));
            app.focus.focus(&ElementId::Skill(SkillId::normalize("rust")));
            app.focus.step(true, false);
            // Wraps past the disabled submit button
            assert!(app.focus.is_focused(&ElementId::Field(FieldId::FullName)));
        }

        #[test]
        fn test_back_step_wraps_to_last() {
            let mut app = test_app();
            app.focus.step(false, false);
            assert!(app.focus.is_focused(&ElementId::Skill(SkillId::normalize("rust"))));
        }
    }

    mod typing {
        use super::*;

        #[tokio::test]
        async fn test_typing_sets_field_value() {
            let mut app = test_app();
            type_text(&mut app, "Ada").await;
            app.handle_key(key(KeyCode::Backspace)).await;
            assert_eq!(app.form.fields().field(FieldId::FullName).as_text(), "Ad");
        }

        #[tokio::test]
        async fn test_leaving_empty_required_field_shows_error() {
            let mut app = test_app();
            tab(&mut app).await;
            assert!(app.focus.is_focused(&ElementId::Field(FieldId::Email)));
            assert!(app.form.fields().field(FieldId::FullName).error.is_some());
        }

        #[tokio::test]
        async fn test_space_toggles_consent_and_arrows_cycle_position() {
            let mut app = test_app();
            app.focus.focus(&ElementId::Field(FieldId::Position));
            app.handle_key(key(KeyCode::Right)).await;
            assert_eq!(
                app.form.fields().field(FieldId::Position).as_text(),
                "Backend Engineer"
            );

            app.focus.focus(&ElementId::Field(FieldId::Consent));
            app.handle_key(key(KeyCode::Char(' '))).await;
            assert!(app.form.fields().field(FieldId::Consent).is_checked());
        }

        #[tokio::test]
        async fn test_enter_in_skill_input_adds_skill() {
            let mut app = test_app();
            app.focus.focus(&ElementId::SkillInput);
            type_text(&mut app, "Node.js!!").await;
            app.handle_key(key(KeyCode::Enter)).await;
            assert!(app.form.skills().get(&SkillId::normalize("node-js")).is_some());
            assert_eq!(app.form.skill_draft(), "");
        }

        #[tokio::test]
        async fn test_duplicate_skill_sets_status() {
            let mut app = test_app();
            app.focus.focus(&ElementId::SkillInput);
            type_text(&mut app, "RUST").await;
            app.handle_key(key(KeyCode::Enter)).await;
            assert_eq!(app.form.skills().len(), 1);
            assert!(app.status_message.is_some());
        }

        #[tokio::test]
        async fn test_skill_entry_toggle_and_remove() {
            let mut app = test_app();
            let id = SkillId::normalize("rust");
            app.focus.focus(&ElementId::Skill(id.clone()));
            app.handle_key(key(KeyCode::Enter)).await;
            assert!(app.form.skills().get(&id).unwrap().is_selected);

            app.handle_key(key(KeyCode::Delete)).await;
            assert!(app.form.skills().is_empty());
            assert!(app.focus.is_focused(&ElementId::SkillInput));
        }

        #[tokio::test]
        async fn test_ctrl_c_quits() {
            let mut app = test_app();
            app.handle_key(ctrl('c')).await;
            assert!(app.should_quit());
        }
    }

    mod resume {
        use super::*;

        #[tokio::test]
        async fn test_missing_file_reports_status() {
            let mut app = test_app();
            app.focus.focus(&ElementId::Resume);
            type_text(&mut app, "/definitely/not/here.pdf").await;
            app.handle_key(key(KeyCode::Enter)).await;
            assert!(app.status_message.is_some());
            assert!(!app.form.attachment().is_valid);
        }

        #[tokio::test]
        async fn test_rejected_file_clears_path() {
            let path = std::env::temp_dir().join(format!("apply-tui-{}.txt", uuid::Uuid::new_v4()));
            std::fs::write(&path, "plain text").unwrap();

            let mut app = test_app();
            app.focus.focus(&ElementId::Resume);
            app.resume_path = path.display().to_string();
            app.handle_key(key(KeyCode::Enter)).await;
            std::fs::remove_file(&path).unwrap();

            assert!(app.resume_path.is_empty());
            assert_eq!(
                app.form.attachment().error.as_ref().map(ToString::to_string),
                Some("Please upload a PDF or Word document.".to_string())
            );
        }

        #[tokio::test]
        async fn test_accepted_file_shows_summary() {
            let path = std::env::temp_dir().join(format!("apply-tui-{}.pdf", uuid::Uuid::new_v4()));
            std::fs::write(&path, vec![0u8; 1024]).unwrap();

            let mut app = test_app();
            app.focus.focus(&ElementId::Resume);
            app.resume_path = path.display().to_string();
            app.handle_key(key(KeyCode::Enter)).await;
            std::fs::remove_file(&path).unwrap();

            assert!(app.form.attachment().is_valid);
            assert!(app
                .form
                .attachment()
                .summary
                .as_deref()
                .is_some_and(|s| s.ends_with("0.00 MB")));
        }
    }

    mod modal {
        use super::*;
        use crate::state::SubmissionState;
        use std::time::Duration;

        async fn submitted_app() -> App {
            let path = std::env::temp_dir().join(format!("apply-tui-{}.pdf", uuid::Uuid::new_v4()));
            std::fs::write(&path, b"%PDF").unwrap();

            let mut app = test_app();
            type_text(&mut app, "Ada").await;
            tab(&mut app).await;
            type_text(&mut app, "ada@example.com").await;
            tab(&mut app).await;
            type_text(&mut app, "555 1234").await;
            tab(&mut app).await;
            app.handle_key(key(KeyCode::Right)).await;
            tab(&mut app).await;
            app.handle_key(key(KeyCode::Char(' '))).await;
            app.focus.focus(&ElementId::Resume);
            app.resume_path = path.display().to_string();
            app.handle_key(key(KeyCode::Enter)).await;
            std::fs::remove_file(&path).unwrap();

            assert!(app.form.is_ready());
            app.sync_focus();
            assert!(app.focus.focus(&ElementId::Submit));
            app.handle_key(key(KeyCode::Enter)).await;
            assert_eq!(app.form.submission_state(), SubmissionState::Submitting);
            // Submit is disabled while in flight, so focus moves back to the form start
            assert!(app.focus.is_focused(&ElementId::Field(FieldId::FullName)));

            app.tick(Instant::now() + Duration::from_secs(1));
            app
        }

        #[tokio::test]
        async fn test_submission_opens_modal_with_focus_inside() {
            let app = submitted_app().await;
            assert!(app.form.modal().is_visible());
            assert!(app.form.toast().is_visible());
            assert!(app.focus.is_focused(&ElementId::ModalClose));
        }

        #[tokio::test]
        async fn test_tab_stays_inside_modal() {
            let mut app = submitted_app().await;
            tab(&mut app).await;
            assert!(app.focus.is_focused(&ElementId::ModalDone));
            tab(&mut app).await;
            assert!(app.focus.is_focused(&ElementId::ModalClose));
            app.handle_key(key(KeyCode::BackTab)).await;
            assert!(app.focus.is_focused(&ElementId::ModalDone));
        }

        #[tokio::test]
        async fn test_escape_closes_and_returns_focus_to_form() {
            let mut app = submitted_app().await;
            app.handle_key(key(KeyCode::Esc)).await;
            assert!(!app.form.modal().is_visible());
            // Submit was disabled while submitting, so the first field held focus
            assert!(app.focus.is_focused(&ElementId::Field(FieldId::FullName)));
        }

        #[tokio::test]
        async fn test_click_outside_dialog_closes() {
            let mut app = submitted_app().await;
            app.terminal_size = Some((40, 120));
            app.handle_mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            });
            assert!(!app.form.modal().is_visible());
        }

        fn left_click(column: u16, row: u16) -> MouseEvent {
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            }
        }

        #[tokio::test]
        async fn test_click_on_done_closes() {
            let mut app = submitted_app().await;
            app.terminal_size = Some((40, 120));
            let done = ui::modal_done_area(ui::modal_area(Rect::new(0, 0, 120, 40)));
            app.handle_mouse(left_click(done.x + 1, done.y));
            assert!(!app.form.modal().is_visible());
            assert!(app.focus.is_focused(&ElementId::Field(FieldId::FullName)));
        }

        #[tokio::test]
        async fn test_click_on_message_keeps_dialog_open() {
            let mut app = submitted_app().await;
            app.terminal_size = Some((40, 120));
            let dialog = ui::modal_area(Rect::new(0, 0, 120, 40));
            app.handle_mouse(left_click(dialog.x + 10, dialog.y + 2));
            assert!(app.form.modal().is_visible());
        }
    }
}
