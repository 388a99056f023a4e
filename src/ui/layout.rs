//! Layout components (header, form columns, status bar, overlays)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{ElementId, FieldId};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Success dialog size
const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 9;
const DONE_WIDTH: u16 = 6;

/// Toast size
const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 3;

/// Split the screen into header, (form, side panel) and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    (rows[0], columns[0], columns[1])
}

/// Centered dialog box of the success modal
pub fn modal_area(area: Rect) -> Rect {
    let width = MODAL_WIDTH.min(area.width);
    let height = MODAL_HEIGHT.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// The "[×]" close control in the dialog's top-right corner
pub fn modal_close_area(dialog: Rect) -> Rect {
    Rect {
        x: dialog.x + dialog.width.saturating_sub(5),
        y: dialog.y,
        width: 3.min(dialog.width),
        height: 1.min(dialog.height),
    }
}

/// The " Done " button on the dialog's last inner row
pub fn modal_done_area(dialog: Rect) -> Rect {
    let x = dialog.x + 3.min(dialog.width);
    Rect {
        x,
        y: dialog.y + dialog.height.saturating_sub(2),
        width: DONE_WIDTH.min((dialog.x + dialog.width).saturating_sub(x)),
        height: 1.min(dialog.height),
    }
}

/// Toast box in the top-right corner, below the header
pub fn toast_area(area: Rect) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height: TOAST_HEIGHT.min(area.height.saturating_sub(1)),
    }
}

/// Draw the one-line header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Job Application ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Fields marked * are required",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    let hints = get_focus_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    if let Some(msg) = app.form.success_message() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
        if let Some(receipt) = app.form.last_receipt() {
            let short_ref: String = receipt.reference.simple().to_string().chars().take(8).collect();
            spans.push(Span::styled(
                format!(" (ref {short_ref})"),
                Style::default().fg(Color::Gray),
            ));
        }
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused control
fn get_focus_hints(app: &App) -> String {
    if app.form.modal().is_visible() {
        return "Tab:next  Enter:close  Esc:close".to_string();
    }
    let control = match app.focus.current() {
        Some(ElementId::Field(FieldId::Position)) => "←/→:choose",
        Some(ElementId::Field(FieldId::Consent)) => "Space:toggle",
        Some(ElementId::Field(FieldId::CoverLetter)) => "Enter:newline",
        Some(ElementId::Resume) => "type a path  Enter:attach",
        Some(ElementId::SkillInput) => "Enter:add skill",
        Some(ElementId::Skill(_)) => "Space:select  Del:remove",
        Some(ElementId::Submit) => "Enter:submit",
        _ => "type to edit",
    };
    format!("Tab:next  {control}  {SUBMIT_SHORTCUT}:submit")
}
