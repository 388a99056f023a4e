//! Form column: personal details, cover letter and the submit button

use super::components::{render_submit_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{ElementId, FieldState, FieldValue, SubmissionState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Single-line field height (top border + content + bottom border)
const FIELD_HEIGHT: u16 = 3;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Full name
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(FIELD_HEIGHT), // Phone
            Constraint::Length(FIELD_HEIGHT), // Position
            Constraint::Length(FIELD_HEIGHT), // Consent
            Constraint::Min(4),               // Cover letter
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .split(area);

    // Fields come out in form order, matching the chunks above
    for (chunk, field) in chunks.iter().zip(app.form.fields().fields()) {
        let is_active = app.focus.is_focused(&ElementId::Field(field.id));
        draw_field(frame, *chunk, field, is_active);
    }

    let loading_frame =
        (app.form.submission_state() == SubmissionState::Submitting).then_some(app.ticks);
    render_submit_button(
        frame,
        chunks[6],
        app.focus.is_focused(&ElementId::Submit),
        app.form.can_submit(),
        loading_frame,
    );
}

/// Draw a form field with its validation error on the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldState, is_active: bool) {
    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = match &field.value {
        FieldValue::Text(text) if field.is_multiline => {
            let mut lines: Vec<Line> = text.split('\n').map(|l| Line::from(l.to_string())).collect();
            if let Some(last) = lines.last_mut() {
                last.spans.push(cursor);
            }
            Paragraph::new(lines).style(text_style)
        }
        FieldValue::Text(text) => {
            Paragraph::new(Line::from(vec![Span::styled(text.as_str(), text_style), cursor]))
        }
        FieldValue::Choice { .. } => {
            let shown = if field.is_empty() {
                "Select a position".to_string()
            } else {
                field.as_text().to_string()
            };
            Paragraph::new(Line::from(vec![
                Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
                Span::styled(shown, text_style),
                Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
            ]))
        }
        FieldValue::Checkbox(checked) => {
            let mark = if *checked { "[x]" } else { "[ ]" };
            Paragraph::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(field.id.label(), text_style),
            ]))
        }
    };

    let title = match (&field.value, field.is_required) {
        (FieldValue::Checkbox(_), _) => " Consent * ".to_string(),
        (_, true) => format!(" {} * ", field.id.label()),
        (_, false) => format!(" {} ", field.id.label()),
    };

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(err) = &field.error {
        block = block.title_bottom(Span::styled(
            format!(" {err} "),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(counter) = field.counter() {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {counter} "),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
