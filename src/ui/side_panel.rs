//! Side panel: resume picker and skill tags

use crate::app::App;
use crate::state::{ElementId, PulseKind, Skill};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use std::time::Instant;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Resume path
            Constraint::Length(1), // Resume summary / error
            Constraint::Length(3), // Skill input
            Constraint::Min(0),    // Skill list
        ])
        .split(area);

    draw_resume(frame, chunks[0], chunks[1], app);
    draw_skill_input(frame, chunks[2], app);
    draw_skill_list(frame, chunks[3], app);
}

fn input_block(title: &str, is_active: bool, has_error: bool) -> Block<'_> {
    let border = if has_error {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn input_line(text: &str, placeholder: &'static str, is_active: bool) -> Line<'static> {
    let mut spans = if text.is_empty() && !is_active {
        vec![Span::styled(placeholder, Style::default().fg(Color::DarkGray))]
    } else {
        vec![Span::raw(text.to_string())]
    };
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn draw_resume(frame: &mut Frame, input_area: Rect, info_area: Rect, app: &App) {
    let is_active = app.focus.is_focused(&ElementId::Resume);
    let attachment = app.form.attachment();

    let input = Paragraph::new(input_line(
        &app.resume_path,
        "path to PDF or Word file",
        is_active,
    ))
    .block(input_block("Resume *", is_active, attachment.error.is_some()));
    frame.render_widget(input, input_area);

    let info = match (&attachment.error, &attachment.summary) {
        (Some(err), _) => Span::styled(format!(" {err}"), Style::default().fg(Color::Red)),
        (None, Some(summary)) => {
            Span::styled(format!(" {summary}"), Style::default().fg(Color::Green))
        }
        (None, None) => Span::styled(
            " PDF, DOC or DOCX, up to 5MB",
            Style::default().fg(Color::DarkGray),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(info)), info_area);
}

fn draw_skill_input(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.focus.is_focused(&ElementId::SkillInput);
    let input = Paragraph::new(input_line(
        app.form.skill_draft(),
        "add a skill and press Enter",
        is_active,
    ))
    .block(input_block("Add skill", is_active, false));
    frame.render_widget(input, area);
}

fn draw_skill_list(frame: &mut Frame, area: Rect, app: &App) {
    let now = Instant::now();
    let items: Vec<ListItem> = app
        .form
        .skills()
        .iter()
        .map(|skill| {
            let is_focused = app.focus.is_focused(&ElementId::Skill(skill.id.clone()));
            ListItem::new(skill_line(skill, is_focused, now))
        })
        .collect();

    let title = format!(" Skills ({} selected) ", app.form.skills().selected().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

fn skill_line(skill: &Skill, is_focused: bool, now: Instant) -> Line<'static> {
    let mark = if skill.is_selected { "[x]" } else { "[ ]" };

    let mut style = if skill.is_selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    // Strong highlight early in the pulse, fading to a tint
    if let Some(kind) = skill.pulse() {
        let color = match kind {
            PulseKind::Added => Color::Green,
            PulseKind::Duplicate => Color::Yellow,
        };
        style = if skill.pulse_intensity(now) > 0.5 {
            style.bg(color).fg(Color::Black)
        } else {
            style.fg(color)
        };
    }
    if is_focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    Line::from(vec![
        Span::styled(format!(" {mark} "), style),
        Span::styled(skill.display_text.clone(), style),
    ])
}
