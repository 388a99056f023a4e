//! Success dialog component

use crate::ui::layout::{modal_area, modal_close_area, modal_done_area};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering the dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub message: &'a str,
    /// Close control "[×]" has focus
    pub close_focused: bool,
    /// Primary button has focus
    pub done_focused: bool,
}

/// Render the modal: dimmed backdrop plus a centered box
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();

    // Backdrop
    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black).fg(Color::DarkGray)),
        area,
    );

    let dialog_area = modal_area(area);
    frame.render_widget(Clear, dialog_area);

    let padding = 4u16;
    let max_line_width = dialog_area.width.saturating_sub(padding) as usize;

    let focus_style = |focused: bool| {
        if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        }
    };

    let mut content = vec![Line::from("")];
    for line in wrap_text(config.message, max_line_width) {
        content.push(Line::from(line));
    }

    let dialog = Paragraph::new(content).block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", config.title),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .style(Style::default().bg(Color::Black).fg(Color::White)),
    );
    frame.render_widget(dialog, dialog_area);

    frame.render_widget(
        Paragraph::new(" Done ").style(focus_style(config.done_focused)),
        modal_done_area(dialog_area),
    );

    // Close control drawn over the top border
    frame.render_widget(
        Paragraph::new("[×]").style(focus_style(config.close_focused)),
        modal_close_area(dialog_area),
    );
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_width = current_line.chars().count();
            if current_width + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(format!("  {current_line}"));
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        lines.push(format!("  {current_line}"));
    }

    lines
}
