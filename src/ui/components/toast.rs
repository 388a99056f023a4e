//! Toast notification component

use crate::ui::layout::toast_area;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the toast in the top-right corner with its close control
pub fn render_toast(frame: &mut Frame, message: &str) {
    let area = toast_area(frame.area());
    frame.render_widget(Clear, area);

    let toast = Paragraph::new(Line::from(vec![
        Span::styled("✓ ", Style::default().fg(Color::Green)),
        Span::styled(message, Style::default().fg(Color::White)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title_bottom(Line::from(" click to dismiss ").right_aligned())
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(toast, area);
}
