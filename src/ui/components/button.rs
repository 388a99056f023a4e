//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Spinner frames for a button with work in flight
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render the submit button; `loading_frame` is set while a submission runs
pub fn render_submit_button(
    frame: &mut Frame,
    area: Rect,
    is_selected: bool,
    is_enabled: bool,
    loading_frame: Option<usize>,
) {
    match loading_frame {
        Some(tick) => {
            let label = format!("{} Submitting…", SPINNER[tick % SPINNER.len()]);
            render_button(frame, area, &label, is_selected, false);
        }
        None => render_button(frame, area, "Submit application", is_selected, is_enabled),
    }
}
