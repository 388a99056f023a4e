//! UI module for rendering the TUI

mod components;
mod form;
mod layout;
mod side_panel;

use crate::app::App;
use crate::state::ElementId;
use components::{render_dialog, render_toast, DialogConfig};
use ratatui::Frame;

pub use layout::{modal_area, modal_close_area, modal_done_area, toast_area};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, form_area, side_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area);
    form::draw(frame, form_area, app);
    side_panel::draw(frame, side_area, app);
    layout::draw_status_bar(frame, app);

    if app.form.modal().is_visible() {
        render_dialog(
            frame,
            DialogConfig {
                title: "Application sent",
                message: crate::state::SUCCESS_MESSAGE,
                close_focused: app.focus.is_focused(&ElementId::ModalClose),
                done_focused: app.focus.is_focused(&ElementId::ModalDone),
            },
        );
    }

    // Toast stays on top of everything
    if app.form.toast().is_visible() {
        render_toast(frame, app.form.toast().message());
    }
}
