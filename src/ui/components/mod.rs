//! Reusable UI components

mod button;
mod dialog;
mod toast;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use dialog::{render_dialog, DialogConfig};
pub use toast::render_toast;
