//! UI module for rendering the TUI
//!
//! Pure rendering: everything here reads the workflow state and draws it.
//! No state transitions happen in this tree.

mod dialog;
mod expired;
mod field_renderer;
mod form;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area, status_area) = layout::split(area);
    layout::draw_header(frame, header_area, app);

    if app.state.phase.is_expired() {
        expired::draw(frame, main_area);
    } else {
        form::draw(frame, main_area, app);
    }

    layout::draw_status_bar(frame, status_area, app);

    // Notices overlay whatever is behind them
    if let Some(notice) = &app.state.notice {
        dialog::draw_notice(frame, notice);
    }
}
