//! Intake form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::{Focus, Phase, BUTTON_CONSULT, BUTTON_SUBMIT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the single-page intake form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // table number
            Constraint::Length(3), // document type
            Constraint::Length(3), // document number
            Constraint::Length(3), // legal name
            Constraint::Length(3), // email
            Constraint::Length(1), // email error
            Constraint::Length(3), // phone
            Constraint::Length(1), // phone error
            Constraint::Length(3), // buttons
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let form = &app.state.form;
    let focus = form.focus;

    draw_field(frame, chunks[0], &form.table_number, focus == Focus::TableNumber);
    draw_field(frame, chunks[1], &form.document_type, focus == Focus::DocumentType);
    draw_field(frame, chunks[2], &form.document_number, focus == Focus::DocumentNumber);
    draw_field(frame, chunks[3], &form.legal_name, false);
    draw_field(frame, chunks[4], &form.email, focus == Focus::Email);

    if let Some(err) = form.email_error() {
        draw_field_error(frame, chunks[5], err.message());
    }

    draw_field(frame, chunks[6], &form.phone, focus == Focus::Phone);

    if app.phone_error_visible() {
        draw_field_error(frame, chunks[7], "El teléfono debe tener exactamente 10 dígitos");
    }

    draw_buttons(frame, chunks[8], app);
}

/// Draw the Consultar / Solicitar action row
fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let form = &app.state.form;
    let on_buttons = form.focus == Focus::Buttons;

    let consult_label = match app.state.phase {
        Phase::Consulting { .. } => "Consultando...",
        Phase::Consulted => "Consultado ✓",
        _ => "Consultar",
    };
    let submit_label = if matches!(app.state.phase, Phase::Submitting) {
        "Enviando..."
    } else {
        "Solicitar"
    };

    draw_button(
        frame,
        chunks[0],
        consult_label,
        Color::Blue,
        on_buttons && form.selected_button == BUTTON_CONSULT,
    );
    draw_button(
        frame,
        chunks[1],
        submit_label,
        Color::Green,
        on_buttons && form.selected_button == BUTTON_SUBMIT,
    );
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str, color: Color, selected: bool) {
    let style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    let border_style = if selected {
        Style::default().fg(color)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button = Paragraph::new(Line::from(Span::styled(format!(" {label} "), style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(button, area);
}
