//! Expiry screen
//!
//! The only thing rendered when the link's admission window has passed.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            "Enlace vencido",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from("Este enlace de facturación superó sus 10 minutos de validez."),
        Line::from("Escanee nuevamente el código QR de su mesa para obtener uno nuevo."),
        Line::from(Span::styled(
            "Presione q para salir",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let message = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(message, chunks[1]);
}
