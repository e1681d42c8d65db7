//! Page layout, header and status bar

use crate::app::App;
use crate::state::Phase;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, main content and status bar
pub fn split(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draw the venue header
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(
            app.venue(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ·  Solicitud de Factura Electrónica"),
    ]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Draw the bottom status bar with key hints and the in-flight indicator
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = match app.state.phase {
        Phase::Consulting { .. } => Span::styled(
            " Consultando... ",
            Style::default().fg(Color::Yellow),
        ),
        Phase::Submitting => Span::styled(" Enviando... ", Style::default().fg(Color::Yellow)),
        Phase::Consulted => Span::styled(" Documento consultado ", Style::default().fg(Color::Green)),
        Phase::Expired => Span::styled(" Enlace vencido ", Style::default().fg(Color::Red)),
        Phase::Idle => Span::raw(""),
    };

    let hints = Line::from(vec![
        status,
        Span::styled(" Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" campo siguiente  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" activar  "),
        Span::styled("Ctrl+C", Style::default().fg(Color::Cyan)),
        Span::raw(" salir"),
    ]);

    frame.render_widget(Paragraph::new(hints), area);
}
