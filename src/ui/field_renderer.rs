//! Field rendering utilities for the intake form

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let (style, border_style) = if is_active {
        (
            Style::default().fg(Color::White),
            Style::default().fg(Color::Cyan),
        )
    } else if field.read_only {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let display_value = field.display_value();
    let is_placeholder =
        matches!(field.value, FieldValue::DocumentSelect(None)) || display_value.is_empty();
    let value_style = if is_placeholder {
        style.fg(Color::DarkGray)
    } else {
        style
    };

    let cursor = if is_active && !field.read_only { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let mut title = format!(" {} ", field.label);
    if field.read_only && !is_active {
        title.push_str("(solo lectura) ");
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Draw a one-line validation error under a field
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(Span::styled(
        format!("  ⚠ {message}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
