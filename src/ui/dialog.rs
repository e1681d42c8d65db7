//! Notice dialog overlay

use crate::state::{Notice, NoticeKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the current notice centered over the form
pub fn draw_notice(frame: &mut Frame, notice: &Notice) {
    let (title, color) = match notice.kind {
        NoticeKind::LookupNoData => ("Sin datos", Color::Yellow),
        NoticeKind::MustConsult => ("Consulta requerida", Color::Yellow),
        NoticeKind::SubmitSuccess => ("Enviado", Color::Green),
        NoticeKind::SubmitFailed => ("Error", Color::Red),
    };

    // Transient notices clear themselves; the sticky ones show a hint
    let hint = match notice.kind {
        NoticeKind::LookupNoData | NoticeKind::MustConsult => Some(vec![
            Span::raw("Presione "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" o "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" para cerrar"),
        ]),
        NoticeKind::SubmitSuccess | NoticeKind::SubmitFailed => None,
    };

    render_dialog(frame, title, color, notice.message(), hint);
}

const MAX_DIALOG_WIDTH: u16 = 56;

fn render_dialog(
    frame: &mut Frame,
    title: &str,
    color: Color,
    message: &str,
    hint: Option<Vec<Span>>,
) {
    let area = frame.area();
    let padding = 4u16;
    let max_line_width = (MAX_DIALOG_WIDTH - padding) as usize;

    let wrapped = wrap_text(message, max_line_width);

    let content_width = wrapped
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.chars().count()) as u16;
    let dialog_width = (content_width + padding + 2).min(MAX_DIALOG_WIDTH);

    let hint_lines = if hint.is_some() { 2 } else { 0 };
    let dialog_height = (2 + wrapped.len() as u16 + hint_lines + 2).max(5);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width.min(area.width),
        height: dialog_height.min(area.height),
    };

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for line in wrapped {
        content.push(Line::from(line));
    }
    if let Some(hint) = hint {
        content.push(Line::from(""));
        content.push(Line::from(hint));
    }

    let dialog = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(dialog, dialog_area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + word.chars().count() + 1 > max_width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
