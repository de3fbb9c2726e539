//! Bottom status bar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::helpers::{display_width, truncate_to_width};
use crate::app::App;
use crate::view_mode::ViewMode;

/// Right-hand segments: line count, language, encoding.
pub fn status_segments(app: &App) -> Vec<String> {
    match app.view.mode() {
        ViewMode::Editor => vec![
            format!("Ln {}", app.viewer.line_count()),
            app.language.label().to_string(),
            "UTF-8".to_string(),
        ],
        ViewMode::Resume => vec!["Resume".to_string()],
    }
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let base = Style::default().bg(palette.bg_secondary).fg(palette.text_secondary);
    let buf = frame.buffer_mut();
    buf.set_style(area, base);

    let right = format!(" {} ", status_segments(app).join("  "));
    let right_width = display_width(&right).min(area.width);
    let right_x = area.right().saturating_sub(right_width);
    buf.set_span(right_x, area.y, &Span::styled(right, base), right_width);

    let left_width = right_x.saturating_sub(area.x + 1) as usize;
    let mut spans = Vec::new();
    if let Some(path) = app.viewer.path().filter(|_| app.view.mode() == ViewMode::Editor) {
        spans.push(Span::styled(format!(" {}", path), base));
    }
    if let Some((notice, _)) = &app.notice {
        spans.push(Span::styled(
            format!("  {}", notice),
            base.fg(palette.text_accent).add_modifier(Modifier::BOLD),
        ));
    }
    let text: String = spans.iter().map(|span| span.content.as_ref()).collect();
    if display_width(&text) as usize > left_width {
        let cut = truncate_to_width(&text, left_width);
        buf.set_span(area.x, area.y, &Span::styled(cut, base), left_width as u16);
    } else {
        buf.set_line(area.x, area.y, &Line::from(spans), left_width as u16);
    }
}
