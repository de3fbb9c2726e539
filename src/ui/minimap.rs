//! Minimap: a scaled overview of the open file with a viewport band.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
};

use crate::app::App;
use crate::highlight::{HighlightedLine, TokenKind};
use crate::ui::interaction::ClickAction;

/// Source columns per minimap cell.
const COLUMNS_PER_CELL: usize = 6;

/// First source line (0-based) drawn on minimap row `row`.
pub fn line_for_row(row: usize, rows: usize, total_lines: usize) -> usize {
    if rows == 0 || total_lines <= rows {
        row
    } else {
        row * total_lines / rows
    }
}

pub fn render_minimap(buf: &mut Buffer, area: Rect, app: &mut App) {
    let palette = app.theme.palette();
    buf.set_style(area, Style::default().bg(palette.bg_secondary));
    let Some(document) = app.viewer.document() else {
        return;
    };
    let total = document.line_count();
    let visible = app.viewer.reveal().visible_lines().min(total);
    if total == 0 || area.width < 2 {
        return;
    }
    let rows = area.height as usize;
    let scroll = app.viewer.scroll();
    let viewport = app.frame.content_rows as usize;

    let mut targets = Vec::new();
    for row in 0..rows {
        let line_index = line_for_row(row, rows, total);
        if line_index >= total {
            break;
        }
        let y = area.y + row as u16;
        let in_view = line_index >= scroll && line_index < scroll + viewport.max(1);
        let bg = if in_view { palette.bg_hover } else { palette.bg_secondary };
        let rect = Rect::new(area.x, y, area.width, 1);
        buf.set_style(rect, Style::default().bg(bg));

        if line_index < visible {
            let line = &document.lines[line_index];
            let (glyphs, color) = sketch(line, area.width as usize - 1);
            let color = color.map_or(palette.text_muted, |kind| palette.token(kind));
            buf.set_span(
                area.x + 1,
                y,
                &Span::styled(glyphs, Style::default().fg(color).bg(bg)),
                area.width - 1,
            );
        }
        targets.push((rect, line_index + 1));
    }

    for (rect, line) in targets {
        app.hit_registry.register(rect, ClickAction::MinimapJump { line }, None);
    }
}

/// Bar for one line: indentation as blanks, content as blocks, colored by
/// the first non-plain token.
fn sketch(line: &HighlightedLine, width: usize) -> (String, Option<TokenKind>) {
    let text = line.plain_text();
    let indent = text.len() - text.trim_start().len();
    let content = text.trim().chars().count();
    let lead = (indent / COLUMNS_PER_CELL).min(width);
    let body = content.div_ceil(COLUMNS_PER_CELL).min(width - lead);
    let kind = line
        .tokens
        .iter()
        .find(|token| token.kind != TokenKind::Plain && !token.text.trim().is_empty())
        .map(|token| token.kind);
    (format!("{}{}", " ".repeat(lead), "▬".repeat(body)), kind)
}
