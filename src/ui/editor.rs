//! Code viewer rendering.
//!
//! Row layout matches the cursor placement math in [`crate::viewer::cursor`]:
//!
//! ```text
//! | pad | gutter | margin | line text ...
//! ```
//!
//! Only revealed lines are drawn. Each row is a click target that places
//! the cursor; link targets are registered afterwards so they win.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::helpers::display_width;
use super::history::render_history;
use crate::app::App;
use crate::highlight::{HighlightedLine, LinkInfo};
use crate::theme::Palette;
use crate::ui::interaction::ClickAction;
use crate::viewer::cursor::{CONTENT_PADDING, GUTTER_MARGIN};
use crate::viewer::{gutter_width, Font, TextMeasure, UnicodeMeasure, ViewerBody, NOT_FOUND_TEXT};

/// Component name of the career timeline node.
pub const GIT_HISTORY_COMPONENT: &str = "GitHistory";

pub fn render_editor(frame: &mut Frame, area: Rect, app: &mut App) {
    let palette = app.theme.palette();
    let buf = frame.buffer_mut();
    buf.set_style(area, Style::default().bg(palette.bg_editor).fg(palette.text_primary));
    app.frame.content_rows = area.height;

    enum Body {
        Nothing,
        Placeholder(String),
        History,
        Document,
    }
    let body = match app.viewer.body() {
        ViewerBody::Empty => Body::Nothing,
        ViewerBody::NotFound => Body::Placeholder(NOT_FOUND_TEXT.to_string()),
        ViewerBody::Component(name) if name == GIT_HISTORY_COMPONENT => Body::History,
        ViewerBody::Component(name) => Body::Placeholder(format!("Unknown component: {}", name)),
        ViewerBody::Document { .. } => Body::Document,
    };
    match body {
        Body::Nothing => {}
        Body::Placeholder(text) => render_placeholder(buf, area, &text, palette),
        Body::History => render_history(buf, area, app),
        Body::Document => render_document(buf, area, app),
    }
}

fn render_placeholder(buf: &mut Buffer, area: Rect, text: &str, palette: &Palette) {
    if area.height == 0 {
        return;
    }
    let width = display_width(text).min(area.width);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height / 2;
    buf.set_span(x, y, &Span::styled(text, Style::default().fg(palette.text_muted)), width);
}

fn render_document(buf: &mut Buffer, area: Rect, app: &mut App) {
    let palette = app.theme.palette();
    let Some(document) = app.viewer.document() else {
        return;
    };
    let total = document.line_count();
    let visible = app.viewer.reveal().visible_lines().min(total);
    let gutter = gutter_width(total);
    let text_x = area.x + CONTENT_PADDING + gutter + GUTTER_MARGIN;
    let text_width = area.right().saturating_sub(text_x);
    let scroll = app.viewer.scroll();
    let active_line = app.viewer.cursor().map(|mark| mark.line_number);

    let mut rows = Vec::new();
    let mut link_areas = Vec::new();
    for (row, line) in document
        .lines
        .iter()
        .enumerate()
        .take(visible)
        .skip(scroll)
        .take(area.height as usize)
        .map(|(index, line)| (index - scroll, line))
    {
        let line_number = scroll + row + 1;
        let y = area.y + row as u16;
        let is_active = active_line == Some(line_number);
        let row_rect = Rect::new(area.x, y, area.width, 1);

        if is_active {
            buf.set_style(row_rect, Style::default().bg(palette.active_line));
        }
        let number_style = if is_active {
            Style::default().fg(palette.line_number_active)
        } else {
            Style::default().fg(palette.line_number)
        };
        let number = format!("{:>width$}", line_number, width = gutter as usize);
        buf.set_span(area.x + CONTENT_PADDING, y, &Span::styled(number, number_style), gutter);

        let links = app.viewer.links_on(line_number);
        let styled = styled_line(line, links, palette);
        buf.set_line(text_x, y, &styled, text_width);

        rows.push((row_rect, line_number));
        let plain = line.plain_text();
        for link in links {
            let start = text_x.saturating_add(measure(&plain[..link.start]));
            let width = measure(&link.text);
            let rect = Rect::new(start, y, width, 1).intersection(area);
            link_areas.push((rect, link.target()));
        }
    }

    for (rect, line_number) in rows {
        app.hit_registry
            .register(rect, ClickAction::EditorLine { line_number }, None);
    }
    let link_hover = Style::default().fg(palette.link).add_modifier(Modifier::BOLD);
    for (rect, target) in link_areas {
        app.hit_registry
            .register(rect, ClickAction::OpenLink(target), Some(link_hover));
    }

    if app.viewer.cursor_visible() {
        if let Some(mark) = app.viewer.cursor() {
            let row = (mark.position.top as usize).checked_sub(scroll);
            if let Some(row) = row.filter(|row| *row < area.height as usize) {
                let x = area.x.saturating_add(mark.position.left);
                if x < area.right() {
                    let cell = Rect::new(x, area.y + row as u16, 1, 1);
                    buf.set_style(cell, Style::default().bg(palette.cursor));
                }
            }
        }
    }
}

fn measure(text: &str) -> u16 {
    UnicodeMeasure.measure(text, &Font::default())
}

fn expand_tabs(text: &str) -> String {
    text.replace('\t', &" ".repeat(Font::default().tab_width as usize))
}

/// Token spans for one line, with link ranges underlined.
fn styled_line<'a>(line: &HighlightedLine, links: &[LinkInfo], palette: &Palette) -> Line<'a> {
    let link_style = Style::default()
        .fg(palette.link)
        .add_modifier(Modifier::UNDERLINED);
    let mut spans = Vec::with_capacity(line.tokens.len());
    let mut offset = 0;
    for token in &line.tokens {
        let base = Style::default().fg(palette.token(token.kind));
        let end = offset + token.text.len();
        let mut cut = offset;
        for link in links.iter().filter(|link| link.start < end && link.end > offset) {
            let from = link.start.max(offset);
            let to = link.end.min(end);
            if from > cut {
                spans.push(Span::styled(expand_tabs(&token.text[cut - offset..from - offset]), base));
            }
            spans.push(Span::styled(expand_tabs(&token.text[from - offset..to - offset]), link_style));
            cut = to;
        }
        if cut < end {
            spans.push(Span::styled(expand_tabs(&token.text[cut - offset..]), base));
        }
        offset = end;
    }
    Line::from(spans)
}
