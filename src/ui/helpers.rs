//! Helper functions for UI rendering
//!
//! Width-aware truncation and the small drawing primitives shared by the
//! panels.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::interaction::{ClickAction, HitAreaRegistry};

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Display width of `text` in cells.
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Truncate to at most `max_width` cells, ending in "..." when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Pad or cut `text` to exactly `width` cells.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let cut = truncate_to_width(text, width);
    let pad = width.saturating_sub(cut.width());
    format!("{}{}", cut, " ".repeat(pad))
}

/// Greedy word wrap to `width` columns.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > width {
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
    lines
}

/// A clickable `[ label ]` style button drawn at (`x`, `y`).
///
/// Returns the rect it occupies so the caller can anchor overlays to it.
#[allow(clippy::too_many_arguments)]
pub fn draw_button(
    buf: &mut Buffer,
    registry: &mut HitAreaRegistry,
    x: u16,
    y: u16,
    label: &str,
    style: Style,
    hover: Style,
    action: ClickAction,
) -> Rect {
    let rect = Rect::new(x, y, display_width(label), 1).intersection(buf.area);
    let style = registry.get_hover_style(rect, hover).unwrap_or(style);
    buf.set_span(rect.x, rect.y, &Span::styled(label, style), rect.width);
    registry.register(rect, action, Some(hover));
    rect
}
