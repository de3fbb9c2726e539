//! Career timeline ("git log --graph") rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::helpers::{display_width, truncate_to_width, wrap_text};
use crate::app::App;
use crate::history::{Branch, BranchFilter, Commit};
use crate::theme::Palette;
use crate::ui::interaction::ClickAction;

fn branch_color(branch: Branch, palette: &Palette) -> Color {
    match branch {
        Branch::Main => palette.branch_main,
        Branch::Feature => palette.branch_feature,
        Branch::Education => palette.branch_education,
    }
}

/// Lane glyphs: a dot in the commit's lane, rails in the others.
fn graph_spans(commit: &Commit, palette: &Palette) -> Vec<Span<'static>> {
    Branch::ALL
        .iter()
        .map(|lane| {
            if *lane == commit.branch {
                Span::styled("● ", Style::default().fg(branch_color(*lane, palette)))
            } else {
                Span::styled("│ ", Style::default().fg(palette.border))
            }
        })
        .collect()
}

pub fn render_history(buf: &mut Buffer, area: Rect, app: &mut App) {
    let palette = app.theme.palette();
    if area.height < 3 || area.width < 20 {
        return;
    }
    let inner = Rect::new(area.x + 1, area.y, area.width - 2, area.height);

    buf.set_span(
        inner.x,
        inner.y,
        &Span::styled(
            "$ git log --graph --oneline",
            Style::default().fg(palette.text_muted),
        ),
        inner.width,
    );

    // Filter chips.
    let mut x = inner.x;
    let chip_y = inner.y + 1;
    for filter in BranchFilter::ALL {
        let label = format!("[{}]", filter.label());
        let width = display_width(&label);
        if x + width > inner.right() {
            break;
        }
        let rect = Rect::new(x, chip_y, width, 1);
        let selected = app.history.filter() == filter;
        let base = if selected {
            Style::default()
                .fg(palette.text_accent)
                .bg(palette.bg_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        let hover = base.bg(palette.bg_hover);
        let style = app.hit_registry.get_hover_style(rect, hover).unwrap_or(base);
        buf.set_span(x, chip_y, &Span::styled(label, style), width);
        app.hit_registry
            .register(rect, ClickAction::HistoryFilter(filter), Some(hover));
        x += width + 1;
    }

    let list = Rect::new(inner.x, inner.y + 3, inner.width, inner.height.saturating_sub(3));
    let commits: Vec<Commit> = app.history.visible().into_iter().cloned().collect();
    let selected = app.history.selected().map(str::to_string);

    // Rows per commit: one, plus the wrapped description when expanded.
    let mut lines: Vec<(Line<'static>, Option<String>)> = Vec::new();
    let mut selected_row = None;
    for commit in &commits {
        let is_selected = selected.as_deref() == Some(commit.hash.as_str());
        if is_selected {
            selected_row = Some(lines.len());
        }
        let mut spans = graph_spans(commit, palette);
        spans.push(Span::styled(
            format!("{} ", commit.short_hash()),
            Style::default().fg(palette.syntax_number),
        ));
        spans.push(Span::styled(
            format!("{} ", commit.date.format("%Y-%m-%d")),
            Style::default().fg(palette.text_muted),
        ));
        let message_style = if is_selected {
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_primary)
        };
        spans.push(Span::styled(commit.message.clone(), message_style));
        for tag in &commit.tags {
            spans.push(Span::styled(
                format!(" ({})", tag),
                Style::default().fg(branch_color(commit.branch, palette)),
            ));
        }
        if let Some(additions) = commit.additions {
            spans.push(Span::styled(
                format!(" +{}", additions),
                Style::default().fg(palette.additions),
            ));
        }
        if let Some(deletions) = commit.deletions {
            spans.push(Span::styled(
                format!(" -{}", deletions),
                Style::default().fg(palette.deletions),
            ));
        }
        lines.push((Line::from(spans), Some(commit.hash.clone())));

        if is_selected {
            let description = commit.description.as_deref().unwrap_or("No description.");
            let indent = Branch::ALL.len() * 2 + 2;
            let width = (list.width as usize).saturating_sub(indent).max(10);
            for chunk in wrap_text(description, width) {
                lines.push((
                    Line::from(vec![
                        Span::raw(" ".repeat(indent)),
                        Span::styled(chunk, Style::default().fg(palette.text_secondary)),
                    ]),
                    None,
                ));
            }
        }
    }

    let height = list.height as usize;
    let offset = selected_row
        .map(|row| row.saturating_sub(height.saturating_sub(4)))
        .unwrap_or(0);
    for (row, (line, hash)) in lines.into_iter().skip(offset).take(height).enumerate() {
        let y = list.y + row as u16;
        let rect = Rect::new(list.x, y, list.width, 1);
        if hash.is_some() && selected_row == Some(row + offset) {
            buf.set_style(rect, Style::default().bg(palette.active_line));
        }
        buf.set_line(list.x, y, &line, list.width);
        if let Some(hash) = hash {
            let hover = Style::default().bg(palette.bg_hover);
            app.hit_registry
                .register(rect, ClickAction::HistoryCommit(hash), Some(hover));
        }
    }

    if commits.is_empty() {
        let text = truncate_to_width("No commits on this branch.", list.width as usize);
        buf.set_span(list.x, list.y, &Span::styled(text, Style::default().fg(palette.text_muted)), list.width);
    }
}
