//! Floating layers: the language dropdown and the onboarding tooltip.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::{display_width, draw_button, fit_to_width};
use crate::app::App;
use crate::content::Language;
use crate::onboarding::TOUR_STEPS;
use crate::ui::interaction::ClickAction;

/// Width of the tour tooltip, borders included.
const TOOLTIP_WIDTH: u16 = 46;
/// Shown after languages that fall back to the TypeScript source.
const FALLBACK_MARK: &str = " (ts)";

/// Place a `width` x `height` box just below `anchor`, kept inside `screen`.
pub fn below(anchor: Rect, width: u16, height: u16, screen: Rect) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);
    let max_x = screen.right().saturating_sub(width);
    let x = anchor.x.min(max_x).max(screen.x);
    let y = if anchor.bottom() + height <= screen.bottom() {
        anchor.bottom()
    } else {
        screen.bottom().saturating_sub(height)
    };
    Rect::new(x, y, width, height)
}

pub fn render_language_picker(frame: &mut Frame, app: &mut App) {
    if !app.picker_open {
        return;
    }
    let palette = app.theme.palette();
    let screen = frame.area();
    let anchor = app
        .frame
        .anchor(crate::onboarding::TourAnchor::LanguagePicker)
        .unwrap_or(Rect::new(screen.right().saturating_sub(24), screen.y, 24, 1));
    let width = 28;
    let area = below(anchor, width, Language::ALL.len() as u16 + 2, screen);
    let translated = app
        .viewer
        .path()
        .map(|path| app.store.translations().languages_for(path))
        .unwrap_or_default();

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_secondary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buf = frame.buffer_mut();
    for (index, language) in Language::ALL.iter().enumerate() {
        let y = inner.y + index as u16;
        if y >= inner.bottom() {
            break;
        }
        let rect = Rect::new(inner.x, y, inner.width, 1);
        let has_variant = *language == Language::TypeScript || translated.contains(language);
        let fg = if has_variant { palette.text_primary } else { palette.text_muted };
        let mut style = Style::default().fg(fg).bg(palette.bg_secondary);
        if *language == app.language {
            style = style.fg(palette.text_accent).add_modifier(Modifier::BOLD);
        }
        if index == app.picker_index {
            style = style.bg(palette.bg_active);
        }
        let hover = style.bg(palette.bg_hover);
        let style = app.hit_registry.get_hover_style(rect, hover).unwrap_or(style);
        let label = fit_to_width(
            &format!(
                " {} {:<4} {}{}",
                index + 1,
                language.icon(),
                language.label(),
                if has_variant { "" } else { FALLBACK_MARK }
            ),
            rect.width as usize,
        );
        buf.set_span(rect.x, rect.y, &Span::styled(label, style), rect.width);
        app.hit_registry
            .register(rect, ClickAction::SelectLanguage(*language), Some(hover));
    }
}

pub fn render_tour(frame: &mut Frame, app: &mut App) {
    if !app.onboarding.is_visible() {
        return;
    }
    let palette = app.theme.palette();
    let screen = frame.area();
    let step = app.onboarding.current_step();
    let anchor = app
        .frame
        .anchor(step.anchor)
        .unwrap_or(Rect::new(screen.x, screen.y, 1, 1));

    // Spotlight the control the step talks about.
    frame.buffer_mut().set_style(
        anchor,
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
    );

    // Fading tooltips are drawn dim.
    let faded = !app.onboarding.is_animated_in();
    let dim = |style: Style| {
        if faded {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    };

    let body_width = TOOLTIP_WIDTH.saturating_sub(4) as usize;
    let description = super::helpers::wrap_text(step.description, body_width);
    let height = 6 + description.len() as u16;
    let area = below(anchor, TOOLTIP_WIDTH, height, screen);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(dim(Style::default().fg(palette.text_accent)))
        .style(Style::default().bg(palette.bg_secondary));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let inner = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", step.icon), dim(Style::default().fg(palette.text_accent))),
            Span::styled(
                step.title,
                dim(Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD)),
            ),
        ]),
        Line::from(Span::styled(step.subtitle, dim(Style::default().fg(palette.text_secondary)))),
        Line::default(),
    ];
    lines.extend(
        description
            .into_iter()
            .map(|chunk| Line::from(Span::styled(chunk, dim(Style::default().fg(palette.text_primary))))),
    );
    let text_height = inner.height.saturating_sub(1);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        Rect::new(inner.x, inner.y, inner.width, text_height),
    );

    // Footer: progress on the left, buttons on the right.
    let footer_y = inner.bottom().saturating_sub(1);
    let buf = frame.buffer_mut();
    let progress = format!("{} of {}", app.onboarding.step_index() + 1, TOUR_STEPS.len());
    buf.set_span(
        inner.x,
        footer_y,
        &Span::styled(progress, dim(Style::default().fg(palette.text_muted))),
        inner.width,
    );

    let next_label = if app.onboarding.is_last_step() { " Done " } else { " Next " };
    let skip_label = " Skip ";
    let primary = Style::default()
        .fg(palette.bg_editor)
        .bg(palette.text_accent)
        .add_modifier(Modifier::BOLD);
    let secondary = Style::default().fg(palette.text_secondary).bg(palette.bg_secondary);
    let next_x = inner.right().saturating_sub(display_width(next_label));
    let skip_x = next_x.saturating_sub(display_width(skip_label) + 1);
    draw_button(
        buf,
        &mut app.hit_registry,
        skip_x,
        footer_y,
        skip_label,
        dim(secondary),
        secondary.bg(palette.bg_hover),
        ClickAction::TourSkip,
    );
    draw_button(
        buf,
        &mut app.hit_registry,
        next_x,
        footer_y,
        next_label,
        dim(primary),
        primary.bg(palette.link),
        ClickAction::TourNext,
    );
}
