//! Title bar: sidebar toggle, window title and the toolbar controls.
//!
//! The toolbar rects are recorded in the frame state so the onboarding
//! tooltip and the language dropdown can anchor to them.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    Frame,
};

use super::helpers::{display_width, draw_button, truncate_to_width};
use super::layout::LayoutContext;
use crate::app::App;
use crate::onboarding::TourAnchor;
use crate::theme::Theme;
use crate::ui::interaction::ClickAction;
use crate::view_mode::ViewMode;

pub fn render_title_bar(frame: &mut Frame, area: Rect, app: &mut App) {
    let palette = app.theme.palette();
    let ctx = LayoutContext::from_rect(frame.area());
    let labels = ctx.should_show_button_labels();
    let buf = frame.buffer_mut();

    buf.set_style(area, Style::default().bg(palette.bg_secondary).fg(palette.text_secondary));

    let normal = Style::default().fg(palette.text_primary).bg(palette.bg_secondary);
    let hover = Style::default().fg(palette.text_primary).bg(palette.bg_hover);
    let active = Style::default()
        .fg(palette.text_accent)
        .bg(palette.bg_active)
        .add_modifier(Modifier::BOLD);

    let mut anchors = Vec::with_capacity(4);

    let sidebar_style = if app.view.sidebar_open() { active } else { normal };
    let sidebar = draw_button(
        buf,
        &mut app.hit_registry,
        area.x,
        area.y,
        " ≡ ",
        sidebar_style,
        hover,
        ClickAction::ToggleSidebar,
    );
    anchors.push((TourAnchor::SidebarToggle, sidebar));

    // Right-aligned controls, laid out from the right edge inwards.
    let language = app.language;
    let controls = [
        (
            TourAnchor::ViewModeToggle,
            match (app.view.mode(), labels) {
                (ViewMode::Editor, true) => " ▤ Resume ".to_string(),
                (ViewMode::Editor, false) => " ▤ ".to_string(),
                (ViewMode::Resume, true) => " ‹› Code ".to_string(),
                (ViewMode::Resume, false) => " ‹› ".to_string(),
            },
            ClickAction::ToggleViewMode,
        ),
        (
            TourAnchor::ThemeToggle,
            match (app.theme, labels) {
                (Theme::Dark, true) => " ☾ Dark ".to_string(),
                (Theme::Dark, false) => " ☾ ".to_string(),
                (Theme::Light, true) => " ☀ Light ".to_string(),
                (Theme::Light, false) => " ☀ ".to_string(),
            },
            ClickAction::ToggleTheme,
        ),
        (
            TourAnchor::LanguagePicker,
            if labels {
                format!(" {} {} ▾ ", language.icon(), language.label())
            } else {
                format!(" {} ▾ ", language.icon())
            },
            ClickAction::OpenLanguagePicker,
        ),
    ];

    let tour_label = " ? ";
    let mut right = area.right().saturating_sub(display_width(tour_label));
    draw_button(buf, &mut app.hit_registry, right, area.y, tour_label, normal, hover, ClickAction::RestartTour);

    let mut placed = Vec::new();
    for (anchor, label, action) in controls {
        let width = display_width(&label);
        right = right.saturating_sub(width + 1);
        if right <= sidebar.right() {
            break;
        }
        let style = if anchor == TourAnchor::LanguagePicker && app.picker_open {
            active
        } else {
            normal
        };
        let rect = draw_button(buf, &mut app.hit_registry, right, area.y, &label, style, hover, action);
        placed.push((anchor, rect));
    }
    anchors.extend(placed);

    let title_start = sidebar.right() + 1;
    let title_width = right.saturating_sub(title_start + 1) as usize;
    render_title(buf, title_start, area.y, title_width, app, &ctx);

    app.frame.tour_anchors = anchors;
}

fn render_title(buf: &mut Buffer, x: u16, y: u16, width: usize, app: &App, ctx: &LayoutContext) {
    let palette = app.theme.palette();
    let title = match app.view.mode() {
        ViewMode::Editor if !app.viewer.filename().is_empty() => {
            format!("codefolio - {}", app.viewer.filename())
        }
        ViewMode::Editor => "codefolio".to_string(),
        ViewMode::Resume => "codefolio - resume".to_string(),
    };
    let title = truncate_to_width(&title, width.min(ctx.max_title_length()));
    buf.set_span(
        x,
        y,
        &Span::styled(title, Style::default().fg(palette.text_secondary)),
        width as u16,
    );
}
