//! Sidebar: the file explorer in editor mode, the section outline in resume
//! mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
    Frame,
};

use super::helpers::fit_to_width;
use crate::app::{App, Focus};
use crate::content::NodeKind;
use crate::resume::ResumeSection;
use crate::ui::interaction::ClickAction;
use crate::view_mode::ViewMode;

pub fn render_sidebar(frame: &mut Frame, area: Rect, overlay: bool, app: &mut App) {
    let palette = app.theme.palette();
    if overlay {
        frame.render_widget(Clear, area);
    }
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_sidebar).fg(palette.text_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buf = frame.buffer_mut();
    match app.view.mode() {
        ViewMode::Editor => render_file_tree(buf, inner, app),
        ViewMode::Resume => render_outline(buf, inner, app),
    }
}

fn render_header(buf: &mut Buffer, area: Rect, title: &str, app: &App) {
    let palette = app.theme.palette();
    let line = Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::BOLD),
    ));
    buf.set_line(area.x, area.y, &line, area.width);
}

fn render_file_tree(buf: &mut Buffer, area: Rect, app: &mut App) {
    if area.height < 2 {
        return;
    }
    render_header(buf, area, "EXPLORER", app);
    let palette = app.theme.palette();
    let rows = app.tree_rows();
    let list = Rect::new(area.x, area.y + 1, area.width, area.height - 1);

    // Keep the keyboard selection on screen.
    let visible = list.height as usize;
    let offset = app.tree_selected.saturating_sub(visible.saturating_sub(1));
    let open_path = app.viewer.path().map(str::to_string);
    let focused = app.focus == Focus::Sidebar;

    for (index, row) in rows.iter().enumerate().skip(offset).take(visible) {
        let y = list.y + (index - offset) as u16;
        let rect = Rect::new(list.x, y, list.width, 1);
        let indent = "  ".repeat(row.depth);
        let (icon, action) = match row.kind {
            NodeKind::Folder => (
                if row.expanded { "▾ " } else { "▸ " },
                ClickAction::ToggleFolder(row.path.clone()),
            ),
            NodeKind::File => ("  ", ClickAction::OpenPath(row.path.clone())),
        };
        let is_open = open_path.as_deref() == Some(row.path.as_str());
        let is_selected = focused && index == app.tree_selected;

        let mut style = Style::default().fg(palette.text_primary).bg(palette.bg_sidebar);
        if is_open {
            style = style.bg(palette.bg_active).fg(palette.text_accent);
        }
        let hover = style.bg(palette.bg_hover);
        if let Some(hovered) = app.hit_registry.get_hover_style(rect, hover) {
            style = hovered;
        }
        if is_selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        if row.kind == NodeKind::Folder {
            style = style.add_modifier(Modifier::BOLD);
        }

        let text = fit_to_width(&format!(" {}{}{}", indent, icon, row.label), rect.width as usize);
        buf.set_span(rect.x, rect.y, &Span::styled(text, style), rect.width);
        app.hit_registry.register(rect, action, Some(hover));
    }
}

fn render_outline(buf: &mut Buffer, area: Rect, app: &mut App) {
    if area.height < 2 {
        return;
    }
    render_header(buf, area, "RESUME", app);
    let palette = app.theme.palette();
    let sections: Vec<ResumeSection> = app.resume.sections();
    let mut y = area.y + 1;
    for section in sections {
        if y >= area.bottom() {
            return;
        }
        let rect = Rect::new(area.x, y, area.width, 1);
        let base = Style::default().fg(palette.text_primary).bg(palette.bg_sidebar);
        let hover = base.bg(palette.bg_hover);
        let style = app.hit_registry.get_hover_style(rect, hover).unwrap_or(base);
        let text = fit_to_width(&format!("  # {}", section.title()), rect.width as usize);
        buf.set_span(rect.x, rect.y, &Span::styled(text, style), rect.width);
        app.hit_registry
            .register(rect, ClickAction::ResumeSection(section), Some(hover));
        y += 1;
    }

    y += 1;
    if y < area.bottom() {
        let rect = Rect::new(area.x, y, area.width, 1);
        let base = Style::default().fg(palette.link).bg(palette.bg_sidebar);
        let hover = base.bg(palette.bg_hover).add_modifier(Modifier::UNDERLINED);
        let style = app.hit_registry.get_hover_style(rect, hover).unwrap_or(base);
        let text = fit_to_width("  ⤓ Download PDF", rect.width as usize);
        buf.set_span(rect.x, rect.y, &Span::styled(text, style), rect.width);
        app.hit_registry.register(rect, ClickAction::DownloadResume, Some(hover));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ManualScheduler;
    use crate::content::ContentStore;
    use crate::preferences::Preferences;
    use crate::startup::StartupConfig;
    use crate::storage::MemoryStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        let mut prefs = Preferences::new(Box::new(MemoryStore::new()));
        prefs.mark_welcomed();
        App::headless(
            &StartupConfig::default(),
            prefs,
            ContentStore::portfolio(),
            Box::new(ManualScheduler::new()),
        )
    }

    #[test]
    fn test_tree_rows_become_click_targets() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(30, 20)).unwrap();
        terminal
            .draw(|f| render_sidebar(f, Rect::new(0, 0, 30, 20), false, &mut app))
            .unwrap();
        assert!(app
            .hit_registry
            .locate(&ClickAction::ToggleFolder("/portfolio/projects".to_string()))
            .is_some());
    }

    #[test]
    fn test_outline_lists_sections() {
        let mut app = app();
        app.toggle_view_mode();
        let mut terminal = Terminal::new(TestBackend::new(30, 20)).unwrap();
        terminal
            .draw(|f| render_sidebar(f, Rect::new(0, 0, 30, 20), false, &mut app))
            .unwrap();
        assert!(app
            .hit_registry
            .locate(&ClickAction::ResumeSection(ResumeSection::Skills))
            .is_some());
        assert!(app.hit_registry.locate(&ClickAction::DownloadResume).is_some());
    }
}
