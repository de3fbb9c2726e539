//! UI rendering for the editor-styled portfolio.
//!
//! One frame is drawn in layers, back to front:
//!
//! - Title bar with the toolbar controls
//! - Content: the code viewer (plus minimap) or the resume page
//! - Sidebar, either as a column or floating over the content
//! - Status bar
//! - Language dropdown and onboarding tooltip
//!
//! The welcome splash replaces all of it until it is dismissed.
//!
//! ## Responsive Layout System
//!
//! [`LayoutContext`] wraps the terminal dimensions and answers the sizing
//! questions (`is_narrow()`, `should_show_minimap()`, `sidebar_width()`).
//! [`ScreenLayout`] turns those answers into the rects of one frame.
//!
//! Every layer registers its click targets while drawing. Later
//! registrations win, so the drawing order doubles as the click priority.

mod editor;
mod helpers;
mod history;
pub mod interaction;
pub mod layout;
mod minimap;
mod overlays;
mod resume;
mod sidebar;
mod splash;
mod status_bar;
mod title_bar;

pub use editor::GIT_HISTORY_COMPONENT;
pub use helpers::{display_width, truncate_to_width, wrap_text};
pub use layout::{breakpoints, LayoutContext, ScreenLayout, SizeCategory};
pub use resume::{layout_resume, ResumeLayout};
pub use status_bar::status_segments;

use ratatui::{text::Span, widgets::Clear, Frame};

use crate::app::App;
use crate::view_mode::ViewMode;
use interaction::ClickAction;

/// Below this size only a notice is drawn.
const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 5;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render one frame and rebuild the click targets.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_registry.clear();

    let area = frame.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        frame.render_widget(Clear, area);
        let notice = truncate_to_width("Terminal too small", area.width as usize);
        frame.buffer_mut().set_span(area.x, area.y, &Span::raw(notice), area.width);
        return;
    }

    if app.welcome.is_some() {
        splash::render_welcome(frame, app);
        return;
    }

    let mode = app.view.mode();
    let minimap_wanted = mode == ViewMode::Editor && app.viewer.document().is_some();
    let layout = ScreenLayout::compute(frame.area(), app.view.sidebar_open(), minimap_wanted);

    title_bar::render_title_bar(frame, layout.title_bar, app);

    match mode {
        ViewMode::Editor => editor::render_editor(frame, layout.content, app),
        ViewMode::Resume => resume::render_resume(frame, layout.content, app),
    }
    if let Some(area) = layout.minimap {
        minimap::render_minimap(frame.buffer_mut(), area, app);
    }

    if let Some(area) = layout.sidebar {
        if layout.sidebar_overlay {
            // Clicking beside a floating sidebar closes it.
            app.hit_registry
                .register(layout.content, ClickAction::CloseOverlay, None);
        }
        sidebar::render_sidebar(frame, area, layout.sidebar_overlay, app);
    }

    status_bar::render_status_bar(frame, layout.status_bar, app);

    if app.picker_open {
        app.hit_registry
            .register(frame.area(), ClickAction::CloseOverlay, None);
        overlays::render_language_picker(frame, app);
    }
    overlays::render_tour(frame, app);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::app::ManualScheduler;
    use crate::content::ContentStore;
    use crate::onboarding::TourAnchor;
    use crate::preferences::Preferences;
    use crate::startup::StartupConfig;
    use crate::storage::MemoryStore;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn app(welcomed: bool) -> App {
        let mut prefs = Preferences::new(Box::new(MemoryStore::new()));
        if welcomed {
            prefs.mark_welcomed();
        }
        App::headless(
            &StartupConfig::default(),
            prefs,
            ContentStore::portfolio(),
            Box::new(ManualScheduler::new()),
        )
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        app.resize(width, height);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn screen_text(buffer: &Buffer) -> String {
        (0..buffer.area.height)
            .map(|y| row_text(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_welcome_replaces_editor() {
        let mut app = app(false);
        let buffer = draw(&mut app, 100, 30);
        let text = screen_text(&buffer);
        assert!(text.contains("codefolio"));
        assert!(!text.contains("EXPLORER"));
        assert!(app.hit_registry.locate(&ClickAction::ToggleTheme).is_none());
    }

    #[test]
    fn test_welcome_prompt_registers_enter() {
        let mut app = app(false);
        app.advance(Duration::from_secs(30));
        draw(&mut app, 100, 30);
        assert!(app.hit_registry.locate(&ClickAction::WelcomeEnter).is_some());
    }

    #[test]
    fn test_wide_frame_draws_chrome() {
        let mut app = app(true);
        let buffer = draw(&mut app, 140, 40);
        let text = screen_text(&buffer);
        assert!(row_text(&buffer, 0).contains("codefolio"));
        assert!(text.contains("EXPLORER"));
        assert!(row_text(&buffer, 39).contains("UTF-8"));
        for anchor in [
            TourAnchor::LanguagePicker,
            TourAnchor::ViewModeToggle,
            TourAnchor::ThemeToggle,
            TourAnchor::SidebarToggle,
        ] {
            assert!(app.frame.anchor(anchor).is_some(), "{:?}", anchor);
        }
        assert!(app.frame.content_rows > 0);
    }

    #[test]
    fn test_resume_mode_draws_page() {
        let mut app = app(true);
        app.toggle_view_mode();
        let buffer = draw(&mut app, 140, 40);
        let text = screen_text(&buffer);
        assert!(text.contains("RESUME"));
        assert!(row_text(&buffer, 39).contains("Resume"));
        assert!(app.frame.resume_lines > 0);
    }

    #[test]
    fn test_picker_rows_clickable() {
        let mut app = app(true);
        app.toggle_language_picker();
        draw(&mut app, 140, 40);
        let (x, y) = app
            .hit_registry
            .locate(&ClickAction::SelectLanguage(crate::content::Language::Python))
            .unwrap();
        assert_eq!(
            app.hit_registry.hit_test(x, y),
            Some(ClickAction::SelectLanguage(crate::content::Language::Python))
        );
    }

    #[test]
    fn test_picker_marks_untranslated_languages() {
        use crate::content::Language;

        let mut app = app(true);
        app.open_path("/portfolio/contact.ts");
        app.toggle_language_picker();
        let buffer = draw(&mut app, 140, 40);
        let row_of = |app: &App, language| {
            let (_, y) = app
                .hit_registry
                .locate(&ClickAction::SelectLanguage(language))
                .unwrap();
            row_text(&buffer, y)
        };
        assert!(row_of(&app, Language::Cpp).contains("C++ (ts)"));
        assert!(!row_of(&app, Language::Python).contains("(ts)"));
        assert!(!row_of(&app, Language::TypeScript).contains("(ts)"));
    }

    #[test]
    fn test_overlay_sidebar_backdrop_closes() {
        let mut app = app(true);
        app.resize(80, 24);
        app.view.set_sidebar_open(true);
        draw(&mut app, 80, 24);
        assert_eq!(app.hit_registry.hit_test(79, 10), Some(ClickAction::CloseOverlay));
    }

    #[test]
    fn test_tiny_terminal_shows_notice() {
        let mut app = app(true);
        let buffer = draw(&mut app, 18, 3);
        assert!(row_text(&buffer, 0).starts_with("Terminal too"));
        assert!(app.hit_registry.is_empty());
    }
}
