//! Click action handler.
//!
//! Translates actions dispatched from the hit area registry into App state
//! mutations.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating App state.
///
/// While the welcome screen or the tour is up, only their own controls
/// respond.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    if app.welcome.is_some() {
        if action == ClickAction::WelcomeEnter {
            app.finish_welcome();
            tracing::debug!("Click: WelcomeEnter");
        }
        return;
    }
    if app.onboarding.is_active() && !matches!(action, ClickAction::TourNext | ClickAction::TourSkip) {
        tracing::debug!("Click: {:?} ignored during tour", action);
        return;
    }

    match action {
        // =====================================================================
        // Title bar
        // =====================================================================
        ClickAction::ToggleSidebar => {
            app.toggle_sidebar();
            tracing::debug!("Click: ToggleSidebar - open={}", app.view.sidebar_open());
        }
        ClickAction::ToggleTheme => {
            app.toggle_theme();
            tracing::debug!("Click: ToggleTheme - now {}", app.theme.id());
        }
        ClickAction::ToggleViewMode => {
            app.toggle_view_mode();
            tracing::debug!("Click: ToggleViewMode - now {:?}", app.view.mode());
        }
        ClickAction::OpenLanguagePicker => {
            app.toggle_language_picker();
            tracing::debug!("Click: OpenLanguagePicker - open={}", app.picker_open);
        }
        ClickAction::SelectLanguage(language) => {
            app.set_language(language);
            tracing::debug!("Click: SelectLanguage({})", language.id());
        }
        ClickAction::RestartTour => {
            app.restart_tour();
            tracing::debug!("Click: RestartTour");
        }

        // =====================================================================
        // File tree
        // =====================================================================
        ClickAction::OpenPath(path) => {
            app.open_path(&path);
            tracing::debug!("Click: OpenPath({})", path);
        }
        ClickAction::ToggleFolder(path) => {
            app.toggle_folder(&path);
            tracing::debug!("Click: ToggleFolder({})", path);
        }

        // =====================================================================
        // Code viewer
        // =====================================================================
        ClickAction::EditorLine { line_number } => {
            app.click_line(line_number);
            tracing::debug!("Click: EditorLine(line_number={})", line_number);
        }
        ClickAction::OpenLink(target) => {
            tracing::debug!("Click: OpenLink({})", target);
            app.open_link(&target);
        }
        ClickAction::MinimapJump { line } => {
            app.minimap_jump(line);
            tracing::debug!("Click: MinimapJump(line={})", line);
        }

        // =====================================================================
        // Onboarding
        // =====================================================================
        ClickAction::TourNext => {
            app.tour_next();
            tracing::debug!("Click: TourNext - step {}", app.onboarding.step_index());
        }
        ClickAction::TourSkip => {
            app.tour_skip();
            tracing::debug!("Click: TourSkip");
        }

        // =====================================================================
        // Resume view
        // =====================================================================
        ClickAction::BannerDismiss => {
            app.dismiss_banner();
            tracing::debug!("Click: BannerDismiss");
        }
        ClickAction::BannerSwitchToEditor => {
            app.banner_switch_to_editor();
            tracing::debug!("Click: BannerSwitchToEditor");
        }
        ClickAction::ResumeSection(section) => {
            app.jump_to_section(section);
            tracing::debug!("Click: ResumeSection({})", section.title());
        }
        ClickAction::DownloadResume => {
            tracing::debug!("Click: DownloadResume");
            app.download_resume();
        }

        // =====================================================================
        // Git history
        // =====================================================================
        ClickAction::HistoryCommit(hash) => {
            app.toggle_commit(&hash);
            tracing::debug!("Click: HistoryCommit({})", hash);
        }
        ClickAction::HistoryFilter(filter) => {
            app.set_history_filter(filter);
            tracing::debug!("Click: HistoryFilter({})", filter.label());
        }

        ClickAction::CloseOverlay => {
            app.close_overlay();
            tracing::debug!("Click: CloseOverlay");
        }
        ClickAction::WelcomeEnter => {}
    }
}
