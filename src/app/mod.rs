//! Application state and logic for the TUI.
//!
//! [`App`] owns every piece of UI state and is driven by the event loop in
//! `main.rs`: frame ticks call [`App::tick`], timer and highlighter results
//! arrive as [`AppMessage`]s through [`App::handle_message`], and input is
//! routed by [`crate::input`].
//!
//! - [`messages`] - the message type delivered on the app channel
//! - [`schedule`] - cancelable timers behind the [`Scheduler`] trait
//! - [`navigation`] - file tree rows and focus

mod messages;
mod navigation;
mod schedule;

pub use messages::AppMessage;
pub use navigation::{ancestors, tree_rows, Focus, TreeRow};
pub use schedule::{ManualScheduler, Scheduler, TaskHandle, TokioScheduler};

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::content::{ContentStore, Language, NodeKind};
use crate::highlight::{Highlighter, RegexHighlighter};
use crate::history::{BranchFilter, GitHistory};
use crate::onboarding::{Onboarding, TourAnchor, TourUpdate};
use crate::preferences::Preferences;
use crate::resume::{Resume, ResumeSection, DEFAULT_RESUME_URL};
use crate::signals::{self, SignalSender, UiSignal};
use crate::startup::StartupConfig;
use crate::theme::Theme;
use crate::ui::interaction::HitAreaRegistry;
use crate::view_mode::{ViewMode, ViewModeController};
use crate::viewer::{CodeViewer, HighlightJob, ViewKey};
use crate::welcome::WelcomeScreen;

/// Event loop tick.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// How long a status bar notice stays up, in ticks (about three seconds).
const NOTICE_TICKS: u64 = 180;

/// Where highlight jobs run.
enum HighlightDispatch {
    /// Spawned on the tokio runtime, result delivered as a message.
    Spawn(Arc<dyn Highlighter>),
    /// Run on the spot. Used by headless apps in tests and benchmarks.
    Inline(RegexHighlighter),
}

/// Geometry recorded by the renderer for the input handlers.
#[derive(Debug, Clone, Default)]
pub struct FrameState {
    /// Screen rects of the toolbar controls the tour points at.
    pub tour_anchors: Vec<(TourAnchor, Rect)>,
    /// Rows available to the code viewer body.
    pub content_rows: u16,
    /// First line of each resume section in the rendered resume.
    pub resume_anchors: Vec<(ResumeSection, usize)>,
    pub resume_lines: usize,
}

impl FrameState {
    pub fn anchor(&self, anchor: TourAnchor) -> Option<Rect> {
        self.tour_anchors
            .iter()
            .find(|(candidate, _)| *candidate == anchor)
            .map(|(_, rect)| *rect)
    }
}

/// Main application state
pub struct App {
    pub store: Arc<ContentStore>,
    pub prefs: Preferences,
    pub theme: Theme,
    pub language: Language,
    pub view: ViewModeController,
    pub viewer: CodeViewer,
    pub onboarding: Onboarding,
    /// First-run splash, present until the user enters the portfolio.
    pub welcome: Option<WelcomeScreen>,
    pub history: GitHistory,
    pub resume: Resume,
    /// Expanded folder paths in the file tree.
    pub expanded: HashSet<String>,
    pub focus: Focus,
    /// Selected row in the file tree (keyboard navigation).
    pub tree_selected: usize,
    pub picker_open: bool,
    /// Highlighted entry while the language picker is open.
    pub picker_index: usize,
    pub banner_visible: bool,
    pub resume_scroll: usize,
    /// Status bar notice and the tick it was posted at.
    pub notice: Option<(String, u64)>,
    /// Link targets handed to the opener, newest last.
    pub opened_links: Vec<String>,
    pub hit_registry: HitAreaRegistry,
    pub frame: FrameState,
    /// Tick counter for animations (cursor blink)
    pub tick_count: u64,
    /// Whether the UI needs to be redrawn
    pub needs_redraw: bool,
    pub should_quit: bool,
    pub signal_tx: SignalSender,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    scheduler: Box<dyn Scheduler>,
    highlight: HighlightDispatch,
    launch_links: bool,
    last_tick: Option<Instant>,
}

impl App {
    /// App for the interactive terminal. Must be created inside a tokio
    /// runtime: timers and highlighting run as spawned tasks.
    pub fn new(config: &StartupConfig, prefs: Preferences, store: ContentStore) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let scheduler = TokioScheduler::new(message_tx.clone());
        let highlighter: Arc<dyn Highlighter> = Arc::new(RegexHighlighter::new());
        Self::build(
            config,
            prefs,
            store,
            Box::new(scheduler),
            HighlightDispatch::Spawn(highlighter),
            (message_tx, message_rx),
            true,
        )
    }

    /// App with inline highlighting, the given scheduler, and links that are
    /// recorded instead of launched. Needs no runtime.
    pub fn headless(
        config: &StartupConfig,
        prefs: Preferences,
        store: ContentStore,
        scheduler: Box<dyn Scheduler>,
    ) -> Self {
        Self::build(
            config,
            prefs,
            store,
            scheduler,
            HighlightDispatch::Inline(RegexHighlighter::new()),
            mpsc::unbounded_channel(),
            false,
        )
    }

    fn build(
        config: &StartupConfig,
        prefs: Preferences,
        store: ContentStore,
        scheduler: Box<dyn Scheduler>,
        highlight: HighlightDispatch,
        channel: (mpsc::UnboundedSender<AppMessage>, mpsc::UnboundedReceiver<AppMessage>),
        launch_links: bool,
    ) -> Self {
        let (signal_tx, signal_rx) = signals::create_signal_channel();
        let (message_tx, message_rx) = channel;
        let theme = config.theme.unwrap_or_else(|| prefs.theme());
        let show_welcome = config.force_welcome || !prefs.welcomed();
        let banner_visible = !prefs.banner_dismissed();
        let resume = Resume::from_store(&store);

        let mut app = Self {
            store: Arc::new(store),
            prefs,
            theme,
            language: config.language,
            view: ViewModeController::new(signal_rx),
            viewer: CodeViewer::new(),
            onboarding: Onboarding::new(),
            welcome: show_welcome.then(WelcomeScreen::new),
            history: GitHistory::bundled(),
            resume,
            expanded: HashSet::new(),
            focus: Focus::default(),
            tree_selected: 0,
            picker_open: false,
            picker_index: 0,
            banner_visible,
            resume_scroll: 0,
            notice: None,
            opened_links: Vec::new(),
            hit_registry: HitAreaRegistry::new(),
            frame: FrameState::default(),
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
            signal_tx,
            message_tx,
            message_rx: Some(message_rx),
            scheduler,
            highlight,
            launch_links,
            last_tick: None,
        };
        tracing::info!(
            theme = theme.id(),
            language = app.language.id(),
            welcome = show_welcome,
            "app started"
        );
        app.open_path(&config.initial_file);
        app
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Cancel timers before exit.
    pub fn close(&mut self) {
        self.viewer.close();
        tracing::info!("app closed");
    }

    // ========================================================================
    // Clock
    // ========================================================================

    /// Frame tick from the event loop.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = self
            .last_tick
            .replace(now)
            .map_or(FRAME_INTERVAL, |last| now.duration_since(last));
        self.advance(elapsed);
    }

    /// Advance time-driven state by `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) {
        self.tick_count += 1;
        if let Some(welcome) = self.welcome.as_mut() {
            if welcome.advance(elapsed) {
                self.needs_redraw = true;
            }
        }
        if self.viewer.tick(self.tick_count) {
            self.needs_redraw = true;
        }
        if self.view.poll_signals() {
            self.needs_redraw = true;
        }
        if let Some((_, posted)) = self.notice {
            if self.tick_count.saturating_sub(posted) > NOTICE_TICKS {
                self.notice = None;
                self.needs_redraw = true;
            }
        }
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::HighlightReady { job, result } => {
                if self.viewer.complete_load(job, result, self.scheduler.as_mut()) {
                    self.mark_dirty();
                }
            }
            AppMessage::RevealTick { generation } => {
                if self.viewer.on_reveal_tick(generation) {
                    self.mark_dirty();
                }
            }
            AppMessage::Onboarding { generation, timer } => {
                match self.onboarding.on_timer(generation, timer, self.scheduler.as_mut()) {
                    TourUpdate::Ignored => {}
                    TourUpdate::Changed => self.mark_dirty(),
                    TourUpdate::Ended => {
                        self.prefs.mark_welcomed();
                        self.mark_dirty();
                    }
                }
            }
        }
    }

    // ========================================================================
    // Code viewer
    // ========================================================================

    /// Open `path` in the viewer, revealing it in the tree.
    pub fn open_path(&mut self, path: &str) {
        for folder in ancestors(path) {
            if self
                .store
                .find_by_path(&folder)
                .is_some_and(|node| node.kind() == NodeKind::Folder)
            {
                self.expanded.insert(folder);
            }
        }
        self.view.on_file_selected();
        self.load(ViewKey::new(path, self.theme, self.language));
        if let Some(index) = self.tree_rows().iter().position(|row| row.path == path) {
            self.tree_selected = index;
        }
    }

    fn load(&mut self, key: ViewKey) {
        if let Some(job) = self.viewer.begin_load(&self.store, key) {
            self.dispatch(job);
        }
        self.mark_dirty();
    }

    /// Re-request the current file under the current theme and language.
    fn reload(&mut self) {
        if let Some(path) = self.viewer.path().map(str::to_string) {
            self.load(ViewKey::new(path, self.theme, self.language));
        }
    }

    fn dispatch(&mut self, job: HighlightJob) {
        match &self.highlight {
            HighlightDispatch::Spawn(highlighter) => {
                let highlighter = Arc::clone(highlighter);
                let tx = self.message_tx.clone();
                let request = job.request();
                tokio::spawn(async move {
                    let result = highlighter.highlight(request).await;
                    // Receiver gone means the app is shutting down.
                    let _ = tx.send(AppMessage::HighlightReady { job, result });
                });
            }
            HighlightDispatch::Inline(highlighter) => {
                let result = highlighter.highlight_now(&job.request());
                self.viewer.complete_load(job, result, self.scheduler.as_mut());
            }
        }
    }

    /// Click on a 1-based line of the viewer.
    pub fn click_line(&mut self, line_number: usize) {
        self.focus = Focus::Content;
        if self.viewer.place_cursor(line_number, self.tick_count) {
            self.mark_dirty();
        }
    }

    pub fn scroll_content(&mut self, delta: isize) {
        match self.view.mode() {
            ViewMode::Editor => self.viewer.scroll_by(delta),
            ViewMode::Resume => {
                let max = self.frame.resume_lines.saturating_sub(1);
                self.resume_scroll = self.resume_scroll.saturating_add_signed(delta).min(max);
            }
        }
        self.mark_dirty();
    }

    /// Rows per page for PageUp/PageDown.
    pub fn page_size(&self) -> isize {
        (self.frame.content_rows.max(2) - 1) as isize
    }

    pub fn minimap_jump(&mut self, line: usize) {
        self.viewer.scroll_to_line(line);
        self.mark_dirty();
    }

    /// Hand `target` to the system opener.
    pub fn open_link(&mut self, target: &str) {
        tracing::info!(target, "opening link");
        self.opened_links.push(target.to_string());
        if self.launch_links {
            if let Err(err) = open::that(target) {
                tracing::warn!(target, "could not open link: {}", err);
                self.post_notice(format!("Could not open {}", target));
                return;
            }
        }
        self.post_notice(format!("Opened {}", target));
    }

    pub fn post_notice(&mut self, text: impl Into<String>) {
        self.notice = Some((text.into(), self.tick_count));
        self.mark_dirty();
    }

    // ========================================================================
    // Title bar
    // ========================================================================

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        tracing::debug!(theme = self.theme.id(), "theme toggled");
        self.prefs.set_theme(self.theme);
        self.reload();
    }

    pub fn set_language(&mut self, language: Language) {
        self.picker_open = false;
        if language != self.language {
            tracing::info!(language = language.id(), "language changed");
            self.language = language;
            self.reload();
        }
        self.mark_dirty();
    }

    pub fn toggle_language_picker(&mut self) {
        self.picker_open = !self.picker_open;
        self.picker_index = Language::ALL
            .iter()
            .position(|language| *language == self.language)
            .unwrap_or(0);
        self.mark_dirty();
    }

    pub fn move_picker(&mut self, delta: isize) {
        let last = Language::ALL.len() - 1;
        self.picker_index = self.picker_index.saturating_add_signed(delta).min(last);
        self.mark_dirty();
    }

    pub fn confirm_picker(&mut self) {
        let language = Language::ALL[self.picker_index.min(Language::ALL.len() - 1)];
        self.set_language(language);
    }

    pub fn toggle_view_mode(&mut self) {
        self.picker_open = false;
        self.view.toggle_mode();
        self.mark_dirty();
    }

    pub fn toggle_sidebar(&mut self) {
        self.view.toggle_sidebar();
        if !self.view.sidebar_open() && self.focus == Focus::Sidebar {
            self.focus = Focus::Content;
        }
        self.mark_dirty();
    }

    /// Close whichever overlay is on top. Returns whether one was open.
    pub fn close_overlay(&mut self) -> bool {
        if self.picker_open {
            self.picker_open = false;
        } else if self.view.sidebar_open() && self.view.sidebar_is_overlay() {
            self.view.set_sidebar_open(false);
            self.focus = Focus::Content;
        } else {
            return false;
        }
        self.mark_dirty();
        true
    }

    pub fn resize(&mut self, width: u16, _height: u16) {
        self.view.set_width(width);
        self.mark_dirty();
    }

    // ========================================================================
    // File tree
    // ========================================================================

    pub fn tree_rows(&self) -> Vec<TreeRow> {
        tree_rows(&self.store, &self.expanded, self.language)
    }

    pub fn toggle_folder(&mut self, path: &str) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
        let rows = self.tree_rows().len();
        self.tree_selected = self.tree_selected.min(rows.saturating_sub(1));
        self.mark_dirty();
    }

    pub fn move_tree_selection(&mut self, delta: isize) {
        let last = self.tree_rows().len().saturating_sub(1);
        self.tree_selected = self.tree_selected.saturating_add_signed(delta).min(last);
        self.mark_dirty();
    }

    /// Open the selected file or toggle the selected folder.
    pub fn activate_tree_selection(&mut self) {
        let Some(row) = self.tree_rows().into_iter().nth(self.tree_selected) else {
            return;
        };
        match row.kind {
            NodeKind::Folder => self.toggle_folder(&row.path),
            NodeKind::File => {
                self.open_path(&row.path);
                self.focus = Focus::Content;
            }
        }
    }

    // ========================================================================
    // Welcome and tour
    // ========================================================================

    /// Leave the welcome screen once its prompt is showing. Arms the tour.
    pub fn finish_welcome(&mut self) -> bool {
        if !self.welcome.as_ref().is_some_and(WelcomeScreen::prompt_visible) {
            return false;
        }
        tracing::info!("welcome screen finished");
        self.welcome = None;
        self.onboarding.show(self.scheduler.as_mut());
        self.mark_dirty();
        true
    }

    pub fn tour_next(&mut self) {
        self.onboarding.advance(self.scheduler.as_mut());
        self.mark_dirty();
    }

    pub fn tour_skip(&mut self) {
        self.onboarding.dismiss(self.scheduler.as_mut());
        self.mark_dirty();
    }

    pub fn restart_tour(&mut self) {
        self.picker_open = false;
        self.onboarding.restart(self.scheduler.as_mut());
        self.mark_dirty();
    }

    // ========================================================================
    // Resume view
    // ========================================================================

    pub fn dismiss_banner(&mut self) {
        if self.banner_visible {
            self.banner_visible = false;
            self.prefs.dismiss_banner();
            self.mark_dirty();
        }
    }

    /// The banner's call to action. Goes through the signal channel so the
    /// view mode controller stays the only owner of the mode.
    pub fn banner_switch_to_editor(&mut self) {
        signals::raise(&self.signal_tx, UiSignal::SwitchToEditor);
        if self.view.poll_signals() {
            self.mark_dirty();
        }
    }

    pub fn jump_to_section(&mut self, section: ResumeSection) {
        if let Some((_, line)) = self
            .frame
            .resume_anchors
            .iter()
            .find(|(candidate, _)| *candidate == section)
        {
            self.resume_scroll = *line;
        }
        self.view.on_file_selected();
        self.mark_dirty();
    }

    pub fn download_resume(&mut self) {
        self.open_link(DEFAULT_RESUME_URL);
    }

    // ========================================================================
    // Git history
    // ========================================================================

    /// Whether the viewer is showing the history component.
    pub fn showing_history(&self) -> bool {
        self.view.mode() == ViewMode::Editor
            && matches!(self.viewer.body(), crate::viewer::ViewerBody::Component(name) if name == "GitHistory")
    }

    pub fn toggle_commit(&mut self, hash: &str) {
        self.history.toggle(hash);
        self.mark_dirty();
    }

    pub fn set_history_filter(&mut self, filter: BranchFilter) {
        self.history.set_filter(filter);
        self.mark_dirty();
    }

    pub fn cycle_history_filter(&mut self) {
        let next = self.history.filter().next();
        self.set_history_filter(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{DEFAULT_FILE_PATH, GIT_HISTORY_PATH};
    use crate::onboarding::TourPhase;
    use crate::storage::MemoryStore;
    use crate::viewer::RevealPhase;

    fn headless(config: StartupConfig) -> (App, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        let prefs = Preferences::new(Box::new(MemoryStore::new()));
        let app = App::headless(&config, prefs, ContentStore::portfolio(), Box::new(scheduler.clone()));
        (app, scheduler)
    }

    fn pump(app: &mut App, scheduler: &mut ManualScheduler, by: Duration) {
        for message in scheduler.advance(by) {
            app.handle_message(message);
        }
    }

    #[test]
    fn test_starts_on_default_file_with_reveal() {
        let (mut app, mut scheduler) = headless(StartupConfig::default());
        assert_eq!(app.viewer.path(), Some(DEFAULT_FILE_PATH));
        assert_eq!(app.viewer.reveal().phase(), RevealPhase::Revealing);
        pump(&mut app, &mut scheduler, Duration::from_secs(2));
        assert_eq!(app.viewer.reveal().phase(), RevealPhase::Complete);
        assert_eq!(app.viewer.reveal().visible_lines(), app.viewer.line_count());
    }

    #[test]
    fn test_first_run_shows_welcome() {
        let (app, _scheduler) = headless(StartupConfig::default());
        assert!(app.welcome.is_some());
    }

    #[test]
    fn test_theme_toggle_completes_reveal_immediately() {
        let (mut app, _scheduler) = headless(StartupConfig::default());
        assert!(app.viewer.reveal().is_running());
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.prefs.theme(), Theme::Light);
        assert_eq!(app.viewer.reveal().phase(), RevealPhase::Complete);
        assert!(!app.viewer.is_ticking());
    }

    #[test]
    fn test_language_change_keeps_path() {
        let (mut app, _scheduler) = headless(StartupConfig::default());
        app.set_language(Language::Python);
        assert_eq!(app.viewer.requested().map(|key| key.language), Some(Language::Python));
        assert_eq!(app.viewer.path(), Some(DEFAULT_FILE_PATH));
        assert_eq!(app.viewer.filename(), "about.py");
    }

    #[test]
    fn test_welcome_then_tour_then_welcomed() {
        let (mut app, mut scheduler) = headless(StartupConfig::default());
        assert!(!app.finish_welcome());
        app.advance(Duration::from_secs(30));
        assert!(app.finish_welcome());
        assert_eq!(app.onboarding.phase(), TourPhase::Arming);

        pump(&mut app, &mut scheduler, Duration::from_secs(1));
        assert!(app.onboarding.is_animated_in());
        app.tour_skip();
        pump(&mut app, &mut scheduler, Duration::from_secs(1));
        assert!(!app.onboarding.is_active());
        assert!(app.prefs.welcomed());
    }

    #[test]
    fn test_restart_tour_leaves_flag_alone() {
        let (mut app, mut scheduler) = headless(StartupConfig::default());
        app.restart_tour();
        pump(&mut app, &mut scheduler, Duration::from_secs(1));
        assert!(app.onboarding.is_visible());
        assert!(!app.prefs.welcomed());
    }

    #[test]
    fn test_banner_call_to_action_returns_to_editor() {
        let (mut app, _scheduler) = headless(StartupConfig::default());
        app.toggle_view_mode();
        assert_eq!(app.view.mode(), ViewMode::Resume);
        app.banner_switch_to_editor();
        assert_eq!(app.view.mode(), ViewMode::Editor);
        assert!(app.banner_visible);

        app.dismiss_banner();
        assert!(!app.banner_visible);
        assert!(app.prefs.banner_dismissed());
    }

    #[test]
    fn test_opening_nested_file_expands_folder() {
        let (mut app, _scheduler) = headless(StartupConfig::default());
        app.open_path("/portfolio/projects/queueLens.ts");
        assert!(app.expanded.contains("/portfolio/projects"));
        let rows = app.tree_rows();
        assert_eq!(rows[app.tree_selected].path, "/portfolio/projects/queueLens.ts");
    }

    #[test]
    fn test_tree_activation_toggles_folder_and_opens_file() {
        let (mut app, _scheduler) = headless(StartupConfig::default());
        let folder = app
            .tree_rows()
            .iter()
            .position(|row| row.kind == NodeKind::Folder)
            .unwrap();
        app.tree_selected = folder;
        app.activate_tree_selection();
        assert!(app.expanded.contains("/portfolio/projects"));

        app.move_tree_selection(1);
        app.activate_tree_selection();
        assert_eq!(app.viewer.path(), Some("/portfolio/projects/shipmentStream.ts"));
        assert_eq!(app.focus, Focus::Content);
    }

    #[test]
    fn test_history_component_and_links() {
        let (mut app, _scheduler) = headless(StartupConfig::default());
        app.open_path(GIT_HISTORY_PATH);
        assert!(app.showing_history());
        app.cycle_history_filter();
        assert_eq!(app.history.filter(), BranchFilter::Only(crate::history::Branch::Main));

        app.download_resume();
        assert_eq!(app.opened_links.last().map(String::as_str), Some(DEFAULT_RESUME_URL));
        assert!(app.notice.is_some());
    }

    #[test]
    fn test_notice_expires() {
        let (mut app, _scheduler) = headless(StartupConfig::default());
        app.post_notice("hello");
        for _ in 0..=NOTICE_TICKS {
            app.advance(FRAME_INTERVAL);
        }
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_picker_selects_language() {
        let (mut app, _scheduler) = headless(StartupConfig::default());
        app.toggle_language_picker();
        assert!(app.picker_open);
        app.move_picker(2);
        app.confirm_picker();
        assert!(!app.picker_open);
        assert_eq!(app.language, Language::Python);
    }
}
