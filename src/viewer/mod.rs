//! The code viewer.
//!
//! Loading is split in two so highlighting can run off the UI path:
//! [`CodeViewer::begin_load`] records the requested `(path, theme, language)`
//! key and returns a [`HighlightJob`]; the app runs the job and hands the
//! outcome to [`CodeViewer::complete_load`], which drops it if the key is no
//! longer the one requested.
//!
//! Whether a completed load replays the reveal animation depends only on
//! whether the path differs from the one currently shown. Theme and language
//! changes redraw in place.

pub mod blink;
pub mod cursor;
pub mod reveal;

use crate::app::{AppMessage, Scheduler, TaskHandle};
use crate::content::{ContentStore, Language};
use crate::error::HighlightError;
use crate::highlight::{detect_quoted_links, HighlightRequest, HighlightedDocument, LinkInfo};
use crate::theme::Theme;

pub use blink::CursorBlink;
pub use cursor::{gutter_width, CursorMark, CursorPosition, Font, TextMeasure, UnicodeMeasure};
pub use reveal::{RevealAnimation, RevealPhase, REVEAL_INTERVAL, REVEAL_STEPS};

/// Placeholder body for a path that does not resolve to a file.
pub const NOT_FOUND_TEXT: &str = "File not found";

/// Title shown for an unresolved path.
pub const UNKNOWN_FILENAME: &str = "unknown";

/// Everything that determines what the viewer renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewKey {
    pub path: String,
    pub theme: Theme,
    pub language: Language,
}

impl ViewKey {
    pub fn new(path: impl Into<String>, theme: Theme, language: Language) -> Self {
        Self {
            path: path.into(),
            theme,
            language,
        }
    }
}

/// Pending highlight work for one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightJob {
    pub key: ViewKey,
    pub source: String,
}

impl HighlightJob {
    pub fn request(&self) -> HighlightRequest {
        HighlightRequest {
            source: self.source.clone(),
            language: self.key.language,
            theme: self.key.theme,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewerBody {
    #[default]
    Empty,
    NotFound,
    Document {
        document: HighlightedDocument,
        /// Quoted links per line, index 0 is line 1.
        links: Vec<Vec<LinkInfo>>,
    },
    /// A node rendered by a dedicated view (e.g. `GitHistory`).
    Component(String),
}

#[derive(Debug)]
pub struct CodeViewer {
    requested: Option<ViewKey>,
    shown_path: Option<String>,
    filename: String,
    body: ViewerBody,
    reveal: RevealAnimation,
    reveal_generation: u64,
    ticker: Option<TaskHandle>,
    cursor: Option<CursorMark>,
    blink: CursorBlink,
    scroll: usize,
    measure: Box<dyn TextMeasure>,
    font: Font,
}

impl Default for CodeViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeViewer {
    pub fn new() -> Self {
        Self::with_measure(Box::new(UnicodeMeasure))
    }

    pub fn with_measure(measure: Box<dyn TextMeasure>) -> Self {
        Self {
            requested: None,
            shown_path: None,
            filename: String::new(),
            body: ViewerBody::Empty,
            reveal: RevealAnimation::new(),
            reveal_generation: 0,
            ticker: None,
            cursor: None,
            blink: CursorBlink::new(),
            scroll: 0,
            measure,
            font: Font::default(),
        }
    }

    /// Request `key`. Returns the highlight job to run, or `None` when the
    /// request was settled synchronously (missing path or component node).
    pub fn begin_load(&mut self, store: &ContentStore, key: ViewKey) -> Option<HighlightJob> {
        if self.shown_path.as_deref() != Some(key.path.as_str()) {
            self.stop_ticker();
            // Ticks already queued for the old file must not land.
            self.reveal_generation += 1;
            self.cursor = None;
        }
        self.requested = Some(key.clone());

        let node = match store.find_by_path(&key.path) {
            Some(node) if node.is_file() => node,
            _ => {
                tracing::debug!(path = %key.path, "content lookup missed");
                self.filename = UNKNOWN_FILENAME.to_string();
                self.commit(key.path, ViewerBody::NotFound, None);
                return None;
            }
        };

        self.filename = key.language.filename(node.name()).into_owned();
        if let Some(component) = node.component() {
            let body = ViewerBody::Component(component.to_string());
            self.commit(key.path, body, None);
            return None;
        }

        let source = match store.resolve_text(&key.path, key.language) {
            Ok(text) => text.into_owned(),
            Err(err) => {
                tracing::warn!(error = %err, "resolve text failed");
                self.commit(key.path, ViewerBody::NotFound, None);
                return None;
            }
        };
        Some(HighlightJob { key, source })
    }

    /// Apply a finished highlight job. Returns `false` if it was stale.
    pub fn complete_load(
        &mut self,
        job: HighlightJob,
        result: Result<HighlightedDocument, HighlightError>,
        scheduler: &mut dyn Scheduler,
    ) -> bool {
        if self.requested.as_ref() != Some(&job.key) {
            tracing::debug!(path = %job.key.path, "discarding stale highlight result");
            return false;
        }
        let document = result.unwrap_or_else(|err| {
            tracing::warn!(code = err.error_code(), "highlighter failed, showing plain text: {}", err);
            HighlightedDocument::plain(&job.source)
        });
        let links = document
            .lines
            .iter()
            .map(|line| detect_quoted_links(&line.plain_text()))
            .collect();
        self.commit(job.key.path, ViewerBody::Document { document, links }, Some(scheduler));
        true
    }

    fn commit(&mut self, path: String, body: ViewerBody, scheduler: Option<&mut dyn Scheduler>) {
        let total = match &body {
            ViewerBody::Document { document, .. } => document.line_count(),
            _ => 0,
        };
        let new_file = self.shown_path.as_deref() != Some(path.as_str());
        self.body = body;
        self.stop_ticker();

        match scheduler {
            Some(scheduler) if new_file => {
                self.cursor = None;
                self.scroll = 0;
                self.reveal.start(total);
                self.reveal_generation += 1;
                if self.reveal.is_running() {
                    let message = AppMessage::RevealTick {
                        generation: self.reveal_generation,
                    };
                    self.ticker = Some(scheduler.every(REVEAL_INTERVAL, message));
                }
                tracing::debug!(path = %path, total, "reveal started");
            }
            _ => {
                if new_file {
                    self.cursor = None;
                    self.scroll = 0;
                }
                self.reveal.complete(total);
            }
        }
        self.shown_path = Some(path);
    }

    /// Handle a reveal tick. Returns whether anything changed.
    pub fn on_reveal_tick(&mut self, generation: u64) -> bool {
        if generation != self.reveal_generation || !self.reveal.is_running() {
            return false;
        }
        if !self.reveal.advance() {
            self.stop_ticker();
        }
        true
    }

    fn stop_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    /// Cancel any running timer. Called on shutdown.
    pub fn close(&mut self) {
        self.stop_ticker();
    }

    /// Place the cursor at the end of 1-based `line_number`.
    ///
    /// Only lines that are already revealed accept the cursor.
    pub fn place_cursor(&mut self, line_number: usize, current_tick: u64) -> bool {
        let ViewerBody::Document { document, .. } = &self.body else {
            return false;
        };
        if line_number == 0 || line_number > self.reveal.visible_lines() {
            return false;
        }
        let Some(text) = document.line_text(line_number) else {
            return false;
        };
        let mark = CursorMark::place(
            line_number,
            &text,
            document.line_count(),
            self.measure.as_ref(),
            &self.font,
        );
        tracing::debug!(line = line_number, left = mark.position.left, "cursor placed");
        self.cursor = Some(mark);
        self.blink.reset(current_tick);
        true
    }

    /// Advance the cursor blink. Returns whether a redraw is needed.
    pub fn tick(&mut self, current_tick: u64) -> bool {
        self.cursor.is_some() && self.blink.update(current_tick)
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.line_count().saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    /// Scroll so that 1-based `line_number` is the first visible line.
    pub fn scroll_to_line(&mut self, line_number: usize) {
        let max = self.line_count().saturating_sub(1);
        self.scroll = line_number.saturating_sub(1).min(max);
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn requested(&self) -> Option<&ViewKey> {
        self.requested.as_ref()
    }

    pub fn path(&self) -> Option<&str> {
        self.requested.as_ref().map(|key| key.path.as_str())
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn body(&self) -> &ViewerBody {
        &self.body
    }

    pub fn document(&self) -> Option<&HighlightedDocument> {
        match &self.body {
            ViewerBody::Document { document, .. } => Some(document),
            _ => None,
        }
    }

    /// Links on 1-based `line_number`.
    pub fn links_on(&self, line_number: usize) -> &[LinkInfo] {
        match &self.body {
            ViewerBody::Document { links, .. } => line_number
                .checked_sub(1)
                .and_then(|index| links.get(index))
                .map(Vec::as_slice)
                .unwrap_or(&[]),
            _ => &[],
        }
    }

    pub fn line_count(&self) -> usize {
        self.document().map_or(0, HighlightedDocument::line_count)
    }

    pub fn reveal(&self) -> &RevealAnimation {
        &self.reveal
    }

    pub fn reveal_generation(&self) -> u64 {
        self.reveal_generation
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|ticker| !ticker.is_cancelled())
    }

    pub fn cursor(&self) -> Option<&CursorMark> {
        self.cursor.as_ref()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor.is_some() && self.blink.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ManualScheduler;
    use crate::content::{DEFAULT_FILE_PATH, GIT_HISTORY_PATH};
    use crate::highlight::RegexHighlighter;

    const EXPERIENCE: &str = "/portfolio/experience.ts";

    fn key(path: &str, theme: Theme) -> ViewKey {
        ViewKey::new(path, theme, Language::TypeScript)
    }

    fn load(viewer: &mut CodeViewer, store: &ContentStore, key: ViewKey, scheduler: &mut ManualScheduler) {
        let job = viewer.begin_load(store, key).expect("file should need highlighting");
        let result = RegexHighlighter::new().highlight_now(&job.request());
        assert!(viewer.complete_load(job, result, scheduler));
    }

    fn run_ticks(viewer: &mut CodeViewer, scheduler: &mut ManualScheduler, count: usize) {
        for _ in 0..count {
            for message in scheduler.advance(REVEAL_INTERVAL) {
                if let AppMessage::RevealTick { generation } = message {
                    viewer.on_reveal_tick(generation);
                }
            }
        }
    }

    #[test]
    fn test_unknown_path_shows_placeholder() {
        let store = ContentStore::portfolio();
        let mut viewer = CodeViewer::new();
        assert!(viewer.begin_load(&store, key("/nope.ts", Theme::Dark)).is_none());
        assert_eq!(viewer.body(), &ViewerBody::NotFound);
        assert_eq!(viewer.filename(), UNKNOWN_FILENAME);
        assert_eq!(viewer.line_count(), 0);
        assert_eq!(viewer.reveal().visible_lines(), 0);
    }

    #[test]
    fn test_folder_path_is_not_found() {
        let store = ContentStore::portfolio();
        let mut viewer = CodeViewer::new();
        assert!(viewer.begin_load(&store, key("/portfolio/projects", Theme::Dark)).is_none());
        assert_eq!(viewer.body(), &ViewerBody::NotFound);
    }

    #[test]
    fn test_component_node() {
        let store = ContentStore::portfolio();
        let mut viewer = CodeViewer::new();
        assert!(viewer.begin_load(&store, key(GIT_HISTORY_PATH, Theme::Dark)).is_none());
        assert_eq!(viewer.body(), &ViewerBody::Component("GitHistory".to_string()));
        assert_eq!(viewer.filename(), "git-history.log");
    }

    #[test]
    fn test_new_file_reveals_to_total() {
        let store = ContentStore::portfolio();
        let mut scheduler = ManualScheduler::new();
        let mut viewer = CodeViewer::new();
        load(&mut viewer, &store, key(EXPERIENCE, Theme::Dark), &mut scheduler);

        let total = viewer.line_count();
        assert!(total > 0);
        assert_eq!(viewer.reveal().visible_lines(), 0);
        assert!(viewer.is_ticking());

        run_ticks(&mut viewer, &mut scheduler, total + 5);
        assert_eq!(viewer.reveal().visible_lines(), total);
        assert_eq!(viewer.reveal().phase(), RevealPhase::Complete);
        assert!(!viewer.is_ticking());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_theme_change_completes_immediately() {
        let store = ContentStore::portfolio();
        let mut scheduler = ManualScheduler::new();
        let mut viewer = CodeViewer::new();
        load(&mut viewer, &store, key(EXPERIENCE, Theme::Dark), &mut scheduler);
        run_ticks(&mut viewer, &mut scheduler, 2);
        assert!(viewer.reveal().is_running());

        load(&mut viewer, &store, key(EXPERIENCE, Theme::Light), &mut scheduler);
        assert_eq!(viewer.reveal().visible_lines(), viewer.line_count());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_language_change_does_not_replay() {
        let store = ContentStore::portfolio();
        let mut scheduler = ManualScheduler::new();
        let mut viewer = CodeViewer::new();
        load(&mut viewer, &store, key(DEFAULT_FILE_PATH, Theme::Dark), &mut scheduler);
        run_ticks(&mut viewer, &mut scheduler, 100);

        let python = ViewKey::new(DEFAULT_FILE_PATH, Theme::Dark, Language::Python);
        load(&mut viewer, &store, python, &mut scheduler);
        assert_eq!(viewer.filename(), "about.py");
        assert_eq!(viewer.reveal().phase(), RevealPhase::Complete);
    }

    #[test]
    fn test_new_file_mid_reveal_cancels_old_ticker() {
        let store = ContentStore::portfolio();
        let mut scheduler = ManualScheduler::new();
        let mut viewer = CodeViewer::new();
        load(&mut viewer, &store, key(EXPERIENCE, Theme::Dark), &mut scheduler);
        run_ticks(&mut viewer, &mut scheduler, 3);
        let old_generation = viewer.reveal_generation();

        load(&mut viewer, &store, key(DEFAULT_FILE_PATH, Theme::Dark), &mut scheduler);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(viewer.reveal().visible_lines(), 0);

        assert!(!viewer.on_reveal_tick(old_generation));
        assert_eq!(viewer.reveal().visible_lines(), 0);
    }

    #[test]
    fn test_queued_tick_ignored_while_next_file_highlights() {
        let store = ContentStore::portfolio();
        let mut scheduler = ManualScheduler::new();
        let mut viewer = CodeViewer::new();
        load(&mut viewer, &store, key(EXPERIENCE, Theme::Dark), &mut scheduler);
        run_ticks(&mut viewer, &mut scheduler, 1);
        let queued: Vec<u64> = scheduler
            .advance(REVEAL_INTERVAL)
            .into_iter()
            .filter_map(|message| match message {
                AppMessage::RevealTick { generation } => Some(generation),
                _ => None,
            })
            .collect();
        assert_eq!(queued.len(), 1);
        let before = viewer.reveal().visible_lines();

        // Highlighting of the new file is still pending.
        let job = viewer.begin_load(&store, key(DEFAULT_FILE_PATH, Theme::Dark));
        assert!(job.is_some());
        assert!(!viewer.on_reveal_tick(queued[0]));
        assert_eq!(viewer.reveal().visible_lines(), before);
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let store = ContentStore::portfolio();
        let mut scheduler = ManualScheduler::new();
        let mut viewer = CodeViewer::new();
        let stale = viewer
            .begin_load(&store, key(EXPERIENCE, Theme::Dark))
            .expect("job");
        let fresh = viewer
            .begin_load(&store, key(DEFAULT_FILE_PATH, Theme::Dark))
            .expect("job");

        let result = RegexHighlighter::new().highlight_now(&stale.request());
        assert!(!viewer.complete_load(stale, result, &mut scheduler));
        assert_eq!(viewer.body(), &ViewerBody::Empty);

        let result = RegexHighlighter::new().highlight_now(&fresh.request());
        assert!(viewer.complete_load(fresh, result, &mut scheduler));
        assert_eq!(viewer.filename(), "about.ts");
    }

    #[test]
    fn test_highlighter_failure_falls_back_to_plain() {
        let store = ContentStore::portfolio();
        let mut scheduler = ManualScheduler::new();
        let mut viewer = CodeViewer::new();
        let job = viewer
            .begin_load(&store, key(DEFAULT_FILE_PATH, Theme::Dark))
            .expect("job");
        let expected = HighlightedDocument::plain(&job.source);
        let failure = Err(HighlightError::Failed {
            message: "boom".to_string(),
        });
        assert!(viewer.complete_load(job, failure, &mut scheduler));
        assert_eq!(viewer.document(), Some(&expected));
    }

    #[test]
    fn test_cursor_only_on_revealed_lines() {
        let store = ContentStore::portfolio();
        let mut scheduler = ManualScheduler::new();
        let mut viewer = CodeViewer::new();
        load(&mut viewer, &store, key(EXPERIENCE, Theme::Dark), &mut scheduler);
        assert!(!viewer.place_cursor(1, 0));

        run_ticks(&mut viewer, &mut scheduler, 1);
        assert!(viewer.place_cursor(1, 0));
        assert_eq!(viewer.cursor().map(|c| c.line_number), Some(1));
        assert!(!viewer.place_cursor(viewer.line_count(), 0));
    }

    #[test]
    fn test_cursor_cleared_on_file_change() {
        let store = ContentStore::portfolio();
        let mut scheduler = ManualScheduler::new();
        let mut viewer = CodeViewer::new();
        load(&mut viewer, &store, key(EXPERIENCE, Theme::Dark), &mut scheduler);
        run_ticks(&mut viewer, &mut scheduler, 200);
        assert!(viewer.place_cursor(2, 0));

        load(&mut viewer, &store, key(EXPERIENCE, Theme::Light), &mut scheduler);
        assert!(viewer.cursor().is_some());

        viewer.begin_load(&store, key(DEFAULT_FILE_PATH, Theme::Light));
        assert!(viewer.cursor().is_none());
    }

    #[test]
    fn test_links_are_indexed_by_line() {
        let store = ContentStore::portfolio();
        let mut scheduler = ManualScheduler::new();
        let mut viewer = CodeViewer::new();
        load(&mut viewer, &store, key("/portfolio/contact.ts", Theme::Dark), &mut scheduler);
        let found: usize = (1..=viewer.line_count())
            .map(|line| viewer.links_on(line).len())
            .sum();
        assert!(found >= 3);
        assert!(viewer.links_on(0).is_empty());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let store = ContentStore::portfolio();
        let mut scheduler = ManualScheduler::new();
        let mut viewer = CodeViewer::new();
        load(&mut viewer, &store, key(EXPERIENCE, Theme::Dark), &mut scheduler);
        viewer.scroll_by(-5);
        assert_eq!(viewer.scroll(), 0);
        viewer.scroll_by(10_000);
        assert_eq!(viewer.scroll(), viewer.line_count() - 1);
        viewer.scroll_to_line(3);
        assert_eq!(viewer.scroll(), 2);
    }
}
