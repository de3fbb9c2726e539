//! Common test utilities for integration tests.
//!
//! [`TestApp`] wraps a headless [`App`] together with the virtual clock that
//! drives its timers, plus helpers for rendering into a `TestBackend` and
//! sending keys and clicks the way the event loop would.
//!
//! # Example
//!
//! ```ignore
//! let mut t = TestApp::builder().welcomed().build();
//! t.key(KeyCode::Char('t'));
//! let screen = t.render(140, 40);
//! ```

#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use codefolio::app::{App, ManualScheduler};
use codefolio::content::ContentStore;
use codefolio::preferences::Preferences;
use codefolio::startup::StartupConfig;
use codefolio::storage::{FileStore, MemoryStore};
use codefolio::ui::{self, interaction::ClickAction};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

pub struct TestApp {
    pub app: App,
    pub scheduler: ManualScheduler,
}

/// Builder for creating test App instances with various configurations.
#[derive(Default)]
pub struct TestAppBuilder {
    config: StartupConfig,
    welcomed: bool,
    prefs_file: Option<std::path::PathBuf>,
}

impl TestAppBuilder {
    /// Skip the welcome screen, as on a returning visit.
    pub fn welcomed(mut self) -> Self {
        self.welcomed = true;
        self
    }

    pub fn config(mut self, config: StartupConfig) -> Self {
        self.config = config;
        self
    }

    /// Keep preferences in a JSON file instead of memory.
    pub fn prefs_file(mut self, path: &Path) -> Self {
        self.prefs_file = Some(path.to_path_buf());
        self
    }

    pub fn build(self) -> TestApp {
        let mut prefs = match self.prefs_file {
            Some(path) => Preferences::new(Box::new(FileStore::open(path))),
            None => Preferences::new(Box::new(MemoryStore::new())),
        };
        if self.welcomed {
            prefs.mark_welcomed();
        }
        let scheduler = ManualScheduler::new();
        let app = App::headless(
            &self.config,
            prefs,
            ContentStore::portfolio(),
            Box::new(scheduler.clone()),
        );
        TestApp { app, scheduler }
    }
}

impl TestApp {
    pub fn builder() -> TestAppBuilder {
        TestAppBuilder::default()
    }

    /// Move the virtual clock and deliver whatever came due.
    pub fn pump(&mut self, by: Duration) {
        for message in self.scheduler.advance(by) {
            self.app.handle_message(message);
        }
    }

    /// Let every pending animation finish.
    pub fn settle(&mut self) {
        self.pump(Duration::from_secs(5));
    }

    pub fn key(&mut self, code: KeyCode) {
        self.key_with(code, KeyModifiers::NONE);
    }

    pub fn key_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.app.handle_key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
    }

    pub fn render(&mut self, width: u16, height: u16) -> Buffer {
        self.app.resize(width, height);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| ui::render(frame, &mut self.app)).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Left click at a screen cell.
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// Click wherever the last frame drew `action`.
    pub fn click(&mut self, action: &ClickAction) {
        let (column, row) = self
            .app
            .hit_registry
            .locate(action)
            .unwrap_or_else(|| panic!("{:?} was not drawn", action));
        self.click_at(column, row);
    }
}

pub fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

pub fn screen_text(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| row_text(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}
