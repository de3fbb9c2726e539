//! Input handling module for keyboard and mouse processing.
//!
//! All keyboard input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Executed against the [`App`] by [`App::execute_command`]
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App mutation
//! ```
//!
//! Mouse clicks go through the hit area registry filled during render.
//!
//! - [`command`] - The [`Command`] enum with all user actions
//! - [`context`] - [`InputContext`] for tracking current UI state
//! - [`registry`] - [`CommandRegistry`] for mapping keys to commands
//! - [`keybindings`] - Default key binding configuration

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Focus};
use crate::ui::interaction::handle_click_action;

/// Lines per mouse wheel notch.
pub const WHEEL_LINES: usize = 3;

impl App {
    /// Snapshot of the state the registry needs to pick a binding layer.
    pub fn build_input_context(&self) -> InputContext {
        let modal = if self.welcome.is_some() {
            ModalType::Welcome
        } else if self.onboarding.is_active() {
            ModalType::Tour
        } else if self.picker_open {
            ModalType::LanguagePicker
        } else {
            ModalType::None
        };
        let focus = if self.view.sidebar_open() {
            self.focus
        } else {
            Focus::Content
        };
        InputContext::new()
            .with_modal(modal)
            .with_focus(focus)
            .with_view_mode(self.view.mode())
            .with_history(self.showing_history())
    }

    /// Execute a command. Returns true if it was handled.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        tracing::info!("execute_command: {:?}", cmd);
        if cmd.marks_dirty() {
            self.mark_dirty();
        }
        let ctx = self.build_input_context();

        match cmd {
            Command::Quit => self.quit(),
            Command::ToggleSidebar => self.toggle_sidebar(),
            Command::ToggleTheme => self.toggle_theme(),
            Command::ToggleViewMode => self.toggle_view_mode(),
            Command::OpenLanguagePicker => self.toggle_language_picker(),
            Command::RestartTour => self.restart_tour(),
            Command::CycleFocus => {
                if !self.view.sidebar_open() {
                    self.view.set_sidebar_open(true);
                }
                self.focus = self.focus.toggle();
            }
            Command::CloseOverlay => return self.close_overlay(),

            Command::MoveUp | Command::MoveDown => {
                let delta = if cmd == Command::MoveUp { -1 } else { 1 };
                if ctx.is_sidebar_focused() {
                    self.move_tree_selection(delta);
                } else if ctx.showing_history {
                    self.history.move_selection(delta);
                } else {
                    return false;
                }
            }
            Command::Activate => {
                if ctx.is_sidebar_focused() {
                    self.activate_tree_selection();
                } else if let Some(hash) = ctx
                    .showing_history
                    .then(|| self.history.selected().map(str::to_string))
                    .flatten()
                {
                    self.toggle_commit(&hash);
                } else {
                    return false;
                }
            }
            Command::ScrollPageUp => self.scroll_content(-self.page_size()),
            Command::ScrollPageDown => self.scroll_content(self.page_size()),
            Command::ScrollToTop => self.scroll_content(isize::MIN / 2),
            Command::ScrollToBottom => self.scroll_content(isize::MAX / 2),
            Command::ScrollUp(lines) => self.scroll_content(-(lines as isize)),
            Command::ScrollDown(lines) => self.scroll_content(lines as isize),

            Command::DismissBanner => self.dismiss_banner(),
            Command::SwitchToEditor => self.banner_switch_to_editor(),
            Command::DownloadResume => self.download_resume(),
            Command::CycleHistoryFilter => self.cycle_history_filter(),

            Command::PickerUp => self.move_picker(-1),
            Command::PickerDown => self.move_picker(1),
            Command::PickerConfirm => self.confirm_picker(),
            Command::PickerSelect(language) => self.set_language(language),
            Command::TourNext => self.tour_next(),
            Command::TourSkip => self.tour_skip(),
            Command::EnterPortfolio => return self.finish_welcome(),

            Command::Noop => return false,
        }
        true
    }

    /// Route a key press through the registry.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let registry = CommandRegistry::new();
        let ctx = self.build_input_context();
        if let Some(cmd) = registry.dispatch(key, &ctx) {
            self.execute_command(cmd);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_registry.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollUp if !self.build_input_context().is_modal_active() => {
                self.execute_command(Command::ScrollUp(WHEEL_LINES));
            }
            MouseEventKind::ScrollDown if !self.build_input_context().is_modal_active() => {
                self.execute_command(Command::ScrollDown(WHEEL_LINES));
            }
            _ => {}
        }
    }
}
