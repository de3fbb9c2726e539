//! Command registry for dispatching keyboard input to commands.
//!
//! The [`CommandRegistry`] maps key events to commands based on the current
//! application context. It handles:
//! - Global bindings (always active outside modals)
//! - Modal bindings (welcome screen, tour, language picker)
//! - View bindings (resume view actions)
//! - Focus bindings (sidebar tree vs content pane)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::app::Focus;

/// Registry for dispatching key events to commands.
///
/// Priority order:
/// 1. Ctrl+C, which always quits
/// 2. Modal bindings; an open modal swallows every other key
/// 3. Global bindings
/// 4. View bindings for the current view mode
/// 5. History bindings when the content pane shows the timeline
/// 6. Focus bindings
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Returns `None` if the key is unbound in the current context.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        let combo = KeyCombo::normalized(key.code, key.modifiers);

        if context.is_modal_active() {
            return Some(
                self.config
                    .get_modal(context.modal, &combo)
                    .cloned()
                    .unwrap_or(Command::Noop),
            );
        }

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        if let Some(cmd) = self.config.get_view(context.view_mode, &combo) {
            return Some(cmd.clone());
        }

        if context.showing_history && context.focus == Focus::Content {
            if let Some(cmd) = self.config.get_history(&combo) {
                return Some(cmd.clone());
            }
        }

        self.config.get_focus(context.focus, &combo).cloned()
    }

    pub fn config(&self) -> &KeybindingConfig {
        &self.config
    }
}
