//! Input context for determining which commands are available.
//!
//! The [`InputContext`] captures the application state relevant to input
//! handling, so the command registry can be tested without an [`App`].
//!
//! [`App`]: crate::app::App

use crate::app::Focus;
use crate::view_mode::ViewMode;

/// Which modal layer, if any, owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    #[default]
    None,
    /// First-run splash screen
    Welcome,
    /// Onboarding tooltip (armed or visible)
    Tour,
    LanguagePicker,
}

#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub modal: ModalType,
    pub focus: Focus,
    pub view_mode: ViewMode,
    /// The content pane shows the git history timeline.
    pub showing_history: bool,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    pub fn with_focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }

    pub fn with_view_mode(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    pub fn with_history(mut self, showing: bool) -> Self {
        self.showing_history = showing;
        self
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }

    pub fn is_sidebar_focused(&self) -> bool {
        self.focus == Focus::Sidebar
    }
}
