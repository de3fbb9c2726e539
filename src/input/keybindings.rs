//! Default keybindings for the application.
//!
//! Maps key combinations to commands per layer: global, modal, focus and
//! view mode. The registry decides which layer a key goes to.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;
use crate::app::Focus;
use crate::content::Language;
use crate::view_mode::ViewMode;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    /// Character keys arrive with SHIFT set for `?` and capitals on some
    /// terminals and without it on others; bindings are stored unshifted.
    pub fn normalized(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::Char(_) => Self::new(code, modifiers - KeyModifiers::SHIFT),
            _ => Self::new(code, modifiers),
        }
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active whenever no modal owns the keyboard
    pub global: HashMap<KeyCombo, Command>,
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    pub focus: HashMap<Focus, HashMap<KeyCombo, Command>>,
    pub view: HashMap<ViewMode, HashMap<KeyCombo, Command>>,
    /// Extra content-pane bindings while the git history is shown
    pub history: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            focus: HashMap::new(),
            view: HashMap::new(),
            history: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_focus_bindings();
        config.setup_view_bindings();
        config.setup_history_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        let bindings = [
            (KeyCombo::char('q'), Command::Quit),
            (KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit),
            (KeyCombo::char('b'), Command::ToggleSidebar),
            (KeyCombo::char('t'), Command::ToggleTheme),
            (KeyCombo::char('r'), Command::ToggleViewMode),
            (KeyCombo::char('l'), Command::OpenLanguagePicker),
            (KeyCombo::char('?'), Command::RestartTour),
            (KeyCombo::plain(KeyCode::Tab), Command::CycleFocus),
            (KeyCombo::plain(KeyCode::Esc), Command::CloseOverlay),
            (KeyCombo::plain(KeyCode::PageUp), Command::ScrollPageUp),
            (KeyCombo::plain(KeyCode::PageDown), Command::ScrollPageDown),
            (KeyCombo::plain(KeyCode::Home), Command::ScrollToTop),
            (KeyCombo::plain(KeyCode::End), Command::ScrollToBottom),
            (KeyCombo::char('g'), Command::ScrollToTop),
            (KeyCombo::char('G'), Command::ScrollToBottom),
        ];
        self.global.extend(bindings);
    }

    fn setup_modal_bindings(&mut self) {
        let mut welcome = HashMap::new();
        welcome.insert(KeyCombo::plain(KeyCode::Enter), Command::EnterPortfolio);
        welcome.insert(KeyCombo::char('q'), Command::Quit);
        self.modal.insert(ModalType::Welcome, welcome);

        let mut tour = HashMap::new();
        for code in [KeyCode::Enter, KeyCode::Right, KeyCode::Char(' '), KeyCode::Char('n')] {
            tour.insert(KeyCombo::plain(code), Command::TourNext);
        }
        tour.insert(KeyCombo::plain(KeyCode::Esc), Command::TourSkip);
        tour.insert(KeyCombo::char('s'), Command::TourSkip);
        tour.insert(KeyCombo::char('q'), Command::Quit);
        self.modal.insert(ModalType::Tour, tour);

        let mut picker = HashMap::new();
        picker.insert(KeyCombo::plain(KeyCode::Up), Command::PickerUp);
        picker.insert(KeyCombo::char('k'), Command::PickerUp);
        picker.insert(KeyCombo::plain(KeyCode::Down), Command::PickerDown);
        picker.insert(KeyCombo::char('j'), Command::PickerDown);
        picker.insert(KeyCombo::plain(KeyCode::Enter), Command::PickerConfirm);
        picker.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseOverlay);
        picker.insert(KeyCombo::char('l'), Command::OpenLanguagePicker);
        for (index, language) in Language::ALL.iter().enumerate() {
            let digit = char::from_digit(index as u32 + 1, 10).unwrap_or('1');
            picker.insert(KeyCombo::char(digit), Command::PickerSelect(*language));
        }
        self.modal.insert(ModalType::LanguagePicker, picker);
    }

    fn setup_focus_bindings(&mut self) {
        let mut sidebar = HashMap::new();
        sidebar.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        sidebar.insert(KeyCombo::char('k'), Command::MoveUp);
        sidebar.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        sidebar.insert(KeyCombo::char('j'), Command::MoveDown);
        sidebar.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        sidebar.insert(KeyCombo::plain(KeyCode::Right), Command::Activate);
        self.focus.insert(Focus::Sidebar, sidebar);

        let mut content = HashMap::new();
        content.insert(KeyCombo::plain(KeyCode::Up), Command::ScrollUp(1));
        content.insert(KeyCombo::char('k'), Command::ScrollUp(1));
        content.insert(KeyCombo::plain(KeyCode::Down), Command::ScrollDown(1));
        content.insert(KeyCombo::char('j'), Command::ScrollDown(1));
        self.focus.insert(Focus::Content, content);
    }

    fn setup_view_bindings(&mut self) {
        let mut resume = HashMap::new();
        resume.insert(KeyCombo::char('x'), Command::DismissBanner);
        resume.insert(KeyCombo::char('e'), Command::SwitchToEditor);
        resume.insert(KeyCombo::char('d'), Command::DownloadResume);
        self.view.insert(ViewMode::Resume, resume);
    }

    fn setup_history_bindings(&mut self) {
        self.history.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        self.history.insert(KeyCombo::char('k'), Command::MoveUp);
        self.history.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        self.history.insert(KeyCombo::char('j'), Command::MoveDown);
        self.history.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        self.history.insert(KeyCombo::char('f'), Command::CycleHistoryFilter);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|bindings| bindings.get(combo))
    }

    pub fn get_focus(&self, focus: Focus, combo: &KeyCombo) -> Option<&Command> {
        self.focus.get(&focus).and_then(|bindings| bindings.get(combo))
    }

    pub fn get_view(&self, mode: ViewMode, combo: &KeyCombo) -> Option<&Command> {
        self.view.get(&mode).and_then(|bindings| bindings.get(combo))
    }

    pub fn get_history(&self, combo: &KeyCombo) -> Option<&Command> {
        self.history.get(combo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_is_ignored_for_characters() {
        let combo = KeyCombo::normalized(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(combo, KeyCombo::char('?'));
        let combo = KeyCombo::normalized(KeyCode::Up, KeyModifiers::SHIFT);
        assert_eq!(combo.modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn test_default_globals() {
        let config = KeybindingConfig::new();
        assert_eq!(config.get_global(&KeyCombo::char('t')), Some(&Command::ToggleTheme));
        assert_eq!(
            config.get_global(&KeyCombo::ctrl(KeyCode::Char('c'))),
            Some(&Command::Quit)
        );
        assert_eq!(config.get_global(&KeyCombo::char('z')), None);
    }

    #[test]
    fn test_picker_digits_follow_language_order() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_modal(ModalType::LanguagePicker, &KeyCombo::char('4')),
            Some(&Command::PickerSelect(Language::Cpp))
        );
        assert_eq!(config.get_modal(ModalType::LanguagePicker, &KeyCombo::char('6')), None);
    }
}
