//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects. Some
//! commands (`MoveUp`, `Activate`) are interpreted by the executor according
//! to focus and what the content pane is showing.

use crate::content::Language;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,
    ToggleSidebar,
    ToggleTheme,
    /// Switch between the editor and the resume view
    ToggleViewMode,
    /// Open or close the language picker
    OpenLanguagePicker,
    RestartTour,
    /// Move arrow-key focus between sidebar and content (Tab)
    CycleFocus,
    /// Close the top overlay (Esc)
    CloseOverlay,

    // =========================================================================
    // Navigation
    // =========================================================================
    MoveUp,
    MoveDown,
    /// Open the selected tree row, or expand the selected commit
    Activate,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ScrollToBottom,
    /// Scroll up by lines (mouse wheel)
    ScrollUp(usize),
    /// Scroll down by lines (mouse wheel)
    ScrollDown(usize),

    // =========================================================================
    // Resume view
    // =========================================================================
    DismissBanner,
    SwitchToEditor,
    DownloadResume,

    // =========================================================================
    // Git history
    // =========================================================================
    CycleHistoryFilter,

    // =========================================================================
    // Modals
    // =========================================================================
    PickerUp,
    PickerDown,
    PickerConfirm,
    /// Pick a language directly (number keys while the picker is open)
    PickerSelect(Language),
    TourNext,
    TourSkip,
    /// Leave the welcome screen
    EnterPortfolio,

    /// Swallow the key
    Noop,
}

impl Command {
    /// Whether executing this command should trigger a redraw.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Command::Quit)
    }

    /// Short description for the help line.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "Quit",
            Command::ToggleSidebar => "Toggle sidebar",
            Command::ToggleTheme => "Toggle theme",
            Command::ToggleViewMode => "Code / Resume",
            Command::OpenLanguagePicker => "Language",
            Command::RestartTour => "Tour",
            Command::CycleFocus => "Switch pane",
            Command::CloseOverlay => "Close",
            Command::MoveUp => "Move up",
            Command::MoveDown => "Move down",
            Command::Activate => "Open",
            Command::ScrollPageUp => "Page up",
            Command::ScrollPageDown => "Page down",
            Command::ScrollToTop => "Top",
            Command::ScrollToBottom => "Bottom",
            Command::ScrollUp(_) => "Scroll up",
            Command::ScrollDown(_) => "Scroll down",
            Command::DismissBanner => "Dismiss banner",
            Command::SwitchToEditor => "Open editor",
            Command::DownloadResume => "Download resume",
            Command::CycleHistoryFilter => "Filter branch",
            Command::PickerUp => "Previous language",
            Command::PickerDown => "Next language",
            Command::PickerConfirm => "Choose language",
            Command::PickerSelect(_) => "Choose language",
            Command::TourNext => "Next",
            Command::TourSkip => "Skip tour",
            Command::EnterPortfolio => "Enter portfolio",
            Command::Noop => "No operation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_marks_dirty() {
        assert!(Command::Quit.marks_dirty());
        assert!(Command::ScrollDown(3).marks_dirty());
        assert!(!Command::Noop.marks_dirty());
    }

    #[test]
    fn test_command_is_quit() {
        assert!(Command::Quit.is_quit());
        assert!(!Command::CloseOverlay.is_quit());
    }

    #[test]
    fn test_command_description() {
        assert_eq!(Command::ToggleViewMode.description(), "Code / Resume");
        assert_eq!(Command::PickerSelect(Language::Cpp).description(), "Choose language");
    }
}
