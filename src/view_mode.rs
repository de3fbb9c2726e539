//! Editor / resume presentation switch and sidebar visibility.

use tokio::sync::broadcast;

use crate::signals::{self, UiSignal};
use crate::ui::layout::breakpoints;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Editor,
    Resume,
}

impl ViewMode {
    pub fn toggle(&self) -> ViewMode {
        match self {
            ViewMode::Editor => ViewMode::Resume,
            ViewMode::Resume => ViewMode::Editor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Editor => "Code",
            ViewMode::Resume => "Resume",
        }
    }
}

/// Narrow terminals show the sidebar as an overlay, wide ones as a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthClass {
    Narrow,
    Wide,
}

impl WidthClass {
    pub fn from_width(width: u16) -> Self {
        if width < breakpoints::SIDEBAR_OVERLAY_WIDTH {
            WidthClass::Narrow
        } else {
            WidthClass::Wide
        }
    }
}

/// Owns the view mode and the per-width-class sidebar flags, and listens
/// for [`UiSignal::SwitchToEditor`].
#[derive(Debug)]
pub struct ViewModeController {
    mode: ViewMode,
    width_class: WidthClass,
    narrow_sidebar_open: bool,
    wide_sidebar_open: bool,
    signals: broadcast::Receiver<UiSignal>,
}

impl ViewModeController {
    pub fn new(signals: broadcast::Receiver<UiSignal>) -> Self {
        Self {
            mode: ViewMode::Editor,
            width_class: WidthClass::Wide,
            narrow_sidebar_open: false,
            wide_sidebar_open: true,
            signals,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        if mode != self.mode {
            tracing::debug!(?mode, "view mode changed");
        }
        self.mode = mode;
        if mode == ViewMode::Editor {
            self.set_sidebar_open(true);
        }
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggle());
    }

    pub fn set_width(&mut self, width: u16) {
        self.width_class = WidthClass::from_width(width);
    }

    pub fn width_class(&self) -> WidthClass {
        self.width_class
    }

    pub fn sidebar_open(&self) -> bool {
        match self.width_class {
            WidthClass::Narrow => self.narrow_sidebar_open,
            WidthClass::Wide => self.wide_sidebar_open,
        }
    }

    /// Whether the open sidebar floats over the content.
    pub fn sidebar_is_overlay(&self) -> bool {
        self.width_class == WidthClass::Narrow
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        match self.width_class {
            WidthClass::Narrow => self.narrow_sidebar_open = open,
            WidthClass::Wide => self.wide_sidebar_open = open,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.set_sidebar_open(!self.sidebar_open());
    }

    /// A file was picked from the tree.
    pub fn on_file_selected(&mut self) {
        if self.width_class == WidthClass::Narrow {
            self.narrow_sidebar_open = false;
        }
    }

    /// Apply queued signals. Returns whether anything changed.
    pub fn poll_signals(&mut self) -> bool {
        let mut changed = false;
        for signal in signals::drain(&mut self.signals) {
            match signal {
                UiSignal::SwitchToEditor => {
                    changed |= self.mode != ViewMode::Editor;
                    self.set_mode(ViewMode::Editor);
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::{create_signal_channel, raise};

    fn controller() -> (signals::SignalSender, ViewModeController) {
        let (tx, rx) = create_signal_channel();
        (tx, ViewModeController::new(rx))
    }

    #[test]
    fn test_defaults() {
        let (_tx, mut vm) = controller();
        assert_eq!(vm.mode(), ViewMode::Editor);
        assert!(vm.sidebar_open());
        vm.set_width(60);
        assert!(!vm.sidebar_open());
        assert!(vm.sidebar_is_overlay());
    }

    #[test]
    fn test_switch_to_editor_forces_sidebar_open() {
        let (_tx, mut vm) = controller();
        vm.toggle_sidebar();
        assert!(!vm.sidebar_open());
        vm.toggle_mode();
        assert_eq!(vm.mode(), ViewMode::Resume);
        vm.toggle_mode();
        assert!(vm.sidebar_open());
    }

    #[test]
    fn test_sidebar_state_is_per_width_class() {
        let (_tx, mut vm) = controller();
        vm.set_width(60);
        vm.toggle_sidebar();
        assert!(vm.sidebar_open());
        vm.set_width(140);
        vm.toggle_sidebar();
        assert!(!vm.sidebar_open());
        vm.set_width(60);
        assert!(vm.sidebar_open());
    }

    #[test]
    fn test_file_selection_closes_overlay_only() {
        let (_tx, mut vm) = controller();
        vm.on_file_selected();
        assert!(vm.sidebar_open());

        vm.set_width(60);
        vm.set_sidebar_open(true);
        vm.on_file_selected();
        assert!(!vm.sidebar_open());
    }

    #[test]
    fn test_switch_signal_returns_to_editor() {
        let (tx, mut vm) = controller();
        vm.set_mode(ViewMode::Resume);
        assert!(!vm.poll_signals());
        raise(&tx, UiSignal::SwitchToEditor);
        assert!(vm.poll_signals());
        assert_eq!(vm.mode(), ViewMode::Editor);
        assert!(vm.sidebar_open());
    }
}
