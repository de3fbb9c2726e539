//! Hit area system for mouse interactions.
//!
//! Components register hit areas while rendering, and the event loop queries
//! the registry to decide what a click does. The registry also remembers the
//! last pointer position so hover styling survives the per-frame `clear()`.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::content::Language;
use crate::history::BranchFilter;
use crate::resume::ResumeSection;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    // Title bar
    ToggleSidebar,
    ToggleTheme,
    ToggleViewMode,
    /// Open or close the language dropdown
    OpenLanguagePicker,
    SelectLanguage(Language),
    RestartTour,

    // File tree
    /// Open the file at this path
    OpenPath(String),
    /// Expand or collapse the folder at this path
    ToggleFolder(String),

    // Code viewer
    /// Place the cursor on a 1-based line
    EditorLine { line_number: usize },
    /// Open a link target with the system opener
    OpenLink(String),
    /// Scroll the viewer so this 1-based line is at the top
    MinimapJump { line: usize },

    // Onboarding tooltip
    TourNext,
    TourSkip,

    // Resume view
    BannerDismiss,
    BannerSwitchToEditor,
    ResumeSection(ResumeSection),
    DownloadResume,

    // Git history
    HistoryCommit(String),
    HistoryFilter(BranchFilter),

    /// Click on the dimmed area around an overlay
    CloseOverlay,
    /// The welcome screen's "Enter Portfolio" prompt
    WelcomeEnter,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.rect, x, y)
    }
}

#[inline]
fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Registry for managing hit areas across the UI.
///
/// Hit areas are registered during rendering and cleared at the start of each
/// render cycle. Later registrations sit on top of earlier ones.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    /// Index of the currently hovered area (if any)
    hovered: Option<usize>,
    /// Last known pointer position
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas. Call this at the start of each render cycle.
    ///
    /// The pointer position is kept, so hover styling keeps working on the
    /// next frame without a mouse move.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    /// Register a new hit area. Later areas win on overlap.
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
        if let Some((x, y)) = self.pointer {
            if rect_contains(rect, x, y) {
                self.hovered = Some(self.areas.len() - 1);
            }
        }
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    /// Update the hover state based on mouse position.
    ///
    /// Returns true if the hovered area changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        self.pointer = Some((x, y));
        let new_hovered = self
            .areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(index, _)| index);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    /// `style` if the pointer is over `rect`.
    ///
    /// Render code calls this before registering the area it is drawing.
    pub fn get_hover_style(&self, rect: Rect, style: Style) -> Option<Style> {
        let (x, y) = self.pointer?;
        rect_contains(rect, x, y).then_some(style)
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn get_hovered(&self) -> Option<&HitArea> {
        self.hovered.and_then(|index| self.areas.get(index))
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    /// Center of the first area registered with `action`, for tests and
    /// keyboard shortcuts that mirror clicks.
    pub fn locate(&self, action: &ClickAction) -> Option<(u16, u16)> {
        self.areas
            .iter()
            .find(|area| &area.action == action)
            .map(|area| (area.rect.x + area.rect.width / 2, area.rect.y + area.rect.height / 2))
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn make_rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect::new(x, y, width, height)
    }

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(make_rect(10, 10, 20, 10), ClickAction::ToggleTheme);

        assert!(area.contains(10, 10));
        assert!(area.contains(29, 19));
        assert!(area.contains(20, 15));

        assert!(!area.contains(9, 10));
        assert!(!area.contains(30, 10)); // x + width is exclusive
        assert!(!area.contains(10, 20)); // y + height is exclusive
    }

    #[test]
    fn test_zero_size_areas_are_ignored() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(5, 5, 0, 3), ClickAction::ToggleTheme, None);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_hit_test_overlapping_areas() {
        let mut registry = HitAreaRegistry::new();
        registry.register(
            make_rect(0, 0, 40, 1),
            ClickAction::EditorLine { line_number: 3 },
            None,
        );
        registry.register(
            make_rect(10, 0, 12, 1),
            ClickAction::OpenLink("mailto:a@b.com".to_string()),
            None,
        );

        assert_eq!(
            registry.hit_test(12, 0),
            Some(ClickAction::OpenLink("mailto:a@b.com".to_string()))
        );
        assert_eq!(
            registry.hit_test(2, 0),
            Some(ClickAction::EditorLine { line_number: 3 })
        );
        assert_eq!(registry.hit_test(2, 1), None);
    }

    #[test]
    fn test_update_hover_returns_changed() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 10, 1), ClickAction::ToggleSidebar, None);
        registry.register(make_rect(20, 0, 10, 1), ClickAction::ToggleTheme, None);

        assert!(registry.update_hover(5, 0));
        assert!(!registry.update_hover(8, 0));
        assert!(registry.update_hover(25, 0));
        assert_eq!(
            registry.get_hovered().map(|area| area.action.clone()),
            Some(ClickAction::ToggleTheme)
        );
        assert!(registry.update_hover(100, 100));
        assert!(!registry.is_hovering());
    }

    #[test]
    fn test_hover_survives_clear() {
        let mut registry = HitAreaRegistry::new();
        let rect = make_rect(0, 0, 10, 1);
        registry.register(rect, ClickAction::ToggleSidebar, None);
        registry.update_hover(3, 0);

        registry.clear();
        let hover = Style::default().bg(Color::DarkGray);
        assert_eq!(registry.get_hover_style(rect, hover), Some(hover));
        assert_eq!(registry.get_hover_style(make_rect(20, 0, 5, 1), hover), None);

        registry.register(rect, ClickAction::ToggleSidebar, None);
        assert!(registry.is_hovering());
    }

    #[test]
    fn test_locate_returns_center() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(10, 4, 6, 2), ClickAction::TourNext, None);
        assert_eq!(registry.locate(&ClickAction::TourNext), Some((13, 5)));
        assert_eq!(registry.locate(&ClickAction::TourSkip), None);
    }
}
