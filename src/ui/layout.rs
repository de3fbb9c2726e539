//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions the render functions ask. [`ScreenLayout`] splits a frame into
//! the editor chrome: title bar, sidebar, content, minimap and status bar.

use ratatui::layout::Rect;

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Below this width the sidebar floats over the content.
    pub const SIDEBAR_OVERLAY_WIDTH: u16 = 100;
    /// Below this width the minimap is hidden.
    pub const MINIMAP_WIDTH: u16 = 110;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
}

/// Fixed chrome sizes.
pub const TITLE_BAR_HEIGHT: u16 = 1;
pub const STATUS_BAR_HEIGHT: u16 = 1;
pub const MINIMAP_COLUMNS: u16 = 12;
pub const SIDEBAR_MIN_WIDTH: u16 = 24;
pub const SIDEBAR_MAX_WIDTH: u16 = 34;

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// Extra small (< 60 cols or < 16 rows)
    ExtraSmall,
    /// Narrow: sidebar is an overlay
    Narrow,
    /// Wide: sidebar is a fixed column
    Wide,
}

// ============================================================================
// Layout Context
// ============================================================================

/// Terminal dimensions plus the sizing rules derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Proportional width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    pub fn size_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SIDEBAR_OVERLAY_WIDTH {
            SizeCategory::Narrow
        } else {
            SizeCategory::Wide
        }
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SIDEBAR_OVERLAY_WIDTH
    }

    pub fn should_show_minimap(&self) -> bool {
        self.width >= breakpoints::MINIMAP_WIDTH
    }

    /// Toolbar buttons drop their text labels below this.
    pub fn should_show_button_labels(&self) -> bool {
        self.width >= breakpoints::SIDEBAR_OVERLAY_WIDTH
    }

    pub fn sidebar_width(&self) -> u16 {
        if self.is_narrow() {
            // Overlay: most of the screen, but leave the content edge visible.
            self.width.saturating_sub(8).clamp(1, SIDEBAR_MAX_WIDTH + 6)
        } else {
            self.bounded_width(22, SIDEBAR_MIN_WIDTH, SIDEBAR_MAX_WIDTH)
        }
    }

    /// Maximum characters of a title that fit alongside the toolbar.
    pub fn max_title_length(&self) -> usize {
        (self.width as usize).saturating_sub(48).max(8)
    }
}

/// Rectangles for one frame of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub title_bar: Rect,
    /// `None` when the sidebar is closed.
    pub sidebar: Option<Rect>,
    /// Whether `sidebar` is drawn over `content`.
    pub sidebar_overlay: bool,
    pub content: Rect,
    pub minimap: Option<Rect>,
    pub status_bar: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, sidebar_open: bool, minimap_wanted: bool) -> Self {
        let ctx = LayoutContext::from_rect(area);
        let title_bar = Rect::new(area.x, area.y, area.width, TITLE_BAR_HEIGHT.min(area.height));
        let status_height = STATUS_BAR_HEIGHT.min(area.height.saturating_sub(title_bar.height));
        let body_height = area
            .height
            .saturating_sub(title_bar.height)
            .saturating_sub(status_height);
        let body = Rect::new(area.x, area.y + title_bar.height, area.width, body_height);
        let status_bar = Rect::new(area.x, body.y + body.height, area.width, status_height);

        let overlay = ctx.is_narrow();
        let sidebar_width = ctx.sidebar_width().min(body.width);
        let sidebar = sidebar_open.then(|| Rect::new(body.x, body.y, sidebar_width, body.height));

        let mut content = body;
        if let (Some(side), false) = (sidebar, overlay) {
            content.x += side.width;
            content.width = content.width.saturating_sub(side.width);
        }

        let minimap = (minimap_wanted && ctx.should_show_minimap() && content.width > MINIMAP_COLUMNS * 3)
            .then(|| {
                content.width -= MINIMAP_COLUMNS;
                Rect::new(content.x + content.width, content.y, MINIMAP_COLUMNS, content.height)
            });

        Self {
            title_bar,
            sidebar,
            sidebar_overlay: overlay,
            content,
            minimap,
            status_bar,
        }
    }
}

/// Center a `width` x `height` box inside `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
