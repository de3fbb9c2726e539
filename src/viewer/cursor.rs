//! Pseudo-cursor placement.
//!
//! The cursor sits at the end of the clicked line. Its column is the
//! measured width of the line's text plus the fixed editor layout offsets:
//!
//! ```text
//! | pad | gutter | margin | line text ...
//! ```

use unicode_width::UnicodeWidthStr;

/// Blank columns before the line-number gutter.
pub const CONTENT_PADDING: u16 = 1;

/// Blank columns between the gutter and the text.
pub const GUTTER_MARGIN: u16 = 1;

/// Minimum gutter width, in columns.
pub const MIN_GUTTER_WIDTH: u16 = 3;

/// Font metrics that affect measured width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub tab_width: u16,
}

impl Default for Font {
    fn default() -> Self {
        Self { tab_width: 4 }
    }
}

/// Width of rendered text, in terminal columns.
pub trait TextMeasure: Send + std::fmt::Debug {
    fn measure(&self, text: &str, font: &Font) -> u16;
}

/// Display width from the Unicode East Asian Width tables, tabs expanded.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeMeasure;

impl TextMeasure for UnicodeMeasure {
    fn measure(&self, text: &str, font: &Font) -> u16 {
        let tabs = text.matches('\t').count();
        let width = text.split('\t').map(UnicodeWidthStr::width).sum::<usize>()
            + tabs * usize::from(font.tab_width);
        u16::try_from(width).unwrap_or(u16::MAX)
    }
}

/// Width of the line-number column for a file of `total_lines`.
pub fn gutter_width(total_lines: usize) -> u16 {
    let digits = total_lines.max(1).to_string().len() as u16;
    digits.max(MIN_GUTTER_WIDTH)
}

/// Cell offset of the cursor relative to the editor's content origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub top: u16,
    pub left: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorMark {
    /// 1-based.
    pub line_number: usize,
    pub position: CursorPosition,
}

impl CursorMark {
    /// Place the cursor at the end of `line_text`, which is line
    /// `line_number` of a `total_lines` file.
    pub fn place(
        line_number: usize,
        line_text: &str,
        total_lines: usize,
        measure: &dyn TextMeasure,
        font: &Font,
    ) -> Self {
        let left = CONTENT_PADDING
            .saturating_add(gutter_width(total_lines))
            .saturating_add(GUTTER_MARGIN)
            .saturating_add(measure.measure(line_text, font));
        Self {
            line_number,
            position: CursorPosition {
                top: u16::try_from(line_number.saturating_sub(1)).unwrap_or(u16::MAX),
                left,
            },
        }
    }
}
