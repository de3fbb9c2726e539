//! Color themes.
//!
//! Two fixed palettes, modeled on a dark and a light editor scheme. Every
//! render function takes its colors from the active [`Palette`].

use ratatui::style::Color;

use crate::highlight::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Value persisted in the preference store.
    pub fn id(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_id(value: &str) -> Option<Theme> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_editor: Color,
    pub bg_sidebar: Color,
    pub bg_secondary: Color,
    pub bg_active: Color,
    pub bg_hover: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_accent: Color,
    pub line_number: Color,
    pub line_number_active: Color,
    pub active_line: Color,
    pub cursor: Color,
    pub link: Color,

    pub syntax_plain: Color,
    pub syntax_keyword: Color,
    pub syntax_string: Color,
    pub syntax_comment: Color,
    pub syntax_number: Color,
    pub syntax_type: Color,
    pub syntax_function: Color,
    pub syntax_property: Color,
    pub syntax_punctuation: Color,

    pub branch_main: Color,
    pub branch_feature: Color,
    pub branch_education: Color,
    pub additions: Color,
    pub deletions: Color,
}

impl Palette {
    pub fn token(&self, kind: TokenKind) -> Color {
        match kind {
            TokenKind::Plain => self.syntax_plain,
            TokenKind::Keyword => self.syntax_keyword,
            TokenKind::String => self.syntax_string,
            TokenKind::Comment => self.syntax_comment,
            TokenKind::Number => self.syntax_number,
            TokenKind::Type => self.syntax_type,
            TokenKind::Function => self.syntax_function,
            TokenKind::Property => self.syntax_property,
            TokenKind::Punctuation => self.syntax_punctuation,
        }
    }
}

pub const DARK: Palette = Palette {
    bg_editor: Color::Rgb(13, 17, 23),
    bg_sidebar: Color::Rgb(1, 4, 9),
    bg_secondary: Color::Rgb(22, 27, 34),
    bg_active: Color::Rgb(33, 38, 45),
    bg_hover: Color::Rgb(48, 54, 61),
    border: Color::Rgb(48, 54, 61),
    text_primary: Color::Rgb(230, 237, 243),
    text_secondary: Color::Rgb(139, 148, 158),
    text_muted: Color::Rgb(110, 118, 129),
    text_accent: Color::Rgb(88, 166, 255),
    line_number: Color::Rgb(110, 118, 129),
    line_number_active: Color::Rgb(230, 237, 243),
    active_line: Color::Rgb(22, 27, 34),
    cursor: Color::Rgb(88, 166, 255),
    link: Color::Rgb(88, 166, 255),

    syntax_plain: Color::Rgb(230, 237, 243),
    syntax_keyword: Color::Rgb(255, 123, 114),
    syntax_string: Color::Rgb(165, 214, 255),
    syntax_comment: Color::Rgb(139, 148, 158),
    syntax_number: Color::Rgb(121, 192, 255),
    syntax_type: Color::Rgb(255, 166, 87),
    syntax_function: Color::Rgb(210, 168, 255),
    syntax_property: Color::Rgb(121, 192, 255),
    syntax_punctuation: Color::Rgb(201, 209, 217),

    branch_main: Color::Rgb(63, 185, 80),
    branch_feature: Color::Rgb(88, 166, 255),
    branch_education: Color::Rgb(210, 168, 255),
    additions: Color::Rgb(63, 185, 80),
    deletions: Color::Rgb(248, 81, 73),
};

pub const LIGHT: Palette = Palette {
    bg_editor: Color::Rgb(255, 255, 255),
    bg_sidebar: Color::Rgb(246, 248, 250),
    bg_secondary: Color::Rgb(246, 248, 250),
    bg_active: Color::Rgb(234, 238, 242),
    bg_hover: Color::Rgb(208, 215, 222),
    border: Color::Rgb(208, 215, 222),
    text_primary: Color::Rgb(31, 35, 40),
    text_secondary: Color::Rgb(101, 109, 118),
    text_muted: Color::Rgb(140, 149, 159),
    text_accent: Color::Rgb(9, 105, 218),
    line_number: Color::Rgb(140, 149, 159),
    line_number_active: Color::Rgb(31, 35, 40),
    active_line: Color::Rgb(246, 248, 250),
    cursor: Color::Rgb(9, 105, 218),
    link: Color::Rgb(9, 105, 218),

    syntax_plain: Color::Rgb(31, 35, 40),
    syntax_keyword: Color::Rgb(207, 34, 46),
    syntax_string: Color::Rgb(10, 48, 105),
    syntax_comment: Color::Rgb(110, 119, 129),
    syntax_number: Color::Rgb(5, 80, 174),
    syntax_type: Color::Rgb(149, 56, 0),
    syntax_function: Color::Rgb(130, 80, 223),
    syntax_property: Color::Rgb(5, 80, 174),
    syntax_punctuation: Color::Rgb(31, 35, 40),

    branch_main: Color::Rgb(26, 127, 55),
    branch_feature: Color::Rgb(9, 105, 218),
    branch_education: Color::Rgb(130, 80, 223),
    additions: Color::Rgb(26, 127, 55),
    deletions: Color::Rgb(207, 34, 46),
};

/// CSS hex form of a palette color. Only RGB colors appear in the
/// palettes; anything else renders as `inherit`.
pub fn css_color(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        _ => "inherit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Theme::from_id("Light"), Some(Theme::Light));
        assert_eq!(Theme::from_id(" dark "), Some(Theme::Dark));
        assert_eq!(Theme::from_id("solarized"), None);
    }

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(Color::Rgb(255, 123, 114)), "#ff7b72");
        assert_eq!(css_color(Color::Reset), "inherit");
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Dark.palette().bg_editor, Theme::Light.palette().bg_editor);
    }
}
