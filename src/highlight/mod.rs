//! Syntax highlighting.
//!
//! The code viewer talks to a [`Highlighter`] through an async trait and
//! treats it as a black box: source text, language and theme go in, per-line
//! tagged tokens come out. [`RegexHighlighter`] is the built-in
//! implementation; a failure of any highlighter makes the viewer fall back to
//! [`HighlightedDocument::plain`].

pub mod links;
pub mod markup;
mod tokenizer;

use async_trait::async_trait;

use crate::content::Language;
use crate::error::HighlightError;
use crate::theme::Theme;

pub use links::{detect_quoted_links, LinkInfo, LinkKind};
pub use markup::{escape_html, linkify_markup, render_html};
pub use tokenizer::Grammar;

/// Largest source the built-in highlighter accepts.
pub const MAX_HIGHLIGHT_BYTES: usize = 512 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Plain,
    Keyword,
    String,
    Comment,
    Number,
    Type,
    Function,
    Property,
    Punctuation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightedLine {
    pub tokens: Vec<Token>,
}

impl HighlightedLine {
    /// The line's text with all tagging removed.
    pub fn plain_text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// Highlighter output: one entry per source line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightedDocument {
    pub lines: Vec<HighlightedLine>,
    /// False for the unstyled fallback.
    pub styled: bool,
}

impl HighlightedDocument {
    /// Unstyled rendering of `source`, used when highlighting fails.
    pub fn plain(source: &str) -> Self {
        let lines = source
            .lines()
            .map(|line| HighlightedLine {
                tokens: if line.is_empty() {
                    Vec::new()
                } else {
                    vec![Token {
                        kind: TokenKind::Plain,
                        text: line.to_string(),
                    }]
                },
            })
            .collect();
        Self {
            lines,
            styled: false,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Plain text of the 1-based line `number`.
    pub fn line_text(&self, number: usize) -> Option<String> {
        number
            .checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(HighlightedLine::plain_text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightRequest {
    pub source: String,
    pub language: Language,
    pub theme: Theme,
}

#[async_trait]
pub trait Highlighter: Send + Sync {
    async fn highlight(&self, request: HighlightRequest) -> Result<HighlightedDocument, HighlightError>;
}

/// Grammar-table highlighter. Token colors are resolved from the theme
/// palette at render time, so the theme does not affect tokenization.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexHighlighter;

impl RegexHighlighter {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous entry point shared by the async trait method and the
    /// HTML export command.
    pub fn highlight_now(&self, request: &HighlightRequest) -> Result<HighlightedDocument, HighlightError> {
        if request.source.len() > MAX_HIGHLIGHT_BYTES {
            return Err(HighlightError::Failed {
                message: format!(
                    "source is {} bytes, limit is {}",
                    request.source.len(),
                    MAX_HIGHLIGHT_BYTES
                ),
            });
        }
        let grammar = Grammar::for_language(request.language);
        Ok(HighlightedDocument {
            lines: tokenizer::tokenize(&request.source, grammar),
            styled: true,
        })
    }
}

#[async_trait]
impl Highlighter for RegexHighlighter {
    async fn highlight(&self, request: HighlightRequest) -> Result<HighlightedDocument, HighlightError> {
        self.highlight_now(&request)
    }
}
