//! A small lexer that tags source text with [`TokenKind`]s.
//!
//! It is not a parser. Each language gets a [`Grammar`] describing its
//! comment and string delimiters plus keyword lists, which is enough for
//! the portfolio files and degrades gracefully on anything else.

use super::{HighlightedLine, Token, TokenKind};
use crate::content::Language;

pub struct Grammar {
    pub line_comments: &'static [&'static str],
    pub block_comment: Option<(&'static str, &'static str)>,
    /// `"""` / `'''` strings spanning lines.
    pub triple_quoted: bool,
    /// Backtick strings spanning lines.
    pub template_strings: bool,
    /// `#include`-style directives.
    pub preprocessor: bool,
    pub keywords: &'static [&'static str],
    pub types: &'static [&'static str],
}

const TS_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "case", "catch", "class", "const", "constructor",
    "continue", "default", "delete", "do", "else", "enum", "export", "extends", "false",
    "finally", "for", "from", "function", "if", "implements", "import", "in", "instanceof",
    "interface", "keyof", "let", "new", "null", "of", "private", "protected", "public",
    "readonly", "return", "static", "super", "switch", "this", "throw", "true", "try",
    "type", "typeof", "undefined", "var", "void", "while", "yield",
];

const TS_TYPES: &[&str] = &["string", "number", "boolean", "any", "unknown", "never", "object"];

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "constructor", "continue",
    "default", "delete", "do", "else", "export", "extends", "false", "finally", "for", "from",
    "function", "if", "import", "in", "instanceof", "let", "new", "null", "of", "return",
    "static", "super", "switch", "this", "throw", "true", "try", "typeof", "undefined", "var",
    "void", "while", "yield",
];

const PY_KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
    "elif", "else", "except", "False", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "None", "nonlocal", "not", "or", "pass", "raise", "return", "self",
    "True", "try", "while", "with", "yield",
];

const PY_TYPES: &[&str] = &["str", "int", "float", "bool", "list", "dict", "tuple", "set"];

const CPP_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "catch", "class", "const", "constexpr", "continue", "default",
    "delete", "do", "else", "enum", "explicit", "false", "for", "friend", "if", "inline",
    "namespace", "new", "nullptr", "operator", "private", "protected", "public", "return",
    "static", "struct", "switch", "template", "this", "throw", "true", "try", "typedef",
    "typename", "using", "virtual", "void", "while",
];

const CPP_TYPES: &[&str] = &[
    "bool", "char", "double", "float", "int", "long", "short", "size_t", "std", "string",
    "unsigned", "vector", "map",
];

const PSEUDO_KEYWORDS: &[&str] = &[
    "AND", "CALL", "CLASS", "CONST", "DO", "EACH", "ELSE", "END", "FOR", "FUNCTION", "IF",
    "IN", "NEW", "NOT", "OR", "PROCEDURE", "RETURN", "THEN", "TO", "WHILE",
];

const TYPESCRIPT: Grammar = Grammar {
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    triple_quoted: false,
    template_strings: true,
    preprocessor: false,
    keywords: TS_KEYWORDS,
    types: TS_TYPES,
};

const JAVASCRIPT: Grammar = Grammar {
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    triple_quoted: false,
    template_strings: true,
    preprocessor: false,
    keywords: JS_KEYWORDS,
    types: &[],
};

const PYTHON: Grammar = Grammar {
    line_comments: &["#"],
    block_comment: None,
    triple_quoted: true,
    template_strings: false,
    preprocessor: false,
    keywords: PY_KEYWORDS,
    types: PY_TYPES,
};

const CPP: Grammar = Grammar {
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    triple_quoted: false,
    template_strings: false,
    preprocessor: true,
    keywords: CPP_KEYWORDS,
    types: CPP_TYPES,
};

const PSEUDOCODE: Grammar = Grammar {
    line_comments: &["//"],
    block_comment: None,
    triple_quoted: false,
    template_strings: false,
    preprocessor: false,
    keywords: PSEUDO_KEYWORDS,
    types: &[],
};

impl Grammar {
    pub fn for_language(language: Language) -> &'static Grammar {
        match language {
            Language::TypeScript => &TYPESCRIPT,
            Language::JavaScript => &JAVASCRIPT,
            Language::Python => &PYTHON,
            Language::Cpp => &CPP,
            Language::Pseudocode => &PSEUDOCODE,
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Byte index where the string opened at `start` ends (exclusive).
///
/// Single-line strings stop at an unescaped newline so one stray quote
/// cannot swallow the rest of the file.
fn scan_string(source: &str, start: usize, quote: char, multiline: bool) -> usize {
    let mut escaped = false;
    for (offset, c) in source[start + quote.len_utf8()..].char_indices() {
        let at = start + quote.len_utf8() + offset;
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '\n' if !multiline => return at,
            c if c == quote => return at + c.len_utf8(),
            _ => {}
        }
    }
    source.len()
}

fn scan_while(source: &str, start: usize, pred: impl Fn(char) -> bool) -> usize {
    source[start..]
        .char_indices()
        .find(|(_, c)| !pred(*c))
        .map(|(offset, _)| start + offset)
        .unwrap_or(source.len())
}

fn classify_word(grammar: &Grammar, source: &str, start: usize, end: usize) -> TokenKind {
    let word = &source[start..end];
    if grammar.keywords.contains(&word) {
        return TokenKind::Keyword;
    }
    if grammar.types.contains(&word) {
        return TokenKind::Type;
    }

    let rest = source[end..].trim_start_matches([' ', '\t']);
    if rest.starts_with('(') {
        return TokenKind::Function;
    }

    let after_dot = source[..start].ends_with('.');
    let object_key = rest.starts_with(':') && !rest.starts_with("::");
    if after_dot || object_key {
        return TokenKind::Property;
    }

    if word.chars().next().is_some_and(char::is_uppercase) {
        return TokenKind::Type;
    }
    TokenKind::Plain
}

/// Split `source` into per-line token lists.
///
/// The concatenated token text of each line equals the corresponding item of
/// `source.lines()`, so line numbering matches the raw text exactly.
pub fn tokenize(source: &str, grammar: &Grammar) -> Vec<HighlightedLine> {
    let normalized;
    let source = if source.contains('\r') {
        normalized = source.replace("\r\n", "\n");
        normalized.as_str()
    } else {
        source
    };

    let mut spans: Vec<(TokenKind, usize, usize)> = Vec::new();
    let mut i = 0;
    while let Some(c) = source[i..].chars().next() {
        let rest = &source[i..];

        let (kind, end) = if let Some((open, close)) = grammar
            .block_comment
            .filter(|(open, _)| rest.starts_with(open))
        {
            let end = rest[open.len()..]
                .find(close)
                .map(|at| i + open.len() + at + close.len())
                .unwrap_or(source.len());
            (TokenKind::Comment, end)
        } else if grammar.line_comments.iter().any(|lc| rest.starts_with(lc)) {
            (TokenKind::Comment, scan_while(source, i, |c| c != '\n'))
        } else if grammar.triple_quoted && (rest.starts_with("\"\"\"") || rest.starts_with("'''")) {
            let delim = &rest[..3];
            let end = rest[3..]
                .find(delim)
                .map(|at| i + 3 + at + 3)
                .unwrap_or(source.len());
            (TokenKind::String, end)
        } else if c == '"' || c == '\'' {
            (TokenKind::String, scan_string(source, i, c, false))
        } else if c == '`' && grammar.template_strings {
            (TokenKind::String, scan_string(source, i, c, true))
        } else if c == '#' && grammar.preprocessor {
            (TokenKind::Keyword, scan_while(source, i + 1, is_ident_continue))
        } else if c.is_ascii_digit() {
            let end = scan_while(source, i, |c| c.is_ascii_alphanumeric() || c == '.' || c == '_');
            (TokenKind::Number, end)
        } else if is_ident_start(c) {
            let end = scan_while(source, i, is_ident_continue);
            (classify_word(grammar, source, i, end), end)
        } else if c.is_whitespace() {
            (TokenKind::Plain, scan_while(source, i, char::is_whitespace))
        } else {
            (TokenKind::Punctuation, i + c.len_utf8())
        };

        spans.push((kind, i, end));
        i = end;
    }

    split_lines(source, &spans)
}

fn split_lines(source: &str, spans: &[(TokenKind, usize, usize)]) -> Vec<HighlightedLine> {
    let mut lines = vec![HighlightedLine::default()];
    for &(kind, start, end) in spans {
        for (n, part) in source[start..end].split('\n').enumerate() {
            if n > 0 {
                lines.push(HighlightedLine::default());
            }
            if part.is_empty() {
                continue;
            }
            if let Some(line) = lines.last_mut() {
                line.push(kind, part);
            }
        }
    }

    // `lines()` does not yield a final empty line after a trailing newline.
    if source.is_empty() || source.ends_with('\n') {
        lines.pop();
    }
    lines
}

impl HighlightedLine {
    fn push(&mut self, kind: TokenKind, text: &str) {
        match self.tokens.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(text),
            _ => self.tokens.push(Token {
                kind,
                text: text.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_of(line: &HighlightedLine) -> Vec<(TokenKind, &str)> {
        line.tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
    }

    fn ts(source: &str) -> Vec<HighlightedLine> {
        tokenize(source, Grammar::for_language(Language::TypeScript))
    }

    #[test]
    fn test_line_text_matches_source_lines() {
        let source = "/**\n * Doc\n */\nexport const a = 'x';\n\nconst b = `multi\nline`;\n";
        let lines = ts(source);
        let plain: Vec<String> = lines.iter().map(HighlightedLine::plain_text).collect();
        let expected: Vec<&str> = source.lines().collect();
        assert_eq!(plain, expected);
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let lines = ts("/**\n * About\n */\nlet x");
        assert_eq!(kinds_of(&lines[1]), vec![(TokenKind::Comment, " * About")]);
        assert_eq!(lines[3].tokens[0].kind, TokenKind::Keyword);
    }

    #[test]
    fn test_keywords_strings_properties() {
        let lines = ts("  name: 'Jordan',");
        assert_eq!(
            kinds_of(&lines[0]),
            vec![
                (TokenKind::Plain, "  "),
                (TokenKind::Property, "name"),
                (TokenKind::Punctuation, ":"),
                (TokenKind::Plain, " "),
                (TokenKind::String, "'Jordan'"),
                (TokenKind::Punctuation, ","),
            ]
        );
    }

    #[test]
    fn test_function_and_type() {
        let lines = ts("export default new About();");
        let kinds = kinds_of(&lines[0]);
        assert!(kinds.contains(&(TokenKind::Function, "About")));
        assert!(kinds.contains(&(TokenKind::Keyword, "export")));
    }

    #[test]
    fn test_unterminated_string_stops_at_newline() {
        let lines = ts("const a = 'oops\nconst b = 1;");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].tokens[0].kind, TokenKind::Keyword);
    }

    #[test]
    fn test_python_triple_quotes_and_comments() {
        let lines = tokenize(
            "\"\"\"\nDoc\n\"\"\"\n# note\ndef f(): pass",
            Grammar::for_language(Language::Python),
        );
        assert_eq!(lines[1].tokens[0].kind, TokenKind::String);
        assert_eq!(lines[3].tokens[0].kind, TokenKind::Comment);
        assert_eq!(lines[4].tokens[0].kind, TokenKind::Keyword);
    }

    #[test]
    fn test_multibyte_text_is_safe() {
        let lines = ts("// Kōwhai — ✓\nconst s = 'Māori';");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].plain_text(), "// Kōwhai — ✓");
    }

    #[test]
    fn test_crlf_normalized() {
        let lines = ts("a\r\nb\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].plain_text(), "b");
    }

    #[test]
    fn test_empty_source_has_no_lines() {
        assert!(ts("").is_empty());
    }
}
