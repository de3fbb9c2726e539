//! HTML rendering of highlighted documents and the link-ification pass.
//!
//! `linkify_markup` works on markup that has already been escaped, so quotes
//! may appear literally or as entities (`&#39;`, `&apos;`, `&quot;`, `&#34;`).
//! Existing anchors and tag attributes are copied through untouched, which
//! makes the transform idempotent.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::HighlightedDocument;
use crate::theme::{css_color, Palette};

const QUOTE: &str = r#"'|"|&apos;|&#39;|&quot;|&#34;"#;

static LINK_IN_TEXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r#"(?P<open>{q})(?:(?P<url>https?://[^\s'"`<>]+?)|(?P<email>[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{{2,}}))(?P<close>{q})"#,
        q = QUOTE
    );
    Regex::new(&pattern).expect("Invalid markup link regex pattern")
});

/// Escape text for inclusion in HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render a document as `<pre><code>` markup, one `data-line` span per line.
pub fn render_html(document: &HighlightedDocument, palette: &Palette) -> String {
    let mut html = format!(
        "<pre class=\"codefolio\" style=\"background:{};color:{}\"><code>",
        css_color(palette.bg_editor),
        css_color(palette.syntax_plain)
    );
    for (index, line) in document.lines.iter().enumerate() {
        html.push_str(&format!("<span class=\"line\" data-line=\"{}\">", index + 1));
        for token in &line.tokens {
            if document.styled {
                html.push_str(&format!(
                    "<span style=\"color:{}\">{}</span>",
                    css_color(palette.token(token.kind)),
                    escape_html(&token.text)
                ));
            } else {
                html.push_str(&escape_html(&token.text));
            }
        }
        html.push_str("</span>\n");
    }
    html.push_str("</code></pre>");
    html
}

fn quote_char(entity: &str) -> char {
    match entity {
        "'" | "&apos;" | "&#39;" => '\'',
        _ => '"',
    }
}

fn linkify_text(text: &str) -> String {
    LINK_IN_TEXT_REGEX
        .replace_all(text, |caps: &Captures| {
            let open = &caps["open"];
            let close = &caps["close"];
            if quote_char(open) != quote_char(close) {
                return caps[0].to_string();
            }
            let anchor = if let Some(url) = caps.name("url") {
                format!(
                    "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"code-link\">{url}</a>",
                    url = url.as_str()
                )
            } else if let Some(email) = caps.name("email") {
                format!(
                    "<a href=\"mailto:{email}\" class=\"code-link\">{email}</a>",
                    email = email.as_str()
                )
            } else {
                return caps[0].to_string();
            };
            format!("{}{}{}", open, anchor, close)
        })
        .into_owned()
}

fn is_anchor_open(tag: &str) -> bool {
    let name = tag.trim_start_matches('<');
    name.starts_with("a ") || name.starts_with("a>") || name.starts_with("A ")
}

fn is_anchor_close(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("</a>")
}

/// Wrap quoted URLs and e-mail addresses in `<a>` elements.
///
/// Only text outside tags and outside existing anchors is scanned.
pub fn linkify_markup(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut anchor_depth = 0usize;
    let mut rest = markup;

    while !rest.is_empty() {
        match rest.find('<') {
            Some(0) => {
                let tag_end = rest.find('>').map(|at| at + 1).unwrap_or(rest.len());
                let tag = &rest[..tag_end];
                if is_anchor_open(tag) {
                    anchor_depth += 1;
                } else if is_anchor_close(tag) {
                    anchor_depth = anchor_depth.saturating_sub(1);
                }
                out.push_str(tag);
                rest = &rest[tag_end..];
            }
            found => {
                let text_end = found.unwrap_or(rest.len());
                let text = &rest[..text_end];
                if anchor_depth == 0 {
                    out.push_str(&linkify_text(text));
                } else {
                    out.push_str(text);
                }
                rest = &rest[text_end..];
            }
        }
    }
    out
}
