//! Detection of quoted URLs and e-mail addresses in plain line text.
//!
//! Only addresses wrapped in matching quotes count, so `'https://x.dev'`
//! is a link while a bare `https://x.dev` in a comment is not.

use once_cell::sync::Lazy;
use regex::Regex;

/// `'…'`, `"…"` or `` `…` `` around an http(s) URL or an e-mail address.
/// The regex crate has no backreferences, so each quote gets its own branch.
static QUOTED_LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    let url = r#"https?://[^\s'"`<>]+"#;
    let email = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
    let branches: Vec<String> = ['\'', '"', '`']
        .iter()
        .map(|q| format!("{q}(?:(?P<url{n}>{url})|(?P<email{n}>{email})){q}", n = *q as u32))
        .collect();
    Regex::new(&branches.join("|")).expect("Invalid quoted link regex pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Url,
    Email,
}

/// A detected link within one line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkInfo {
    pub kind: LinkKind,
    /// The address as written (no quotes).
    pub text: String,
    /// Start byte offset of `text` in the line.
    pub start: usize,
    /// End byte offset of `text` in the line.
    pub end: usize,
}

impl LinkInfo {
    /// Target handed to the system opener.
    pub fn target(&self) -> String {
        match self.kind {
            LinkKind::Url => self.text.clone(),
            LinkKind::Email => format!("mailto:{}", self.text),
        }
    }
}

/// All quoted links in `line`, in order.
pub fn detect_quoted_links(line: &str) -> Vec<LinkInfo> {
    QUOTED_LINK_REGEX
        .captures_iter(line)
        .filter_map(|caps| {
            ['\'', '"', '`'].iter().find_map(|q| {
                let n = *q as u32;
                if let Some(m) = caps.name(&format!("url{}", n)) {
                    return Some((LinkKind::Url, m));
                }
                caps.name(&format!("email{}", n)).map(|m| (LinkKind::Email, m))
            })
        })
        .map(|(kind, m)| LinkInfo {
            kind,
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_single_quoted_url() {
        let links = detect_quoted_links("  github: 'https://github.com/someone',");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, LinkKind::Url);
        assert_eq!(links[0].text, "https://github.com/someone");
        assert_eq!(&"  github: 'https://github.com/someone',"[links[0].start..links[0].end], links[0].text);
    }

    #[test]
    fn test_detects_email_with_mailto_target() {
        let links = detect_quoted_links(r#"email: "a@b.com""#);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, LinkKind::Email);
        assert_eq!(links[0].target(), "mailto:a@b.com");
    }

    #[test]
    fn test_ignores_unquoted_and_mismatched() {
        assert!(detect_quoted_links("see https://example.com for more").is_empty());
        assert!(detect_quoted_links(r#"'https://example.com""#).is_empty());
    }

    #[test]
    fn test_multiple_links_in_order() {
        let links = detect_quoted_links(r#"['https://a.dev', "b@c.io"]"#);
        let texts: Vec<&str> = links.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["https://a.dev", "b@c.io"]);
    }
}
