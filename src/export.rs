//! Static HTML export of a single content node.

use std::fs;

use crate::cli::args::ExportArgs;
use crate::content::{ContentStore, Language};
use crate::error::{ContentError, FolioResult, ResultExt};
use crate::highlight::{escape_html, linkify_markup, render_html, HighlightRequest, HighlightedDocument, RegexHighlighter};
use crate::theme::{css_color, Theme};

/// Render the node at `path` as a standalone HTML page.
///
/// Quoted URLs and e-mail addresses in the output are anchors.
pub fn export_html(store: &ContentStore, path: &str, language: Language, theme: Theme) -> FolioResult<String> {
    let node = store.find_by_path(path).ok_or_else(|| ContentError::NotFound {
        path: path.to_string(),
    })?;
    if node.component().is_some() {
        return Err(ContentError::NotAFile {
            path: path.to_string(),
        }
        .into());
    }
    let source = store.resolve_text(path, language)?;
    let request = HighlightRequest {
        source: source.into_owned(),
        language,
        theme,
    };
    let document = RegexHighlighter::new()
        .highlight_now(&request)
        .absorb("highlight for export")
        .unwrap_or_else(|| HighlightedDocument::plain(&request.source));

    let palette = theme.palette();
    let body = linkify_markup(&render_html(&document, palette));
    let title = escape_html(&language.filename(node.name()));
    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
<style>body{{margin:0;background:{bg}}}pre{{margin:0;padding:1rem}}.code-link{{color:{link};text-decoration:underline}}</style>\n\
</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = title,
        bg = css_color(palette.bg_editor),
        link = css_color(palette.link),
        body = body,
    ))
}

/// Run `codefolio export`, writing to the output file or stdout.
pub fn run_export(args: &ExportArgs, store: &ContentStore) -> FolioResult<()> {
    let html = export_html(store, &args.path, args.language, args.theme)?;
    match &args.out {
        Some(out) => {
            fs::write(out, html)?;
            tracing::info!(path = %args.path, out = %out.display(), "exported");
        }
        None => print!("{}", html),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{DEFAULT_FILE_PATH, GIT_HISTORY_PATH};
    use crate::error::FolioError;

    #[test]
    fn test_export_contact_links() {
        let store = ContentStore::portfolio();
        let html = export_html(&store, "/portfolio/contact.ts", Language::TypeScript, Theme::Dark).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>contact.ts</title>"));
        assert!(html.contains("href=\"mailto:jordan.ellis@example.com\""));
        assert!(html.contains("href=\"https://github.com/jordan-ellis-dev\""));
        assert!(!html.contains("<a href=\"<a"));
    }

    #[test]
    fn test_export_uses_translation_filename() {
        let store = ContentStore::portfolio();
        let html = export_html(&store, DEFAULT_FILE_PATH, Language::Python, Theme::Light).unwrap();
        assert!(html.contains("<title>about.py</title>"));
        assert!(html.contains("data-line=\"1\""));
    }

    #[test]
    fn test_export_unknown_path_fails() {
        let store = ContentStore::portfolio();
        let err = export_html(&store, "/nope.ts", Language::TypeScript, Theme::Dark).unwrap_err();
        assert!(matches!(err, FolioError::Content(ContentError::NotFound { .. })));
    }

    #[test]
    fn test_export_component_fails() {
        let store = ContentStore::portfolio();
        assert!(export_html(&store, GIT_HISTORY_PATH, Language::TypeScript, Theme::Dark).is_err());
    }

    #[test]
    fn test_run_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("about.html");
        let args = ExportArgs {
            path: DEFAULT_FILE_PATH.to_string(),
            language: Language::TypeScript,
            theme: Theme::Dark,
            out: Some(out.clone()),
        };
        run_export(&args, &ContentStore::portfolio()).unwrap();
        let written = std::fs::read_to_string(out).unwrap();
        assert!(written.contains("<pre class=\"codefolio\""));
    }
}
