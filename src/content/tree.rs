//! The static content tree and its lookups.

use std::borrow::Cow;

use super::language::Language;
use super::translations::TranslationTable;
use crate::error::ContentError;

/// Prefix marking a file whose body is rendered by a dedicated view instead
/// of the code viewer (e.g. `__COMPONENT__:GitHistory`).
pub const COMPONENT_PREFIX: &str = "__COMPONENT__:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeBody {
    File { text: String },
    Folder { children: Vec<ContentNode> },
}

/// One addressable unit of the content tree.
///
/// Files carry text and no children; folders carry children and no text.
/// The constructors are the only way to build a node, so the two shapes
/// cannot be mixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentNode {
    name: String,
    path: String,
    body: NodeBody,
}

impl ContentNode {
    pub fn file(name: impl Into<String>, path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            body: NodeBody::File { text: text.into() },
        }
    }

    pub fn folder(
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<ContentNode>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            body: NodeBody::Folder { children },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> NodeKind {
        match self.body {
            NodeBody::File { .. } => NodeKind::File,
            NodeBody::Folder { .. } => NodeKind::Folder,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind() == NodeKind::File
    }

    /// Text of a file node; `None` for folders.
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            NodeBody::File { text } => Some(text),
            NodeBody::Folder { .. } => None,
        }
    }

    /// Children of a folder node; empty for files.
    pub fn children(&self) -> &[ContentNode] {
        match &self.body {
            NodeBody::File { .. } => &[],
            NodeBody::Folder { children } => children,
        }
    }

    /// Name of the dedicated view for a component file.
    pub fn component(&self) -> Option<&str> {
        self.text()?.trim().strip_prefix(COMPONENT_PREFIX)
    }
}

/// All file nodes under `nodes`, depth-first, preserving folder order.
pub fn flatten_files(nodes: &[ContentNode]) -> Vec<&ContentNode> {
    fn walk<'a>(nodes: &'a [ContentNode], out: &mut Vec<&'a ContentNode>) {
        for node in nodes {
            if node.is_file() {
                out.push(node);
            }
            walk(node.children(), out);
        }
    }

    let mut files = Vec::new();
    walk(nodes, &mut files);
    files
}

fn find_in<'a>(nodes: &'a [ContentNode], path: &str) -> Option<&'a ContentNode> {
    for node in nodes {
        if node.path == path {
            return Some(node);
        }
        if let Some(found) = find_in(node.children(), path) {
            return Some(found);
        }
    }
    None
}

/// Read-only content tree plus its translation table.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    roots: Vec<ContentNode>,
    translations: TranslationTable,
}

impl ContentStore {
    pub fn new(roots: Vec<ContentNode>) -> Self {
        Self {
            roots,
            translations: TranslationTable::new(),
        }
    }

    pub fn with_translations(mut self, translations: TranslationTable) -> Self {
        self.translations = translations;
        self
    }

    pub fn roots(&self) -> &[ContentNode] {
        &self.roots
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    /// The node at `path` (file or folder), or `None`.
    pub fn find_by_path(&self, path: &str) -> Option<&ContentNode> {
        find_in(&self.roots, path)
    }

    /// Every file in the store, depth-first.
    pub fn files(&self) -> Vec<&ContentNode> {
        flatten_files(&self.roots)
    }

    /// First file whose name is `name`.
    pub fn file_named(&self, name: &str) -> Option<&ContentNode> {
        self.files().into_iter().find(|node| node.name() == name)
    }

    /// Files whose path contains `/<folder>/`.
    pub fn files_in(&self, folder: &str) -> Vec<&ContentNode> {
        let needle = format!("/{}/", folder.trim_matches('/'));
        self.files()
            .into_iter()
            .filter(|node| node.path().contains(&needle))
            .collect()
    }

    /// Text of the file at `path` in `language`.
    ///
    /// Falls back to the canonical text when no translation exists.
    pub fn resolve_text(&self, path: &str, language: Language) -> Result<Cow<'_, str>, ContentError> {
        let node = self.find_by_path(path).ok_or_else(|| ContentError::NotFound {
            path: path.to_string(),
        })?;
        let text = node.text().ok_or_else(|| ContentError::NotAFile {
            path: path.to_string(),
        })?;
        Ok(match self.translations.lookup(path, language) {
            Some(translated) => Cow::Borrowed(translated),
            None => Cow::Borrowed(text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContentStore {
        ContentStore::new(vec![
            ContentNode::file("a.ts", "/p/a.ts", "const a = 1;"),
            ContentNode::folder(
                "sub",
                "/p/sub",
                vec![
                    ContentNode::file("b.ts", "/p/sub/b.ts", "b"),
                    ContentNode::folder(
                        "deep",
                        "/p/sub/deep",
                        vec![ContentNode::file("c.ts", "/p/sub/deep/c.ts", "c")],
                    ),
                ],
            ),
            ContentNode::file("d.ts", "/p/d.ts", "d"),
        ])
    }

    #[test]
    fn test_flatten_is_depth_first_in_order() {
        let store = sample();
        let paths: Vec<&str> = store.files().iter().map(|n| n.path()).collect();
        assert_eq!(paths, vec!["/p/a.ts", "/p/sub/b.ts", "/p/sub/deep/c.ts", "/p/d.ts"]);
    }

    #[test]
    fn test_find_by_path_files_and_folders() {
        let store = sample();
        assert_eq!(store.find_by_path("/p/sub/deep/c.ts").map(|n| n.name()), Some("c.ts"));
        assert_eq!(store.find_by_path("/p/sub").map(|n| n.kind()), Some(NodeKind::Folder));
        assert!(store.find_by_path("/p/zzz.ts").is_none());
    }

    #[test]
    fn test_node_shapes() {
        let file = ContentNode::file("a", "/a", "x");
        assert_eq!(file.text(), Some("x"));
        assert!(file.children().is_empty());

        let folder = ContentNode::folder("f", "/f", vec![file]);
        assert_eq!(folder.text(), None);
        assert_eq!(folder.children().len(), 1);
    }

    #[test]
    fn test_resolve_text_errors() {
        let store = sample();
        assert_eq!(
            store.resolve_text("/missing", Language::TypeScript),
            Err(ContentError::NotFound {
                path: "/missing".to_string()
            })
        );
        assert_eq!(
            store.resolve_text("/p/sub", Language::TypeScript),
            Err(ContentError::NotAFile {
                path: "/p/sub".to_string()
            })
        );
    }

    #[test]
    fn test_resolve_text_falls_back_to_original() {
        let store = sample().with_translations(
            TranslationTable::new().with_entry("/p/a.ts", Language::Python, "a = 1"),
        );
        assert_eq!(store.resolve_text("/p/a.ts", Language::Python).as_deref(), Ok("a = 1"));
        assert_eq!(
            store.resolve_text("/p/a.ts", Language::Cpp).as_deref(),
            Ok("const a = 1;")
        );
        assert_eq!(store.resolve_text("/p/d.ts", Language::Python).as_deref(), Ok("d"));
    }

    #[test]
    fn test_component_marker() {
        let node = ContentNode::file("git-history.log", "/p/git-history.log", "__COMPONENT__:GitHistory");
        assert_eq!(node.component(), Some("GitHistory"));
        assert_eq!(ContentNode::file("a", "/a", "plain").component(), None);
    }

    #[test]
    fn test_files_in_folder() {
        let store = sample();
        let names: Vec<&str> = store.files_in("sub").iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["b.ts", "c.ts"]);
    }
}
