//! File tree rows and keyboard navigation over them.

use std::collections::HashSet;

use crate::content::{ContentNode, ContentStore, Language, NodeKind};

/// One visible row of the file tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub path: String,
    /// Display name, already adjusted for the current language.
    pub label: String,
    pub depth: usize,
    pub kind: NodeKind,
    /// Folders only.
    pub expanded: bool,
}

/// Flatten the tree into the rows currently visible, honoring `expanded`.
pub fn tree_rows(store: &ContentStore, expanded: &HashSet<String>, language: Language) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    push_rows(store.roots(), 0, expanded, language, &mut rows);
    rows
}

fn push_rows(
    nodes: &[ContentNode],
    depth: usize,
    expanded: &HashSet<String>,
    language: Language,
    rows: &mut Vec<TreeRow>,
) {
    for node in nodes {
        match node.kind() {
            NodeKind::Folder => {
                let open = expanded.contains(node.path());
                rows.push(TreeRow {
                    path: node.path().to_string(),
                    label: node.name().to_string(),
                    depth,
                    kind: NodeKind::Folder,
                    expanded: open,
                });
                if open {
                    push_rows(node.children(), depth + 1, expanded, language, rows);
                }
            }
            NodeKind::File => rows.push(TreeRow {
                path: node.path().to_string(),
                label: language.filename(node.name()).into_owned(),
                depth,
                kind: NodeKind::File,
                expanded: false,
            }),
        }
    }
}

/// Folders on the way to `path`, so opening a nested file reveals it.
pub fn ancestors(path: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut end = 0;
    while let Some(offset) = path.get(end + 1..).and_then(|rest| rest.find('/')) {
        end += offset + 1;
        result.push(path[..end].to_string());
    }
    result
}

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    Sidebar,
    #[default]
    Content,
}

impl Focus {
    pub fn toggle(&self) -> Focus {
        match self {
            Focus::Sidebar => Focus::Content,
            Focus::Content => Focus::Sidebar,
        }
    }
}
