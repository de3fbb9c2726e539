//! The bundled portfolio tree.

use super::translations::TranslationTable;
use super::tree::{ContentNode, ContentStore, COMPONENT_PREFIX};

/// File shown when the editor first opens.
pub const DEFAULT_FILE_PATH: &str = "/portfolio/about.ts";

/// Path of the git history component file.
pub const GIT_HISTORY_PATH: &str = "/portfolio/git-history.log";

const ROOT: &str = "/portfolio";

macro_rules! asset {
    ($name:literal) => {
        include_str!(concat!("../../assets/portfolio/", $name))
    };
}

fn file(name: &str, text: &str) -> ContentNode {
    ContentNode::file(name, format!("{}/{}", ROOT, name), text)
}

fn project(name: &str, text: &str) -> ContentNode {
    ContentNode::file(name, format!("{}/projects/{}", ROOT, name), text)
}

/// Top-level nodes of the bundled portfolio, in sidebar order.
pub fn portfolio_tree() -> Vec<ContentNode> {
    vec![
        file("about.ts", asset!("about.ts")),
        file("skills.ts", asset!("skills.ts")),
        file("experience.ts", asset!("experience.ts")),
        ContentNode::folder(
            "projects",
            format!("{}/projects", ROOT),
            vec![
                project("shipmentStream.ts", asset!("projects/shipmentStream.ts")),
                project("queueLens.ts", asset!("projects/queueLens.ts")),
                project("ledgerRecon.ts", asset!("projects/ledgerRecon.ts")),
                project("releaseNotes.ts", asset!("projects/releaseNotes.ts")),
                project("codefolio.ts", asset!("projects/codefolio.ts")),
            ],
        ),
        file("values.ts", asset!("values.ts")),
        file("contact.ts", asset!("contact.ts")),
        file("git-history.log", &format!("{}GitHistory", COMPONENT_PREFIX)),
    ]
}

impl ContentStore {
    /// The bundled portfolio with its translation table.
    pub fn portfolio() -> Self {
        ContentStore::new(portfolio_tree()).with_translations(TranslationTable::builtin())
    }
}
