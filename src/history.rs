//! Career timeline shown by the `GitHistory` component node.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const BUNDLED_HISTORY: &str = include_str!("../assets/git-history.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Main,
    Feature,
    Education,
}

impl Branch {
    pub const ALL: [Branch; 3] = [Branch::Main, Branch::Feature, Branch::Education];

    pub fn name(&self) -> &'static str {
        match self {
            Branch::Main => "main",
            Branch::Feature => "feature",
            Branch::Education => "education",
        }
    }

    /// Lane column used by the timeline graph.
    pub fn lane(&self) -> usize {
        match self {
            Branch::Main => 0,
            Branch::Feature => 1,
            Branch::Education => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub hash: String,
    pub date: NaiveDate,
    pub message: String,
    #[serde(default)]
    pub description: Option<String>,
    pub branch: Branch,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub additions: Option<u32>,
    #[serde(default)]
    pub deletions: Option<u32>,
}

impl Commit {
    pub fn short_hash(&self) -> &str {
        let end = self
            .hash
            .char_indices()
            .nth(7)
            .map_or(self.hash.len(), |(at, _)| at);
        &self.hash[..end]
    }
}

/// Parse a commit list and order it newest first.
pub fn load_commits(json: &str) -> Result<Vec<Commit>, serde_json::Error> {
    let mut commits: Vec<Commit> = serde_json::from_str(json)?;
    commits.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(commits)
}

/// The bundled timeline, or an empty one if it fails to parse.
pub fn bundled_commits() -> Vec<Commit> {
    load_commits(BUNDLED_HISTORY).unwrap_or_else(|err| {
        tracing::warn!("bundled git history is malformed: {}", err);
        Vec::new()
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BranchFilter {
    #[default]
    All,
    Only(Branch),
}

impl BranchFilter {
    pub const ALL: [BranchFilter; 4] = [
        BranchFilter::All,
        BranchFilter::Only(Branch::Main),
        BranchFilter::Only(Branch::Feature),
        BranchFilter::Only(Branch::Education),
    ];

    pub fn label(&self) -> String {
        match self {
            BranchFilter::All => "* all branches".to_string(),
            BranchFilter::Only(branch) => format!("o {}", branch.name()),
        }
    }

    pub fn matches(&self, commit: &Commit) -> bool {
        match self {
            BranchFilter::All => true,
            BranchFilter::Only(branch) => commit.branch == *branch,
        }
    }

    pub fn next(&self) -> BranchFilter {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Timeline view state.
#[derive(Debug, Clone, Default)]
pub struct GitHistory {
    commits: Vec<Commit>,
    filter: BranchFilter,
    selected: Option<String>,
}

impl GitHistory {
    pub fn new(commits: Vec<Commit>) -> Self {
        Self {
            commits,
            filter: BranchFilter::All,
            selected: None,
        }
    }

    pub fn bundled() -> Self {
        Self::new(bundled_commits())
    }

    pub fn visible(&self) -> Vec<&Commit> {
        self.commits
            .iter()
            .filter(|commit| self.filter.matches(commit))
            .collect()
    }

    pub fn filter(&self) -> BranchFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: BranchFilter) {
        self.filter = filter;
        let still_visible = self
            .selected
            .as_deref()
            .is_some_and(|hash| self.visible().iter().any(|c| c.hash == hash));
        if !still_visible {
            self.selected = None;
        }
    }

    /// Expand `hash`, or collapse it if already expanded.
    pub fn toggle(&mut self, hash: &str) {
        if self.selected.as_deref() == Some(hash) {
            self.selected = None;
        } else {
            self.selected = Some(hash.to_string());
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Move the selection by `delta` within the visible commits.
    pub fn move_selection(&mut self, delta: isize) {
        let visible = self.visible();
        if visible.is_empty() {
            return;
        }
        let current = self
            .selected
            .as_deref()
            .and_then(|hash| visible.iter().position(|c| c.hash == hash));
        let next = match current {
            Some(index) => index.saturating_add_signed(delta).min(visible.len() - 1),
            None => 0,
        };
        let hash = visible[next].hash.clone();
        self.selected = Some(hash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"hash": "aaaaaaa1", "date": "2020-01-01", "message": "old", "branch": "education", "tags": []},
        {"hash": "bbbbbbb2", "date": "2024-05-01", "message": "new", "branch": "feature",
         "description": "details", "tags": ["x"], "additions": 10, "deletions": 2}
    ]"#;

    #[test]
    fn test_bundled_history_parses() {
        let commits = bundled_commits();
        assert_eq!(commits.len(), 9);
        assert!(commits.windows(2).all(|pair| pair[0].date >= pair[1].date));
    }

    #[test]
    fn test_load_sorts_newest_first() {
        let commits = load_commits(SAMPLE).unwrap();
        assert_eq!(commits[0].message, "new");
        assert_eq!(commits[0].additions, Some(10));
        assert_eq!(commits[1].description, None);
        assert_eq!(commits[0].short_hash(), "bbbbbbb");
    }

    #[test]
    fn test_malformed_history_is_error() {
        assert!(load_commits("{\"hash\": 1}").is_err());
    }

    #[test]
    fn test_filter_and_toggle() {
        let mut history = GitHistory::new(load_commits(SAMPLE).unwrap());
        history.toggle("aaaaaaa1");
        assert_eq!(history.selected(), Some("aaaaaaa1"));
        history.set_filter(BranchFilter::Only(Branch::Feature));
        assert_eq!(history.visible().len(), 1);
        assert_eq!(history.selected(), None);
        history.toggle("bbbbbbb2");
        history.toggle("bbbbbbb2");
        assert_eq!(history.selected(), None);
    }

    #[test]
    fn test_filter_cycles() {
        let mut filter = BranchFilter::All;
        for _ in 0..4 {
            filter = filter.next();
        }
        assert_eq!(filter, BranchFilter::All);
    }
}
