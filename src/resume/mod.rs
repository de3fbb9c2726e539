//! Traditional resume view built from the same content the editor shows.

pub mod extract;

use crate::content::ContentStore;

pub use extract::{parse_about, parse_contact, parse_experience, parse_project, parse_skills, parse_values};

/// Static resume document offered for download.
pub const DEFAULT_RESUME_URL: &str = "https://jordan-ellis.example.dev/resume.pdf";

pub const BANNER_TITLE: &str = "Are you a developer?";
pub const BANNER_TEXT: &str = "This portfolio is also an IDE. Browse the source instead.";
pub const BANNER_ACTION: &str = "Open Editor";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub philosophy: String,
    pub education: String,
    pub experience: String,
    pub focus: String,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillGroups {
    pub languages: Vec<String>,
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub databases_and_cloud: Vec<String>,
    pub ai_and_data: Vec<String>,
    pub tooling: Vec<String>,
    pub learning: Vec<String>,
}

impl SkillGroups {
    /// Non-empty groups with display titles, in display order.
    pub fn groups(&self) -> Vec<(&'static str, &[String])> {
        [
            ("Languages", self.languages.as_slice()),
            ("Frontend", self.frontend.as_slice()),
            ("Backend", self.backend.as_slice()),
            ("Databases & Cloud", self.databases_and_cloud.as_slice()),
            ("AI & Data", self.ai_and_data.as_slice()),
            ("Tooling", self.tooling.as_slice()),
            ("Currently Learning", self.learning.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Role {
    pub company: String,
    pub title: String,
    pub period: String,
    pub location: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueStatement {
    pub name: String,
    pub principle: String,
    pub practice: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub location: String,
    pub open_to: Vec<String>,
    pub signoff: String,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.github.is_empty() && self.linkedin.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectLinks {
    pub demo: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSummary {
    pub name: String,
    pub status: String,
    pub year: String,
    pub problem: String,
    pub solution: String,
    pub lesson: String,
    pub stack: Vec<String>,
    /// `(metric, outcome)` pairs in source order.
    pub results: Vec<(String, String)>,
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResumeSection {
    Summary,
    Skills,
    Experience,
    Projects,
    Values,
    Contact,
}

impl ResumeSection {
    pub const ALL: [ResumeSection; 6] = [
        ResumeSection::Summary,
        ResumeSection::Skills,
        ResumeSection::Experience,
        ResumeSection::Projects,
        ResumeSection::Values,
        ResumeSection::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ResumeSection::Summary => "Summary",
            ResumeSection::Skills => "Skills",
            ResumeSection::Experience => "Experience",
            ResumeSection::Projects => "Projects",
            ResumeSection::Values => "Values",
            ResumeSection::Contact => "Contact",
        }
    }
}

/// Everything the resume view renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resume {
    pub profile: Profile,
    pub skills: SkillGroups,
    pub experience: Vec<Role>,
    pub projects: Vec<ProjectSummary>,
    pub values: Vec<ValueStatement>,
    pub contact: Contact,
}

impl Resume {
    /// Extract from the well-known portfolio files. Missing files give
    /// empty records.
    pub fn from_store(store: &ContentStore) -> Self {
        let text = |name: &str| {
            store
                .file_named(name)
                .and_then(|node| node.text())
                .unwrap_or_default()
        };
        let resume = Self {
            profile: parse_about(text("about.ts")),
            skills: parse_skills(text("skills.ts")),
            experience: parse_experience(text("experience.ts")),
            projects: store
                .files_in("projects")
                .into_iter()
                .filter_map(|node| node.text())
                .map(parse_project)
                .collect(),
            values: parse_values(text("values.ts")),
            contact: parse_contact(text("contact.ts")),
        };
        tracing::debug!(
            roles = resume.experience.len(),
            projects = resume.projects.len(),
            sections = resume.sections().len(),
            "resume extracted"
        );
        resume
    }

    /// Sections with something to show, in display order.
    pub fn sections(&self) -> Vec<ResumeSection> {
        ResumeSection::ALL
            .into_iter()
            .filter(|section| match section {
                ResumeSection::Summary => {
                    !self.profile.philosophy.is_empty() || !self.profile.focus.is_empty()
                }
                ResumeSection::Skills => !self.skills.is_empty(),
                ResumeSection::Experience => !self.experience.is_empty(),
                ResumeSection::Projects => !self.projects.is_empty(),
                ResumeSection::Values => !self.values.is_empty(),
                ResumeSection::Contact => !self.contact.is_empty(),
            })
            .collect()
    }
}
