//! Pattern-based extraction of resume records from portfolio source text.
//!
//! Best effort: each field has its own pattern and a miss yields an empty
//! default rather than an error.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Contact, Profile, ProjectLinks, ProjectSummary, Role, SkillGroups, ValueStatement};

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid resume extraction regex pattern")
}

static QUOTED: Lazy<Regex> = Lazy::new(|| compile(r#"['"]([^'"]+)['"]"#));

static ABOUT_NAME: Lazy<Regex> = Lazy::new(|| compile(r#"name\s*=\s*['"]([^'"]+)['"]"#));
static ABOUT_ROLE: Lazy<Regex> = Lazy::new(|| compile(r#"role\s*=\s*['"]([^'"]+)['"]"#));
static ABOUT_LOCATION: Lazy<Regex> = Lazy::new(|| compile(r#"location\s*=\s*['"]([^'"]+)['"]"#));
static ABOUT_PHILOSOPHY: Lazy<Regex> = Lazy::new(|| compile(r#"philosophy\s*=\s*['"]([^'"]+)['"]"#));
static ABOUT_EDUCATION: Lazy<Regex> = Lazy::new(|| compile(r#"education:\s*['"]([^'"]+)['"]"#));
static ABOUT_EXPERIENCE: Lazy<Regex> = Lazy::new(|| compile(r#"experience:\s*['"]([^'"]+)['"]"#));
static ABOUT_FOCUS: Lazy<Regex> = Lazy::new(|| compile(r#"focus:\s*['"]([^'"]+)['"]"#));
static ABOUT_INTERESTS: Lazy<Regex> = Lazy::new(|| compile(r"interests\s*=\s*\[([\s\S]*?)\]"));

static ROLE_ENTRY: Lazy<Regex> = Lazy::new(|| {
    compile(
        r#"\{\s*company:\s*['"]([^'"]+)['"]\s*,\s*title:\s*['"]([^'"]+)['"]\s*,\s*period:\s*['"]([^'"]+)['"]\s*,\s*location:\s*['"]([^'"]+)['"]\s*,\s*highlights:\s*\[([\s\S]*?)\]\s*,?\s*\}"#,
    )
});

static VALUE_ENTRY: Lazy<Regex> = Lazy::new(|| {
    compile(r#"(\w+):\s*\{\s*principle:\s*['"]([^'"]+)['"]\s*,\s*practice:\s*['"]([^'"]+)['"]\s*,?\s*\}"#)
});

static CONTACT_EMAIL: Lazy<Regex> = Lazy::new(|| compile(r#"email:\s*['"]([^'"]+)['"]"#));
static CONTACT_GITHUB: Lazy<Regex> = Lazy::new(|| compile(r#"github:\s*['"]([^'"]+)['"]"#));
static CONTACT_LINKEDIN: Lazy<Regex> = Lazy::new(|| compile(r#"linkedin:\s*['"]([^'"]+)['"]"#));
static CONTACT_LOCATION: Lazy<Regex> = Lazy::new(|| compile(r#"location:\s*['"]([^'"]+)['"]"#));
static CONTACT_SIGNOFF: Lazy<Regex> = Lazy::new(|| compile(r#"signoff\s*=[\s\S]*?['"]([^'"]+)['"]"#));
static CONTACT_OPEN_TO: Lazy<Regex> = Lazy::new(|| compile(r"openTo:\s*\[([\s\S]*?)\]"));

static PROJECT_NAME: Lazy<Regex> = Lazy::new(|| compile(r#"name:\s*['"]([^'"]+)['"]"#));
static PROJECT_STATUS: Lazy<Regex> = Lazy::new(|| compile(r#"status:\s*['"]([^'"]+)['"]"#));
static PROJECT_YEAR: Lazy<Regex> = Lazy::new(|| compile(r"year:\s*(\d+)"));
static PROJECT_PROBLEM: Lazy<Regex> = Lazy::new(|| compile(r#"problem:\s*['"]([^'"]+)['"]"#));
static PROJECT_SOLUTION: Lazy<Regex> = Lazy::new(|| compile(r#"solution:\s*['"]([^'"]+)['"]"#));
static PROJECT_LESSON: Lazy<Regex> = Lazy::new(|| compile(r#"lesson:\s*['"]([^'"]+)['"]"#));
static PROJECT_STACK: Lazy<Regex> = Lazy::new(|| compile(r"stack:\s*\[([\s\S]*?)\]"));
static PROJECT_RESULTS: Lazy<Regex> = Lazy::new(|| compile(r"results:\s*\{([\s\S]*?)\}"));
static PROJECT_LINKS: Lazy<Regex> = Lazy::new(|| compile(r"links:\s*\{([\s\S]*?)\}"));
static KEYED_STRING: Lazy<Regex> = Lazy::new(|| compile(r#"(\w+):\s*['"]([^'"]+)['"]"#));
static LINK_DEMO: Lazy<Regex> = Lazy::new(|| compile(r#"demo:\s*['"]([^'"]+)['"]"#));

static SKILL_GROUPS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        "languages",
        "frontend",
        "backend",
        "databasesAndCloud",
        "aiAndData",
        "tooling",
        "learning",
    ]
    .into_iter()
    .map(|name| {
        let pattern = format!(r"(?m)export const {}\s*=\s*\[([\s\S]*?)\]\s*as const", name);
        (name, compile(&pattern))
    })
    .collect()
});

/// First capture group of `re` in `text`, or `""`.
fn capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Every quoted string inside `text`, in order.
fn quoted_items(text: &str) -> Vec<String> {
    QUOTED
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Quoted items of the bracketed list captured by `re`, or empty.
fn quoted_list(re: &Regex, text: &str) -> Vec<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| quoted_items(m.as_str()))
        .unwrap_or_default()
}

pub fn parse_about(content: &str) -> Profile {
    let name = capture(&ABOUT_NAME, content);
    Profile {
        name: if name.is_empty() { "Unknown".to_string() } else { name },
        role: capture(&ABOUT_ROLE, content),
        location: capture(&ABOUT_LOCATION, content),
        philosophy: capture(&ABOUT_PHILOSOPHY, content),
        education: capture(&ABOUT_EDUCATION, content),
        experience: capture(&ABOUT_EXPERIENCE, content),
        focus: capture(&ABOUT_FOCUS, content),
        interests: quoted_list(&ABOUT_INTERESTS, content),
    }
}

pub fn parse_skills(content: &str) -> SkillGroups {
    let mut groups = SkillGroups::default();
    for (name, re) in SKILL_GROUPS.iter() {
        let items = quoted_list(re, content);
        match *name {
            "languages" => groups.languages = items,
            "frontend" => groups.frontend = items,
            "backend" => groups.backend = items,
            "databasesAndCloud" => groups.databases_and_cloud = items,
            "aiAndData" => groups.ai_and_data = items,
            "tooling" => groups.tooling = items,
            "learning" => groups.learning = items,
            _ => {}
        }
    }
    groups
}

pub fn parse_experience(content: &str) -> Vec<Role> {
    ROLE_ENTRY
        .captures_iter(content)
        .map(|caps| Role {
            company: caps[1].to_string(),
            title: caps[2].to_string(),
            period: caps[3].to_string(),
            location: caps[4].to_string(),
            highlights: quoted_items(&caps[5]),
        })
        .collect()
}

pub fn parse_values(content: &str) -> Vec<ValueStatement> {
    VALUE_ENTRY
        .captures_iter(content)
        .map(|caps| ValueStatement {
            name: caps[1].to_string(),
            principle: caps[2].to_string(),
            practice: caps[3].to_string(),
        })
        .collect()
}

pub fn parse_contact(content: &str) -> Contact {
    Contact {
        email: capture(&CONTACT_EMAIL, content),
        github: capture(&CONTACT_GITHUB, content),
        linkedin: capture(&CONTACT_LINKEDIN, content),
        location: capture(&CONTACT_LOCATION, content),
        open_to: quoted_list(&CONTACT_OPEN_TO, content),
        signoff: capture(&CONTACT_SIGNOFF, content),
    }
}

pub fn parse_project(content: &str) -> ProjectSummary {
    let name = capture(&PROJECT_NAME, content);
    let results = PROJECT_RESULTS
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|block| {
            KEYED_STRING
                .captures_iter(block.as_str())
                .map(|item| (item[1].to_string(), item[2].to_string()))
                .collect()
        })
        .unwrap_or_default();
    let links = PROJECT_LINKS
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|block| {
            let non_empty = |value: String| Some(value).filter(|v| !v.is_empty());
            ProjectLinks {
                demo: non_empty(capture(&LINK_DEMO, block.as_str())),
                github: non_empty(capture(&CONTACT_GITHUB, block.as_str())),
            }
        })
        .unwrap_or_default();

    ProjectSummary {
        name: if name.is_empty() { "Unknown Project".to_string() } else { name },
        status: capture(&PROJECT_STATUS, content),
        year: capture(&PROJECT_YEAR, content),
        problem: capture(&PROJECT_PROBLEM, content),
        solution: capture(&PROJECT_SOLUTION, content),
        lesson: capture(&PROJECT_LESSON, content),
        stack: quoted_list(&PROJECT_STACK, content),
        results,
        links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_minimal() {
        let contact = parse_contact("export const contact = { email: 'a@b.com' };");
        assert_eq!(contact.email, "a@b.com");
        assert_eq!(contact.github, "");
        assert!(contact.open_to.is_empty());
    }

    #[test]
    fn test_contact_signoff_spans_lines() {
        let contact = parse_contact("export const signoff =\n  \"See you around.\";");
        assert_eq!(contact.signoff, "See you around.");
    }

    #[test]
    fn test_about_defaults() {
        let profile = parse_about("");
        assert_eq!(profile.name, "Unknown");
        assert!(profile.role.is_empty());
        assert!(profile.interests.is_empty());
    }

    #[test]
    fn test_skills_require_as_const() {
        let skills = parse_skills("export const languages = ['Rust', \"Go\"] as const;\nexport const frontend = ['React'];");
        assert_eq!(skills.languages, vec!["Rust", "Go"]);
        assert!(skills.frontend.is_empty());
    }

    #[test]
    fn test_experience_entries() {
        let text = "[{ company: 'A', title: 'B', period: 'C', location: 'D', highlights: ['x', 'y'], }, { company: 'E', title: 'F', period: 'G', location: 'H', highlights: [] }]";
        let roles = parse_experience(text);
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0].highlights, vec!["x", "y"]);
        assert_eq!(roles[1].company, "E");
        assert!(roles[1].highlights.is_empty());
    }

    #[test]
    fn test_values_entries() {
        let values = parse_values("{ clarity: { principle: 'p', practice: 'q', }, }");
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].name, "clarity");
        assert_eq!(values[0].practice, "q");
    }

    #[test]
    fn test_project_links_and_results() {
        let text = "{ name: 'X', year: 2024, results: { speed: '2x', cost: '-30%' }, links: { github: 'https://g/x' } }";
        let project = parse_project(text);
        assert_eq!(project.name, "X");
        assert_eq!(project.year, "2024");
        assert_eq!(
            project.results,
            vec![("speed".to_string(), "2x".to_string()), ("cost".to_string(), "-30%".to_string())]
        );
        assert_eq!(project.links.github.as_deref(), Some("https://g/x"));
        assert_eq!(project.links.demo, None);
    }

    #[test]
    fn test_project_defaults() {
        let project = parse_project("nothing here");
        assert_eq!(project.name, "Unknown Project");
        assert!(project.stack.is_empty());
        assert_eq!(project.links, ProjectLinks::default());
    }
}
