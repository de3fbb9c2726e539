//! Language variants the portfolio can be displayed in.

use std::borrow::Cow;
use std::fmt;

/// Language a content file is presented in.
///
/// The canonical content is TypeScript; other variants come from the
/// translation table and fall back to the TypeScript text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    TypeScript,
    JavaScript,
    Python,
    Cpp,
    Pseudocode,
}

impl Language {
    /// All languages in picker order.
    pub const ALL: [Language; 5] = [
        Language::TypeScript,
        Language::JavaScript,
        Language::Python,
        Language::Cpp,
        Language::Pseudocode,
    ];

    /// Stable identifier used on the command line and in logs.
    pub fn id(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Cpp => "cpp",
            Language::Pseudocode => "pseudocode",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Cpp => "C++",
            Language::Pseudocode => "Pseudocode",
        }
    }

    /// Two or three character badge shown in the toolbar and file tree.
    pub fn icon(&self) -> &'static str {
        match self {
            Language::TypeScript => "TS",
            Language::JavaScript => "JS",
            Language::Python => "PY",
            Language::Cpp => "C++",
            Language::Pseudocode => "PSE",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Language::TypeScript => ".ts",
            Language::JavaScript => ".js",
            Language::Python => ".py",
            Language::Cpp => ".cpp",
            Language::Pseudocode => ".pseudo",
        }
    }

    /// Display name of a file in this language.
    ///
    /// Only a trailing `.ts` is swapped; other names (`git-history.log`) are
    /// returned unchanged.
    pub fn filename<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if *self == Language::TypeScript {
            return Cow::Borrowed(name);
        }
        match name.strip_suffix(".ts") {
            Some(base) => Cow::Owned(format!("{}{}", base, self.extension())),
            None => Cow::Borrowed(name),
        }
    }

    /// Parse an identifier, label or extension (`py`, `.py`, `python`).
    pub fn from_id(value: &str) -> Option<Language> {
        let value = value.trim().trim_start_matches('.').to_ascii_lowercase();
        Language::ALL.into_iter().find(|lang| {
            lang.id() == value
                || lang.label().to_ascii_lowercase() == value
                || lang.extension().trim_start_matches('.') == value
        })
    }

    /// The next language in picker order, wrapping around.
    pub fn next(&self) -> Language {
        let index = Language::ALL.iter().position(|l| l == self).unwrap_or(0);
        Language::ALL[(index + 1) % Language::ALL.len()]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_swaps_ts_extension() {
        assert_eq!(Language::Python.filename("about.ts"), "about.py");
        assert_eq!(Language::Cpp.filename("skills.ts"), "skills.cpp");
        assert_eq!(Language::Pseudocode.filename("contact.ts"), "contact.pseudo");
        assert_eq!(Language::TypeScript.filename("about.ts"), "about.ts");
    }

    #[test]
    fn test_filename_leaves_other_extensions() {
        assert_eq!(Language::Python.filename("git-history.log"), "git-history.log");
        assert_eq!(Language::JavaScript.filename("projects"), "projects");
    }

    #[test]
    fn test_from_id_accepts_aliases() {
        assert_eq!(Language::from_id("python"), Some(Language::Python));
        assert_eq!(Language::from_id("py"), Some(Language::Python));
        assert_eq!(Language::from_id(".cpp"), Some(Language::Cpp));
        assert_eq!(Language::from_id("C++"), Some(Language::Cpp));
        assert_eq!(Language::from_id("TypeScript"), Some(Language::TypeScript));
        assert_eq!(Language::from_id("cobol"), None);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Language::TypeScript.next(), Language::JavaScript);
        assert_eq!(Language::Pseudocode.next(), Language::TypeScript);
    }
}
