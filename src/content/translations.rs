//! Per-path, per-language variants of the portfolio text.
//!
//! Translations are plain data: a table keyed by content path and language.
//! Any pair missing from the table falls back to the canonical text.

use std::collections::HashMap;

use super::language::Language;

const BUILTIN: &[(&str, Language, &str)] = &[
    (
        "/portfolio/about.ts",
        Language::Python,
        include_str!("../../assets/translations/python/about.py"),
    ),
    (
        "/portfolio/skills.ts",
        Language::Python,
        include_str!("../../assets/translations/python/skills.py"),
    ),
    (
        "/portfolio/values.ts",
        Language::Python,
        include_str!("../../assets/translations/python/values.py"),
    ),
    (
        "/portfolio/contact.ts",
        Language::Python,
        include_str!("../../assets/translations/python/contact.py"),
    ),
    (
        "/portfolio/about.ts",
        Language::JavaScript,
        include_str!("../../assets/translations/javascript/about.js"),
    ),
    (
        "/portfolio/contact.ts",
        Language::JavaScript,
        include_str!("../../assets/translations/javascript/contact.js"),
    ),
    (
        "/portfolio/about.ts",
        Language::Cpp,
        include_str!("../../assets/translations/cpp/about.cpp"),
    ),
    (
        "/portfolio/about.ts",
        Language::Pseudocode,
        include_str!("../../assets/translations/pseudocode/about.pseudo"),
    ),
    (
        "/portfolio/contact.ts",
        Language::Pseudocode,
        include_str!("../../assets/translations/pseudocode/contact.pseudo"),
    ),
];

#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<String, HashMap<Language, String>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table bundled with the binary.
    pub fn builtin() -> Self {
        BUILTIN
            .iter()
            .fold(Self::new(), |table, (path, language, text)| {
                table.with_entry(*path, *language, *text)
            })
    }

    pub fn with_entry(
        mut self,
        path: impl Into<String>,
        language: Language,
        text: impl Into<String>,
    ) -> Self {
        self.insert(path, language, text);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, language: Language, text: impl Into<String>) {
        self.entries
            .entry(path.into())
            .or_default()
            .insert(language, text.into());
    }

    /// The translated text, if one exists. TypeScript is the canonical
    /// language and never has an entry.
    pub fn lookup(&self, path: &str, language: Language) -> Option<&str> {
        if language == Language::TypeScript {
            return None;
        }
        self.entries
            .get(path)
            .and_then(|by_lang| by_lang.get(&language))
            .map(String::as_str)
    }

    /// Languages that have a dedicated variant of `path`.
    pub fn languages_for(&self, path: &str) -> Vec<Language> {
        let Some(by_lang) = self.entries.get(path) else {
            return Vec::new();
        };
        Language::ALL
            .into_iter()
            .filter(|lang| by_lang.contains_key(lang))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_python_about() {
        let table = TranslationTable::builtin();
        let text = table.lookup("/portfolio/about.ts", Language::Python);
        assert!(text.is_some_and(|t| t.contains("class About:")));
    }

    #[test]
    fn test_typescript_never_translated() {
        let table = TranslationTable::new().with_entry("/a.ts", Language::TypeScript, "x");
        assert_eq!(table.lookup("/a.ts", Language::TypeScript), None);
    }

    #[test]
    fn test_missing_pair_is_none() {
        let table = TranslationTable::builtin();
        assert_eq!(table.lookup("/portfolio/experience.ts", Language::Cpp), None);
        assert_eq!(table.lookup("/nope.ts", Language::Python), None);
    }

    #[test]
    fn test_languages_for_in_picker_order() {
        let table = TranslationTable::builtin();
        assert_eq!(
            table.languages_for("/portfolio/contact.ts"),
            vec![Language::JavaScript, Language::Python, Language::Pseudocode]
        );
    }
}
