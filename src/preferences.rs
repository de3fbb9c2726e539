//! Typed access to the persisted preference flags.
//!
//! Each flag is written once on a user action and read at startup. Write
//! failures are logged and otherwise ignored; the in-memory session still
//! behaves as if the write succeeded.

use crate::error::ResultExt;
use crate::storage::KeyValueStore;
use crate::theme::Theme;

pub const THEME_KEY: &str = "theme";
pub const WELCOMED_KEY: &str = "welcomed";
pub const BANNER_DISMISSED_KEY: &str = "banner-dismissed";

const TRUE: &str = "true";

pub struct Preferences {
    store: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences")
            .field("theme", &self.theme())
            .field("welcomed", &self.welcomed())
            .field("banner_dismissed", &self.banner_dismissed())
            .finish()
    }
}

impl Preferences {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored theme, or the default when unset or unrecognized.
    pub fn theme(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .and_then(|value| Theme::from_id(&value))
            .unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.store
            .set(THEME_KEY, theme.id())
            .absorb("persist theme");
    }

    /// Whether the first-run welcome and tour have been completed.
    pub fn welcomed(&self) -> bool {
        self.flag(WELCOMED_KEY)
    }

    pub fn mark_welcomed(&mut self) {
        self.set_flag(WELCOMED_KEY);
    }

    pub fn banner_dismissed(&self) -> bool {
        self.flag(BANNER_DISMISSED_KEY)
    }

    pub fn dismiss_banner(&mut self) {
        self.set_flag(BANNER_DISMISSED_KEY);
    }

    /// Forget every flag, returning to first-run defaults.
    pub fn reset(&mut self) {
        for key in [THEME_KEY, WELCOMED_KEY, BANNER_DISMISSED_KEY] {
            self.store.remove(key).absorb("reset preference");
        }
    }

    fn flag(&self, key: &str) -> bool {
        self.store.get(key).is_some_and(|value| value == TRUE)
    }

    fn set_flag(&mut self, key: &str) {
        tracing::info!(key, "preference flag set");
        self.store.set(key, TRUE).absorb("persist preference flag");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn prefs() -> Preferences {
        Preferences::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_first_run_defaults() {
        let prefs = prefs();
        assert_eq!(prefs.theme(), Theme::Dark);
        assert!(!prefs.welcomed());
        assert!(!prefs.banner_dismissed());
    }

    #[test]
    fn test_flags_set() {
        let mut prefs = prefs();
        prefs.mark_welcomed();
        prefs.dismiss_banner();
        prefs.set_theme(Theme::Light);
        assert!(prefs.welcomed());
        assert!(prefs.banner_dismissed());
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn test_unrecognized_theme_falls_back() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "neon").unwrap();
        let prefs = Preferences::new(Box::new(store));
        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[test]
    fn test_reset() {
        let mut prefs = prefs();
        prefs.mark_welcomed();
        prefs.reset();
        assert!(!prefs.welcomed());
    }
}
