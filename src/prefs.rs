//! Language and theme preferences, mirrored into a [`KeyValueStore`].

use crate::store::KeyValueStore;

pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

/// Page language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Tr,
    En,
    Zh,
}

impl Language {
    /// Cycle order for the language button.
    pub const ALL: [Language; 3] = [Language::Tr, Language::En, Language::Zh];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// Parse a stored or user-supplied code. Case-sensitive.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "tr" => Some(Language::Tr),
            "en" => Some(Language::En),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }

    /// Next language in [`Language::ALL`], wrapping.
    pub fn next(&self) -> Language {
        let idx = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Presentation theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn code(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_code(code: &str) -> Option<Theme> {
        match code {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// Presentation class applied to the page root; light mode has none.
    pub fn class_name(&self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark-mode"),
        }
    }
}

/// Language and theme selection backed by persistent storage.
///
/// Every mutation writes through to the store. Store failures are logged and
/// swallowed: the in-memory selection still changes, it just won't survive a
/// restart.
pub struct Preferences<S> {
    store: S,
    language: Language,
    theme: Theme,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn load(store: S) -> Self {
        let language = match store.get(LANGUAGE_KEY) {
            Some(code) => Language::from_code(&code).unwrap_or_else(|| {
                log::warn!("Ignoring unknown stored language '{}'", code);
                Language::default()
            }),
            None => Language::default(),
        };
        let theme = match store.get(THEME_KEY) {
            Some(code) => Theme::from_code(&code).unwrap_or_else(|| {
                log::warn!("Ignoring unknown stored theme '{}'", code);
                Theme::default()
            }),
            None => Theme::default(),
        };
        log::debug!("Preferences loaded: language={} theme={}", language, theme.code());
        Self { store, language, theme }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.persist(LANGUAGE_KEY, language.code());
    }

    pub fn cycle_language(&mut self) -> Language {
        let next = self.language.next();
        self.set_language(next);
        next
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.persist(THEME_KEY, self.theme.code());
        self.theme
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            log::error!("Failed to persist {}={}: {}", key, value, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn defaults_without_stored_values() {
        let prefs = Preferences::load(MemoryStore::new());
        assert_eq!(prefs.language(), Language::Tr);
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn restores_stored_values() {
        let store = MemoryStore::new()
            .with_entry(LANGUAGE_KEY, "zh")
            .with_entry(THEME_KEY, "dark");
        let prefs = Preferences::load(store);
        assert_eq!(prefs.language(), Language::Zh);
        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[test]
    fn unknown_stored_values_fall_back() {
        let store = MemoryStore::new()
            .with_entry(LANGUAGE_KEY, "ch")
            .with_entry(THEME_KEY, "true");
        let prefs = Preferences::load(store);
        assert_eq!(prefs.language(), Language::Tr);
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn cycling_three_times_returns_to_start() {
        let mut prefs = Preferences::load(MemoryStore::new());
        assert_eq!(prefs.cycle_language(), Language::En);
        assert_eq!(prefs.cycle_language(), Language::Zh);
        assert_eq!(prefs.cycle_language(), Language::Tr);
        assert_eq!(prefs.store().get(LANGUAGE_KEY).as_deref(), Some("tr"));
    }

    #[test]
    fn double_toggle_restores_theme_and_stored_value() {
        let mut prefs = Preferences::load(MemoryStore::new().with_entry(THEME_KEY, "light"));
        assert_eq!(prefs.toggle_theme(), Theme::Dark);
        assert_eq!(prefs.store().get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(prefs.theme().class_name(), Some("dark-mode"));

        assert_eq!(prefs.toggle_theme(), Theme::Light);
        assert_eq!(prefs.store().get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(prefs.theme().class_name(), None);
    }

    #[test]
    fn set_language_persists() {
        let mut prefs = Preferences::load(MemoryStore::new());
        prefs.set_language(Language::En);
        assert_eq!(prefs.store().get(LANGUAGE_KEY).as_deref(), Some("en"));
    }
}
