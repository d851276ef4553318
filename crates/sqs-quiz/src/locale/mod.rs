//! Display language and the persisted language preference.

mod preference;

pub use preference::{
    FilePreferenceStore, InMemoryPreferenceStore, PreferenceError, PreferenceStore, LANGUAGE_KEY,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Zh => Self::En,
            Self::En => Self::Zh,
        }
    }

    /// Caption of the toggle button, naming the language it switches to.
    pub const fn toggle_caption(self) -> &'static str {
        match self {
            Self::Zh => "EN",
            Self::En => "中文",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = PreferenceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "zh" => Ok(Self::Zh),
            "en" => Ok(Self::En),
            other => Err(PreferenceError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Active display language backed by a preference store.
///
/// Loaded once at startup, mutated by [`LanguageContext::toggle`] or
/// [`LanguageContext::set`], and written back on every mutation.
#[derive(Clone)]
pub struct LanguageContext {
    language: Language,
    store: Arc<dyn PreferenceStore>,
}

impl fmt::Debug for LanguageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageContext")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl LanguageContext {
    /// Reads the saved preference; a missing or unreadable value falls back to
    /// the default language.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let language = match store.get(LANGUAGE_KEY) {
            Ok(Some(saved)) => saved.parse().unwrap_or_else(|err| {
                warn!(%err, "ignoring saved language preference");
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(err) => {
                warn!(%err, "language preference unavailable, using default");
                Language::default()
            }
        };

        debug!(language = %language, "language context loaded");
        Self { language, store }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn toggle(&mut self) -> Result<Language, PreferenceError> {
        self.set(self.language.toggled())
    }

    /// Toggles the language of a running session. A failed write is logged
    /// and the in-memory language changes regardless.
    pub fn toggle_for_session(&mut self) -> Language {
        let language = self.language.toggled();
        if let Err(err) = self.store.set(LANGUAGE_KEY, language.code()) {
            warn!(%err, language = %language, "language preference not saved");
        }
        self.language = language;
        language
    }

    pub fn set(&mut self, language: Language) -> Result<Language, PreferenceError> {
        self.store.set(LANGUAGE_KEY, language.code())?;
        self.language = language;
        debug!(language = %language, "language preference saved");
        Ok(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::QuestionBank;

    #[test]
    fn missing_preference_defaults_to_chinese() {
        let store = Arc::new(InMemoryPreferenceStore::default());
        let context = LanguageContext::load(store);
        assert_eq!(context.language(), Language::Zh);
    }

    #[test]
    fn toggle_persists_and_reloads() {
        let store: Arc<dyn PreferenceStore> = Arc::new(InMemoryPreferenceStore::default());
        let mut context = LanguageContext::load(store.clone());

        assert_eq!(context.toggle().expect("toggle saves"), Language::En);
        assert_eq!(
            store.get(LANGUAGE_KEY).expect("readable").as_deref(),
            Some("en")
        );

        let reloaded = LanguageContext::load(store);
        assert_eq!(reloaded.language(), Language::En);
        assert_eq!(
            QuestionBank::for_language(reloaded.language()).questions()[0].text,
            QuestionBank::for_language(Language::En).questions()[0].text
        );
    }

    #[test]
    fn session_toggle_survives_an_unwritable_store() {
        let dir = tempfile::tempdir().expect("temp dir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").expect("write blocker");
        let store: Arc<dyn PreferenceStore> =
            Arc::new(FilePreferenceStore::new(blocker.join("prefs.json")));

        let mut context = LanguageContext::load(store);
        assert!(context.set(Language::En).is_err());
        assert_eq!(context.language(), Language::Zh);

        assert_eq!(context.toggle_for_session(), Language::En);
        assert_eq!(context.language(), Language::En);
    }

    #[test]
    fn garbage_preference_is_ignored() {
        let store = Arc::new(InMemoryPreferenceStore::default());
        store.set(LANGUAGE_KEY, "klingon").expect("write");
        let context = LanguageContext::load(store);
        assert_eq!(context.language(), Language::Zh);
    }

    #[test]
    fn language_codes_parse_case_insensitively() {
        assert_eq!(" EN ".parse::<Language>().ok(), Some(Language::En));
        assert_eq!(Language::En.toggled(), Language::Zh);
        assert_eq!(Language::Zh.toggle_caption(), "EN");
    }
}
