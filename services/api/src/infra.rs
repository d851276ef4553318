use metrics_exporter_prometheus::PrometheusHandle;
use sqs_quiz::config::{GeolocationConfig, PreferencesConfig};
use sqs_quiz::locale::{FilePreferenceStore, Language, LanguageContext, PreferenceStore};
use sqs_quiz::profile::ProfileHistory;
use sqs_quiz::safety::{DisabledGeoLocator, GeoLocator, HttpGeoLocator};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared quiz state for the HTTP handlers.
#[derive(Clone)]
pub(crate) struct QuizState {
    pub(crate) language: Arc<Mutex<LanguageContext>>,
    pub(crate) history: Arc<Mutex<ProfileHistory>>,
    pub(crate) locator: Arc<dyn GeoLocator>,
}

impl QuizState {
    pub(crate) fn new(language: LanguageContext, locator: Arc<dyn GeoLocator>) -> Self {
        Self {
            language: Arc::new(Mutex::new(language)),
            history: Arc::new(Mutex::new(ProfileHistory::new())),
            locator,
        }
    }

    pub(crate) fn current_language(&self) -> Language {
        self.language
            .lock()
            .expect("language mutex poisoned")
            .language()
    }
}

pub(crate) fn open_language_context(config: &PreferencesConfig) -> LanguageContext {
    let store = FilePreferenceStore::new(config.path.clone());
    debug!(path = %store.path().display(), "opening language preference");
    let store: Arc<dyn PreferenceStore> = Arc::new(store);
    LanguageContext::load(store)
}

/// Builds the configured locator. A client that cannot be constructed
/// degrades to the disabled locator so the safety line falls back.
pub(crate) fn build_locator(config: &GeolocationConfig) -> Arc<dyn GeoLocator> {
    if !config.enabled {
        return Arc::new(DisabledGeoLocator);
    }

    match HttpGeoLocator::new(config.url.clone(), config.timeout) {
        Ok(locator) => Arc::new(locator),
        Err(err) => {
            warn!(error = %err, "geolocation client unavailable, safety line will use placeholder");
            Arc::new(DisabledGeoLocator)
        }
    }
}

pub(crate) fn parse_language(raw: &str) -> Result<Language, String> {
    raw.parse::<Language>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqs_quiz::safety::{self, DEFAULT_SAFETY_SCORE};
    use std::time::Duration;

    #[test]
    fn language_context_reads_the_configured_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = PreferencesConfig {
            path: dir.path().join("prefs.json"),
        };

        let mut context = open_language_context(&config);
        assert_eq!(context.language(), Language::Zh);
        context.set(Language::En).expect("persist");

        let state = QuizState::new(open_language_context(&config), Arc::new(DisabledGeoLocator));
        assert_eq!(state.current_language(), Language::En);
    }

    #[tokio::test]
    async fn disabled_geolocation_yields_the_placeholder_reading() {
        let locator = build_locator(&GeolocationConfig {
            enabled: false,
            url: "http://127.0.0.1:9/json".to_string(),
            timeout: Duration::from_millis(50),
        });

        let reading = safety::lookup(locator.as_ref(), Language::En).await;
        assert!(reading.fallback);
        assert_eq!(reading.score, DEFAULT_SAFETY_SCORE);
    }

    #[test]
    fn parse_language_reports_unsupported_codes() {
        assert_eq!(parse_language("zh"), Ok(Language::Zh));
        assert!(parse_language("de").unwrap_err().contains("de"));
    }
}
