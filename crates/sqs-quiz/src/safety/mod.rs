//! Decorative "safety index" line on the results view.
//!
//! The lookup is best effort: any failure resolves to a placeholder location
//! and a fixed score so the rest of the results view never waits on it.

use crate::content::ui_text;
use crate::locale::Language;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub const DEFAULT_SAFETY_SCORE: u8 = 60;

#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    #[error("geolocation lookup is disabled")]
    Disabled,
    #[error("geolocation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("geolocation endpoint returned status {0}")]
    Status(u16),
}

/// Subset of the IP-geolocation response the safety line needs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct GeoLocation {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country_code: String,
}

#[async_trait]
pub trait GeoLocator: Send + Sync {
    async fn locate(&self) -> Result<GeoLocation, GeoError>;
}

/// Looks up the caller's approximate location with a single GET.
#[derive(Debug, Clone)]
pub struct HttpGeoLocator {
    client: reqwest::Client,
    url: String,
}

impl HttpGeoLocator {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, GeoError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl GeoLocator for HttpGeoLocator {
    async fn locate(&self) -> Result<GeoLocation, GeoError> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(GeoError::Status(response.status().as_u16()));
        }
        let location: GeoLocation = response.json().await?;
        debug!(country = %location.country_code, "geolocation resolved");
        Ok(location)
    }
}

/// Stand-in used when lookups are switched off in configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGeoLocator;

#[async_trait]
impl GeoLocator for DisabledGeoLocator {
    async fn locate(&self) -> Result<GeoLocation, GeoError> {
        Err(GeoError::Disabled)
    }
}

/// Illustrative score per country code. Not a real index.
pub fn safety_score(country_code: &str) -> u8 {
    match country_code.trim().to_ascii_uppercase().as_str() {
        "NL" | "IS" | "MT" => 92,
        "CA" | "ES" | "SE" | "NO" | "DK" => 88,
        "DE" | "FR" | "GB" | "NZ" | "AU" | "BE" | "PT" => 84,
        "US" | "IE" | "TW" | "UY" => 78,
        "JP" | "KR" | "IT" | "HK" => 66,
        "CN" | "SG" | "TH" | "IN" => 55,
        "RU" | "TR" => 35,
        _ => DEFAULT_SAFETY_SCORE,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyReading {
    pub region: String,
    pub city: String,
    pub score: u8,
    /// True when the placeholder was used instead of a real lookup.
    pub fallback: bool,
}

impl SafetyReading {
    pub fn from_location(location: &GeoLocation) -> Self {
        Self {
            region: location.region.clone(),
            city: location.city.clone(),
            score: safety_score(&location.country_code),
            fallback: false,
        }
    }

    pub fn placeholder(language: Language) -> Self {
        let (region, city) = match language {
            Language::Zh => ("未知地区", "未知城市"),
            Language::En => ("Unknown region, ", "unknown city"),
        };
        Self {
            region: region.to_string(),
            city: city.to_string(),
            score: DEFAULT_SAFETY_SCORE,
            fallback: true,
        }
    }

    pub fn line(&self, language: Language) -> String {
        ui_text(language)
            .results
            .location_template
            .replace("{region}", &self.region)
            .replace("{city}", &self.city)
            .replace("{score}", &self.score.to_string())
    }
}

/// Runs one lookup; errors are logged and replaced with the placeholder.
pub async fn lookup(locator: &dyn GeoLocator, language: Language) -> SafetyReading {
    match locator.locate().await {
        Ok(location) => SafetyReading::from_location(&location),
        Err(GeoError::Disabled) => {
            debug!("geolocation disabled, using placeholder safety reading");
            SafetyReading::placeholder(language)
        }
        Err(err) => {
            warn!(error = %err, "geolocation lookup failed, using placeholder safety reading");
            SafetyReading::placeholder(language)
        }
    }
}

/// Starts the lookup in the background; the caller picks the reading up
/// whenever it needs it.
pub fn spawn_lookup(locator: Arc<dyn GeoLocator>, language: Language) -> JoinHandle<SafetyReading> {
    tokio::spawn(async move { lookup(locator.as_ref(), language).await })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLocator(GeoLocation);

    #[async_trait]
    impl GeoLocator for FixedLocator {
        async fn locate(&self) -> Result<GeoLocation, GeoError> {
            Ok(self.0.clone())
        }
    }

    struct FailingLocator;

    #[async_trait]
    impl GeoLocator for FailingLocator {
        async fn locate(&self) -> Result<GeoLocation, GeoError> {
            Err(GeoError::Status(503))
        }
    }

    #[tokio::test]
    async fn resolved_location_drives_the_line() {
        let locator = FixedLocator(GeoLocation {
            city: "Amsterdam".to_string(),
            region: "North Holland ".to_string(),
            country_code: "nl".to_string(),
        });

        let reading = lookup(&locator, Language::En).await;
        assert!(!reading.fallback);
        assert_eq!(reading.score, 92);
        assert_eq!(
            reading.line(Language::En),
            "Safety index for coming out in North Holland Amsterdam: 92/100"
        );
    }

    #[tokio::test]
    async fn failures_fall_back_to_placeholder() {
        let reading = lookup(&FailingLocator, Language::Zh).await;
        assert!(reading.fallback);
        assert_eq!(reading.score, DEFAULT_SAFETY_SCORE);
        assert_eq!(reading.line(Language::Zh), "未知地区未知城市的出柜安全指数：60/100");

        let disabled = lookup(&DisabledGeoLocator, Language::En).await;
        assert_eq!(disabled, SafetyReading::placeholder(Language::En));
    }

    #[tokio::test]
    async fn spawned_lookup_resolves_independently() {
        let handle = spawn_lookup(Arc::new(FailingLocator), Language::En);
        let reading = handle.await.expect("task completes");
        assert!(reading.fallback);
    }

    #[test]
    fn unknown_countries_get_the_default_score() {
        assert_eq!(safety_score("ZZ"), DEFAULT_SAFETY_SCORE);
        assert_eq!(safety_score(" ca "), 88);
    }
}
