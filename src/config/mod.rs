#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{DistanceError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::env;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Where every distance is measured to unless `DISTANCE_DESTINATION` says otherwise.
pub const DEFAULT_DESTINATION: &str = "B31 2UQ";

pub const DEFAULT_API_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            "bicycling" => Ok(Self::Bicycling),
            "transit" => Ok(Self::Transit),
            other => Err(DistanceError::InvalidConfigValueError {
                field: "mode".to_string(),
                value: other.to_string(),
                reason: "expected one of driving, walking, bicycling, transit".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            other => Err(DistanceError::InvalidConfigValueError {
                field: "units".to_string(),
                value: other.to_string(),
                reason: "expected metric or imperial".to_string(),
            }),
        }
    }
}

/// Process-wide settings, loaded once and shared read-only by every invocation.
#[derive(Clone)]
pub struct DistanceConfig {
    pub api_key: String,
    pub destination: String,
    pub api_endpoint: String,
    pub mode: TravelMode,
    pub units: Option<Units>,
    pub language: Option<String>,
}

impl fmt::Debug for DistanceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistanceConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("destination", &self.destination)
            .field("api_endpoint", &self.api_endpoint)
            .field("mode", &self.mode)
            .field("units", &self.units)
            .field("language", &self.language)
            .finish()
    }
}

impl DistanceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            destination: DEFAULT_DESTINATION.to_string(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            mode: TravelMode::default(),
            units: None,
            language: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so parsing can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // GOOGLE_API 缺失時不在啟動階段失敗，由每次調用的客戶端構建回傳 500
        let api_key = lookup("GOOGLE_API").unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("⚠️ GOOGLE_API is not set, every request will fail with 500");
        }

        let mode = match lookup("DISTANCE_MODE") {
            Some(value) => value.parse()?,
            None => TravelMode::default(),
        };

        let units = lookup("DISTANCE_UNITS")
            .map(|value| value.parse::<Units>())
            .transpose()?;

        Ok(Self {
            api_key,
            destination: lookup("DISTANCE_DESTINATION")
                .unwrap_or_else(|| DEFAULT_DESTINATION.to_string()),
            api_endpoint: lookup("DISTANCE_MATRIX_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            mode,
            units,
            language: lookup("DISTANCE_LANGUAGE").filter(|lang| !lang.trim().is_empty()),
        })
    }

    /// The matrix endpoint has to be something reqwest can GET.
    fn validate_endpoint(&self) -> Result<()> {
        let invalid = |reason: String| DistanceError::InvalidConfigValueError {
            field: "api_endpoint".to_string(),
            value: self.api_endpoint.clone(),
            reason,
        };

        let url = Url::parse(&self.api_endpoint).map_err(|e| invalid(format!("Invalid URL: {}", e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("Unsupported URL scheme: {}", url.scheme())));
        }
        if url.query().is_some() {
            return Err(invalid("query parameters are added per request".to_string()));
        }
        Ok(())
    }
}

impl Validate for DistanceConfig {
    fn validate(&self) -> Result<()> {
        self.validate_endpoint()?;
        validate_non_empty_string("destination", &self.destination)?;

        if let Some(language) = &self.language {
            validate_non_empty_string("language", language)?;
        }

        tracing::debug!("✅ Distance configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_only_key_is_set() {
        let config = DistanceConfig::from_lookup(lookup_from(&[("GOOGLE_API", "abc123")])).unwrap();

        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.destination, DEFAULT_DESTINATION);
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.mode, TravelMode::Driving);
        assert_eq!(config.units, None);
        assert_eq!(config.language, None);
    }

    #[test]
    fn test_missing_key_is_not_a_startup_error() {
        let config = DistanceConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = DistanceConfig::from_lookup(lookup_from(&[
            ("GOOGLE_API", "abc123"),
            ("DISTANCE_DESTINATION", "SW1A 1AA"),
            ("DISTANCE_MATRIX_ENDPOINT", "http://localhost:9000/json"),
            ("DISTANCE_MODE", "Walking"),
            ("DISTANCE_UNITS", "imperial"),
            ("DISTANCE_LANGUAGE", "en-GB"),
        ]))
        .unwrap();

        assert_eq!(config.destination, "SW1A 1AA");
        assert_eq!(config.api_endpoint, "http://localhost:9000/json");
        assert_eq!(config.mode, TravelMode::Walking);
        assert_eq!(config.units, Some(Units::Imperial));
        assert_eq!(config.language.as_deref(), Some("en-GB"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_mode_and_units_are_rejected() {
        assert!(DistanceConfig::from_lookup(lookup_from(&[("DISTANCE_MODE", "flying")])).is_err());
        assert!(DistanceConfig::from_lookup(lookup_from(&[("DISTANCE_UNITS", "furlongs")])).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = DistanceConfig::new("abc123").with_endpoint("not a url");
        assert!(config.validate().is_err());

        let config = DistanceConfig::new("abc123").with_endpoint("ftp://example.com/json");
        assert!(config.validate().is_err());

        let config = DistanceConfig::new("abc123").with_endpoint("https://example.com/json?key=x");
        assert!(config.validate().is_err());

        let config = DistanceConfig::new("abc123").with_endpoint("http://127.0.0.1:8080/json");
        assert!(config.validate().is_ok());

        let config = DistanceConfig::new("abc123").with_destination("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = DistanceConfig::new("super-secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
