//! Application configuration value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::meeting::{
    validate_pattern, DateDisplay, DisplayZone, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT,
};
use crate::domain::notion::OverflowPolicy;

/// Default Notion REST endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.notion.com/v1";

/// Keys accepted in the config file and by `config set`
pub const CONFIG_KEYS: &[&str] = &[
    "api_key",
    "page_id",
    "overflow",
    "timezone",
    "date_format",
    "time_format",
    "api_base_url",
    "timeout_secs",
];

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub page_id: Option<String>,
    pub overflow: Option<String>,
    pub timezone: Option<String>,
    pub date_format: Option<String>,
    pub time_format: Option<String>,
    pub api_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            page_id: None,
            overflow: Some(OverflowPolicy::default().to_string()),
            timezone: Some("local".to_string()),
            date_format: Some(DEFAULT_DATE_FORMAT.to_string()),
            time_format: Some(DEFAULT_TIME_FORMAT.to_string()),
            api_base_url: Some(DEFAULT_API_BASE_URL.to_string()),
            timeout_secs: Some(30),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            page_id: other.page_id.or(self.page_id),
            overflow: other.overflow.or(self.overflow),
            timezone: other.timezone.or(self.timezone),
            date_format: other.date_format.or(self.date_format),
            time_format: other.time_format.or(self.time_format),
            api_base_url: other.api_base_url.or(self.api_base_url),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Get overflow as parsed policy, or default if not set/invalid
    pub fn overflow_or_default(&self) -> OverflowPolicy {
        self.overflow
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get timezone as parsed zone, or local if not set/invalid
    pub fn timezone_or_default(&self) -> DisplayZone {
        self.timezone
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Build the date display from zone and patterns.
    /// Unset or invalid patterns use the defaults.
    pub fn date_display(&self) -> DateDisplay {
        DateDisplay::new(
            self.timezone_or_default(),
            valid_pattern_or(self.date_format.as_deref(), DEFAULT_DATE_FORMAT),
            valid_pattern_or(self.time_format.as_deref(), DEFAULT_TIME_FORMAT),
        )
    }

    /// Get API base URL, or the public Notion endpoint if not set
    pub fn api_base_url_or_default(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Get request timeout, or 30 seconds if not set
    pub fn timeout_or_default(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("page_id", &self.page_id)
            .field("overflow", &self.overflow)
            .field("timezone", &self.timezone)
            .field("date_format", &self.date_format)
            .field("time_format", &self.time_format)
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn valid_pattern_or<'a>(pattern: Option<&'a str>, default: &'a str) -> &'a str {
    pattern
        .filter(|p| validate_pattern(p).is_ok())
        .unwrap_or(default)
}
