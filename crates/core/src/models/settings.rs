use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::pagination::PAGE_LIMITS;

/// Tunables for the activity feed and its chart overlay.
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the activity API (no trailing slash needed).
    pub api_base_url: String,

    /// Domains with more points than this are bucketed per week instead of per day.
    pub week_granularity_threshold: usize,

    /// Rows per page of the activity table.
    pub default_page_limit: usize,

    /// Maximum activities fetched per notification poll.
    pub notification_limit: usize,

    /// Global switch for trade notifications.
    pub notifications_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.carbondefi.xyz/v1".to_string(),
            week_granularity_threshold: 60,
            default_page_limit: 10,
            notification_limit: 8,
            notifications_enabled: true,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.api_base_url.trim().is_empty() {
            return Err(CoreError::Configuration("api_base_url must not be empty".into()));
        }
        if self.week_granularity_threshold == 0 {
            return Err(CoreError::Configuration(
                "week_granularity_threshold must be greater than 0".into(),
            ));
        }
        if !PAGE_LIMITS.contains(&self.default_page_limit) {
            return Err(CoreError::Configuration(format!(
                "default_page_limit {} is not one of {PAGE_LIMITS:?}",
                self.default_page_limit
            )));
        }
        if self.notification_limit == 0 {
            return Err(CoreError::Configuration(
                "notification_limit must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
