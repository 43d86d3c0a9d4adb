//! Configuration types for the phonebook client
//!
//! This module defines all configuration structures used throughout the crate.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default contacts API endpoint
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api/contacts";

/// Main phonebook configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhonebookConfig {
    /// Contacts API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Notification settings
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Application settings
    #[serde(default)]
    pub app: AppConfig,
}

impl PhonebookConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different contacts endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.api.validate()?;
        self.notifications.validate()?;

        if self.app.event_channel_capacity == 0 {
            return Err(crate::Error::config("Event channel capacity must be > 0"));
        }

        Ok(())
    }
}

/// Contacts API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Collection URL; list and create go here, delete appends `/{id}`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ApiConfig {
    /// Create an API configuration for the given endpoint
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Validate the API configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.base_url.is_empty() {
            return Err(crate::Error::config("Contacts API URL cannot be empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(crate::Error::config(format!(
                "Contacts API URL must use HTTP or HTTPS scheme. Got: {}",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Base URL without trailing slashes
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Notification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a notification stays visible (in seconds)
    #[serde(default = "default_display_secs")]
    pub display_secs: u64,
}

impl NotificationConfig {
    /// Validate the notification settings
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.display_secs == 0 {
            return Err(crate::Error::config("Notification display time must be > 0"));
        }
        Ok(())
    }

    /// Display time as a duration
    pub fn display_duration(&self) -> Duration {
        Duration::from_secs(self.display_secs)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_secs: default_display_secs(),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Capacity of the app event channel
    ///
    /// When full, new events are dropped with a warning log.
    #[serde(default = "default_event_channel_capacity")]
    pub event_channel_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            event_channel_capacity: default_event_channel_capacity(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_display_secs() -> u64 {
    10
}

fn default_event_channel_capacity() -> usize {
    100
}
