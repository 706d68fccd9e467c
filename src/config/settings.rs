//! Configuration settings structure
//!
//! Defines the main settings structure and loading logic for the client.
//! Credentials are not part of it; see [`crate::signing::Credentials`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration settings for the client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Remote endpoints
    pub api: ApiSettings,
    /// HTTP transport configuration
    pub http: HttpSettings,
    /// Request signing configuration
    pub signing: SigningSettings,
    /// Thumbnail readiness polling
    pub thumbnails: ThumbnailSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Remote endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the management API
    pub base_url: String,
    /// Base URL of the upload API
    pub upload_base_url: String,
    /// Base URL used for derived thumbnail, preview and player links
    pub content_base_url: String,
}

/// HTTP transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

/// Request signing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SigningSettings {
    /// Number of low-order decimal digits kept from each nonce
    pub nonce_digits: u32,
}

/// Thumbnail readiness polling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailSettings {
    /// Maximum number of `thumbnails/show` checks
    pub max_attempts: u32,
    /// Delay between two checks in milliseconds
    pub poll_interval_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.jwplatform.com/v1".to_string(),
            upload_base_url: "https://upload.jwplatform.com/v1".to_string(),
            content_base_url: "https://content.jwplatform.com".to_string(),
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: crate::utils::default_user_agent(),
        }
    }
}

impl Default for SigningSettings {
    fn default() -> Self {
        Self { nonce_digits: 15 }
    }
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            poll_interval_ms: 2000,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            verbose: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            http: HttpSettings::default(),
            signing: SigningSettings::default(),
            thumbnails: ThumbnailSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl HttpSettings {
    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ThumbnailSettings {
    /// Poll interval as a [`Duration`]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file; missing sections keep their defaults
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            crate::Error::Config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Apply environment variable overrides on top of these settings
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Ok(url) = std::env::var("JWPLATFORM_API_URL") {
            self.api.base_url = url;
        }

        if let Ok(url) = std::env::var("JWPLATFORM_UPLOAD_URL") {
            self.api.upload_base_url = url;
        }

        if let Ok(url) = std::env::var("JWPLATFORM_CONTENT_URL") {
            self.api.content_base_url = url;
        }

        if let Ok(timeout) = std::env::var("JWPLATFORM_TIMEOUT") {
            self.http.timeout_secs = timeout
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid timeout: {}", e)))?;
        }

        if let Ok(digits) = std::env::var("JWPLATFORM_NONCE_DIGITS") {
            self.signing.nonce_digits = digits
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid nonce digits: {}", e)))?;
        }

        Ok(self)
    }

    /// Check that URLs parse and numeric settings are in range
    pub fn validate(&self) -> crate::Result<()> {
        for (name, value) in [
            ("api.base_url", &self.api.base_url),
            ("api.upload_base_url", &self.api.upload_base_url),
            ("api.content_base_url", &self.api.content_base_url),
        ] {
            url::Url::parse(value)
                .map_err(|e| crate::Error::Config(format!("Invalid {}: {}", name, e)))?;
        }

        if !(15..=18).contains(&self.signing.nonce_digits) {
            return Err(crate::Error::config(format!(
                "signing.nonce_digits must be between 15 and 18, got {}",
                self.signing.nonce_digits
            )));
        }

        if self.thumbnails.max_attempts == 0 {
            return Err(crate::Error::config("thumbnails.max_attempts must be at least 1"));
        }

        if self.http.timeout_secs == 0 {
            return Err(crate::Error::config("http.timeout_secs must be positive"));
        }

        Ok(())
    }

    /// Settings pointing every endpoint at one base URL, as used against a local stub
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let mut settings = Self::default();
        settings.api.base_url = format!("{}/v1", base);
        settings.api.upload_base_url = format!("{}/upload/v1", base);
        settings
    }
}
