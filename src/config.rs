//! Site configuration
//!
//! Loads the roadmap backend location and contact defaults from a TOML file,
//! validates them, and applies environment overrides.

use crate::roadmap::contact::{DEFAULT_CONTACT_ADDRESS, DEFAULT_CONTACT_SUBJECT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Environment variable that replaces `roadmap.base_url` after loading
pub const BASE_URL_ENV: &str = "SYNTHFLOW_BASE_URL";

/// Default path of the roadmap endpoint on the site backend
pub const DEFAULT_ENDPOINT: &str = "/api/generate-roadmap";

/// Main site configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    pub roadmap: RoadmapSection,
    #[serde(default)]
    pub contact: ContactSection,
}

/// Roadmap backend section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapSection {
    /// Scheme, host and optional port of the site backend
    pub base_url: String,
    /// Path of the roadmap endpoint (default: /api/generate-roadmap)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl RoadmapSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Contact draft section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactSection {
    /// Recipient of the pre-filled email draft
    #[serde(default = "default_contact_address")]
    pub address: String,
    /// Subject line of the draft
    #[serde(default = "default_contact_subject")]
    pub subject: String,
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            address: default_contact_address(),
            subject: default_contact_subject(),
        }
    }
}

fn default_contact_address() -> String {
    DEFAULT_CONTACT_ADDRESS.to_string()
}

fn default_contact_subject() -> String {
    DEFAULT_CONTACT_SUBJECT.to_string()
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SiteConfig {
    /// Load configuration from TOML file, apply environment overrides and validate
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text, apply environment overrides and validate
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = toml::from_str(content)?;
        config.apply_env_overrides(std::env::var(BASE_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Configuration with defaults everywhere except the backend location
    pub fn from_base_url(base_url: &str) -> Result<Self, ConfigError> {
        let config = SiteConfig {
            roadmap: RoadmapSection {
                base_url: base_url.trim().to_string(),
                endpoint: default_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
            contact: ContactSection::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the base URL when an override is present and non-empty
    pub fn apply_env_overrides(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|url| !url.trim().is_empty()) {
            self.roadmap.base_url = url.trim().to_string();
        }
    }

    /// Validate field formats and ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_base_url(&self.roadmap.base_url)?;

        if !self.roadmap.endpoint.starts_with('/') {
            return Err(ConfigError::InvalidConfig(format!(
                "roadmap.endpoint '{}' must start with '/'",
                self.roadmap.endpoint
            )));
        }

        if self.roadmap.timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "roadmap.timeout_secs must be greater than 0".to_string(),
            ));
        }

        let address = self.contact.address.trim();
        if address.is_empty() || !address.contains('@') {
            return Err(ConfigError::InvalidConfig(format!(
                "contact.address '{}' is not an email address",
                self.contact.address
            )));
        }

        Ok(())
    }

    /// Full URL the roadmap request is sent to
    pub fn roadmap_url(&self) -> String {
        join_endpoint(&self.roadmap.base_url, &self.roadmap.endpoint)
    }

    /// Create a test configuration for unit testing
    #[cfg(test)]
    pub fn test_config() -> Self {
        let toml_content = r#"
[roadmap]
base_url = "http://localhost:8888"
timeout_secs = 5
"#;
        toml::from_str(toml_content).expect("Test config should parse")
    }
}

/// Join a base URL and an endpoint path with exactly one slash between them
pub fn join_endpoint(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::InvalidUrl {
            url: base_url.to_string(),
            reason: format!("unsupported scheme '{scheme}', expected http or https"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let toml_content = r#"
[roadmap]
base_url = "https://synthflow.example"
endpoint = "/api/generate-roadmap"
timeout_secs = 12

[contact]
address = "hello@synthflow.example"
subject = "Roadmap follow-up"
"#;

        let config: SiteConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.roadmap.base_url, "https://synthflow.example");
        assert_eq!(config.roadmap.timeout(), Duration::from_secs(12));
        assert_eq!(config.contact.address, "hello@synthflow.example");
        assert_eq!(config.contact.subject, "Roadmap follow-up");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = SiteConfig::test_config();
        assert_eq!(config.roadmap.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.contact.address, DEFAULT_CONTACT_ADDRESS);
        assert_eq!(config.contact.subject, DEFAULT_CONTACT_SUBJECT);

        let toml_content = r#"
[roadmap]
base_url = "http://localhost:8888"
"#;
        let config: SiteConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.roadmap.timeout_secs, 30);
    }

    #[test]
    fn test_roadmap_url_joins_single_slash() {
        let mut config = SiteConfig::test_config();
        assert_eq!(
            config.roadmap_url(),
            "http://localhost:8888/api/generate-roadmap"
        );

        config.roadmap.base_url = "http://localhost:8888/".to_string();
        assert_eq!(
            config.roadmap_url(),
            "http://localhost:8888/api/generate-roadmap"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut config = SiteConfig::test_config();
        config.roadmap.base_url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { .. })
        ));

        config.roadmap.base_url = "ftp://files.example".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = SiteConfig::test_config();
        config.roadmap.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_endpoint_must_be_absolute() {
        let mut config = SiteConfig::test_config();
        config.roadmap.endpoint = "api/generate-roadmap".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_contact_address_must_look_like_email() {
        let mut config = SiteConfig::test_config();
        config.contact.address = "nobody".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_base_url_fills_defaults() {
        let config = SiteConfig::from_base_url(" https://synthflow.example ").unwrap();
        assert_eq!(config.roadmap.base_url, "https://synthflow.example");
        assert_eq!(config.roadmap.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.roadmap.timeout_secs, 30);
        assert_eq!(config.contact, ContactSection::default());

        assert!(SiteConfig::from_base_url("localhost").is_err());
    }

    #[test]
    fn test_env_override_replaces_base_url() {
        let mut config = SiteConfig::test_config();
        config.apply_env_overrides(Some(" https://staging.example ".to_string()));
        assert_eq!(config.roadmap.base_url, "https://staging.example");

        config.apply_env_overrides(Some("   ".to_string()));
        assert_eq!(config.roadmap.base_url, "https://staging.example");

        config.apply_env_overrides(None);
        assert_eq!(config.roadmap.base_url, "https://staging.example");
    }
}
