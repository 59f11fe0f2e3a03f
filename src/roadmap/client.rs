//! Roadmap backend client
//!
//! `RoadmapService` is the seam the controller depends on;
//! `HttpRoadmapService` talks to the site backend over HTTP.

use crate::config::{join_endpoint, RoadmapSection, DEFAULT_ENDPOINT};
use crate::error::sanitize_detail;
use crate::roadmap::types::{Roadmap, RoadmapError, RoadmapQuery};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Roadmap backend trait for dependency injection and testing
#[async_trait]
pub trait RoadmapService: Send + Sync {
    /// Where requests go, for log context
    fn endpoint(&self) -> &str;

    /// Request a roadmap for the query and validate the reply
    async fn generate(&self, query: &RoadmapQuery) -> Result<Roadmap, RoadmapError>;
}

/// HTTP roadmap client configuration
#[derive(Debug, Clone)]
pub struct HttpRoadmapConfig {
    pub base_url: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for HttpRoadmapConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8888".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl From<&RoadmapSection> for HttpRoadmapConfig {
    fn from(section: &RoadmapSection) -> Self {
        Self {
            base_url: section.base_url.clone(),
            endpoint: section.endpoint.clone(),
            timeout: section.timeout(),
        }
    }
}

/// HTTP implementation posting JSON queries to the site backend
pub struct HttpRoadmapService {
    config: HttpRoadmapConfig,
    client: Client,
    url: String,
}

impl HttpRoadmapService {
    /// Create a new client; the joined endpoint URL must be valid
    pub fn new(config: HttpRoadmapConfig) -> Result<Self, RoadmapError> {
        let url = join_endpoint(&config.base_url, &config.endpoint);
        Url::parse(&url)
            .map_err(|e| RoadmapError::NotConfigured(format!("invalid roadmap URL '{url}': {e}")))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RoadmapError::NotConfigured(e.to_string()))?;

        Ok(Self {
            config,
            client,
            url,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Map a transport failure onto the error taxonomy (pure)
    fn classify_transport_error(&self, error: &reqwest::Error) -> RoadmapError {
        if error.is_timeout() {
            return RoadmapError::Timeout(self.config.timeout);
        }
        RoadmapError::Network(format!(
            "HTTP request failed: {} (is_connect: {}, is_request: {})",
            error,
            error.is_connect(),
            error.is_request()
        ))
    }
}

#[async_trait]
impl RoadmapService for HttpRoadmapService {
    fn endpoint(&self) -> &str {
        &self.url
    }

    async fn generate(&self, query: &RoadmapQuery) -> Result<Roadmap, RoadmapError> {
        debug!("POST {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(query)
            .send()
            .await
            .map_err(|e| {
                let error = self.classify_transport_error(&e);
                warn!("Roadmap transport error: {}", error);
                error
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "Roadmap backend returned {}: {}",
                status,
                sanitize_detail(&body)
            );
            return Err(RoadmapError::Server {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_transport_error(&e))?;
        debug!("Roadmap response body: {}", sanitize_detail(&body));

        Roadmap::from_json(&body)
    }
}
