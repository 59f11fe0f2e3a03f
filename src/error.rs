//! Error types for the SynthFlow site core
//!
//! Each concern owns its error enum; `SiteError` unifies them for the
//! terminal host and config-driven bootstrap.

use crate::config::ConfigError;
use crate::content::ContentError;
use crate::roadmap::RoadmapError;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Maximum length of upstream text carried into log lines
pub const MAX_DETAIL_LEN: usize = 300;

static SECRET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(password|token|key|secret)[=:]\s*\S+").expect("secret pattern is valid")
});

/// Main error type for site operations
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Roadmap error: {0}")]
    RoadmapError(#[from] RoadmapError),

    #[error("Content error: {0}")]
    ContentError(#[from] ContentError),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl SiteError {
    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Short machine-readable label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            SiteError::ConfigError(_) => "config",
            SiteError::RoadmapError(e) => e.kind(),
            SiteError::ContentError(_) => "content",
            SiteError::InvalidInput { .. } => "invalid_input",
        }
    }
}

/// Prepare upstream text (response bodies, transport messages) for logging:
/// credentials are masked, whitespace collapsed, length capped.
pub fn sanitize_detail(detail: &str) -> String {
    let masked = SECRET_PATTERN.replace_all(detail, "${1}=***");
    let collapsed = masked.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= MAX_DETAIL_LEN {
        return collapsed;
    }

    let suffix = "...[truncated]";
    let keep = MAX_DETAIL_LEN - suffix.len();
    let truncated: String = collapsed.chars().take(keep).collect();
    format!("{truncated}{suffix}")
}

/// Result type for site operations
pub type SiteResult<T> = Result<T, SiteError>;
