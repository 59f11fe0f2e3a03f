//! Roadmap request and result types
//!
//! Pure construction, validation and formatting. Nothing here touches the
//! network or the view.

use crate::roadmap::gate::{
    business_long_enough, problem_long_enough, BUSINESS_LENGTH_FLOOR, PROBLEM_LENGTH_FLOOR,
};
use crate::roadmap::markup;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Number of steps every roadmap carries
pub const ROADMAP_STEP_COUNT: usize = 3;

static ROADMAP_SCHEMA: Lazy<jsonschema::Validator> = Lazy::new(|| {
    jsonschema::validator_for(&json!({
        "type": "array",
        "minItems": ROADMAP_STEP_COUNT,
        "maxItems": ROADMAP_STEP_COUNT,
        "items": { "type": "string" }
    }))
    .expect("roadmap schema is valid")
});

/// A validated business/problem pair, serialized as the request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapQuery {
    business: String,
    problem: String,
}

impl RoadmapQuery {
    /// Build a query from raw field values; both are trimmed and must pass the input gate
    pub fn new(business: &str, problem: &str) -> Result<Self, RoadmapError> {
        let business = business.trim();
        let problem = problem.trim();

        if !business_long_enough(business) {
            return Err(RoadmapError::InvalidQuery(format!(
                "business must be longer than {BUSINESS_LENGTH_FLOOR} characters"
            )));
        }
        if !problem_long_enough(problem) {
            return Err(RoadmapError::InvalidQuery(format!(
                "problem must be longer than {PROBLEM_LENGTH_FLOOR} characters"
            )));
        }

        Ok(Self {
            business: business.to_string(),
            problem: problem.to_string(),
        })
    }

    pub fn business(&self) -> &str {
        &self.business
    }

    pub fn problem(&self) -> &str {
        &self.problem
    }
}

/// One roadmap step as produced by the backend, possibly with emphasis markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoadmapStep(String);

impl RoadmapStep {
    pub fn new<S: Into<String>>(raw: S) -> Self {
        Self(raw.into())
    }

    /// Text exactly as the backend sent it
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Allowlisted HTML fragment for a list item
    pub fn to_html(&self) -> String {
        markup::sanitize_step(&self.0)
    }

    /// Step text with emphasis tags removed
    pub fn to_plain_text(&self) -> String {
        markup::strip_emphasis(&self.0)
    }
}

/// An accepted roadmap: exactly three ordered steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roadmap {
    steps: [RoadmapStep; ROADMAP_STEP_COUNT],
}

impl Roadmap {
    /// Accept a list of step texts; any count other than three is a shape error
    pub fn from_steps(steps: Vec<String>) -> Result<Self, RoadmapError> {
        let count = steps.len();
        let steps: [String; ROADMAP_STEP_COUNT] = steps.try_into().map_err(|_| {
            RoadmapError::Shape(format!(
                "expected {ROADMAP_STEP_COUNT} steps, received {count}"
            ))
        })?;

        Ok(Self {
            steps: steps.map(RoadmapStep::new),
        })
    }

    /// Validate a decoded response body against the roadmap shape
    pub fn from_value(value: &Value) -> Result<Self, RoadmapError> {
        ROADMAP_SCHEMA.validate(value).map_err(|errors| {
            let details: Vec<String> = errors
                .map(|e| format!("at '{}': {}", e.instance_path, e))
                .collect();
            RoadmapError::Shape(details.join("; "))
        })?;

        let steps = value
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Self::from_steps(steps)
    }

    /// Parse and validate a raw response body
    pub fn from_json(body: &str) -> Result<Self, RoadmapError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| RoadmapError::Parse(e.to_string()))?;
        Self::from_value(&value)
    }

    pub fn steps(&self) -> &[RoadmapStep] {
        &self.steps
    }

    /// Plain-text rendering used for the contact draft:
    /// a header naming the query, then one `Step N:` line per step.
    pub fn plain_text(&self, query: &RoadmapQuery) -> String {
        let mut text = format!(
            "Roadmap for {} (Problem: {}):\n\n",
            query.business(),
            query.problem()
        );
        for (index, step) in self.steps.iter().enumerate() {
            text.push_str(&format!("Step {}: {}\n", index + 1, step.to_plain_text()));
        }
        text
    }
}

/// Roadmap flow errors
///
/// All variants surface the same fallback message in the view; `kind()`
/// keeps them apart in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoadmapError {
    #[error("Service not configured: {0}")]
    NotConfigured(String),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Server error: {status} {reason}")]
    Server { status: u16, reason: String },
    #[error("Invalid JSON in roadmap response: {0}")]
    Parse(String),
    #[error("Invalid roadmap structure received from server: {0}")]
    Shape(String),
}

impl RoadmapError {
    /// Short machine-readable label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            RoadmapError::NotConfigured(_) => "not_configured",
            RoadmapError::InvalidQuery(_) => "invalid_query",
            RoadmapError::Network(_) => "network",
            RoadmapError::Timeout(_) => "timeout",
            RoadmapError::Server { .. } => "server",
            RoadmapError::Parse(_) => "parse",
            RoadmapError::Shape(_) => "shape",
        }
    }
}

/// What a `generate` call did, as consumed by the view layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The backend returned a valid roadmap; the session now holds its text
    Generated(Roadmap),
    /// The request failed; the session was left untouched
    Failed(RoadmapError),
    /// Inputs were empty or too short; nothing happened
    Skipped,
}

impl GenerateOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, GenerateOutcome::Generated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> RoadmapQuery {
        RoadmapQuery::new("  Dental clinic ", " Patients miss appointment reminders ").unwrap()
    }

    #[test]
    fn test_query_trims_inputs() {
        let query = query();
        assert_eq!(query.business(), "Dental clinic");
        assert_eq!(query.problem(), "Patients miss appointment reminders");
    }

    #[test]
    fn test_query_serializes_as_request_body() {
        let body = serde_json::to_value(query()).unwrap();
        assert_eq!(
            body,
            json!({
                "business": "Dental clinic",
                "problem": "Patients miss appointment reminders"
            })
        );
    }

    #[test]
    fn test_query_rejects_short_fields() {
        assert!(matches!(
            RoadmapQuery::new("abc", "long enough problem"),
            Err(RoadmapError::InvalidQuery(_))
        ));
        let err = RoadmapQuery::new("Bakery", "too short").unwrap_err();
        assert!(err.to_string().contains("problem"));
    }

    #[test]
    fn test_from_value_accepts_three_strings() {
        let roadmap = Roadmap::from_value(&json!(["one", "<strong>two</strong>", "three"])).unwrap();
        let raw: Vec<&str> = roadmap.steps().iter().map(RoadmapStep::raw).collect();
        assert_eq!(raw, vec!["one", "<strong>two</strong>", "three"]);
    }

    #[test]
    fn test_from_value_rejects_wrong_length() {
        for value in [json!([]), json!(["a", "b"]), json!(["a", "b", "c", "d"])] {
            assert!(
                matches!(Roadmap::from_value(&value), Err(RoadmapError::Shape(_))),
                "accepted {value}"
            );
        }
    }

    #[test]
    fn test_from_value_rejects_non_array_and_non_strings() {
        assert!(matches!(
            Roadmap::from_value(&json!({"steps": ["a", "b", "c"]})),
            Err(RoadmapError::Shape(_))
        ));
        assert!(matches!(
            Roadmap::from_value(&json!(["a", 2, "c"])),
            Err(RoadmapError::Shape(_))
        ));
        assert!(matches!(
            Roadmap::from_value(&json!({"error": "An internal server error occurred."})),
            Err(RoadmapError::Shape(_))
        ));
    }

    #[test]
    fn test_from_json_parse_error() {
        assert!(matches!(
            Roadmap::from_json("not json"),
            Err(RoadmapError::Parse(_))
        ));
        assert!(Roadmap::from_json(r#"["a","b","c"]"#).is_ok());
    }

    #[test]
    fn test_from_steps_length() {
        let err = Roadmap::from_steps(vec!["a".to_string()]).unwrap_err();
        assert_eq!(
            err,
            RoadmapError::Shape("expected 3 steps, received 1".to_string())
        );
    }

    #[test]
    fn test_plain_text_format() {
        let roadmap = Roadmap::from_steps(vec![
            "<strong>Capture:</strong> sync bookings into one calendar.".to_string(),
            "Send SMS reminders 24h ahead.".to_string(),
            "<strong>Review</strong> no-show rates weekly.".to_string(),
        ])
        .unwrap();

        assert_eq!(
            roadmap.plain_text(&query()),
            "Roadmap for Dental clinic (Problem: Patients miss appointment reminders):\n\n\
             Step 1: Capture: sync bookings into one calendar.\n\
             Step 2: Send SMS reminders 24h ahead.\n\
             Step 3: Review no-show rates weekly.\n"
        );
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        let errors = [
            RoadmapError::NotConfigured("x".to_string()),
            RoadmapError::InvalidQuery("x".to_string()),
            RoadmapError::Network("x".to_string()),
            RoadmapError::Timeout(Duration::from_secs(1)),
            RoadmapError::Server {
                status: 500,
                reason: "Internal Server Error".to_string(),
            },
            RoadmapError::Parse("x".to_string()),
            RoadmapError::Shape("x".to_string()),
        ];
        let mut kinds: Vec<&str> = errors.iter().map(RoadmapError::kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
    }

    #[test]
    fn test_server_error_display() {
        let err = RoadmapError::Server {
            status: 502,
            reason: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Server error: 502 Bad Gateway");
    }
}
