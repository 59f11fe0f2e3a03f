//! Mock implementations for testing
//!
//! Provides a scripted `RoadmapService`, a recording `RoadmapView` and a
//! recording `Navigator` so the roadmap flow can be exercised without a
//! backend or a browser.

use crate::roadmap::client::RoadmapService;
use crate::roadmap::contact::Navigator;
use crate::roadmap::types::{Roadmap, RoadmapError, RoadmapQuery};
use crate::roadmap::view::RoadmapView;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// One scripted backend reply
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 2xx with this JSON body; validated like a real response
    Json(Value),
    /// 2xx with a body that is not JSON
    Body(String),
    /// Non-success HTTP status
    Status(u16),
    /// Transport failure before any response
    NetworkFailure,
    /// Never answers within the given duration
    Hang(Duration),
}

/// Mock roadmap service replaying scripted replies in order
#[derive(Debug, Default)]
pub struct MockRoadmapService {
    replies: Mutex<VecDeque<MockReply>>,
    received: Arc<Mutex<Vec<RoadmapQuery>>>,
}

impl MockRoadmapService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            ..Default::default()
        }
    }

    /// Shared handle to the queries seen so far; stays valid after the
    /// service is boxed into a controller
    pub fn received_queries(&self) -> Arc<Mutex<Vec<RoadmapQuery>>> {
        self.received.clone()
    }

    pub async fn push_reply(&self, reply: MockReply) {
        self.replies.lock().await.push_back(reply);
    }
}

#[async_trait]
impl RoadmapService for MockRoadmapService {
    fn endpoint(&self) -> &str {
        "mock://roadmap"
    }

    async fn generate(&self, query: &RoadmapQuery) -> Result<Roadmap, RoadmapError> {
        self.received.lock().await.push(query.clone());

        let reply = self.replies.lock().await.pop_front();
        match reply {
            Some(MockReply::Json(value)) => Roadmap::from_value(&value),
            Some(MockReply::Body(body)) => Roadmap::from_json(&body),
            Some(MockReply::Status(code)) => {
                let reason = StatusCode::from_u16(code)
                    .ok()
                    .and_then(|status| status.canonical_reason())
                    .unwrap_or("Unknown");
                Err(RoadmapError::Server {
                    status: code,
                    reason: reason.to_string(),
                })
            }
            Some(MockReply::NetworkFailure) => Err(RoadmapError::Network(
                "Mock connection refused".to_string(),
            )),
            Some(MockReply::Hang(duration)) => {
                tokio::time::sleep(duration).await;
                Err(RoadmapError::Network("Mock hang elapsed".to_string()))
            }
            None => Err(RoadmapError::Network("No scripted reply left".to_string())),
        }
    }
}

/// Every call a `RecordingView` received, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    GenerateEnabled(bool),
    LoadingVisible(bool),
    ResultVisible(bool),
    ErrorVisible(bool),
    StepsCleared,
    StepAppended(String),
    StepsReplaced(String),
    ContactScrolled,
}

/// View that keeps the current state of each region plus an event log
#[derive(Debug, Default, Clone)]
pub struct RecordingView {
    pub generate_enabled: bool,
    pub loading_visible: bool,
    pub result_visible: bool,
    pub error_visible: bool,
    pub steps: Vec<String>,
    pub contact_scrolls: usize,
    pub events: Vec<ViewEvent>,
}

impl RoadmapView for RecordingView {
    fn set_generate_enabled(&mut self, enabled: bool) {
        self.generate_enabled = enabled;
        self.events.push(ViewEvent::GenerateEnabled(enabled));
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading_visible = visible;
        self.events.push(ViewEvent::LoadingVisible(visible));
    }

    fn set_result_visible(&mut self, visible: bool) {
        self.result_visible = visible;
        self.events.push(ViewEvent::ResultVisible(visible));
    }

    fn set_error_visible(&mut self, visible: bool) {
        self.error_visible = visible;
        self.events.push(ViewEvent::ErrorVisible(visible));
    }

    fn clear_steps(&mut self) {
        self.steps.clear();
        self.events.push(ViewEvent::StepsCleared);
    }

    fn append_step(&mut self, html: &str) {
        self.steps.push(html.to_string());
        self.events.push(ViewEvent::StepAppended(html.to_string()));
    }

    fn replace_steps_with_message(&mut self, message: &str) {
        self.steps = vec![message.to_string()];
        self.events.push(ViewEvent::StepsReplaced(message.to_string()));
    }

    fn scroll_contact_into_view(&mut self) {
        self.contact_scrolls += 1;
        self.events.push(ViewEvent::ContactScrolled);
    }
}

/// Navigator that records every URL instead of opening it
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, url: &str) {
        self.visited.push(url.to_string());
    }
}
