//! Roadmap request controller
//!
//! Drives one roadmap form: gate evaluation on input, a single guarded
//! request per submission, rendering through a [`RoadmapView`], and the
//! session that remembers the last accepted roadmap.

use crate::config::{ContactSection, SiteConfig};
use crate::roadmap::client::{HttpRoadmapConfig, HttpRoadmapService, RoadmapService};
use crate::roadmap::contact::{contact_about_roadmap, Navigator};
use crate::roadmap::gate::generate_enabled;
use crate::roadmap::session::RoadmapSession;
use crate::roadmap::types::{GenerateOutcome, Roadmap, RoadmapError, RoadmapQuery};
use crate::roadmap::view::{RoadmapView, FALLBACK_MESSAGE};
use crate::roadmap_span;
use std::time::Duration;
use tracing::{debug, error, info, warn, Instrument};
use uuid::Uuid;

/// Upper bound on a single request when no other timeout is configured
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Controller owning the roadmap flow for one form
///
/// `generate` borrows the controller mutably for the whole request, so at
/// most one request is in flight and nothing else can touch the view or the
/// session while it is pending.
pub struct RoadmapRequestController<V: RoadmapView> {
    service: Box<dyn RoadmapService>,
    view: V,
    session: RoadmapSession,
    request_timeout: Duration,
}

impl<V: RoadmapView> RoadmapRequestController<V> {
    pub fn new(service: Box<dyn RoadmapService>, view: V) -> Self {
        Self {
            service,
            view,
            session: RoadmapSession::new(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Build a controller backed by the HTTP client described in `config`
    pub fn from_config(config: &SiteConfig, view: V) -> Result<Self, RoadmapError> {
        let service = HttpRoadmapService::new(HttpRoadmapConfig::from(&config.roadmap))?;
        Ok(Self::new(Box::new(service), view).with_timeout(config.roadmap.timeout()))
    }

    /// Bound every request; expiry surfaces as `RoadmapError::Timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn session(&self) -> &RoadmapSession {
        &self.session
    }

    /// Re-evaluate the input gate after a keystroke in either field
    pub fn on_input(&mut self, business: &str, problem: &str) -> bool {
        let enabled = generate_enabled(business, problem);
        self.view.set_generate_enabled(enabled);
        enabled
    }

    /// Run one roadmap submission.
    ///
    /// Empty fields make this a silent no-op; fields that fail the gate are
    /// rejected with a warning and no side effects. Otherwise the view goes
    /// through loading, then result or fallback, and always ends with the
    /// loading indicator hidden and the generate action enabled.
    pub async fn generate(&mut self, business: &str, problem: &str) -> GenerateOutcome {
        let business = business.trim();
        let problem = problem.trim();
        if business.is_empty() || problem.is_empty() {
            debug!("Generate invoked with an empty field, ignoring");
            return GenerateOutcome::Skipped;
        }

        let query = match RoadmapQuery::new(business, problem) {
            Ok(query) => query,
            Err(e) => {
                warn!("Rejected roadmap query: {}", e);
                return GenerateOutcome::Skipped;
            }
        };

        let request_id = Uuid::new_v4();
        let span = roadmap_span!(
            request_id = %request_id,
            endpoint = self.service.endpoint()
        );
        self.submit(query).instrument(span).await
    }

    /// Open the contact draft for the last accepted roadmap
    pub fn contact(&self, contact: &ContactSection, navigator: &mut dyn Navigator) -> bool {
        contact_about_roadmap(&self.session, contact, navigator)
    }

    async fn submit(&mut self, query: RoadmapQuery) -> GenerateOutcome {
        self.enter_loading();

        let outcome = match self.dispatch(&query).await {
            Ok(roadmap) => {
                self.accept(&query, &roadmap);
                GenerateOutcome::Generated(roadmap)
            }
            Err(e) => {
                self.surface_failure(&e);
                GenerateOutcome::Failed(e)
            }
        };

        self.finish_loading();
        outcome
    }

    async fn dispatch(&self, query: &RoadmapQuery) -> Result<Roadmap, RoadmapError> {
        match tokio::time::timeout(self.request_timeout, self.service.generate(query)).await {
            Ok(result) => result,
            Err(_) => Err(RoadmapError::Timeout(self.request_timeout)),
        }
    }

    fn enter_loading(&mut self) {
        self.view.set_result_visible(false);
        self.view.set_error_visible(false);
        self.view.clear_steps();
        self.view.set_loading_visible(true);
        self.view.set_generate_enabled(false);
    }

    fn accept(&mut self, query: &RoadmapQuery, roadmap: &Roadmap) {
        for step in roadmap.steps() {
            self.view.append_step(&step.to_html());
        }
        self.session.record(roadmap.plain_text(query));
        self.view.set_result_visible(true);
        self.view.scroll_contact_into_view();
        info!(business = query.business(), "Roadmap generated");
    }

    fn surface_failure(&mut self, e: &RoadmapError) {
        error!(kind = e.kind(), error = %e, "Roadmap generation failed");
        self.view.set_error_visible(true);
        self.view.replace_steps_with_message(FALLBACK_MESSAGE);
    }

    fn finish_loading(&mut self) {
        self.view.set_loading_visible(false);
        self.view.set_generate_enabled(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockReply, MockRoadmapService, RecordingNavigator, RecordingView, ViewEvent};
    use serde_json::json;

    const BUSINESS: &str = "Boutique hotel";
    const PROBLEM: &str = "Guests email the same questions every day";

    fn controller(replies: Vec<MockReply>) -> RoadmapRequestController<RecordingView> {
        RoadmapRequestController::new(
            Box::new(MockRoadmapService::with_replies(replies)),
            RecordingView::default(),
        )
    }

    fn three_steps() -> MockReply {
        MockReply::Json(json!([
            "<strong>Collect</strong> the top guest questions.",
            "Draft answers with a prompt-engineered assistant.",
            "Route <strong>only</strong> edge cases to staff."
        ]))
    }

    #[tokio::test]
    async fn test_success_renders_steps_and_records_text() {
        let mut controller = controller(vec![three_steps()]);

        let outcome = controller.generate(BUSINESS, PROBLEM).await;

        assert!(outcome.is_generated());
        let view = controller.view();
        assert_eq!(view.steps.len(), 3);
        assert_eq!(view.steps[0], "<strong>Collect</strong> the top guest questions.");
        assert!(view.result_visible);
        assert!(!view.error_visible);
        assert_eq!(view.contact_scrolls, 1);

        let text = controller.session().current_text().unwrap();
        assert!(text.starts_with("Roadmap for Boutique hotel (Problem: Guests email"));
        assert!(text.contains("Step 1: Collect the top guest questions.\n"));
        assert!(text.contains("Step 3: Route only edge cases to staff.\n"));
        assert!(!text.contains("<strong>"));
    }

    #[tokio::test]
    async fn test_loading_state_precedes_request_and_is_released() {
        let mut controller = controller(vec![three_steps()]);
        controller.generate(BUSINESS, PROBLEM).await;

        let events = &controller.view().events;
        assert_eq!(
            &events[..5],
            &[
                ViewEvent::ResultVisible(false),
                ViewEvent::ErrorVisible(false),
                ViewEvent::StepsCleared,
                ViewEvent::LoadingVisible(true),
                ViewEvent::GenerateEnabled(false),
            ]
        );
        assert_eq!(
            &events[events.len() - 2..],
            &[
                ViewEvent::LoadingVisible(false),
                ViewEvent::GenerateEnabled(true),
            ]
        );
    }

    #[tokio::test]
    async fn test_wrong_length_surfaces_fallback() {
        for reply in [
            MockReply::Json(json!(["one", "two"])),
            MockReply::Json(json!(["one", "two", "three", "four"])),
        ] {
            let mut controller = controller(vec![reply]);
            let outcome = controller.generate(BUSINESS, PROBLEM).await;

            assert!(matches!(outcome, GenerateOutcome::Failed(RoadmapError::Shape(_))));
            let view = controller.view();
            assert_eq!(view.steps, vec![FALLBACK_MESSAGE.to_string()]);
            assert!(view.error_visible);
            assert!(!view.result_visible);
            assert!(!view.loading_visible);
            assert!(view.generate_enabled);
            assert_eq!(controller.session().current_text(), None);
        }
    }

    #[tokio::test]
    async fn test_failure_after_success_keeps_session_text() {
        let mut controller = controller(vec![three_steps(), MockReply::Status(500)]);

        controller.generate(BUSINESS, PROBLEM).await;
        let first = controller.session().current_text().unwrap().to_string();

        let outcome = controller
            .generate("Law firm", "Contracts are reviewed by hand for weeks")
            .await;

        assert!(matches!(
            outcome,
            GenerateOutcome::Failed(RoadmapError::Server { status: 500, .. })
        ));
        assert_eq!(controller.session().current_text(), Some(first.as_str()));
        assert_eq!(controller.session().accepted_count(), 1);
        assert_eq!(controller.view().steps, vec![FALLBACK_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_empty_field_is_a_silent_no_op() {
        let service = MockRoadmapService::with_replies(vec![three_steps()]);
        let queries = service.received_queries();
        let mut controller = RoadmapRequestController::new(Box::new(service), RecordingView::default());

        assert_eq!(controller.generate("   ", PROBLEM).await, GenerateOutcome::Skipped);
        assert_eq!(controller.generate(BUSINESS, "").await, GenerateOutcome::Skipped);

        assert!(controller.view().events.is_empty());
        assert!(queries.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_short_fields_rejected_at_boundary() {
        let mut controller = controller(vec![three_steps()]);
        assert_eq!(
            controller.generate("Spa", PROBLEM).await,
            GenerateOutcome::Skipped
        );
        assert!(controller.view().events.is_empty());
    }

    #[tokio::test]
    async fn test_query_is_trimmed_before_dispatch() {
        let service = MockRoadmapService::with_replies(vec![three_steps()]);
        let queries = service.received_queries();
        let mut controller = RoadmapRequestController::new(Box::new(service), RecordingView::default());

        controller.generate(&format!("  {BUSINESS}\n"), &format!("\t{PROBLEM} ")).await;

        let queries = queries.lock().await;
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].business(), BUSINESS);
        assert_eq!(queries[0].problem(), PROBLEM);
    }

    #[tokio::test]
    async fn test_hung_request_times_out_and_releases_gate() {
        let mut controller = controller(vec![MockReply::Hang(Duration::from_secs(5))])
            .with_timeout(Duration::from_millis(50));

        let outcome = controller.generate(BUSINESS, PROBLEM).await;

        assert_eq!(
            outcome,
            GenerateOutcome::Failed(RoadmapError::Timeout(Duration::from_millis(50)))
        );
        assert!(!controller.view().loading_visible);
        assert!(controller.view().generate_enabled);
    }

    #[tokio::test]
    async fn test_contact_after_success_navigates() {
        let mut controller = controller(vec![three_steps()]);
        let mut navigator = RecordingNavigator::default();

        assert!(!controller.contact(&ContactSection::default(), &mut navigator));
        assert!(navigator.visited.is_empty());

        controller.generate(BUSINESS, PROBLEM).await;
        assert!(controller.contact(&ContactSection::default(), &mut navigator));
        assert_eq!(navigator.visited.len(), 1);
        assert!(navigator.visited[0].starts_with("mailto:"));
    }

    #[test]
    fn test_on_input_tracks_gate() {
        let mut controller = controller(vec![]);
        assert!(!controller.on_input("Ca", "short"));
        assert!(!controller.view().generate_enabled);
        assert!(controller.on_input(BUSINESS, PROBLEM));
        assert!(controller.view().generate_enabled);
    }
}
