//! Roadmap generation flow
//!
//! A visitor describes their business and a problem; the backend answers
//! with a three-step automation plan that is rendered as a list and kept as
//! plain text for the contact draft.

pub mod client;
pub mod contact;
pub mod controller;
pub mod gate;
pub mod markup;
pub mod session;
pub mod types;
pub mod view;

pub use client::{HttpRoadmapConfig, HttpRoadmapService, RoadmapService};
pub use contact::{contact_about_roadmap, mailto_link, Navigator};
pub use controller::RoadmapRequestController;
pub use gate::generate_enabled;
pub use session::RoadmapSession;
pub use types::{GenerateOutcome, Roadmap, RoadmapError, RoadmapQuery, RoadmapStep};
pub use view::{RoadmapView, FALLBACK_MESSAGE};
