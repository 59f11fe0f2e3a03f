//! SynthFlow site core
//!
//! Client-side behavior of the SynthFlow marketing site, independent of any
//! particular UI surface.
//!
//! # Overview
//!
//! - Roadmap generation: input gate, a single guarded request to the site
//!   backend, validation of the three-step reply, allowlisted rendering and a
//!   plain-text summary kept in a session
//! - Contact drafts: a `mailto:` link built from the last accepted roadmap
//! - Static content: project case-study modal and a one-open-at-a-time skill
//!   accordion
//! - Page chrome: sticky header styling, in-page anchors, footer year
//!
//! # Quick Start
//!
//! ```rust
//! use synthflow::roadmap::{Roadmap, RoadmapQuery};
//! use serde_json::json;
//!
//! let query = RoadmapQuery::new("Bakery", "Orders arrive by phone and get lost").unwrap();
//! let roadmap = Roadmap::from_value(&json!([
//!     "<strong>Capture</strong> orders in a shared form.",
//!     "Sync the form to the production sheet.",
//!     "Text customers when orders are ready."
//! ]))
//! .unwrap();
//!
//! let text = roadmap.plain_text(&query);
//! assert!(text.starts_with("Roadmap for Bakery"));
//! assert!(text.contains("Step 1: Capture orders in a shared form."));
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod observability;
pub mod page;
pub mod roadmap;
pub mod testing;

pub use config::{ConfigError, ContactSection, RoadmapSection, SiteConfig};
pub use error::{SiteError, SiteResult};
pub use roadmap::{
    GenerateOutcome, Roadmap, RoadmapError, RoadmapQuery, RoadmapRequestController,
    RoadmapSession, RoadmapView,
};
