//! Observability for the site core
//!
//! Structured logging through `tracing`, configured from the environment.

pub mod logging;

pub use logging::{init_default_logging, init_logging, parse_level, LogFormat};

// Span macros for structured logging
pub use logging::{content_span, roadmap_span};
