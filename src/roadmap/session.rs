//! Roadmap session state
//!
//! Holds the plain text of the most recently accepted roadmap. The controller
//! owns the session and lends it to the contact action.

/// Session holding the last accepted roadmap text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadmapSession {
    current_text: String,
    accepted: u32,
}

impl RoadmapSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the last accepted roadmap, if any
    pub fn current_text(&self) -> Option<&str> {
        if self.current_text.is_empty() {
            None
        } else {
            Some(&self.current_text)
        }
    }

    /// Number of roadmaps accepted since the session was created
    pub fn accepted_count(&self) -> u32 {
        self.accepted
    }

    /// Overwrite the current text with a newly accepted roadmap.
    /// Empty text is ignored so the current text stays non-empty once set.
    pub(crate) fn record(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        self.current_text = text;
        self.accepted = self.accepted.saturating_add(1);
    }
}
