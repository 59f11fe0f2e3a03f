//! Project case-study modal

use crate::content::catalog::{self, ContentEntry};
use crate::content::ContentError;
use crate::content_span;
use tracing::debug;

/// Modal showing one project case study at a time
#[derive(Debug, Default, Clone)]
pub struct ProjectModal {
    shown: Option<&'static ContentEntry>,
}

impl ProjectModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the modal with the project and open it.
    /// An unknown id leaves the modal as it was.
    pub fn show(&mut self, project_id: &str) -> Result<&'static ContentEntry, ContentError> {
        let _span = content_span!(kind = "project", id = project_id).entered();
        let entry = catalog::project(project_id)
            .ok_or_else(|| ContentError::UnknownProject(project_id.to_string()))?;
        self.shown = Some(entry);
        debug!("Project modal opened");
        Ok(entry)
    }

    pub fn close(&mut self) {
        self.shown = None;
    }

    pub fn is_open(&self) -> bool {
        self.shown.is_some()
    }

    pub fn title(&self) -> Option<&'static str> {
        self.shown.map(|entry| entry.title)
    }

    pub fn content(&self) -> Option<&'static str> {
        self.shown.map(|entry| entry.content)
    }
}
