//! Skill accordion with mutually exclusive disclosure
//!
//! At most one skill detail is open. Opening an entry closes the others;
//! toggling the open entry closes it.

use crate::content::catalog::{self, ContentEntry, SKILLS};
use crate::content::ContentError;
use crate::content_span;
use tracing::debug;

/// Result of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disclosure {
    /// The entry is now open with this content
    Opened(&'static ContentEntry),
    /// The entry is now closed
    Closed,
}

/// Inline skill details, one open at a time
#[derive(Debug, Default, Clone)]
pub struct SkillAccordion {
    open: Option<&'static ContentEntry>,
}

impl SkillAccordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the details of one skill.
    ///
    /// Every other open entry is closed first, even when `skill_id` is
    /// unknown, in which case an error is returned and nothing opens.
    pub fn toggle(&mut self, skill_id: &str) -> Result<Disclosure, ContentError> {
        let _span = content_span!(kind = "skill", id = skill_id).entered();
        let was_open = self.is_open(skill_id);

        // Close everything else before looking the entry up
        if !was_open {
            self.open = None;
        }

        let entry = catalog::skill(skill_id)
            .ok_or_else(|| ContentError::UnknownSkill(skill_id.to_string()))?;

        if was_open {
            self.open = None;
            debug!("Skill details closed");
            Ok(Disclosure::Closed)
        } else {
            self.open = Some(entry);
            debug!("Skill details opened");
            Ok(Disclosure::Opened(entry))
        }
    }

    pub fn is_open(&self, skill_id: &str) -> bool {
        self.open.is_some_and(|entry| entry.id == skill_id)
    }

    /// Id of the open entry, if any
    pub fn open_id(&self) -> Option<&'static str> {
        self.open.map(|entry| entry.id)
    }

    /// Content of the open entry, if any
    pub fn open_content(&self) -> Option<&'static str> {
        self.open.map(|entry| entry.content)
    }

    /// Open/closed state of every skill, in catalog order
    pub fn states(&self) -> Vec<(&'static str, bool)> {
        SKILLS
            .iter()
            .map(|entry| (entry.id, self.is_open(entry.id)))
            .collect()
    }
}
