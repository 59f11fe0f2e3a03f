//! Static content: project case-study modal and skill accordion

use thiserror::Error;

pub mod accordion;
pub mod catalog;
pub mod modal;

pub use accordion::{Disclosure, SkillAccordion};
pub use catalog::{ContentEntry, PROJECTS, SKILLS};
pub use modal::ProjectModal;

/// Static content lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("Unknown project: {0}")]
    UnknownProject(String),
    #[error("Unknown skill: {0}")]
    UnknownSkill(String),
}
