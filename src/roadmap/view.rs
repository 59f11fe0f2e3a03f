//! View layer seam for the roadmap form
//!
//! The controller drives these regions; implementations map them onto
//! whatever surface hosts the form (a DOM, a terminal, a test recorder).

/// Single list item shown in place of the steps after any failure
pub const FALLBACK_MESSAGE: &str =
    "Could not generate roadmap. The server may be down or the request was invalid.";

/// Regions and controls of the roadmap form
pub trait RoadmapView {
    /// Enable or disable the generate action
    fn set_generate_enabled(&mut self, enabled: bool);

    /// Show or hide the loading indicator
    fn set_loading_visible(&mut self, visible: bool);

    /// Show or hide the result region
    fn set_result_visible(&mut self, visible: bool);

    /// Show or hide the error region
    fn set_error_visible(&mut self, visible: bool);

    /// Remove every rendered step
    fn clear_steps(&mut self);

    /// Append one rendered step; `html` is already allowlisted
    fn append_step(&mut self, html: &str);

    /// Replace the step list with a single plain message item
    fn replace_steps_with_message(&mut self, message: &str);

    /// Bring the contact call-to-action into view
    fn scroll_contact_into_view(&mut self);
}
