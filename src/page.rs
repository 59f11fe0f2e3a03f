//! Page chrome: sticky header styling, in-page navigation, footer year

use chrono::{DateTime, Datelike, Local, TimeZone};

/// Scroll offset in pixels past which the header switches style
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Id of the roadmap demo section
pub const DEMO_SECTION_ID: &str = "demo";

/// Visual state of the sticky header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Resting,
    Scrolled,
}

impl HeaderStyle {
    pub fn for_scroll_offset(offset_px: f64) -> Self {
        if offset_px > SCROLL_THRESHOLD_PX {
            HeaderStyle::Scrolled
        } else {
            HeaderStyle::Resting
        }
    }

    /// CSS class the header carries in this state
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            HeaderStyle::Resting => None,
            HeaderStyle::Scrolled => Some("scrolled-header"),
        }
    }
}

/// Where a smooth-scroll navigation lands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Section(String),
}

/// Target of the logo link
pub fn logo_target() -> ScrollTarget {
    ScrollTarget::Top
}

/// Target of the "see the demo" button
pub fn demo_target() -> ScrollTarget {
    ScrollTarget::Section(DEMO_SECTION_ID.to_string())
}

/// Resolve a navigation link to an in-page section.
/// Only non-empty fragment links (`#pricing`) scroll; anything else is left to the browser.
pub fn anchor_target(href: &str) -> Option<ScrollTarget> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() || id.contains(char::is_whitespace) {
        return None;
    }
    Some(ScrollTarget::Section(id.to_string()))
}

/// Copyright year for the footer
pub fn copyright_year<Tz: TimeZone>(now: &DateTime<Tz>) -> i32 {
    now.year()
}

/// Footer line for the current local date
pub fn footer_notice() -> String {
    format!("© {} SynthFlow. All rights reserved.", copyright_year(&Local::now()))
}
